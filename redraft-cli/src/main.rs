//! Demo binary: runs the single-shot responder and then the five-stage
//! pipeline over the same question, printing both answers.
//!
//! Run: `cargo run -p redraft-cli -- "your question"` (a built-in demo
//! question is used when no argument is given). Requires `OPENAI_API_KEY`
//! in the environment or a `.env` file in the working directory.

mod logging;

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use env_config::Settings;
use redraft::{responder, run_pipeline, ChatOpenAI};

const DEMO_QUESTION: &str = "Should a startup use open-source LLMs or closed models in 2026? \
     Consider cost, speed, privacy, and reliability.";

const MODEL: &str = "gpt-4o-mini";
const MAX_ITERATIONS: u32 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = env_config::load_dotenv(None) {
        eprintln!("config error: {e}");
        return ExitCode::FAILURE;
    }
    logging::init();

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        tracing = settings.tracing.as_deref().unwrap_or("off"),
        project = settings.project.as_deref().unwrap_or("-"),
        "starting"
    );

    let question = env::args()
        .nth(1)
        .unwrap_or_else(|| DEMO_QUESTION.to_string());
    let llm = Arc::new(ChatOpenAI::new(MODEL).with_temperature(0.2));

    println!("\n===== Single Responder =====");
    match responder::answer(llm.as_ref(), &question).await {
        Ok(reply) => println!("{reply}"),
        Err(e) => {
            eprintln!("responder error: {e}");
            return ExitCode::FAILURE;
        }
    }

    println!("\n===== Pipeline =====");
    match run_pipeline(llm, &question, MAX_ITERATIONS).await {
        Ok(state) => {
            println!("{}", state.final_draft().unwrap_or(""));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("pipeline error: {e}");
            ExitCode::FAILURE
        }
    }
}
