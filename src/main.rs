use std::path::PathBuf;

use clap::Parser;
use quiz_master::Quiz;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = "questions.json")]
    questions: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let quiz = match Quiz::from_json(&args.questions) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Failed to load {}: {}", args.questions.display(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
