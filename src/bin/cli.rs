#![cfg(not(tarpaulin_include))]

use quizgen::{
    Difficulty, QuestionGenerator, StudentLevel, TemplateGenerator, normalize_topic,
};
use std::env;
use std::process::ExitCode;

fn usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} quiz <topic> [easy|medium|hard]", program);
    eprintln!("  {} diagnostic [beginner|intermediate|advanced]", program);
}

fn run(args: &[String]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let generator = TemplateGenerator::new();

    match args.get(1).map(String::as_str) {
        Some("quiz") => {
            let topic = normalize_topic(args.get(2).map(String::as_str).unwrap_or(""))?;
            let difficulty: Difficulty = args.get(3).map(String::as_str).unwrap_or("").parse()?;
            log::debug!("quiz on '{}' at {}", topic, difficulty);
            Ok(generator.generate_quiz(&topic, difficulty))
        }
        Some("diagnostic") => {
            let level: StudentLevel = args.get(2).map(String::as_str).unwrap_or("").parse()?;
            log::debug!("diagnostic for {}", level);
            Ok(generator.generate_diagnostic(level))
        }
        _ => Err("expected a 'quiz' or 'diagnostic' command".into()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(questions) => {
            for (i, question) in questions.iter().enumerate() {
                println!("{}. {}", i + 1, question);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            usage(args.first().map(String::as_str).unwrap_or("quizgen-cli"));
            ExitCode::FAILURE
        }
    }
}
