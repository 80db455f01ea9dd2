use std::path::PathBuf;

use clap::Parser;
use exam_trainer::Trainer;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the question bank from
    #[arg(short, long)]
    questions: PathBuf,

    /// File the trainer keeps its progress in
    #[arg(short, long, default_value = "trainer_state.json")]
    state: PathBuf,
}

fn main() {
    let args = Args::parse();

    let trainer = match Trainer::from_files(&args.questions, args.state) {
        Ok(trainer) => trainer,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = trainer.run() {
        eprintln!("Error running trainer: {}", e);
        std::process::exit(1);
    }
}
