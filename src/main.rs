use std::io::{BufRead, Read};

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "judi-guard",
    about = "Detect Indonesian gambling spam in comment text",
    version
)]
struct Cli {
    /// Message to classify (reads stdin if none provided)
    text: Vec<String>,

    /// Classify each stdin line separately and print a scan summary
    #[arg(short, long)]
    batch: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.batch {
        let stdin = std::io::stdin();
        let mut verdicts = Vec::new();
        for line in stdin.lock().lines() {
            let line = line.expect("Failed to read stdin");
            let verdict = judi_guard::classify(&line);
            println!("{}", serde_json::to_string(&verdict).unwrap());
            verdicts.push(verdict);
        }
        let summary = judi_guard::summarize(&verdicts);
        eprintln!(
            "scanned {} message(s), {} spam ({:.1}%)",
            summary.scanned, summary.spam, summary.spam_rate_pct
        );
    } else if cli.text.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .expect("Failed to read stdin");
        let verdict = judi_guard::classify(&input);
        println!("{}", serde_json::to_string_pretty(&verdict).unwrap());
    } else {
        let message = cli.text.join(" ");
        let verdict = judi_guard::classify(&message);
        println!("{}", serde_json::to_string_pretty(&verdict).unwrap());
    }
}
