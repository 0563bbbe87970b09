use clap::Parser;
use clockadd::{ClockTime, Duration, ParseError, Weekday, add_time};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tabled::Tabled;
use tabled::settings::Style;

#[derive(Parser)]
struct Args {
    /// Start time, e.g. "11:45 AM"
    start: Option<String>,
    /// Duration to add, e.g. "0:30"
    duration: Option<String>,
    /// Current day of the week, e.g. monday
    day: Option<String>,

    /// Path to a JSON batch file of time additions
    #[arg(short, long, value_name = "FILE")]
    batch: Option<PathBuf>,
}

#[derive(Deserialize)]
struct Request {
    start: String,
    duration: String,
    day: Option<Weekday>,
}

#[derive(Tabled)]
struct Row {
    start: String,
    duration: String,
    day: String,
    result: String,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn compute(req: &Request) -> Result<String, ParseError> {
    let start: ClockTime = req.start.parse()?;
    let duration: Duration = req.duration.parse()?;
    Ok(start.add(duration, req.day).to_string())
}

fn run_batch(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    // Day names deserialize straight into the enum, so an unknown one
    // fails the file load; bad start/duration strings only fail their row
    let requests: Vec<Request> = serde_json::from_str(&data)?;

    let rows: Vec<Row> = requests
        .iter()
        .map(|req| Row {
            start: req.start.clone(),
            duration: req.duration.clone(),
            day: req.day.map(|d| d.to_string()).unwrap_or_default(),
            result: match compute(req) {
                Ok(text) => text,
                Err(e) => format!("error: {}", e),
            },
        })
        .collect();

    let mut table = tabled::Table::new(&rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    Ok(table.to_string())
}

// add <H:MM> <AM|PM> <H:MM> [day]
fn run_add(parts: &[&str]) {
    if let (Some(clock), Some(meridiem), Some(duration)) = (parts.first(), parts.get(1), parts.get(2)) {
        let start = format!("{} {}", clock, meridiem);
        match add_time(&start, duration, parts.get(3).copied()) {
            Ok(text) => println!("{}", text),
            Err(e) => println!("{}", e.to_string().red()),
        }
    } else {
        println!("Usage: add <H:MM> <AM|PM> <H:MM> [day]");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = args.batch {
        println!("{}", run_batch(&path)?);
        return Ok(());
    }

    if let (Some(start), Some(duration)) = (args.start.as_deref(), args.duration.as_deref()) {
        match add_time(start, duration, args.day.as_deref()) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "add".to_string(),
            "batch".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "add" => run_add(&parts[1..]),
                    "batch" => {
                        if let Some(file) = parts.get(1) {
                            match run_batch(Path::new(file)) {
                                Ok(table) => println!("{}", table),
                                Err(e) => println!("{}", e.to_string().red()),
                            }
                        } else {
                            println!("Usage: batch <file>");
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  add <H:MM> <AM|PM> <H:MM> [day] - Add a duration to a clock time, e.g. add 11:45 AM 0:30 monday");
                        println!("  batch <file>                    - Run every addition in a JSON file and print a table");
                        println!("  help / ?                        - Show this help menu");
                        println!("  exit / quit                     - Exit the calculator\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
