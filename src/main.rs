mod debug_report;

use cardex::{DuplicatePolicy, ParsePolicy, filter, order, parse_verbose_with, toggle_favorite};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let text = match load_input(&config) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let policy = ParsePolicy {
        require_record_number: config.strict,
        duplicate_ids: if config.first_wins { DuplicatePolicy::FirstWins } else { DuplicatePolicy::LastWins },
    };

    let report = parse_verbose_with(&text, &policy);

    let mut records = report.records.clone();
    for id in &config.toggles {
        records = toggle_favorite(&records, id);
    }
    if let Some(query) = &config.query {
        records = filter(&records, query);
    }
    let grouped = order(&records);

    debug_report::print_run(&report, &grouped, config.query.as_deref(), config.color);
}

struct CliConfig {
    file: Option<String>,
    query: Option<String>,
    toggles: Vec<String>,
    strict: bool,
    first_wins: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut file: Option<String> = None;
    let mut query: Option<String> = None;
    let mut toggles: Vec<String> = Vec::new();
    let mut strict = false;
    let mut first_wins = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("cardex {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--strict" => strict = true,
            "--first-wins" => first_wins = true,
            "--query" | "-q" => {
                let value = args.next().ok_or_else(|| "error: --query expects a value".to_string())?;
                if query.is_some() {
                    return Err("error: query provided multiple times".to_string());
                }
                query = Some(value);
            }
            "--toggle" => {
                let value = args.next().ok_or_else(|| "error: --toggle expects an id".to_string())?;
                toggles.push(value);
            }
            _ if arg.starts_with("--query=") => {
                if query.is_some() {
                    return Err("error: query provided multiple times".to_string());
                }
                query = Some(arg.trim_start_matches("--query=").to_string());
            }
            _ if arg.starts_with("--toggle=") => {
                toggles.push(arg.trim_start_matches("--toggle=").to_string());
            }
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if file.is_some() {
                    return Err("error: input file provided multiple times".to_string());
                }
                file = Some(arg);
            }
        }
    }

    Ok(CliConfig { file, query, toggles, strict, first_wins, color })
}

fn load_input(config: &CliConfig) -> Result<String, String> {
    match config.file.as_deref() {
        Some("-") | None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("error: failed to read stdin: {err}"))?;
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|err| format!("error: failed to read '{path}': {err}")),
    }
}

fn print_help() {
    println!(
        "cardex {version}

Directory ingestion and query engine CLI.

Usage:
  cardex [OPTIONS] [FILE]

Reads vCard-like directory text from FILE ('-' or omitted: stdin), parses it
verbosely and prints block outcomes, timings and the ordered display groups.

Options:
  -q, --query <text>   Filter records before grouping.
  --toggle <id>        Toggle a record's favorite flag (repeatable).
  --strict             Drop blocks without a record number.
  --first-wins         Resolve duplicate ids first-wins (default: last-wins).
  --color              Force ANSI color output.
  --no-color           Disable ANSI color output.
  -h, --help           Show this help message.
  -V, --version        Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or unreadable input.
",
        version = env!("CARGO_PKG_VERSION")
    );
}
