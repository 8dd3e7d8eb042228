//! joke-replay - Replay joke list actions and print the ranked jokes

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libjokebox::logging::{env_format_and_level, LoggingConfig};
use libjokebox::validation::guard;
use libjokebox::{apply, ranked, Config, IdPolicy, JokeAction, JokeList, JokeboxError};

#[derive(Parser, Debug)]
#[command(name = "joke-replay")]
#[command(version, about = "Replay joke list actions and print the ranked jokes")]
#[command(long_about = r#"Apply a script of joke list actions, one JSON object per line, and
print the resulting jokes sorted by rating (highest first).

ACTIONS:
    {"type": "ADD_JOKE", "payload": "Why did the chicken cross the road?"}
    {"type": "UPDATE_RATE", "payload": {"id": 3, "rate": 5}}
    {"type": "DELETE_JOKE", "payload": {"id": 1}}

    Blank lines and lines starting with '#' are skipped. Unknown action
    types are ignored.

EXAMPLES:
    # Show the seed jokes
    joke-replay < /dev/null

    # Replay a script
    joke-replay session.jsonl

    # Pipe actions in, get JSON out
    echo '{"type":"ADD_JOKE","payload":"test"}' | joke-replay --format json

    # Reproduce positional id collisions
    joke-replay --id-policy positional session.jsonl

OUTPUT FORMATS:
    text  - rating, id and text separated by tabs (default)
    json  - JSON array
    jsonl - JSON lines, one joke per line

EXIT CODES:
    0 - Success
    1 - Error (unreadable script, malformed action, bad config)
    3 - Invalid input (ADD_JOKE with empty text)
"#)]
struct Args {
    /// Action script (reads stdin if not provided)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Start from an empty list instead of the seed jokes
    #[arg(long)]
    empty: bool,

    /// Id policy for added jokes (positional or monotonic)
    #[arg(long, value_name = "POLICY")]
    id_policy: Option<IdPolicy>,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        let code = e.downcast_ref::<JokeboxError>().map_or(1, JokeboxError::exit_code);
        std::process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::load()?;
    init_logging(&config, args.verbose)?;

    if let Some(policy) = args.id_policy {
        config.store.id_policy = policy;
    }
    if args.empty {
        config.store.seed = false;
    }
    let list = config.initial_list();
    tracing::debug!(policy = %list.policy(), jokes = list.len(), "Starting replay");

    let list = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .map_err(JokeboxError::from)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            replay(list, BufReader::new(file))?
        }
        None => replay(list, io::stdin().lock())?,
    };

    print_jokes(&list, &args.format)
}

fn init_logging(config: &Config, verbose: bool) -> Result<()> {
    let (format, level) = env_format_and_level(config.logging.format, &config.logging.level);
    let mut logging = LoggingConfig::new(format, level, verbose);
    if let Some(file) = config.logging.file_path() {
        logging = logging.with_file(file);
    }
    logging.init().map_err(JokeboxError::from)?;
    Ok(())
}

/// Apply every action in the script, in order
fn replay(mut list: JokeList, input: impl BufRead) -> Result<JokeList> {
    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line
            .map_err(JokeboxError::from)
            .with_context(|| format!("Failed to read line {}", line_no))?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let action = JokeAction::from_json(trimmed)
            .map_err(JokeboxError::from)
            .and_then(guard)
            .with_context(|| format!("line {}", line_no))?;

        if let JokeAction::Unrecognized { ref kind } = action {
            tracing::warn!(line = line_no, kind = %kind, "Ignoring unrecognized action");
        } else {
            tracing::debug!(line = line_no, kind = action.kind(), "Applying action");
        }

        list = apply(list, action);
    }

    Ok(list)
}

fn print_jokes(list: &JokeList, format: &str) -> Result<()> {
    let view = ranked(list);
    let mut out = io::stdout().lock();

    match format {
        "json" => {
            serde_json::to_writer_pretty(&mut out, &view)?;
            writeln!(out)?;
        }
        "jsonl" => {
            for joke in &view {
                serde_json::to_writer(&mut out, joke)?;
                writeln!(out)?;
            }
        }
        _ => {
            for joke in &view {
                writeln!(out, "{}\t#{}\t{}", joke.rating, joke.id, joke.text)?;
            }
        }
    }

    Ok(())
}
