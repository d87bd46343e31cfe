use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use pushdump::adapters::{BundleExtras, TracingSink};
use pushdump::config::{self, AppConfig, ConfigFile};
use pushdump::error::AppError;
use pushdump::ports::{LegacyExtras, LogSink};
use pushdump::render;
use pushdump::service::MessagingService;
use pushdump::snapshot::SnapshotBuilder;
use pushdump::types::delivery::Delivery;
use pushdump::types::message::InboundPushEvent;

const STDIN_MARKER: &str = "-";

pub(crate) fn run() -> i32 {
    let cli = Cli::parse();
    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return 2;
        }
    };

    match cli.command {
        Command::Dump(args) => run_dump(&config, &args.input),
        Command::Replay(args) => run_replay(&config, &args.input),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "pushdump",
    version,
    about = "Dump inbound push messages for diagnostics"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    #[arg(long, env = "PUSHDUMP_CONFIG", global = true)]
    config: Option<PathBuf>,
    #[arg(long, env = "PUSHDUMP_TAG", global = true)]
    tag: Option<String>,
    #[arg(long, env = "PUSHDUMP_PREFIX", global = true)]
    prefix: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one JSON message to stdout.
    Dump(InputArgs),
    /// Feed JSON-lines callbacks through the messaging service.
    Replay(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input file, or `-` for stdin.
    #[arg(default_value = STDIN_MARKER)]
    input: PathBuf,
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, String> {
    let file = match cli.config.as_deref() {
        Some(path) => {
            ConfigFile::load(path).map_err(|err| format!("{}: {err}", path.display()))?
        }
        None => ConfigFile::default(),
    };
    let overrides = ConfigFile {
        tag: cli.tag.clone(),
        prefix: cli.prefix.clone(),
    };
    config::resolve(file, overrides)
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>, AppError> {
    if path.as_os_str() == STDIN_MARKER {
        Ok(Box::new(BufReader::new(std::io::stdin())))
    } else {
        Ok(Box::new(BufReader::new(std::fs::File::open(path)?)))
    }
}

fn run_dump(config: &AppConfig, input: &Path) -> i32 {
    let result = open_input(input).and_then(|reader| dump_event(config, reader));
    match result {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn dump_event(config: &AppConfig, mut reader: impl Read) -> Result<String, AppError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    let event: Option<InboundPushEvent> = serde_json::from_str(&contents)?;
    let snapshot = SnapshotBuilder::new(BundleExtras).build(event.as_ref())?;
    Ok(render::render(&snapshot, &config.prefix))
}

fn run_replay(config: &AppConfig, input: &Path) -> i32 {
    let reader = match open_input(input) {
        Ok(reader) => reader,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };
    let service = MessagingService::new(config, BundleExtras, TracingSink);
    match replay(&service, reader) {
        Ok(summary) => {
            tracing::info!(
                processed = summary.processed,
                failed = summary.failed,
                "replay finished"
            );
            if summary.failed == 0 { 0 } else { 1 }
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct ReplaySummary {
    processed: usize,
    failed: usize,
}

fn replay<L, S>(
    service: &MessagingService<L, S>,
    mut reader: impl BufRead,
) -> Result<ReplaySummary, AppError>
where
    L: LegacyExtras,
    S: LogSink,
{
    let mut summary = ReplaySummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(err) => {
                eprintln!("replay warning: line {line_no}: invalid utf-8 ({err})");
                summary.failed += 1;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let outcome = serde_json::from_str::<Delivery>(line)
            .map_err(AppError::from)
            .and_then(|delivery| service.dispatch(&delivery).map_err(AppError::from));
        match outcome {
            Ok(()) => summary.processed += 1,
            Err(err) => {
                eprintln!("replay warning: line {line_no}: {err}");
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
