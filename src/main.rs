//! CLI entry point for walkclean

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, SystemTime};

use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use walkclean::{Pipeline, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "walkclean")]
#[command(about = "Walk a directory tree and list, delete, or gzip-archive the files that match")]
#[command(version)]
struct Args {
    /// Root directory to start from
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// List matching files only
    #[arg(long)]
    list: bool,

    /// Delete matching files
    #[arg(long = "del", visible_alias = "delete")]
    del: bool,

    /// Only act on files with this extension, e.g. ".log" (can be used multiple times)
    #[arg(long = "ext", value_name = "EXT")]
    ext: Vec<String>,

    /// Minimum file size in bytes
    #[arg(long, default_value = "0", value_name = "BYTES")]
    size: u64,

    /// Earliest modification date, YYYY-MM-DD
    #[arg(long, value_name = "DATE", conflicts_with = "newer")]
    date: Option<String>,

    /// Only act on files modified more recently than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w, 3M, 1y
    #[arg(long, value_name = "DURATION")]
    newer: Option<String>,

    /// Append deletion records to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Archive matching files as .gz under this directory
    #[arg(long, value_name = "DIR")]
    archive: Option<PathBuf>,

    /// Print diagnostics about each action to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Parse a `YYYY-MM-DD` date into midnight UTC of that day.
fn parse_date(s: &str) -> Result<SystemTime, String> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| e.to_string())?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| format!("invalid date: {}", s))?;
    Ok(SystemTime::from(midnight.and_utc()))
}

/// Parse a duration string like "1h", "7d", "2w" into a Duration.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

fn open_log(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create(true).read(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "walkclean=debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("walkclean: {}", msg);
    process::exit(1);
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let newer_than = match (&args.date, &args.newer) {
        (Some(date), _) => Some(
            parse_date(date).unwrap_or_else(|e| fail(format!("invalid --date '{}': {}", date, e))),
        ),
        (None, Some(s)) => {
            let duration = parse_duration_string(s)
                .unwrap_or_else(|e| fail(format!("invalid --newer duration '{}': {}", s, e)));
            Some(SystemTime::now() - duration)
        }
        (None, None) => None,
    };

    let config = RunConfig {
        extensions: args.ext,
        min_size: args.size,
        newer_than,
        list_only: args.list,
        delete: args.del,
        archive_dir: args.archive,
    };

    let log: Box<dyn Write> = match &args.log {
        Some(path) => match open_log(path) {
            Ok(file) => Box::new(file),
            Err(e) => fail(format!("cannot open log file '{}': {}", path.display(), e)),
        },
        None => Box::new(io::stderr()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = Pipeline::new(config)
        .with_log_writer(log)
        .run(&args.root, &mut out);

    if let Err(e) = result {
        fail(e);
    }
}
