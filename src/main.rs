use std::io::{self, BufWriter, Write};
use std::str::FromStr;

use anyhow::Context;
use clap::{ArgAction, Parser};
use find_fpc::{HostFs, Locator, Platform};
use log::{LevelFilter, Log, Metadata, Record};

#[derive(Parser)]
#[command(version, about = "Print how to invoke the Free Pascal compiler")]
struct Args {
    /// Platform identifier to search for instead of the host, e.g. win32 or linux
    #[arg(long, value_name("PLATFORM"), value_parser = parse_platform)]
    platform: Option<Platform>,

    /// Search this install directory instead of the defaults
    ///
    /// May be given several times; directories are searched in order.
    #[arg(long = "root", value_name("DIR"))]
    roots: Vec<String>,

    /// Print every candidate path in search order instead of resolving one
    #[arg(long)]
    list: bool,

    /// Log the search to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    Platform::from_str(s).map_err(|_| format!("unknown platform `{s}`"))
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => return Ok(()),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::set_logger(&LOGGER).context("failed to install logger")?;
    log::set_max_level(level);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;
    let result = run(args);
    log::logger().flush();
    result
}

fn run(args: Args) -> anyhow::Result<()> {
    let platform = args.platform.unwrap_or_else(Platform::current);
    let mut locator = Locator::new(platform, HostFs);
    if !args.roots.is_empty() {
        locator = locator.with_roots(args.roots);
    }

    let output = io::stdout().lock();
    let mut output = BufWriter::new(output);

    if args.list {
        for candidate in locator.candidates() {
            writeln!(output, "{candidate}")?;
        }
    } else {
        let path = locator.locate()?;
        writeln!(output, "{path}")?;
    }
    output.flush()?;

    Ok(())
}
