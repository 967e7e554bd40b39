extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate runematch;
extern crate shlex;

use std::env;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use runematch::prelude::*;

/// sk-match - match lines from stdin against a query
///
/// Lines that match are printed in input order.
/// Exit status is 0 if a line matched, 1 if none did and 2 on error.
#[derive(Parser, Debug)]
#[command(name = "sk-match", args_override_self = true, verbatim_doc_comment, version, about)]
struct Args {
    /// Query to match against every line
    query: String,

    /// Matching algorithm, overrides the configuration file
    #[arg(short, long, value_enum)]
    algo: Option<Algorithm>,

    /// Case sensitivity, overrides the configuration file
    #[arg(short, long, value_enum)]
    case: Option<CaseMatching>,

    /// Scan lines right to left, preferring matches close to the end
    #[arg(long, overrides_with = "forward")]
    backward: bool,

    /// Scan lines left to right, the default unless the configuration file says otherwise
    #[arg(long, overrides_with = "backward")]
    forward: bool,

    /// Ignore diacritics
    #[arg(long, overrides_with = "no_normalize")]
    normalize: bool,

    /// Match diacritics literally, the default unless the configuration file says otherwise
    #[arg(long, overrides_with = "normalize")]
    no_normalize: bool,

    /// When a fuzzy match resets the distance-from-boundary counter
    #[arg(long, value_enum)]
    boundary_reset: Option<BoundaryReset>,

    /// Read match options from a RON file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prefix every printed line with `start:end:penalty` and a tab
    #[arg(long)]
    print_span: bool,

    /// Read input delimited by NUL instead of newline
    #[arg(long)]
    read0: bool,

    /// Print output delimited by NUL instead of newline
    #[arg(long)]
    print0: bool,
}

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();
    if let Err(err) = color_eyre::install() {
        warn!("could not install error report handler: {err}");
    }

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // downstream pipe closed, exit silently
            let broken_pipe = err
                .chain()
                .filter_map(|e| e.downcast_ref::<io::Error>())
                .any(|e| e.kind() == io::ErrorKind::BrokenPipe);
            if broken_pipe {
                std::process::exit(0)
            }
            eprintln!("{err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> Args {
    let mut args = Vec::new();

    args.extend(env::args().next());
    args.extend(
        env::var("SK_MATCH_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    Args::parse_from(args)
}

fn build_options(args: &Args) -> Result<MatchOptions> {
    let base = match &args.config {
        Some(path) => MatchOptions::from_file(path)?,
        None => MatchOptions::default(),
    };

    let forward = match (args.forward, args.backward) {
        (true, _) => true,
        (_, true) => false,
        _ => base.forward,
    };
    let normalize = match (args.normalize, args.no_normalize) {
        (true, _) => true,
        (_, true) => false,
        _ => base.normalize,
    };

    let options = MatchOptionsBuilder::default()
        .algorithm(args.algo.unwrap_or(base.algorithm))
        .case(args.case.unwrap_or(base.case))
        .forward(forward)
        .normalize(normalize)
        .boundary_reset(args.boundary_reset.unwrap_or(base.boundary_reset))
        .build()?;
    Ok(options)
}

fn real_main() -> Result<i32> {
    let args = parse_args();
    let options = build_options(&args)?;
    let matcher = Matcher::new(&args.query, options);
    debug!("filtering stdin with {matcher}");

    let input_delimiter = if args.read0 { b'\0' } else { b'\n' };
    let output_ending: &[u8] = if args.print0 { b"\0" } else { b"\n" };

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());

    let mut num_matched = 0;
    for line in stdin.split(input_delimiter) {
        let line = line.wrap_err("failed to read input")?;
        let result = matcher.match_str(&String::from_utf8_lossy(&line));
        if !result.is_match() {
            continue;
        }
        num_matched += 1;
        if args.print_span {
            write!(stdout, "{result}\t")?;
        }
        stdout.write_all(&line)?;
        stdout.write_all(output_ending)?;
    }
    stdout.flush()?;

    debug!("{num_matched} lines matched");
    Ok(if num_matched == 0 { 1 } else { 0 })
}
