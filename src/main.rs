//! folres CLI - resolution refutation over a CNF clause file.

use std::fs;
use std::io::{self, Read};
use std::process;
use std::sync::atomic::Ordering;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use log::{error, LevelFilter};

use folres::session::{SolveError, Solver};
use folres::stats::Statistics;

const USAGE: &str = "\
Usage: folres [OPTIONS] [FILE]

Reads CNF clauses from FILE (or stdin when FILE is absent or `-`) and
reports whether the empty clause can be derived by resolution.

Options:
  --max-predicates N   keep only resolvents with fewer than N literals
                       (N <= 0 or `unlimited` disables the limit)
  --timeout-ms N       stop after N milliseconds and report no result
  --json               print statistics as JSON
  --trace              log every clause pair and kept resolvent
  --help               print this message";

const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_TIMEOUT: i32 = 3;

#[derive(Debug, Default)]
struct Options {
    input: Option<String>,
    max_predicates: Option<String>,
    timeout: Option<Duration>,
    json: bool,
    trace: bool,
}

enum Command {
    Help,
    Run(Options),
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--json" => options.json = true,
            "--trace" => options.trace = true,
            "--max-predicates" => {
                let value = iter.next().ok_or("--max-predicates needs a value")?;
                options.max_predicates = Some(value.clone());
            }
            "--timeout-ms" => {
                let value = iter.next().ok_or("--timeout-ms needs a value")?;
                let ms = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid --timeout-ms value: {}", value))?;
                options.timeout = Some(Duration::from_millis(ms));
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown option: {}", flag));
            }
            path => {
                if options.input.is_some() {
                    return Err(format!("unexpected argument: {}", path));
                }
                options.input = Some(path.to_string());
            }
        }
    }
    Ok(Command::Run(options))
}

fn init_logging(trace: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if trace {
        builder.filter_module("folres", LevelFilter::Trace);
    }
    builder.init();
}

fn read_input(input: Option<&str>) -> io::Result<String> {
    match input {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => fs::read_to_string(path),
    }
}

fn print_stats(stats: &Statistics, json: bool) {
    if json {
        match stats.to_json() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("failed to serialize statistics: {}", e);
                process::exit(EXIT_FAILURE);
            }
        }
    } else {
        println!("{}", stats);
    }
}

fn run(options: Options) -> Result<i32, SolveError> {
    let mut solver = Solver::new();
    if let Some(limit) = &options.max_predicates {
        solver.set_option("max_predicates", limit)?;
    }

    let text = match read_input(options.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read input: {}", e);
            return Ok(EXIT_FAILURE);
        }
    };

    let started = Instant::now();
    let problem = solver.prepare(&text)?;

    let Some(timeout) = options.timeout else {
        print_stats(&problem.saturate(), options.json);
        return Ok(0);
    };

    let initial = problem.initial_clause_count();
    let kept = problem.kept_counter();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(problem.saturate());
    });
    match rx.recv_timeout(timeout) {
        Ok(stats) => {
            print_stats(&stats, options.json);
            Ok(0)
        }
        Err(_) => {
            let stats = Statistics::aborted(initial, kept.load(Ordering::Relaxed), started.elapsed());
            print_stats(&stats, options.json);
            Ok(EXIT_TIMEOUT)
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return;
        }
        Ok(Command::Run(options)) => options,
        Err(message) => {
            eprintln!("Error: {}\n\n{}", message, USAGE);
            process::exit(EXIT_USAGE);
        }
    };

    init_logging(options.trace);

    match run(options) {
        Ok(code) => process::exit(code),
        Err(e @ SolveError::Parse(_)) => {
            eprintln!("{}", e);
            process::exit(EXIT_FAILURE);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_USAGE);
        }
    }
}
