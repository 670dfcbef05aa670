use std::path::{Path, PathBuf};

use dfa_minimizer::DFA;

use tracing::{debug, info, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{value_parser, Arg, ArgMatches, Command};
use thiserror::Error;

fn cli() -> clap::Command {
    Command::new("dfamin")
        .about("Reads a DFA from a file, minimizes it and writes the minimal DFA to another file")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("file containing the DFA that should be minimized")
                .value_parser(value_parser!(PathBuf))
                .default_value("input2.txt"),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .help("file to which the minimized DFA is written")
                .value_parser(value_parser!(PathBuf))
                .default_value("output2.txt"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

/// Failures of a run, each one carrying the file it concerns.
#[derive(Debug, Error)]
enum RunError {
    #[error("Error reading the input file {}: {}", .0.display(), .1)]
    Read(PathBuf, dfa_minimizer::text::Error),
    #[error("Error writing the output file {}: {}", .0.display(), .1)]
    Write(PathBuf, dfa_minimizer::text::Error),
}

fn run(input: &Path, output: &Path) -> Result<DFA, RunError> {
    debug!("reading DFA from {}", input.display());
    let dfa = DFA::from_file(input).map_err(|e| RunError::Read(input.to_path_buf(), e))?;
    info!(
        "read DFA with {} states over alphabet {}",
        dfa.size(),
        dfa.alphabet()
    );

    let start = std::time::Instant::now();
    let minimized = dfa.minimize();
    info!(
        "minimization to {} states took {}µs",
        minimized.size(),
        start.elapsed().as_micros()
    );

    minimized
        .write_to_file(output)
        .map_err(|e| RunError::Write(output.to_path_buf(), e))?;
    Ok(minimized)
}

pub fn main() {
    let matches = cli().get_matches();

    setup_logging(&matches);

    let input = matches
        .get_one::<PathBuf>("input")
        .expect("input has a default value");
    let output = matches
        .get_one::<PathBuf>("output")
        .expect("output has a default value");

    match run(input, output) {
        Ok(minimized) => {
            println!("Minimized DFA has been written to {}", output.display());
            println!("\n--- Minimized DFA ---\n");
            println!("{minimized}");
            println!("\n--- End of Minimized DFA ---");
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{cli, run, RunError};

    #[test]
    fn default_arguments() {
        let matches = cli().try_get_matches_from(["dfamin"]).unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>("input"),
            Some(&PathBuf::from("input2.txt"))
        );
        assert_eq!(
            matches.get_one::<PathBuf>("output"),
            Some(&PathBuf::from("output2.txt"))
        );

        let matches = cli()
            .try_get_matches_from(["dfamin", "in.txt", "out.txt", "-v=debug"])
            .unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>("output"),
            Some(&PathBuf::from("out.txt"))
        );
        assert_eq!(
            matches.get_one::<String>("verbosity").map(String::as_str),
            Some("debug")
        );
    }

    #[test]
    fn run_minimizes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        std::fs::write(
            &input,
            "5\na b\n0\n4\n0 a 1\n0 b 3\n1 a 2\n1 b 4\n2 a 1\n2 b 4\n3 a 2\n3 b 4\n4 a 4\n4 b 4\n",
        )
        .unwrap();

        let minimized = run(&input, &output).unwrap();
        assert_eq!(minimized.size(), 3);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            minimized.to_text()
        );
    }

    #[test]
    fn run_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let output = dir.path().join("output.txt");
        assert!(matches!(run(&missing, &output), Err(RunError::Read(..))));

        let malformed = dir.path().join("malformed.txt");
        std::fs::write(&malformed, "1\nab\n0\n\n").unwrap();
        let err = run(&malformed, &output).unwrap_err();
        assert!(err.to_string().contains("not a single character"));

        let input = dir.path().join("input.txt");
        std::fs::write(&input, "1\na\n0\n0\n0 a 0\n").unwrap();
        let unwritable = dir.path().join("no-such-dir").join("output.txt");
        assert!(matches!(run(&input, &unwritable), Err(RunError::Write(..))));
    }
}
