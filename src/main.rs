//! scanner: token reports and golden-file checks for Decaf-style fragments.
//!
//! Usage:
//!   scanner scan <FILE> [--fail-on-error]
//!   scanner verify <INPUT_DIR> <OUTPUT_DIR>

use std::{fs::read_to_string, io::Write, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use scanner::{
    errors::errors::HarnessError,
    golden::golden::{verify_dir, FixtureReport},
    init_tracing,
    lexer::lexer::Lexer,
    render::render::render,
};

#[derive(Parser, Debug)]
#[command(name = "scanner", about = "Lexical analyzer for Decaf-style source fragments")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the token report of a source file.
    Scan {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Exit with status 1 when the file contains lexical errors.
        #[arg(long)]
        fail_on_error: bool,
    },
    /// Scan every `.frag` file in INPUT_DIR and compare with its `.out` file.
    Verify {
        #[arg(value_name = "INPUT_DIR")]
        input_dir: PathBuf,

        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let lexer = Lexer::new();

    let result = match cli.command {
        Command::Scan { file, fail_on_error } => scan(&lexer, file, fail_on_error),
        Command::Verify {
            input_dir,
            output_dir,
        } => verify(&lexer, input_dir, output_dir),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(2)
        }
    }
}

fn scan(lexer: &Lexer, file: PathBuf, fail_on_error: bool) -> Result<ExitCode, HarnessError> {
    let source = read_to_string(&file).map_err(|source| HarnessError::Read {
        path: file.clone(),
        source,
    })?;
    let tokens = lexer.tokenize(&source);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(render(lexer, &tokens).as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|source| HarnessError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })?;

    if fail_on_error && tokens.iter().any(|token| token.is_error()) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn verify(
    lexer: &Lexer,
    input_dir: PathBuf,
    output_dir: PathBuf,
) -> Result<ExitCode, HarnessError> {
    let reports = verify_dir(lexer, &input_dir, &output_dir)?;

    for report in &reports {
        println!("{}", report.summary());
    }

    if reports.iter().any(FixtureReport::failed) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
