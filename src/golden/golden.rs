use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{errors::errors::HarnessError, lexer::lexer::Lexer, render::render::scan_report};

pub const INPUT_EXTENSION: &str = "frag";
pub const EXPECTED_EXTENSION: &str = "out";
pub const OUTPUT_EXTENSION: &str = "tmp";
pub const DIFF_FILE: &str = "error.txt";

#[derive(Debug)]
pub enum FixtureOutcome {
    Match,
    Mismatch(BTreeSet<String>),
    MissingExpected,
    Failed(HarnessError),
}

#[derive(Debug)]
pub struct FixtureReport {
    pub name: String,
    pub outcome: FixtureOutcome,
}

impl FixtureReport {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, FixtureOutcome::Match)
    }

    /// Mismatches and unprocessable fixtures; a missing `.out` is not a failure.
    pub fn failed(&self) -> bool {
        matches!(
            self.outcome,
            FixtureOutcome::Mismatch(_) | FixtureOutcome::Failed(_)
        )
    }

    /// One status line, as printed by `scanner verify`.
    pub fn summary(&self) -> String {
        match &self.outcome {
            FixtureOutcome::Match => format!("No differences found for {}.", self.name),
            FixtureOutcome::Mismatch(_) => format!("Mismatch found for {}.", self.name),
            FixtureOutcome::MissingExpected => {
                format!("No expected output file found for {}.", self.name)
            }
            FixtureOutcome::Failed(error) => format!("Failed to process {}: {}", self.name, error),
        }
    }
}

/// Lines present in exactly one of the two texts. Lines keep their `\n`.
pub fn unordered_diff(actual: &str, expected: &str) -> BTreeSet<String> {
    let actual: BTreeSet<&str> = actual.split_inclusive('\n').collect();
    let expected: BTreeSet<&str> = expected.split_inclusive('\n').collect();

    actual
        .symmetric_difference(&expected)
        .map(|line| line.to_string())
        .collect()
}

fn read(path: &Path) -> Result<String, HarnessError> {
    fs::read_to_string(path).map_err(|source| HarnessError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result<(), HarnessError> {
    fs::write(path, contents).map_err(|source| HarnessError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// `*.frag` files directly inside `input_dir`, sorted by name.
pub fn fixtures(input_dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let list_error = |source| HarnessError::ListDir {
        path: input_dir.to_path_buf(),
        source,
    };

    let mut found = vec![];
    for entry in fs::read_dir(input_dir).map_err(list_error)? {
        let path = entry.map_err(list_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == INPUT_EXTENSION) {
            found.push(path);
        }
    }
    found.sort();

    Ok(found)
}

fn verify_fixture(
    lexer: &Lexer,
    input: &Path,
    output_dir: &Path,
) -> Result<FixtureOutcome, HarnessError> {
    let report = scan_report(lexer, &read(input)?);

    let actual_name = input.with_extension(OUTPUT_EXTENSION);
    let actual_path = output_dir.join(actual_name.file_name().unwrap_or_default());
    write(&actual_path, &report)?;

    let expected_path = input.with_extension(EXPECTED_EXTENSION);
    if !expected_path.exists() {
        return Ok(FixtureOutcome::MissingExpected);
    }

    let diff = unordered_diff(&report, &read(&expected_path)?);
    if diff.is_empty() {
        Ok(FixtureOutcome::Match)
    } else {
        Ok(FixtureOutcome::Mismatch(diff))
    }
}

/// Verifies every fixture in `input_dir`, writing `<name>.tmp` reports and an
/// `error.txt` with the differing lines into `output_dir`.
///
/// A fixture that can't be processed is reported as `Failed` and the batch
/// carries on; only failures on the directories themselves abort it.
pub fn verify_dir(
    lexer: &Lexer,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<FixtureReport>, HarnessError> {
    fs::create_dir_all(output_dir).map_err(|source| HarnessError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut diff_log = String::from("Diff Results:\n");
    let mut reports = vec![];

    for input in fixtures(input_dir)? {
        let name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let outcome =
            verify_fixture(lexer, &input, output_dir).unwrap_or_else(FixtureOutcome::Failed);

        match &outcome {
            FixtureOutcome::Match => debug!(fixture = %name, "match"),
            FixtureOutcome::Mismatch(diff) => {
                info!(fixture = %name, lines = diff.len(), "mismatch");
                diff_log.push_str(&format!("\nDifferences for {name}:\n"));
                for line in diff {
                    diff_log.push_str(line);
                }
            }
            FixtureOutcome::MissingExpected => info!(fixture = %name, "no expected output"),
            FixtureOutcome::Failed(error) => warn!(fixture = %name, %error, "failed"),
        }

        reports.push(FixtureReport { name, outcome });
    }

    write(&output_dir.join(DIFF_FILE), &diff_log)?;

    Ok(reports)
}
