use clap::{value_parser, Parser};
use sm_base_algos::{cli::MeasureArgs, MeasureParams};
use sm_types::SimError;
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Measure(#[from] SimError),

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Compute the similarity or distance between two strings.
#[derive(Parser, Debug)]
#[clap(author, about, disable_version_flag(true))]
pub struct Cli {
    /// The first string.
    pub a: Option<String>,

    /// The second string.
    pub b: Option<String>,

    /// A .json file with measure parameters. Options given on the command
    /// line take precedence.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub params: Option<PathBuf>,

    /// Log more. Pass up to three times.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[clap(flatten)]
    pub measure: MeasureArgs,
}

fn read_to_string(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

impl Cli {
    /// Parameters from the params file, with command line overrides applied.
    pub fn params(&self) -> Result<MeasureParams, CliError> {
        let mut params = match &self.params {
            Some(path) => MeasureParams::from_json(&read_to_string(path)?)?,
            None => MeasureParams::default(),
        };
        self.measure.apply(&mut params);
        debug!(?params, "parameters");
        Ok(params)
    }

    /// Score the two strings and write the result to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<(), CliError> {
        let params = self.params()?;
        let s = self
            .measure
            .measure
            .score(&params, self.a.as_deref(), self.b.as_deref())?;
        writeln!(out, "{s}")?;
        Ok(())
    }
}
