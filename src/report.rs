//! Batch execution of a command file and the numbered report it produces.

use crate::{
    config::RunConfig,
    engine::{Engine, GeneEngine},
    engine_shell::{ShellCommand, execute_shell_command, parse_shell_line},
    error::GeneSearchError,
    record_store::RecordStore,
};
use log::{debug, info};
use rayon::prelude::*;
use std::{fmt, fs, path::PathBuf};

pub const REPORT_TITLE: &str = "Genetic Search";
pub const BLOCK_SEPARATOR: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    author: String,
    blocks: Vec<String>,
}

impl Report {
    pub fn with_blocks(author: &str, blocks: Vec<String>) -> Self {
        Self {
            author: author.to_string(),
            blocks,
        }
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.author)?;
        writeln!(f, "{REPORT_TITLE}")?;
        for (num, result) in self.blocks.iter().enumerate() {
            // Numbering is 1-based and runs across the whole file.
            writeln!(f, "{BLOCK_SEPARATOR}")?;
            writeln!(f, "{:03}", num + 1)?;
            writeln!(f, "{result}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub record_count: usize,
    pub command_count: usize,
    pub unknown_command_count: usize,
    pub output: PathBuf,
}

/// Parses every line of `command_text`, blank ones included, into a command.
pub fn parse_commands(command_text: &str) -> Vec<ShellCommand> {
    command_text.lines().map(parse_shell_line).collect()
}

/// Evaluates the commands against `engine`. Commands are independent of each
/// other, so they run in parallel; results keep the input order.
pub fn run_batch<E: Engine + Sync>(engine: &E, commands: &[ShellCommand]) -> Vec<String> {
    commands
        .par_iter()
        .enumerate()
        .map(|(num, command)| {
            debug!("Command {:03}: {}", num + 1, command.preview());
            execute_shell_command(engine, command)
        })
        .collect()
}

pub fn run(config: &RunConfig) -> Result<RunSummary, GeneSearchError> {
    let store = RecordStore::load_from_path(&config.sequences)?;
    let command_text = fs::read_to_string(&config.commands)
        .map_err(|e| GeneSearchError::read(&config.commands, e))?;
    let commands = parse_commands(&command_text);

    let engine = GeneEngine::new(&store);
    let report = Report::with_blocks(&config.author, run_batch(&engine, &commands));
    fs::write(&config.output, report.to_string())
        .map_err(|e| GeneSearchError::write(&config.output, e))?;

    let summary = RunSummary {
        record_count: store.len(),
        command_count: commands.len(),
        unknown_command_count: commands.iter().filter(|c| !c.is_known()).count(),
        output: config.output.clone(),
    };
    info!(
        "Wrote {} result block(s) to '{}'",
        summary.command_count,
        summary.output.display()
    );
    Ok(summary)
}
