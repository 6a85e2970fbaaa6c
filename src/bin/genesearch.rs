use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use genesearch::{
    GeneEngine, RecordStore, about,
    config::{self, RunConfig},
    engine_shell::{execute_shell_command, parse_shell_tokens, shell_help_text},
    report, rle,
};
use log::LevelFilter;
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

/// GeneSearch: search and compare run-length encoded protein chains
///
/// Reads a tab-separated sequences file, runs a batch of search, diff and
/// mode commands against it and writes a numbered report.
#[derive(Parser, Debug)]
#[command(name = "genesearch", disable_version_flag = true)]
struct Cli {
    /// Print version and build information
    #[arg(short = 'V', long)]
    version: bool,

    /// More log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a command file and write the report.
    Run {
        /// JSON file with default paths and author
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Sequences file (organism, protein, encoded chain)
        #[arg(short, long)]
        sequences: Option<PathBuf>,

        /// Commands file
        #[arg(long)]
        commands: Option<PathBuf>,

        /// Report file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name written on the first line of the report
        #[arg(short, long)]
        author: Option<String>,
    },

    /// Run a single command and print its result.
    ///
    /// Tokens are the command fields, e.g. `diff ProtA ProtB`.
    Query {
        /// Sequences file
        #[arg(short, long, default_value = config::DEFAULT_SEQUENCES_PATH)]
        sequences: PathBuf,

        #[arg(required = true, num_args = 1..)]
        tokens: Vec<String>,
    },

    /// Run-length encode an amino-acid chain.
    Encode { chain: String },

    /// Decode a run-length encoded chain.
    Decode { encoded: String },

    /// Print a JSON summary of the sequences file.
    Summary {
        /// Sequences file
        #[arg(short, long, default_value = config::DEFAULT_SEQUENCES_PATH)]
        sequences: PathBuf,
    },

    /// Export the loaded records as tab-separated text.
    Export {
        /// Sequences file
        #[arg(short, long, default_value = config::DEFAULT_SEQUENCES_PATH)]
        sequences: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write run-length encoded chains instead of decoded ones
        #[arg(long)]
        encoded: bool,
    },

    /// Print the supported commands as JSON.
    Capabilities,

    /// Print the command file grammar.
    #[command(name = "commands")]
    Grammar,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Could not serialize JSON output")?;
    println!("{text}");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", about::version_cli_text());
        return;
    }
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        std::process::exit(1);
    };
    init_logging(cli.verbose);
    if let Err(e) = run(command) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            config,
            sequences,
            commands,
            output,
            author,
        } => {
            let base = match config {
                Some(path) => RunConfig::load_from_path(path)?,
                None => RunConfig::default(),
            };
            let config = base
                .with_sequences(sequences)
                .with_commands(commands)
                .with_output(output)
                .with_author(author);
            let summary = report::run(&config)?;
            println!(
                "Processed {} command(s) against {} record(s), report written to '{}'",
                summary.command_count,
                summary.record_count,
                summary.output.display()
            );
        }
        Commands::Query { sequences, tokens } => {
            let store = RecordStore::load_from_path(&sequences)?;
            let engine = GeneEngine::new(&store);
            let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
            let command = parse_shell_tokens(&tokens);
            if !command.is_known() {
                anyhow::bail!("{}\n{}", command.preview(), shell_help_text());
            }
            println!(
                "{}",
                execute_shell_command(&engine, &command).trim_end_matches('\n')
            );
        }
        Commands::Encode { chain } => {
            println!("{}", rle::encode(chain.trim()));
        }
        Commands::Decode { encoded } => {
            println!("{}", rle::decode(&encoded)?);
        }
        Commands::Summary { sequences } => {
            let store = RecordStore::load_from_path(&sequences)?;
            let text = store
                .summarize()
                .to_json_pretty()
                .context("Could not serialize JSON output")?;
            println!("{text}");
        }
        Commands::Export {
            sequences,
            output,
            encoded,
        } => {
            let store = RecordStore::load_from_path(&sequences)?;
            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Could not create '{}'", path.display()))?;
                    store.write_tsv(BufWriter::new(file), encoded)?;
                }
                None => store.write_tsv(io::stdout().lock(), encoded)?,
            }
        }
        Commands::Capabilities => {
            print_json(&GeneEngine::capabilities())?;
        }
        Commands::Grammar => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", shell_help_text())?;
        }
    }
    Ok(())
}
