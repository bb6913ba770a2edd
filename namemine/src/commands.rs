//! Command line interface and program entry logic.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::Config;
use crate::miner::NameMiner;
use crate::output;
use crate::splitter::SplitterPolicy;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.namemine.toml):
  Create this file in your project root to set defaults.
  A [tool.namemine] table in pyproject.toml works too.

  [namemine]
  # Noise thresholds
  min_name_length = 3        # Shorter names are dropped
  min_comment_length = 4     # Shorter comment chunks are dropped
  min_string_length = 6      # Shorter string literals are dropped

  # Component bounds
  min_component_length = 1
  max_component_length = 30

  # Splitting
  splitter = \"safe\"          # \"safe\" or \"simple\"

  # Path filters
  exclude_folders = [\"vendored\", \"migrations\"]

  # Names to ignore on top of the built-in list
  extra_ignorable_names = [\"tmp\", \"ret\"]
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "namemine - mine identifier component frequencies from Python repositories",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Repository root paths to mine.
    pub paths: Vec<PathBuf>,

    /// File listing repository paths, one per line. Blank lines and lines
    /// starting with '#' are skipped.
    #[arg(long, value_name = "FILE")]
    pub repo_list: Option<PathBuf>,

    /// Directory that relative repository paths are resolved against.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Camel-case splitting policy (overrides config).
    #[arg(long, value_enum)]
    pub splitter: Option<SplitterPolicy>,

    /// Number of worker threads (defaults to all cores).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Minimum component length to count (overrides config).
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Maximum component length to count (overrides config).
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Folders to exclude from scanning, beyond the defaults.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Show only the top N components in table output.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Dump the element categories of a single Python file and exit.
    #[arg(long, value_name = "FILE")]
    pub elements: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runs the miner with the given arguments using stdout as the writer.
///
/// # Errors
///
/// Returns an error if argument parsing fails, or if the command execution fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs the miner with the given arguments, writing output to the specified
/// writer. This is the testable version of `run_with_args`.
///
/// # Errors
///
/// Returns an error if argument parsing fails, or if the command execution fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["namemine".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    if let Some(threads) = cli.threads {
        // Ignore the error when the global pool already exists (tests).
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global();
    }

    if let Some(file) = &cli.elements {
        return run_elements_dump(&cli, file.clone(), writer);
    }

    let repos = collect_repo_paths(&cli)?;
    if repos.is_empty() {
        eprintln!("No repository paths given; pass paths or --repo-list");
        return Ok(1);
    }

    let config_anchor = repos
        .first()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    let config = apply_overrides(Config::load_from_path(&config_anchor), &cli);

    if cli.verbose && !cli.json {
        eprintln!("[VERBOSE] namemine v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Using {} threads", rayon::current_num_threads());
        eprintln!("[VERBOSE] Mining {} repositories", repos.len());
        if let Some(path) = &config.config_file_path {
            eprintln!("[VERBOSE] Config loaded from {}", path.display());
        }
    }

    let policy = config.namemine.splitter();
    let mut miner = NameMiner::new(config)
        .with_policy(policy)
        .with_verbose(cli.verbose);
    if !cli.exclude_folders.is_empty() {
        let mut excludes = miner.exclude_folders.clone();
        excludes.extend(cli.exclude_folders.iter().cloned());
        miner = miner.with_excludes(excludes);
    }

    let progress = (!cli.json)
        .then(|| Arc::new(output::create_progress_bar(repos.len() as u64)));
    if let Some(bar) = &progress {
        miner = miner.with_progress_bar(Arc::clone(bar));
    }

    let table = miner.run(&repos);

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    if cli.json {
        let value = output::frequency_table_json(&table);
        writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        output::print_frequency_table(writer, &table, cli.limit)?;
    }

    Ok(0)
}

fn run_elements_dump<W: std::io::Write>(
    cli: &Cli,
    file: PathBuf,
    writer: &mut W,
) -> Result<i32> {
    let config = apply_overrides(Config::load_from_path(&file), cli);
    let miner = NameMiner::new(config).with_verbose(cli.verbose);
    let elements = miner.process_file(&file)?;
    if cli.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&elements)?)?;
    } else {
        output::print_elements(writer, &file.display().to_string(), &elements)?;
    }
    Ok(0)
}

/// Combines positional paths with the contents of `--repo-list`, resolving
/// relative paths against `--root` when given.
fn collect_repo_paths(cli: &Cli) -> Result<Vec<PathBuf>> {
    let mut repos = cli.paths.clone();
    if let Some(list) = &cli.repo_list {
        let content = fs::read_to_string(list)
            .with_context(|| format!("Failed to read repo list {}", list.display()))?;
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            repos.push(PathBuf::from(trimmed));
        }
    }
    if let Some(root) = &cli.root {
        for repo in &mut repos {
            if repo.is_relative() {
                *repo = root.join(repo.as_path());
            }
        }
    }
    Ok(repos)
}

/// Applies CLI overrides on top of the loaded configuration.
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(policy) = cli.splitter {
        config.namemine.splitter = Some(policy);
    }
    if let Some(min) = cli.min_length {
        config.namemine.min_component_length = Some(min);
    }
    if let Some(max) = cli.max_length {
        config.namemine.max_component_length = Some(max);
    }
    config
}
