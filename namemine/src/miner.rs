//! The mining engine: files to repositories to one frequency table.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::Config;
use crate::corpus::{FrequencyTable, RepoNameSet};
use crate::elements::{file_elements, SourceElementSet};
use crate::splitter::SplitterPolicy;
use crate::utils::collect_python_files;

/// Corpus miner state and runtime configuration.
pub struct NameMiner {
    /// Configuration object.
    pub config: Config,
    /// Camel-case splitting policy.
    pub policy: SplitterPolicy,
    /// Folders to exclude from repository scanning, beyond the defaults.
    pub exclude_folders: Vec<String>,
    /// Whether to enable verbose logging.
    pub verbose: bool,
    /// Progress bar for tracking mining progress (thread-safe).
    pub progress_bar: Option<Arc<indicatif::ProgressBar>>,
}

impl NameMiner {
    /// Creates a miner from a loaded configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let policy = config.namemine.splitter();
        let exclude_folders = config.namemine.exclude_folders.clone().unwrap_or_default();
        Self {
            config,
            policy,
            exclude_folders,
            verbose: false,
            progress_bar: None,
        }
    }

    /// Builder-style method to set the splitting policy.
    #[must_use]
    pub fn with_policy(mut self, policy: SplitterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder-style method to set verbose mode.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builder-style method to set excluded folders.
    #[must_use]
    pub fn with_excludes(mut self, folders: Vec<String>) -> Self {
        self.exclude_folders = folders;
        self
    }

    /// Builder-style method to attach a progress bar.
    #[must_use]
    pub fn with_progress_bar(mut self, bar: Arc<indicatif::ProgressBar>) -> Self {
        self.progress_bar = Some(bar);
        self
    }

    /// Extracts the element set of a single file.
    pub fn process_file(&self, path: &Path) -> Result<SourceElementSet> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let elements = file_elements(&source, &self.config.namemine);
        if self.verbose {
            if let Some(err) = &elements.parse_error {
                eprintln!(
                    "[VERBOSE] Parse failed for {}, lexical elements only: {err}",
                    path.display()
                );
            }
            if elements.recursion_limit_hit {
                eprintln!(
                    "[VERBOSE] Recursion limit hit in {}, elements may be incomplete",
                    path.display()
                );
            }
        }
        Ok(elements)
    }

    /// Mines one repository into its distinct-name set.
    ///
    /// Files are processed in parallel; the ordered collect plus a sequential
    /// fold keeps the name set in file-list order. Unreadable files are
    /// skipped with a warning rather than aborting the repository; a corpus
    /// run should survive one bad file.
    #[must_use]
    pub fn mine_repo(&self, root: &Path) -> RepoNameSet {
        let files = collect_python_files(root, &self.exclude_folders);
        let file_sets: Vec<Option<SourceElementSet>> = files
            .par_iter()
            .map(|path| match self.process_file(path) {
                Ok(elements) => Some(elements),
                Err(err) => {
                    eprintln!("[WARN] Skipping {}: {err:#}", path.display());
                    None
                }
            })
            .collect();

        let mut names = RepoNameSet::new();
        for elements in file_sets.iter().flatten() {
            names.add_file(elements);
        }
        if self.verbose {
            eprintln!(
                "[VERBOSE] {}: {} files, {} distinct names",
                root.display(),
                files.len(),
                names.len()
            );
        }
        names
    }

    /// Mines every repository and folds the results into one table.
    ///
    /// Repositories are processed in parallel; the ordered collect plus a
    /// sequential merge keeps the output canonical for a given input order.
    #[must_use]
    pub fn run(&self, repos: &[PathBuf]) -> FrequencyTable {
        let repo_sets: Vec<(&PathBuf, RepoNameSet)> = repos
            .par_iter()
            .map(|root| {
                let names = self.mine_repo(root);
                if let Some(bar) = &self.progress_bar {
                    bar.inc(1);
                }
                (root, names)
            })
            .collect();

        let mut table = FrequencyTable::new();
        for (root, names) in repo_sets {
            if names.is_empty() {
                eprintln!("[WARN] No names mined from {}, skipping", root.display());
                continue;
            }
            let mut repo_table = FrequencyTable::new();
            repo_table.accumulate_repo(&names, self.policy, &self.config.namemine);
            table.merge(repo_table);
        }
        table
    }
}
