//! namemine: corpus-wide identifier component frequency mining for Python code.
//!
//! The library walks Python repositories, extracts the source elements we care
//! about (imports, classes, functions, variables, calls, strings, comments and
//! docstrings) from each file with a scope-aware AST visitor, splits the
//! extracted identifiers into component words, and accumulates per-repository
//! unique-name contributions into one deterministic frequency table. The
//! resulting tables are used to train heuristic identifier-splitting
//! algorithms, so reproducibility of counts and tie-break order matters more
//! than raw speed.

pub mod commands;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod elements;
pub mod filter;
pub mod lexical;
pub mod miner;
pub mod output;
pub mod splitter;
pub mod utils;
pub mod visitor;

pub use config::ExtractorConfig;
pub use corpus::{FrequencyTable, RepoNameSet};
pub use elements::{file_elements, SourceElementSet};
pub use miner::NameMiner;
pub use splitter::{safe_split, simple_split, SplitterPolicy};
