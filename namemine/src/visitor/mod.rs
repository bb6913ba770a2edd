#![allow(missing_docs)]
#![allow(clippy::wildcard_imports)]

use crate::config::ExtractorConfig;
use crate::constants::{MAX_RECURSION_DEPTH, QUALIFIER_SEPARATOR};
use crate::filter::{ignorable_call, ignorable_name, ignorable_string};
use compact_str::CompactString;
use ruff_python_ast::{self as ast, Expr, Stmt};
use smallvec::SmallVec;

mod expr;
mod expr_traversal;
mod scope_ops;
mod state;
mod stmt;
mod stmt_assignments;
mod stmt_control_flow;
mod stmt_defs;
mod stmt_imports;
mod targets;
mod types;

pub use state::ElementVisitor;
pub use types::ScopeKind;
