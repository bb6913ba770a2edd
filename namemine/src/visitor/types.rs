use super::*;

/// Kind of lexical scope the visitor is currently inside.
///
/// Uses `CompactString` for stack allocation of typical short scope names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeKind {
    Module,
    Class(CompactString),
    Function(CompactString),
}
