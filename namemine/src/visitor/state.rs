#![allow(missing_docs)]

use super::*;

/// Scope-aware AST visitor that collects the raw source elements of one file.
///
/// Each category is kept in first-seen order; deduplication and splitting
/// happen later so the visitor stays a pure traversal.
pub struct ElementVisitor {
    /// Dotted module paths from `import` and `from ... import` statements.
    pub imports: Vec<String>,
    /// Dotted-qualified class names.
    pub classes: Vec<String>,
    /// Dotted-qualified function and method names.
    pub functions: Vec<String>,
    /// Variable paths: scope prefix, qualifier separator, then the name.
    /// Loop and binding targets are recorded without a scope prefix.
    pub variables: Vec<String>,
    /// Dotted names of called functions and methods.
    pub calls: Vec<String>,
    /// String literal values that survived the noise filter.
    pub strings: Vec<String>,
    /// Class and function docstrings.
    pub docstrings: Vec<String>,
    pub(super) config: ExtractorConfig,
    /// Current scope stack.
    /// Uses `SmallVec` - most code has < 8 nested scopes.
    pub(super) scope_stack: SmallVec<[ScopeKind; 8]>,
    /// Cached dotted scope prefix, updated on scope push/pop so qualified
    /// names never require rebuilding the whole stack.
    pub(super) cached_scope_prefix: String,
    /// Current recursion depth for `visit_stmt`/`visit_expr` to prevent stack overflow.
    pub(super) depth: usize,
    /// Whether the recursion limit was hit during traversal.
    pub recursion_limit_hit: bool,
}

impl ElementVisitor {
    #[must_use]
    pub fn new(config: &ExtractorConfig) -> Self {
        let mut scope_stack = SmallVec::new();
        scope_stack.push(ScopeKind::Module);
        Self {
            imports: Vec::new(),
            classes: Vec::new(),
            functions: Vec::new(),
            variables: Vec::new(),
            calls: Vec::new(),
            strings: Vec::new(),
            docstrings: Vec::new(),
            config: config.clone(),
            scope_stack,
            cached_scope_prefix: String::new(),
            depth: 0,
            recursion_limit_hit: false,
        }
    }

    /// Visits a parsed module body.
    ///
    /// The module docstring is skipped here: the lexical header pass owns it,
    /// and collecting it twice would double its contribution.
    pub fn visit_module(&mut self, module: &ast::ModModule) {
        let skip = usize::from(Self::docstring_of(&module.body).is_some());
        for stmt in module.body.iter().skip(skip) {
            self.visit_stmt(stmt);
        }
    }

    /// Returns the docstring of a statement suite, if its first statement is
    /// a bare string literal.
    pub(super) fn docstring_of(body: &[Stmt]) -> Option<String> {
        if let Some(Stmt::Expr(first)) = body.first() {
            if let Expr::StringLiteral(s) = &*first.value {
                return Some(s.value.to_string());
            }
        }
        None
    }
}
