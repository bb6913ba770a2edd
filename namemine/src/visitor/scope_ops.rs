use super::*;

impl ElementVisitor {
    pub(super) fn enter_scope(&mut self, kind: ScopeKind) {
        match &kind {
            ScopeKind::Class(name) | ScopeKind::Function(name) => {
                if !self.cached_scope_prefix.is_empty() {
                    self.cached_scope_prefix.push('.');
                }
                self.cached_scope_prefix.push_str(name);
            }
            ScopeKind::Module => {}
        }
        self.scope_stack.push(kind);
    }

    /// Pops the current scope from the stack and updates the cached prefix.
    pub(super) fn exit_scope(&mut self) {
        if let Some(kind) = self.scope_stack.pop() {
            match &kind {
                ScopeKind::Class(name) | ScopeKind::Function(name) => {
                    let name_len = name.len();
                    if self.cached_scope_prefix.len() > name_len {
                        // Has a dot before it
                        self.cached_scope_prefix
                            .truncate(self.cached_scope_prefix.len() - name_len - 1);
                    } else {
                        // It's the only thing in the prefix
                        self.cached_scope_prefix
                            .truncate(self.cached_scope_prefix.len() - name_len);
                    }
                }
                ScopeKind::Module => {}
            }
        }
    }

    /// Constructs a dotted qualified name for a definition in the current scope.
    pub(super) fn qualified_name(&self, name: &str) -> String {
        if self.cached_scope_prefix.is_empty() {
            name.to_owned()
        } else {
            let mut result =
                String::with_capacity(self.cached_scope_prefix.len() + 1 + name.len());
            result.push_str(&self.cached_scope_prefix);
            result.push('.');
            result.push_str(name);
            result
        }
    }

    /// Constructs a variable path: the scope prefix, the qualifier separator,
    /// then the variable name.
    ///
    /// The separator is distinct from `.` so that stripping the scope prefix
    /// later cannot truncate a dotted attribute-chain variable.
    pub(super) fn variable_path(&self, name: &str) -> String {
        if self.cached_scope_prefix.is_empty() {
            name.to_owned()
        } else {
            let mut result =
                String::with_capacity(self.cached_scope_prefix.len() + 1 + name.len());
            result.push_str(&self.cached_scope_prefix);
            result.push(QUALIFIER_SEPARATOR);
            result.push_str(name);
            result
        }
    }

    pub(super) fn record_import(&mut self, name: &str) {
        if !ignorable_name(name, &self.config) {
            self.imports.push(name.to_owned());
        }
    }

    /// Records a scope-qualified variable. For dotted attribute targets the
    /// noise filter applies to the final segment.
    pub(super) fn record_variable(&mut self, name: &str) {
        let leaf = name.rsplit('.').next().unwrap_or(name);
        if ignorable_name(leaf, &self.config) {
            return;
        }
        let path = self.variable_path(name);
        self.variables.push(path);
    }

    /// Records a binding target (loop variable, `with ... as`, except name,
    /// match capture) without a scope prefix: the same counter or handle
    /// name reused across functions is one vocabulary choice, not many.
    pub(super) fn record_binding(&mut self, name: &str) {
        if !ignorable_name(name, &self.config) {
            self.variables.push(name.to_owned());
        }
    }

    pub(super) fn record_call(&mut self, name: &str) {
        if !ignorable_call(name, &self.config) {
            self.calls.push(name.to_owned());
        }
    }

    /// Records a keyword argument name. Keyword names echo the parameter
    /// vocabulary of the called function, so they join the function category.
    pub(super) fn record_keyword_argument(&mut self, name: &str) {
        if !ignorable_name(name, &self.config) {
            let qualified = self.qualified_name(name);
            self.functions.push(qualified);
        }
    }

    pub(super) fn record_string(&mut self, value: &str) {
        if !ignorable_string(value, &self.config) {
            self.strings.push(value.to_owned());
        }
    }

    /// Docstrings are kept verbatim; the length filter applies only to
    /// string literals.
    pub(super) fn record_docstring(&mut self, value: &str) {
        self.docstrings.push(value.to_owned());
    }

    /// Records parameter names as variables of the function being defined.
    /// `self` and `cls` fall to the ignore list.
    pub(super) fn record_parameter_names(&mut self, params: &ast::Parameters) {
        for param in &params.posonlyargs {
            self.record_variable(param.parameter.name.as_str());
        }
        for param in &params.args {
            self.record_variable(param.parameter.name.as_str());
        }
        if let Some(param) = &params.vararg {
            self.record_variable(param.name.as_str());
        }
        for param in &params.kwonlyargs {
            self.record_variable(param.parameter.name.as_str());
        }
        if let Some(param) = &params.kwarg {
            self.record_variable(param.name.as_str());
        }
    }

    /// Visits function parameter annotations and defaults.
    pub(super) fn visit_parameters(&mut self, params: &ast::Parameters) {
        for param in &params.posonlyargs {
            if let Some(ann) = &param.parameter.annotation {
                self.visit_expr(ann);
            }
            if let Some(default) = &param.default {
                self.visit_expr(default);
            }
        }
        for param in &params.args {
            if let Some(ann) = &param.parameter.annotation {
                self.visit_expr(ann);
            }
            if let Some(default) = &param.default {
                self.visit_expr(default);
            }
        }
        if let Some(param) = &params.vararg {
            if let Some(ann) = &param.annotation {
                self.visit_expr(ann);
            }
        }
        for param in &params.kwonlyargs {
            if let Some(ann) = &param.parameter.annotation {
                self.visit_expr(ann);
            }
            if let Some(default) = &param.default {
                self.visit_expr(default);
            }
        }
        if let Some(param) = &params.kwarg {
            if let Some(ann) = &param.annotation {
                self.visit_expr(ann);
            }
        }
    }
}
