use super::*;

impl ElementVisitor {
    pub(super) fn handle_function_stmt(&mut self, node: &ast::StmtFunctionDef) {
        let name = node.name.as_str();
        let keep = !ignorable_name(name, &self.config);
        if keep {
            let qualified = self.qualified_name(name);
            self.functions.push(qualified);
        }

        // Defaults and annotations evaluate in the enclosing scope.
        self.visit_parameters(&node.parameters);
        if let Some(returns) = &node.returns {
            self.visit_expr(returns);
        }

        // A filtered-out name contributes no scope segment: its children are
        // qualified as if defined directly in the enclosing scope.
        if keep {
            self.enter_scope(ScopeKind::Function(CompactString::from(name)));
        }
        self.record_parameter_names(&node.parameters);
        self.visit_suite_with_docstring(&node.body);
        if keep {
            self.exit_scope();
        }
    }

    pub(super) fn handle_class_stmt(&mut self, node: &ast::StmtClassDef) {
        let name = node.name.as_str();
        let keep = !ignorable_name(name, &self.config);
        if keep {
            let qualified = self.qualified_name(name);
            self.classes.push(qualified);
        }

        // Decorators, base classes and class keywords are deliberately not
        // collected: their names already appear at their definition or import
        // site, so counting them again here would skew the table toward
        // framework vocabulary.
        if keep {
            self.enter_scope(ScopeKind::Class(CompactString::from(name)));
        }
        self.visit_suite_with_docstring(&node.body);
        if keep {
            self.exit_scope();
        }
    }

    /// Visits a definition body, routing a leading docstring to the
    /// docstring category instead of the string-literal category.
    fn visit_suite_with_docstring(&mut self, body: &[Stmt]) {
        let skip = if let Some(doc) = Self::docstring_of(body) {
            self.record_docstring(&doc);
            1
        } else {
            0
        };
        for stmt in body.iter().skip(skip) {
            self.visit_stmt(stmt);
        }
    }
}
