use super::*;

impl ElementVisitor {
    pub(super) fn handle_if_stmt(&mut self, node: &ast::StmtIf) {
        self.visit_expr(&node.test);
        for stmt in &node.body {
            self.visit_stmt(stmt);
        }
        for clause in &node.elif_else_clauses {
            if let Some(test) = &clause.test {
                self.visit_expr(test);
            }
            for stmt in &clause.body {
                self.visit_stmt(stmt);
            }
        }
    }

    pub(super) fn handle_for_stmt(&mut self, node: &ast::StmtFor) {
        self.visit_expr(&node.iter);
        self.visit_binding_target(&node.target);
        for stmt in &node.body {
            self.visit_stmt(stmt);
        }
        for stmt in &node.orelse {
            self.visit_stmt(stmt);
        }
    }

    pub(super) fn handle_while_stmt(&mut self, node: &ast::StmtWhile) {
        self.visit_expr(&node.test);
        for stmt in &node.body {
            self.visit_stmt(stmt);
        }
        for stmt in &node.orelse {
            self.visit_stmt(stmt);
        }
    }

    pub(super) fn handle_with_stmt(&mut self, node: &ast::StmtWith) {
        for item in &node.items {
            self.visit_expr(&item.context_expr);
            if let Some(optional_vars) = &item.optional_vars {
                self.visit_binding_target(optional_vars);
            }
        }
        for stmt in &node.body {
            self.visit_stmt(stmt);
        }
    }

    pub(super) fn handle_try_stmt(&mut self, node: &ast::StmtTry) {
        for stmt in &node.body {
            self.visit_stmt(stmt);
        }
        for ast::ExceptHandler::ExceptHandler(handler) in &node.handlers {
            if let Some(exc) = &handler.type_ {
                self.visit_expr(exc);
            }
            if let Some(name) = &handler.name {
                self.record_binding(name.as_str());
            }
            for stmt in &handler.body {
                self.visit_stmt(stmt);
            }
        }
        for stmt in &node.orelse {
            self.visit_stmt(stmt);
        }
        for stmt in &node.finalbody {
            self.visit_stmt(stmt);
        }
    }

    pub(super) fn handle_match_stmt(&mut self, node: &ast::StmtMatch) {
        self.visit_expr(&node.subject);
        for case in &node.cases {
            self.visit_match_pattern(&case.pattern);
            if let Some(guard) = &case.guard {
                self.visit_expr(guard);
            }
            for stmt in &case.body {
                self.visit_stmt(stmt);
            }
        }
    }
}
