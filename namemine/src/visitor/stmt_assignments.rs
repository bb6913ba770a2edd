use super::*;

impl ElementVisitor {
    // Targets are recorded before the value is walked, so a name bound on
    // the left always precedes anything the right-hand side records.
    pub(super) fn handle_assign_stmt(&mut self, node: &ast::StmtAssign) {
        for target in &node.targets {
            self.visit_assign_target(target);
        }
        self.visit_expr(&node.value);
    }

    pub(super) fn handle_ann_assign_stmt(&mut self, node: &ast::StmtAnnAssign) {
        self.visit_assign_target(&node.target);
        self.visit_expr(&node.annotation);
        if let Some(value) = &node.value {
            self.visit_expr(value);
        }
    }
}
