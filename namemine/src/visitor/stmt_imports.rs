use super::*;

impl ElementVisitor {
    pub(super) fn handle_import_stmt(&mut self, node: &ast::StmtImport) {
        for alias in &node.names {
            self.record_import(alias.name.as_str());
        }
    }

    pub(super) fn handle_import_from_stmt(&mut self, node: &ast::StmtImportFrom) {
        // Relative imports without a module carry no path worth counting.
        let Some(module) = &node.module else { return };
        if module.as_str() == "__future__" {
            return;
        }

        for alias in &node.names {
            if alias.name.as_str() == "*" {
                self.record_import(module.as_str());
            } else {
                let full = format!("{}.{}", module.as_str(), alias.name.as_str());
                self.record_import(&full);
            }
        }
    }
}
