#![allow(missing_docs)]

use super::*;

impl ElementVisitor {
    pub fn visit_expr(&mut self, expr: &Expr) {
        if self.depth >= MAX_RECURSION_DEPTH {
            self.recursion_limit_hit = true;
            return;
        }
        self.depth += 1;
        self.visit_expr_children(expr);
        self.depth -= 1;
    }

    pub(super) fn visit_call_expr(&mut self, node: &ast::ExprCall) {
        if let Some(name) = Self::resolve_dotted_name(&node.func) {
            self.record_call(&name);
        } else {
            // No dotted name at the root (lambda, literal, ternary): there
            // is nothing to record but subexpressions may still hold calls.
            self.visit_expr(&node.func);
        }
        for arg in &node.arguments.args {
            self.visit_expr(arg);
        }
        for keyword in &node.arguments.keywords {
            if let Some(arg) = &keyword.arg {
                self.record_keyword_argument(arg.as_str());
            }
            self.visit_expr(&keyword.value);
        }
    }

    pub(super) fn visit_string_literal(&mut self, node: &ast::ExprStringLiteral) {
        let value = node.value.to_string();
        self.record_string(&value);
    }
}
