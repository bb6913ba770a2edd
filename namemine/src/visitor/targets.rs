use super::*;

impl ElementVisitor {
    /// Records the names bound by an assignment target.
    ///
    /// Plain names are scope-qualified; attribute targets keep their dotted
    /// chain (minus a leading `self`/`cls`); tuple and list targets recurse.
    pub(super) fn visit_assign_target(&mut self, target: &Expr) {
        match target {
            Expr::Name(node) => self.record_variable(node.id.as_str()),
            Expr::Tuple(node) => {
                for elt in &node.elts {
                    self.visit_assign_target(elt);
                }
            }
            Expr::List(node) => {
                for elt in &node.elts {
                    self.visit_assign_target(elt);
                }
            }
            Expr::Starred(node) => self.visit_assign_target(&node.value),
            Expr::Attribute(_) => {
                if let Some(name) = Self::resolve_dotted_name(target) {
                    self.record_variable(&name);
                }
            }
            Expr::Subscript(node) => {
                self.visit_expr(&node.value);
                self.visit_expr(&node.slice);
            }
            _ => {}
        }
    }

    /// Records the names bound by a loop, `with ... as` or pattern target,
    /// without a scope prefix.
    pub(super) fn visit_binding_target(&mut self, target: &Expr) {
        match target {
            Expr::Name(node) => self.record_binding(node.id.as_str()),
            Expr::Tuple(node) => {
                for elt in &node.elts {
                    self.visit_binding_target(elt);
                }
            }
            Expr::List(node) => {
                for elt in &node.elts {
                    self.visit_binding_target(elt);
                }
            }
            Expr::Starred(node) => self.visit_binding_target(&node.value),
            Expr::Attribute(_) => {
                if let Some(name) = Self::resolve_dotted_name(target) {
                    self.record_variable(&name);
                }
            }
            Expr::Subscript(node) => {
                self.visit_expr(&node.value);
                self.visit_expr(&node.slice);
            }
            _ => {}
        }
    }

    /// Flattens a name, attribute chain, call or subscript expression into a
    /// dotted name, dropping a leading `self` or `cls` receiver.
    ///
    /// `self.parser.parse_file(...)` resolves to `parser.parse_file`;
    /// expressions with no name at the root (lambdas, literals) resolve to
    /// `None`.
    pub(super) fn resolve_dotted_name(expr: &Expr) -> Option<String> {
        let mut parts: SmallVec<[&str; 4]> = SmallVec::new();
        let mut current = expr;
        loop {
            match current {
                Expr::Name(node) => {
                    parts.push(node.id.as_str());
                    break;
                }
                Expr::Attribute(node) => {
                    parts.push(node.attr.as_str());
                    current = &node.value;
                }
                Expr::Call(node) => current = &node.func,
                Expr::Subscript(node) => current = &node.value,
                _ => return None,
            }
        }
        parts.reverse();
        if matches!(parts.first(), Some(&"self" | &"cls")) {
            parts.remove(0);
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("."))
        }
    }

    /// Helper to recursively visit match patterns, recording captured names.
    pub(super) fn visit_match_pattern(&mut self, pattern: &ast::Pattern) {
        if self.depth >= MAX_RECURSION_DEPTH {
            self.recursion_limit_hit = true;
            return;
        }
        self.depth += 1;

        match pattern {
            ast::Pattern::MatchValue(node) => self.visit_expr(&node.value),
            ast::Pattern::MatchSingleton(_) => {}
            ast::Pattern::MatchSequence(node) => {
                for p in &node.patterns {
                    self.visit_match_pattern(p);
                }
            }
            ast::Pattern::MatchMapping(node) => {
                for (key, value) in node.keys.iter().zip(&node.patterns) {
                    self.visit_expr(key);
                    self.visit_match_pattern(value);
                }
                if let Some(rest) = &node.rest {
                    self.record_binding(rest.as_str());
                }
            }
            ast::Pattern::MatchClass(node) => {
                self.visit_expr(&node.cls);
                for p in &node.arguments.patterns {
                    self.visit_match_pattern(p);
                }
                for k in &node.arguments.keywords {
                    self.visit_match_pattern(&k.pattern);
                }
            }
            ast::Pattern::MatchStar(node) => {
                if let Some(name) = &node.name {
                    self.record_binding(name.as_str());
                }
            }
            ast::Pattern::MatchAs(node) => {
                if let Some(pattern) = &node.pattern {
                    self.visit_match_pattern(pattern);
                }
                if let Some(name) = &node.name {
                    self.record_binding(name.as_str());
                }
            }
            ast::Pattern::MatchOr(node) => {
                for p in &node.patterns {
                    self.visit_match_pattern(p);
                }
            }
        }

        self.depth -= 1;
    }
}
