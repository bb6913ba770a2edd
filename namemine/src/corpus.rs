//! Corpus aggregation: repository name sets and the component frequency table.
//!
//! A repository contributes each distinct identifier once, no matter how many
//! files use it, so one sprawling codebase cannot drown out the rest of the
//! corpus. Components are tallied per occurrence within a name: `foo_foo`
//! contributes `foo` twice.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::ExtractorConfig;
use crate::elements::SourceElementSet;
use crate::splitter::SplitterPolicy;

/// The distinct identifier names contributed by one repository.
///
/// Keeps first-seen order alongside the dedup set so downstream counts do
/// not depend on hash iteration order.
#[derive(Debug, Default)]
pub struct RepoNameSet {
    names: Vec<String>,
    seen: FxHashSet<String>,
}

impl RepoNameSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every identifier name from one file's element set.
    pub fn add_file(&mut self, elements: &SourceElementSet) {
        for name in elements.identifier_names() {
            self.insert(name);
        }
    }

    /// Inserts a single name, ignoring duplicates.
    pub fn insert(&mut self, name: &str) {
        if self.seen.insert(name.to_owned()) {
            self.names.push(name.to_owned());
        }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Component frequency table accumulated over the whole corpus.
///
/// Counts live in a hash map; a parallel first-seen order list makes the
/// sorted output reproducible across runs and platforms.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
    order: Vec<String>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits every name of a repository and tallies the components.
    pub fn accumulate_repo(
        &mut self,
        repo: &RepoNameSet,
        policy: SplitterPolicy,
        config: &ExtractorConfig,
    ) {
        let min = config.min_component_length();
        let max = config.max_component_length();
        for name in repo.names() {
            for component in policy.split(name) {
                self.add_component(&component, min, max);
            }
        }
    }

    /// Records one component occurrence, normalizing to ASCII and dropping
    /// out-of-bounds lengths.
    pub fn add_component(&mut self, component: &str, min_length: usize, max_length: usize) {
        let ascii: String = component.chars().filter(char::is_ascii).collect();
        let length = ascii.len();
        if length < min_length || length > max_length {
            return;
        }
        match self.counts.get_mut(&ascii) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(ascii.clone(), 1);
                self.order.push(ascii);
            }
        }
    }

    /// Folds another table into this one. Counts are summed, so merging is
    /// commutative up to tie order in the sorted output.
    pub fn merge(&mut self, other: Self) {
        for component in other.order {
            let added = other.counts.get(&component).copied().unwrap_or(0);
            match self.counts.get_mut(&component) {
                Some(count) => *count += added,
                None => {
                    self.counts.insert(component.clone(), added);
                    self.order.push(component);
                }
            }
        }
    }

    /// Returns the count of one component.
    #[must_use]
    pub fn get(&self, component: &str) -> u64 {
        self.counts.get(component).copied().unwrap_or(0)
    }

    /// Returns all `(component, count)` pairs ordered by descending count.
    ///
    /// The sort is stable over first-seen order, so equal counts keep the
    /// order in which the corpus produced them.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .order
            .iter()
            .map(|component| (component.as_str(), self.get(component)))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(names: &[&str]) -> RepoNameSet {
        let mut set = RepoNameSet::new();
        for name in names {
            set.insert(name);
        }
        set
    }

    fn accumulate(repos: &[RepoNameSet]) -> FrequencyTable {
        let config = ExtractorConfig::default();
        let mut table = FrequencyTable::new();
        for repo in repos {
            table.accumulate_repo(repo, SplitterPolicy::Safe, &config);
        }
        table
    }

    #[test]
    fn repo_names_are_unique_and_ordered() {
        let set = repo(&["alpha", "beta", "alpha", "gamma"]);
        assert_eq!(set.names(), ["alpha", "beta", "gamma"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn components_are_summed_across_repos() {
        let table = accumulate(&[repo(&["fooBar"]), repo(&["foo_baz"])]);
        assert_eq!(table.get("foo"), 2);
        assert_eq!(table.get("Bar"), 1);
        assert_eq!(table.get("baz"), 1);
    }

    #[test]
    fn repeated_component_in_one_name_counts_per_occurrence() {
        let table = accumulate(&[repo(&["foo_foo"])]);
        assert_eq!(table.get("foo"), 2);
    }

    #[test]
    fn acronym_tokens_survive_whole() {
        let table = accumulate(&[repo(&["SQLLite"])]);
        assert_eq!(table.get("SQLLite"), 1);
        assert_eq!(table.get("SQL"), 0);
    }

    #[test]
    fn non_ascii_characters_are_stripped() {
        let mut table = FrequencyTable::new();
        table.add_component("caf\u{e9}", 1, 30);
        assert_eq!(table.get("caf"), 1);
    }

    #[test]
    fn out_of_bounds_components_are_dropped() {
        let mut table = FrequencyTable::new();
        table.add_component("", 1, 30);
        table.add_component(&"x".repeat(31), 1, 30);
        assert!(table.is_empty());
    }

    #[test]
    fn merge_totals_match_direct_accumulation() {
        let config = ExtractorConfig::default();
        let first = repo(&["fooBar", "parse_tree"]);
        let second = repo(&["foo_baz", "tree_walker"]);

        let mut left = FrequencyTable::new();
        left.accumulate_repo(&first, SplitterPolicy::Safe, &config);
        let mut right = FrequencyTable::new();
        right.accumulate_repo(&second, SplitterPolicy::Safe, &config);
        left.merge(right);

        let direct = accumulate(&[repo(&["fooBar", "parse_tree"]), repo(&["foo_baz", "tree_walker"])]);
        for (component, count) in direct.entries() {
            assert_eq!(left.get(component), count, "component {component}");
        }
        assert_eq!(left.len(), direct.len());
    }

    #[test]
    fn entries_sort_by_descending_count_stable() {
        let table = accumulate(&[repo(&["foo_bar", "foo_baz"])]);
        let entries = table.entries();
        assert_eq!(entries[0], ("foo", 2));
        // Ties keep first-seen order.
        assert_eq!(entries[1], ("bar", 1));
        assert_eq!(entries[2], ("baz", 1));
    }
}
