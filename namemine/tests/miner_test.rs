//! End-to-end tests for the mining pipeline.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use namemine::config::Config;
use namemine::{NameMiner, SplitterPolicy};
use tempfile::tempdir;

fn write_file(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    write!(file, "{content}").unwrap();
    path
}

#[test]
fn test_two_repo_frequency_table() {
    let first = tempdir().unwrap();
    write_file(
        first.path(),
        "app.py",
        "def fooBar():\n    return None\n",
    );
    let second = tempdir().unwrap();
    write_file(second.path(), "lib.py", "foo_baz = compute_value()\n");

    let miner = NameMiner::new(Config::default());
    let table = miner.run(&[first.path().to_path_buf(), second.path().to_path_buf()]);

    assert_eq!(table.get("foo"), 2);
    assert_eq!(table.get("Bar"), 1);
    assert_eq!(table.get("baz"), 1);
    assert_eq!(table.get("compute"), 1);
    assert_eq!(table.get("value"), 1);
}

#[test]
fn test_scope_qualification_dedupes_per_scope() {
    let repo = tempdir().unwrap();
    write_file(
        repo.path(),
        "module.py",
        r#"
class Reader:
    def load(self, path):
        buffer_size = 4096
        return path

class Writer:
    def store(self, path):
        buffer_size = 8192
        return path
"#,
    );

    let miner = NameMiner::new(Config::default());
    let elements = miner
        .process_file(&repo.path().join("module.py"))
        .unwrap();

    // Same leaf in two scopes: two occurrences after scope stripping.
    assert!(elements
        .variables
        .iter()
        .any(|(name, count)| name == "buffer_size" && *count == 2));
    let functions: Vec<&str> = elements
        .functions
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert!(functions.contains(&"Reader.load"));
    assert!(functions.contains(&"Writer.store"));
}

#[test]
fn test_acronym_names_stay_whole_under_safe_policy() {
    let repo = tempdir().unwrap();
    write_file(repo.path(), "db.py", "class SQLLiteBackend:\n    pass\n");

    let miner = NameMiner::new(Config::default());
    let table = miner.run(&[repo.path().to_path_buf()]);

    assert_eq!(table.get("SQLLiteBackend"), 1);
    assert_eq!(table.get("SQL"), 0);
    assert_eq!(table.get("Backend"), 0);
}

#[test]
fn test_unparseable_file_degrades_not_fails() {
    let repo = tempdir().unwrap();
    write_file(
        repo.path(),
        "broken.py",
        "# Synchronizes ledger entries nightly.\ndef broken(:\n",
    );
    write_file(repo.path(), "fine.py", "def tally_ledger():\n    pass\n");

    let miner = NameMiner::new(Config::default());
    let names = miner.mine_repo(repo.path());

    // The broken file contributes nothing to identifiers, but the repo
    // still yields the parseable file's names.
    assert!(names.names().contains(&"tally_ledger".to_owned()));

    let elements = miner.process_file(&repo.path().join("broken.py")).unwrap();
    assert!(!elements.parsed);
    assert_eq!(
        elements.header.as_deref(),
        Some("Synchronizes ledger entries nightly.")
    );
}

#[test]
fn test_repeated_runs_produce_identical_tables() {
    let first = tempdir().unwrap();
    write_file(
        first.path(),
        "a.py",
        "def parse_tree():\n    node_count = 0\n",
    );
    let second = tempdir().unwrap();
    write_file(
        second.path(),
        "b.py",
        "def walk_tree():\n    node_count = 0\n",
    );
    let repos = [first.path().to_path_buf(), second.path().to_path_buf()];

    let miner = NameMiner::new(Config::default());
    let once = miner.run(&repos);
    let twice = miner.run(&repos);

    let left: Vec<(String, u64)> = once
        .entries()
        .iter()
        .map(|(c, n)| ((*c).to_owned(), *n))
        .collect();
    let right: Vec<(String, u64)> = twice
        .entries()
        .iter()
        .map(|(c, n)| ((*c).to_owned(), *n))
        .collect();
    assert_eq!(left, right);
    assert_eq!(once.get("tree"), 2);
}

#[test]
fn test_config_file_controls_splitter() {
    let repo = tempdir().unwrap();
    write_file(repo.path(), "app.py", "def parseHTMLPage():\n    pass\n");
    fs::write(
        repo.path().join(".namemine.toml"),
        "[namemine]\nsplitter = \"simple\"\n",
    )
    .unwrap();

    let config = Config::load_from_path(repo.path());
    assert_eq!(config.namemine.splitter(), SplitterPolicy::Simple);

    let miner = NameMiner::new(config);
    let table = miner.run(&[repo.path().to_path_buf()]);
    assert_eq!(table.get("parse"), 1);
    assert_eq!(table.get("HTMLPage"), 1);
}

#[test]
fn test_excluded_folders_are_not_mined() {
    let repo = tempdir().unwrap();
    let vendored = repo.path().join("vendored");
    fs::create_dir_all(&vendored).unwrap();
    write_file(&vendored, "third_party.py", "def vendored_helper():\n    pass\n");
    write_file(repo.path(), "ours.py", "def local_helper():\n    pass\n");

    let miner =
        NameMiner::new(Config::default()).with_excludes(vec!["vendored".to_owned()]);
    let names = miner.mine_repo(repo.path());

    assert!(names.names().contains(&"local_helper".to_owned()));
    assert!(!names.names().contains(&"vendored_helper".to_owned()));
}

#[test]
fn test_strings_and_comments_stay_out_of_the_table() {
    let repo = tempdir().unwrap();
    write_file(
        repo.path(),
        "app.py",
        "# Rebuilds the projection cache.\nmessage = 'projection cache rebuilt'\n",
    );

    let miner = NameMiner::new(Config::default());
    let table = miner.run(&[repo.path().to_path_buf()]);

    // Only identifier categories feed the frequency table.
    assert_eq!(table.get("message"), 1);
    assert_eq!(table.get("projection"), 0);
    assert_eq!(table.get("rebuilt"), 0);

    let elements = miner.process_file(&repo.path().join("app.py")).unwrap();
    assert!(elements
        .comments
        .iter()
        .any(|text| text == "Rebuilds the projection cache."));
    assert!(elements
        .strings
        .iter()
        .any(|(text, _)| text == "projection cache rebuilt"));
}
