//! Configuration integration tests.
//!
//! Each test builds a throwaway repository (a temp dir holding `.git`, so
//! discovery stays inside it) with its own user config directory, then checks
//! through `info --json` or `analyze` that lexicon settings arrive from the
//! right source.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const KEYWORDS: &str = "cat=Animal\n";
/// cat, kitty, kitten, feline and their plurals.
const CAT_GROUP_SIZE: u64 = 8;
/// Built-in action and helping verbs.
const BUILTIN_VERBS: u64 = 50;

struct Repo {
    tmp: TempDir,
}

impl Repo {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::create_dir(tmp.path().join("xdg")).unwrap();
        Self { tmp }
    }

    fn root(&self) -> &Path {
        self.tmp.path()
    }

    fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// The binary, run from `rel` with colors off and an isolated user config.
    #[allow(deprecated)]
    fn cmd(&self, rel: &str) -> Command {
        let dir = self.root().join(rel);
        fs::create_dir_all(&dir).unwrap();
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        cmd.env("XDG_CONFIG_HOME", self.root().join("xdg"))
            .env_remove("PARLANCE_KEYWORDS_FILE")
            .env_remove("PARLANCE_EXTRA_VERBS")
            .args(["--color", "never", "-C", dir.to_str().unwrap()]);
        cmd
    }

    fn info(&self, rel: &str) -> Value {
        let output = self.cmd(rel).args(["info", "--json"]).output().unwrap();
        assert!(
            output.status.success(),
            "command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("invalid JSON output")
    }
}

fn str_field<'a>(json: &'a Value, section: &str, key: &str) -> &'a str {
    json[section][key].as_str().unwrap_or_default()
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn no_config_falls_back_to_keywords_in_cwd() {
    let repo = Repo::new();
    let json = repo.info(".");

    assert!(json["config"]["config_file"].is_null());
    assert!(str_field(&json, "lexicon", "keywords_file").ends_with("keywords.txt"));
    assert_eq!(json["lexicon"]["keyword_count"], 0);
    assert_eq!(json["lexicon"]["warnings"][0]["kind"], "source_unavailable");
}

#[test]
fn keywords_file_is_read_from_every_format() {
    for (name, body) in [
        (".parlance.toml", "keywords_file = \"words.txt\"\n"),
        (".parlance.yaml", "keywords_file: words.txt\n"),
        ("parlance.yml", "keywords_file: words.txt\n"),
        ("parlance.json", r#"{"keywords_file": "words.txt"}"#),
    ] {
        let repo = Repo::new();
        repo.write(name, body);
        repo.write("words.txt", KEYWORDS);

        let json = repo.info(".");
        assert!(
            str_field(&json, "config", "config_file").ends_with(name),
            "{name} not reported"
        );
        assert_eq!(json["lexicon"]["keyword_count"], CAT_GROUP_SIZE, "{name}");
    }
}

#[test]
fn keywords_file_resolves_next_to_config() {
    let repo = Repo::new();
    repo.write(".parlance.toml", "keywords_file = \"data/words.txt\"\n");
    repo.write("data/words.txt", "bird=Animal\n");

    let json = repo.info("work/deep");
    assert!(str_field(&json, "lexicon", "keywords_file").ends_with("data/words.txt"));
    // bird, birdie, fowl, avian and their plurals
    assert_eq!(json["lexicon"]["keyword_count"], 8);
}

#[test]
fn repository_root_stops_search() {
    let repo = Repo::new();
    repo.write(".parlance.toml", "extra_verbs = [\"adore\"]\n");
    fs::create_dir_all(repo.root().join("vendor/lib/.git")).unwrap();

    let json = repo.info("vendor/lib/src");
    assert!(json["config"]["config_file"].is_null());
    assert_eq!(json["lexicon"]["verbs"], BUILTIN_VERBS);
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn regular_file_overrides_dotfile_key_by_key() {
    let repo = Repo::new();
    repo.write(
        ".parlance.toml",
        "keywords_file = \"dot.txt\"\nextra_verbs = [\"adore\"]\n",
    );
    repo.write("parlance.json", r#"{"keywords_file": "regular.txt"}"#);
    repo.write("regular.txt", KEYWORDS);

    let json = repo.info(".");
    assert!(str_field(&json, "lexicon", "keywords_file").ends_with("regular.txt"));
    assert_eq!(json["lexicon"]["keyword_count"], CAT_GROUP_SIZE);
    assert_eq!(json["lexicon"]["verbs"], BUILTIN_VERBS + 1);
}

#[test]
fn closer_directory_shadows_parent() {
    let repo = Repo::new();
    repo.write(".parlance.toml", "[aliases]\nhorse = [\"pony\"]\n");
    repo.write("app/.parlance.yaml", "keywords_file: local.txt\n");
    repo.write("app/local.txt", KEYWORDS);

    let json = repo.info("app");
    assert_eq!(json["lexicon"]["alias_groups"], 3, "parent aliases not merged");
    assert_eq!(json["lexicon"]["keyword_count"], CAT_GROUP_SIZE);
}

#[test]
fn explicit_config_overrides_project() {
    let repo = Repo::new();
    repo.write(".parlance.toml", "keywords_file = \"project.txt\"\n");
    repo.write("alt/settings.yaml", "keywords_file: words.txt\n");
    repo.write("alt/words.txt", KEYWORDS);

    let output = repo
        .cmd(".")
        .args(["--config", "alt/settings.yaml", "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(str_field(&json, "config", "config_file").ends_with("settings.yaml"));
    assert!(str_field(&json, "lexicon", "keywords_file").ends_with("alt/words.txt"));
    assert_eq!(json["lexicon"]["keyword_count"], CAT_GROUP_SIZE);
}

#[test]
fn user_config_sits_under_project_config() {
    let repo = Repo::new();
    repo.write(
        "xdg/parlance/config.toml",
        "extra_verbs = [\"adore\"]\nkeywords_file = \"/nonexistent/user.txt\"\n",
    );
    repo.write(".parlance.toml", "keywords_file = \"words.txt\"\n");
    repo.write("words.txt", KEYWORDS);

    let json = repo.info(".");
    assert!(str_field(&json, "config", "config_file").ends_with(".parlance.toml"));
    assert_eq!(json["lexicon"]["keyword_count"], CAT_GROUP_SIZE);

    repo.cmd(".")
        .args(["analyze", "she adore kittens"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Declarative sentence identified."))
        .stdout(predicate::str::contains("kittens (Animal)"));
}

#[test]
fn env_var_overrides_every_file() {
    let repo = Repo::new();
    repo.write(".parlance.toml", "keywords_file = \"from-file.txt\"\n");
    repo.write("from-env.txt", "dog=Animal\n");

    let output = repo
        .cmd(".")
        .env("PARLANCE_KEYWORDS_FILE", "from-env.txt")
        .args(["lookup", "puppies", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["keyword"], "Animal");
}

// =============================================================================
// Lexicon and input settings
// =============================================================================

#[test]
fn config_aliases_extend_lexicon() {
    let repo = Repo::new();
    repo.write(".parlance.yml", "aliases:\n  horse: [pony, stallion]\n");
    repo.write("keywords.txt", "horse=Animal\n");

    assert_eq!(repo.info(".")["lexicon"]["alias_groups"], 4);
    repo.cmd(".")
        .args(["lookup", "pony"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword: Animal"))
        .stdout(predicate::str::contains("Alias of: horse"));
}

#[test]
fn malformed_keyword_lines_are_reported() {
    let repo = Repo::new();
    repo.write("keywords.txt", "# comment\ncat=Animal\nno separator\na=b=c\n");

    let json = repo.info(".");
    let warnings = json["lexicon"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|w| w["kind"] == "malformed_line"));
    assert_eq!(json["lexicon"]["keyword_count"], CAT_GROUP_SIZE);
}

#[test]
fn input_limit_from_config() {
    let repo = Repo::new();
    repo.write(".parlance.toml", "max_input_bytes = 8\n");
    repo.write("input.txt", "he like cats\n");

    assert_eq!(repo.info(".")["config"]["max_input_bytes"], 8);
    repo.cmd(".")
        .args(["analyze", "--file", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));

    repo.write(".parlance.toml", "max_input_bytes = 8\ndisable_input_limit = true\n");
    assert!(repo.info(".")["config"]["max_input_bytes"].is_null());
    repo.cmd(".")
        .args(["analyze", "--file", "input.txt"])
        .assert()
        .success();
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn unparsable_config_fails_in_every_format() {
    for (name, body) in [
        (".parlance.toml", "keywords_file = [[["),
        (".parlance.yaml", "aliases:\n  horse: [pony\n"),
        (".parlance.json", "{not json}"),
    ] {
        let repo = Repo::new();
        repo.write(name, body);
        repo.cmd(".")
            .arg("info")
            .assert()
            .failure()
            .stderr(predicate::str::contains("configuration"));
    }
}

#[test]
fn wrong_field_type_fails() {
    let repo = Repo::new();
    repo.write(".parlance.toml", "extra_verbs = 3\n");
    repo.cmd(".")
        .args(["analyze", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn unknown_fields_are_ignored() {
    let repo = Repo::new();
    repo.write(".parlance.toml", "extra_verbs = [\"adore\"]\ntheme = \"dark\"\n");
    assert_eq!(repo.info(".")["lexicon"]["verbs"], BUILTIN_VERBS + 1);
}
