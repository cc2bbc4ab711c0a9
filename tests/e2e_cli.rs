//! End-to-end tests driving the `git-tessera` binary against scratch
//! git repositories with a scripted editor.

mod common;

use common::Workspace;
use predicates::prelude::*;

fn init(ws: &Workspace) {
    ws.cmd().arg("init").assert().success();
    ws.set_editor("true");
}

#[test]
fn init_creates_root_and_commits() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Initialized empty tesserae repository",
        ));

    assert!(ws.path().join(".tesserae").join("config").is_file());
    assert!(ws.git_log().contains("tessera repository initialized"));
}

#[test]
fn init_outside_git_repository_fails() {
    let ws = Workspace::bare_dir();
    ws.cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: not a git repository"));
}

#[test]
fn init_twice_fails() {
    let ws = Workspace::new();
    init(&ws);
    ws.cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn create_before_init_fails() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["create", "too early"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a tesserae repository"));
}

#[test]
fn create_then_show_renders_title_line() {
    let ws = Workspace::new();
    init(&ws);

    ws.cmd()
        .args(["create", "Fix the widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created new tessera with id"));

    let ids = ws.tessera_ids();
    assert_eq!(ids.len(), 1);
    assert!(ws.git_log().contains("tessera created: Fix the widget"));

    ws.cmd()
        .args(["show", &ids[0]])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Fix the widget\n"));
}

#[test]
fn show_resolves_short_id_prefix() {
    let ws = Workspace::new();
    init(&ws);
    ws.cmd().args(["create", "Prefixed"]).assert().success();

    let id = &ws.tessera_ids()[0];
    let prefix = &id[..8];
    ws.cmd()
        .args(["show", prefix])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Prefixed\n"));
}

#[test]
fn show_unknown_id_fails() {
    let ws = Workspace::new();
    init(&ws);
    ws.cmd()
        .args(["show", "zzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot find tessera with id 'zzz'"));
}

#[test]
fn show_ambiguous_prefix_fails() {
    let ws = Workspace::new();
    init(&ws);
    ws.cmd().args(["create", "one"]).assert().success();
    ws.cmd().args(["create", "two"]).assert().success();

    // v7 uuids share the leading timestamp digits
    ws.cmd()
        .args(["show", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is ambiguous"));
}

#[test]
fn create_aborted_editor_rolls_back() {
    let ws = Workspace::new();
    init(&ws);
    ws.set_editor("false");

    ws.cmd()
        .args(["create", "never to be"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: edit aborted"));

    assert!(ws.tessera_ids().is_empty());
    assert!(!ws.git_log().contains("tessera created"));
}

#[test]
fn ls_empty_collection_prints_notice() {
    let ws = Workspace::new();
    init(&ws);
    ws.cmd()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tesserae found."));
}

#[test]
fn ls_renders_table_with_header_and_rule() {
    let ws = Workspace::new();
    init(&ws);
    ws.cmd().args(["create", "Tabled"]).assert().success();

    let assert = ws.cmd().arg("ls").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("Id"));
    assert!(lines[0].contains("Title"));
    assert!(lines[0].contains("Last updated"));
    assert!(lines[1].chars().all(|c| c == '='));
    assert!(lines[2].contains("Tabled"));
    // template defaults show up in the row
    assert!(lines[2].contains("open"));
    assert!(lines[2].contains("task"));
}

#[test]
fn ls_orders_priority_numerically() {
    let ws = Workspace::new();
    init(&ws);
    for title in ["p2", "p10", "p1"] {
        ws.cmd().args(["create", title]).assert().success();
    }
    let ids = ws.tessera_ids();
    ws.write_body(&ids[0], "# p2\n@priority 2\n");
    ws.write_body(&ids[1], "# p10\n@priority 10\n");
    ws.write_body(&ids[2], "# p1\n@priority 1\n");

    let assert = ws.cmd().args(["ls", "--order-by", "priority"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let titles: Vec<&str> = stdout
        .lines()
        .skip(2)
        .filter_map(|l| l.split_whitespace().nth(1))
        .collect();
    assert_eq!(titles, ["p1", "p2", "p10"]);
}

#[test]
fn ls_filters_by_type() {
    let ws = Workspace::new();
    init(&ws);
    for title in ["a bug", "a feature"] {
        ws.cmd().args(["create", title]).assert().success();
    }
    let ids = ws.tessera_ids();
    ws.write_body(&ids[0], "# a bug\n@type bug\n");
    ws.write_body(&ids[1], "# a feature\n@type feature\n");

    let assert = ws
        .cmd()
        .args(["ls", "--filter-types", "bug"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains("a bug"));
    assert!(!stdout.contains("a feature"));
}

#[test]
fn ls_unknown_order_column_fails() {
    let ws = Workspace::new();
    init(&ws);
    ws.cmd()
        .args(["ls", "--order-by", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot order by 'bogus'"));
}

#[test]
fn ls_fails_on_unknown_keyword_in_body() {
    let ws = Workspace::new();
    init(&ws);
    ws.cmd().args(["create", "poisoned"]).assert().success();
    let ids = ws.tessera_ids();
    ws.write_body(&ids[0], "# poisoned\n@bogus x\n");

    ws.cmd()
        .arg("ls")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tessera keyword 'bogus'"));
}

#[test]
fn edit_commits_refreshed_metadata() {
    let ws = Workspace::new();
    init(&ws);
    ws.cmd().args(["create", "editable"]).assert().success();
    let id = ws.tessera_ids()[0].clone();

    ws.set_appending_editor("more detail");
    ws.cmd()
        .args(["edit", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated tessera"));

    assert!(ws.git_log().contains("tessera updated: editable"));
    ws.cmd()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("more detail"));
}

#[test]
fn edit_aborted_editor_commits_nothing() {
    let ws = Workspace::new();
    init(&ws);
    ws.cmd().args(["create", "stable"]).assert().success();
    let id = ws.tessera_ids()[0].clone();

    ws.set_editor("false");
    ws.cmd()
        .args(["edit", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: edit aborted"));

    assert!(!ws.git_log().contains("tessera updated"));
}

#[test]
fn rm_deletes_directory_and_commits() {
    let ws = Workspace::new();
    init(&ws);
    ws.cmd().args(["create", "doomed"]).assert().success();
    let id = ws.tessera_ids()[0].clone();

    ws.cmd()
        .args(["rm", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Removed tessera with id '{id}'"
        )));

    assert!(ws.tessera_ids().is_empty());
    assert!(ws.git_log().contains("tessera removed: doomed"));
}

#[test]
fn version_prints_crate_version() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
