use crate::harness::{TestContext, png_bytes};
use predicates::prelude::*;
use std::fs;

#[test]
fn empty_library_lists_nothing() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["library", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Library is empty"));
}

#[test]
fn list_filters_by_kind() {
    let ctx = TestContext::new();
    let draft = ctx.save_mock_edit("draft", 1);
    let saved = ctx.save_mock_edit("saved", 2);

    ctx.cli()
        .args(["lib", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&draft))
        .stdout(predicate::str::contains(&saved));

    ctx.cli()
        .args(["lib", "list", "--kind", "saved"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&saved))
        .stdout(predicate::str::contains(&draft).not());
}

#[test]
fn delete_removes_item_and_persists_empty_list() {
    let ctx = TestContext::new();
    let id = ctx.save_mock_edit("saved", 1);

    ctx.cli().args(["library", "delete", &id]).assert().success();

    assert_eq!(ctx.library_blob().as_deref(), Some("[]"));
    ctx.cli()
        .args(["library", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn export_writes_item_image() {
    let ctx = TestContext::new();
    let id = ctx.save_mock_edit("draft", 9);

    ctx.cli().args(["library", "export", &id, "-o", "exports"]).assert().success();

    let exported = ctx.exported_files("exports");
    assert_eq!(exported.len(), 1);
    assert_eq!(fs::read(&exported[0]).unwrap(), png_bytes(9));
}

#[test]
fn corrupt_library_is_treated_as_empty() {
    let ctx = TestContext::new();
    let dir = ctx.work_dir().join(".imagelab");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("imagelab.library.json"), "{not json").unwrap();

    ctx.cli()
        .args(["library", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Library is empty"));
}

#[test]
fn rejects_unknown_kind() {
    let ctx = TestContext::new();
    ctx.cli().args(["library", "list", "--kind", "archived"]).assert().failure();
}
