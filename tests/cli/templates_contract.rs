use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn lists_all_templates_in_display_order() {
    let ctx = TestContext::new();
    let output = ctx.cli().arg("templates").assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 12);
    assert!(lines[0].contains("bg_ship_luxury"));
    assert!(lines[5].contains("custom_edit"));
    assert!(lines[11].contains("add_smiley_sticker"));
}

#[test]
fn scenes_flag_lists_quick_start_subset() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["ls", "--scenes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bg_neon_city"))
        .stdout(predicate::str::contains("background_change_marketing"))
        .stdout(predicate::str::contains("custom_edit").not());
}

#[test]
fn describe_shows_parameters_and_pattern() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["describe", "add_smiley_sticker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scale [range]"))
        .stdout(predicate::str::contains("range 5..=50 step 5"))
        .stdout(predicate::str::contains("- top-left (Top Left)"))
        .stdout(predicate::str::contains("Pattern:"));
}

#[test]
fn describe_unknown_template_fails() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["d", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'nope' not found"));
}
