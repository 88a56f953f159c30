use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prints_instruction_with_defaults() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["prompt", "bg_beach_tropical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vibe: calm and relaxing."))
        .stdout(predicate::str::contains("${").not());
}

#[test]
fn applies_parameter_overrides() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["p", "background_change_marketing", "-p", "color=#000000", "--param", "opacity=0.8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("replace it with hex color #000000"))
        .stdout(predicate::str::contains("with 0.8 opacity"));
}

#[test]
fn rejects_invalid_color() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["prompt", "makeup_filter_social", "-p", "lip_tint=red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lip_tint"));
}

#[test]
fn rejects_malformed_assignment() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["prompt", "custom_edit", "-p", "custom_instruction"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected id=value"));
}
