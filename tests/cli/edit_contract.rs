use crate::harness::{TestContext, png_bytes};
use predicates::prelude::*;
use std::fs;

#[test]
fn mock_edit_exports_result() {
    let ctx = TestContext::new();
    let image = ctx.write_png("photo.png", 7);

    ctx.cli()
        .args(["edit", image.to_str().unwrap(), "-t", "stylize_artistic", "-p", "style=Vaporwave"])
        .args(["-o", "out", "--mock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MOCK MODE"))
        .stdout(predicate::str::contains("vaporwave art style"))
        .stdout(predicate::str::contains("Exported"));

    let exported = ctx.exported_files("out");
    assert_eq!(exported.len(), 1);
    assert!(exported[0].extension().is_some_and(|e| e == "png"));
    assert_eq!(fs::read(&exported[0]).unwrap(), png_bytes(7));
    assert!(ctx.library_blob().is_none());
}

#[test]
fn mock_edit_can_save_to_library() {
    let ctx = TestContext::new();
    let image = ctx.write_png("photo.png", 3);

    ctx.cli()
        .args(["e", image.to_str().unwrap(), "-t", "custom_edit", "-o", "out", "--mock"])
        .args(["--save", "draft"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to library as draft"));

    let blob = ctx.library_blob().unwrap();
    let items: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["type"], "draft");
    assert!(items[0]["imageData"].as_str().unwrap().starts_with("data:image/png;base64,"));
    assert!(items[0]["timestamp"].as_i64().unwrap() > 0);
}

#[test]
fn missing_api_key_is_reported_without_export() {
    let ctx = TestContext::new();
    ctx.write_config(
        "[gemini]\napi_url = \"http://127.0.0.1:9\"\napi_key_env = \"IMAGELAB_TEST_UNSET_KEY\"\n",
    );
    let image = ctx.write_png("photo.png", 1);

    ctx.cli()
        .env_remove("IMAGELAB_TEST_UNSET_KEY")
        .args(["edit", image.to_str().unwrap(), "-t", "custom_edit", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Set the IMAGELAB_TEST_UNSET_KEY environment variable"));

    assert!(ctx.exported_files("out").is_empty());
}

#[test]
fn unsupported_upload_is_rejected() {
    let ctx = TestContext::new();
    let path = ctx.work_dir().join("notes.txt");
    fs::write(&path, "hello").unwrap();

    ctx.cli()
        .args(["edit", path.to_str().unwrap(), "-t", "custom_edit", "--mock"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected PNG, JPEG, or WebP"));
}

#[test]
fn upload_limit_comes_from_config() {
    let ctx = TestContext::new();
    ctx.write_config("[upload]\nmax_bytes = 4\n");
    let image = ctx.write_png("photo.png", 1);

    ctx.cli()
        .args(["edit", image.to_str().unwrap(), "-t", "custom_edit", "--mock"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image too large"));
}

#[test]
fn explicit_config_must_exist() {
    let ctx = TestContext::new();
    let image = ctx.write_png("photo.png", 1);

    ctx.cli()
        .args(["--config", "missing.toml", "edit", image.to_str().unwrap(), "-t", "custom_edit"])
        .arg("--mock")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
