use crate::harness::png_bytes;
use imagelab::{
    AppError, EditOptions, EditSession, ItemKind, MockImageGenerator, ParamValue, SessionState,
    compile_prompt, edit_at, library_delete_at, library_export_at, library_list_at, open_context,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn public_api_edit_and_library_lifecycle_contract() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    let input = root.join("input.png");
    fs::write(&input, png_bytes(4)).unwrap();

    let options = EditOptions {
        image: input,
        template: "remove_object_fill".to_string(),
        params: vec!["object_desc=lamp post".to_string()],
        output_dir: root.join("out"),
        save: Some(ItemKind::Saved),
    };
    let outcome = edit_at(root.clone(), &options, None, true).expect("edit failed");
    assert!(outcome.instruction.as_str().starts_with("Remove the lamp post from the image."));
    assert!(outcome.exported.exists());
    let id = outcome.saved_id.expect("saved id");

    let items = library_list_at(&root, None, Some(ItemKind::Saved)).expect("list failed");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, id);
    assert!(library_list_at(&root, None, Some(ItemKind::Draft)).unwrap().is_empty());

    let exported = library_export_at(&root, None, &id, &root.join("exports")).expect("export failed");
    assert_eq!(fs::read(exported).unwrap(), png_bytes(4));

    library_delete_at(&root, None, &id).expect("delete failed");
    assert!(library_list_at(&root, None, None).unwrap().is_empty());
    assert!(matches!(
        library_delete_at(&root, None, &id),
        Err(AppError::LibraryItemNotFound(_))
    ));
}

#[test]
fn public_api_session_contract() {
    let temp = TempDir::new().unwrap();
    let ctx = open_context(temp.path(), None, true).expect("context");
    let image = imagelab::Image::from_bytes(png_bytes(1)).unwrap();

    let mut session = EditSession::new();
    session.load_image(image.clone());
    session.select_template("add_smiley_sticker").unwrap();
    session.set_parameter("scale", ParamValue::Number(30.0)).unwrap();

    assert!(session.generate(ctx.generator()));
    assert_eq!(session.state(), SessionState::PreviewPending);
    assert!(session.apply());
    assert_eq!(session.history().len(), 2);
    assert!(session.undo());
    assert_eq!(session.working_image(), Some(&image));

    assert!(session.generate(&MockImageGenerator));
    session.discard();
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn public_api_prompt_contract() {
    let instruction =
        compile_prompt("portrait_smile_retouch", &["smile_intensity=0.7".to_string()]).unwrap();
    assert_eq!(
        instruction.as_str(),
        "Detect the primary face. Apply a subtle smile with intensity 0.7 (0-1). Apply skin smoothing of 0.3 (0-1). STRICTLY preserve the person's identity and facial structure."
    );
    assert!(matches!(compile_prompt("nope", &[]), Err(AppError::TemplateNotFound(_))));
}
