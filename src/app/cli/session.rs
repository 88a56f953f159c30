//! Interactive editing session.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::api::{self, LabContext};
use crate::app::commands::library;
use crate::domain::{
    AppError, EditSession, ItemKind, ParamDef, ParamKind, SessionState, TEMPLATES, scene_templates,
};
use crate::services::{export_image, load_image_file};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Generate,
    Apply,
    Discard,
    Undo,
    Redo,
    SceneTemplate,
    Template,
    Parameter,
    Export,
    SaveDraft,
    Save,
    OpenImage,
    OpenItem,
    Clear,
    Quit,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::Generate => "Generate",
            Action::Apply => "Apply preview",
            Action::Discard => "Discard preview",
            Action::Undo => "Undo",
            Action::Redo => "Redo",
            Action::SceneTemplate => "Quick scene",
            Action::Template => "Choose template",
            Action::Parameter => "Set parameter",
            Action::Export => "Export",
            Action::SaveDraft => "Save as draft",
            Action::Save => "Save to library",
            Action::OpenImage => "Open image file",
            Action::OpenItem => "Open library item",
            Action::Clear => "Clear session",
            Action::Quit => "Quit",
        }
    }
}

pub fn run_session(
    image: Option<&Path>,
    item: Option<&str>,
    config: Option<&Path>,
    mock: bool,
) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let mut ctx = api::open_context(&root, config, mock)?;
    let mut session = EditSession::new();

    if let Some(path) = image {
        session.load_image(load_image_file(path, ctx.config().upload.max_bytes)?);
    }
    if let Some(id) = item {
        library::open_in_session(&ctx, id, &mut session)?;
    }

    loop {
        print_status(&session);
        let actions = available_actions(&session);
        let labels: Vec<&str> = actions.iter().map(Action::label).collect();
        let selection = Select::new()
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::Interaction(format!("Failed to select action: {}", err)))?;

        let Some(index) = selection else {
            return Ok(());
        };
        match actions[index] {
            Action::Quit => return Ok(()),
            action => {
                if let Err(err) = perform(action, &mut ctx, &mut session) {
                    match err {
                        AppError::Interaction(_) => return Err(err),
                        other => println!("⚠️  {}", other),
                    }
                }
            }
        }
    }
}

fn available_actions(session: &EditSession) -> Vec<Action> {
    let mut actions = Vec::new();
    let state = session.state();
    if state != SessionState::Empty {
        actions.push(Action::Generate);
    }
    if state == SessionState::PreviewPending {
        actions.extend([Action::Apply, Action::Discard]);
    }
    if session.can_undo() {
        actions.push(Action::Undo);
    }
    if session.can_redo() {
        actions.push(Action::Redo);
    }
    actions.extend([Action::SceneTemplate, Action::Template, Action::Parameter]);
    if session.export_candidate().is_some() {
        actions.extend([Action::Export, Action::SaveDraft, Action::Save]);
    }
    actions.extend([Action::OpenImage, Action::OpenItem]);
    if state != SessionState::Empty {
        actions.push(Action::Clear);
    }
    actions.push(Action::Quit);
    actions
}

fn perform(action: Action, ctx: &mut LabContext, session: &mut EditSession) -> Result<(), AppError> {
    match action {
        Action::Generate => {
            println!("⏳ Generating with {}...", session.template().name);
            session.generate(ctx.generator());
            match session.error() {
                Some(error) => println!("⚠️  {}", error),
                None if session.pending_preview().is_some() => {
                    println!("✅ Preview ready: apply or discard it")
                }
                None => {}
            }
        }
        Action::Apply => {
            if session.apply() {
                println!("✅ Applied");
            }
        }
        Action::Discard => {
            session.discard();
        }
        Action::Undo => {
            session.undo();
        }
        Action::Redo => {
            session.redo();
        }
        Action::SceneTemplate => {
            let scenes: Vec<_> = scene_templates().collect();
            if let Some(template) = pick("Scene", &scenes, |t| format!("{} {}", t.icon.glyph(), t.name))? {
                session.select_template(template.id)?;
            }
        }
        Action::Template => {
            let all: Vec<_> = TEMPLATES.iter().collect();
            if let Some(template) = pick("Template", &all, |t| format!("{} {}", t.icon.glyph(), t.name))? {
                session.select_template(template.id)?;
            }
        }
        Action::Parameter => {
            let template = session.template();
            if template.params.is_empty() {
                println!("{} has no parameters", template.name);
                return Ok(());
            }
            let defs: Vec<&ParamDef> = template.params.iter().collect();
            let current = |def: &&ParamDef| {
                session.values().get(def.id).map(ToString::to_string).unwrap_or_default()
            };
            let Some(&def) = pick("Parameter", &defs, |d| format!("{}: {}", d.label, current(d)))?
            else {
                return Ok(());
            };
            let existing = current(&def);
            if let Some(raw) = prompt_value(def, &existing)? {
                let value = def
                    .parse_value(&raw)
                    .map_err(|reason| AppError::invalid_parameter(template.id, def.id, reason))?;
                session.set_parameter(def.id, value)?;
            }
        }
        Action::Export => {
            let image = session.export_candidate().ok_or(AppError::NoImage)?;
            let path = export_image(image, Path::new("."))?;
            println!("✅ Exported {}", path.display());
        }
        Action::SaveDraft | Action::Save => {
            let kind = if action == Action::Save { ItemKind::Saved } else { ItemKind::Draft };
            let image = session.export_candidate().ok_or(AppError::NoImage)?.clone();
            let item = ctx.library_mut().add(image, kind);
            println!("✅ Saved as {} ({})", kind, item.id);
        }
        Action::OpenImage => {
            let Some(raw) = prompt_text("Image path", None)? else {
                return Ok(());
            };
            let image = load_image_file(&PathBuf::from(raw.trim()), ctx.config().upload.max_bytes)?;
            session.load_image(image);
        }
        Action::OpenItem => {
            let items: Vec<_> = ctx.library().items().iter().collect();
            if items.is_empty() {
                println!("Library is empty");
                return Ok(());
            }
            let picked = pick("Library item", &items, |item| format!("{} [{}]", item.id, item.kind))?;
            if let Some(item) = picked {
                session.load_image(item.image.clone());
            }
        }
        Action::Clear => session.clear(),
        Action::Quit => {}
    }
    Ok(())
}

fn print_status(session: &EditSession) {
    let state = match session.state() {
        SessionState::Empty => "no image",
        SessionState::Ready => "ready",
        SessionState::Generating => "generating",
        SessionState::PreviewPending => "preview pending",
    };
    let history = session.history();
    let position = history.cursor().map(|c| format!("{}/{}", c + 1, history.len()));
    println!();
    println!(
        "{} {} | {} | history {}",
        session.template().icon.glyph(),
        session.template().name,
        state,
        position.as_deref().unwrap_or("-")
    );
}

fn pick<'a, T>(
    prompt: &str,
    items: &'a [T],
    render: impl Fn(&T) -> String,
) -> Result<Option<&'a T>, AppError> {
    let labels: Vec<String> = items.iter().map(render).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select {}: {}", prompt, err)))?;
    Ok(selection.map(|index| &items[index]))
}

fn prompt_value(def: &ParamDef, existing: &str) -> Result<Option<String>, AppError> {
    match def.kind {
        ParamKind::Choice { options, .. } => {
            let Some(option) = pick(def.label, options, |o| o.label.to_string())? else {
                return Ok(None);
            };
            Ok(Some(option.value.to_string()))
        }
        ParamKind::Range { min, max, .. } => {
            prompt_text(&format!("{} ({}..={})", def.label, min, max), Some(existing))
        }
        _ => prompt_text(def.label, Some(existing)),
    }
}

fn prompt_text(prompt: &str, initial: Option<&str>) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interaction(format!("Failed to read {}: {}", prompt, err))),
    }
}
