//! Library listing, deletion, export and reopening.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, EditSession, ItemKind, LibraryItem};
use crate::ports::{BlobStore, ImageGenerator};
use crate::services::export_image;

/// Items newest first, optionally filtered by kind.
pub fn list<G, S>(ctx: &AppContext<G, S>, kind: Option<ItemKind>) -> Vec<&LibraryItem>
where
    G: ImageGenerator,
    S: BlobStore,
{
    match kind {
        Some(kind) => ctx.library().of_kind(kind).collect(),
        None => ctx.library().items().iter().collect(),
    }
}

pub fn delete<G, S>(ctx: &mut AppContext<G, S>, id: &str) -> Result<(), AppError>
where
    G: ImageGenerator,
    S: BlobStore,
{
    if ctx.library_mut().remove(id) {
        Ok(())
    } else {
        Err(AppError::LibraryItemNotFound(id.to_string()))
    }
}

/// Write the item's image into `dir`.
pub fn export<G, S>(ctx: &AppContext<G, S>, id: &str, dir: &Path) -> Result<PathBuf, AppError>
where
    G: ImageGenerator,
    S: BlobStore,
{
    let item = find(ctx, id)?;
    export_image(&item.image, dir)
}

/// Start a new history in `session` rooted at the item's image.
pub fn open_in_session<G, S>(
    ctx: &AppContext<G, S>,
    id: &str,
    session: &mut EditSession,
) -> Result<(), AppError>
where
    G: ImageGenerator,
    S: BlobStore,
{
    let item = find(ctx, id)?;
    session.load_image(item.image.clone());
    Ok(())
}

fn find<'a, G, S>(ctx: &'a AppContext<G, S>, id: &str) -> Result<&'a LibraryItem, AppError>
where
    G: ImageGenerator,
    S: BlobStore,
{
    ctx.library().get(id).ok_or_else(|| AppError::LibraryItemNotFound(id.to_string()))
}
