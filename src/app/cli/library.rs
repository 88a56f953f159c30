use std::path::{Path, PathBuf};

use chrono::DateTime;
use clap::Subcommand;

use crate::app::api;
use crate::domain::{AppError, ItemKind};

#[derive(Subcommand)]
pub enum LibraryCommands {
    /// List items, newest first
    #[clap(visible_alias = "ls")]
    List {
        /// Only draft or saved items
        #[arg(long)]
        kind: Option<ItemKind>,
    },
    /// Delete an item
    #[clap(visible_alias = "rm")]
    Delete {
        /// Item id
        id: String,
    },
    /// Write an item's image to disk
    Export {
        /// Item id
        id: String,
        /// Output directory
        #[arg(short = 'o', long, default_value = ".")]
        output: PathBuf,
    },
}

pub fn run_library(command: LibraryCommands, config: Option<&Path>) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    match command {
        LibraryCommands::List { kind } => {
            let items = api::library_list_at(&root, config, kind)?;
            if items.is_empty() {
                println!("Library is empty");
            }
            for item in items {
                let created = DateTime::from_timestamp_millis(item.timestamp)
                    .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| item.timestamp.to_string());
                println!(
                    "{}  {:<5}  {}  {} ({} bytes)",
                    item.id,
                    item.kind.as_str(),
                    created,
                    item.image.mime_type(),
                    item.image.len()
                );
            }
        }
        LibraryCommands::Delete { id } => {
            api::library_delete_at(&root, config, &id)?;
            println!("✅ Deleted {}", id);
        }
        LibraryCommands::Export { id, output } => {
            let path = api::library_export_at(&root, config, &id, &output)?;
            println!("✅ Exported {}", path.display());
        }
    }
    Ok(())
}
