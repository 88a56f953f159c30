//! CLI Adapter.

mod library;
mod session;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::api::{self, EditOptions};
use crate::domain::{AppError, ItemKind, ParamKind, Template};

#[derive(Parser)]
#[command(name = "imagelab")]
#[command(version)]
#[command(about = "Template-driven image editing with a generative model", long_about = None)]
struct Cli {
    /// Config file (defaults to .imagelab/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List edit templates
    #[clap(visible_alias = "ls")]
    Templates {
        /// Only the quick-start background scenes
        #[arg(long)]
        scenes: bool,
    },
    /// Show a template's parameters and pattern
    #[clap(visible_alias = "d")]
    Describe {
        /// Template id
        template: String,
    },
    /// Print the compiled instruction without generating
    #[clap(visible_alias = "p")]
    Prompt {
        /// Template id
        template: String,
        /// Parameter override as id=value (repeatable)
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
    },
    /// Generate, apply and export a single edit
    #[clap(visible_alias = "e")]
    Edit {
        /// Input image (PNG, JPEG or WebP)
        image: PathBuf,
        /// Template id
        #[arg(short = 't', long)]
        template: String,
        /// Parameter override as id=value (repeatable)
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
        /// Output directory
        #[arg(short = 'o', long, default_value = ".")]
        output: PathBuf,
        /// Also save the result to the library (draft or saved)
        #[arg(long)]
        save: Option<ItemKind>,
        /// Return the input image instead of calling the model
        #[arg(long)]
        mock: bool,
    },
    /// Interactive editing session
    #[clap(visible_alias = "s")]
    Session {
        /// Image to start from
        image: Option<PathBuf>,
        /// Library item to start from
        #[arg(long, conflicts_with = "image")]
        item: Option<String>,
        /// Return the input image instead of calling the model
        #[arg(long)]
        mock: bool,
    },
    /// Manage saved and draft images
    #[clap(visible_alias = "lib")]
    Library {
        #[command(subcommand)]
        command: library::LibraryCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Templates { scenes } => {
            run_templates(scenes);
            Ok(())
        }
        Commands::Describe { template } => run_describe(&template),
        Commands::Prompt { template, params } => run_prompt(&template, &params),
        Commands::Edit { image, template, params, output, save, mock } => {
            let options = EditOptions { image, template, params, output_dir: output, save };
            run_edit(&options, config, mock)
        }
        Commands::Session { image, item, mock } => {
            session::run_session(image.as_deref(), item.as_deref(), config, mock)
        }
        Commands::Library { command } => library::run_library(command, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_templates(scenes: bool) {
    for template in api::list_templates(scenes) {
        println!(
            "{} {:<28} {} - {}",
            template.icon.glyph(),
            template.id,
            template.name,
            template.description
        );
    }
}

fn run_describe(id: &str) -> Result<(), AppError> {
    let template = api::describe_template(id)?;
    print_template(template);
    Ok(())
}

fn print_template(template: &Template) {
    println!("{} {} ({})", template.icon.glyph(), template.name, template.id);
    println!("{}", template.description);
    println!();
    println!("Parameters:");
    for def in template.params {
        println!("  {} [{}] {}: default {}", def.id, def.kind.name(), def.label, def.default_value());
        match def.kind {
            ParamKind::Range { min, max, step, .. } => {
                println!("      range {}..={} step {}", min, max, step);
            }
            ParamKind::Choice { options, .. } => {
                for option in options {
                    println!("      - {} ({})", option.value, option.label);
                }
            }
            _ => {}
        }
    }
    println!();
    println!("Pattern:");
    println!("  {}", template.pattern);
}

fn run_prompt(template: &str, params: &[String]) -> Result<(), AppError> {
    let instruction = api::compile_prompt(template, params)?;
    println!("{}", instruction);
    Ok(())
}

fn run_edit(options: &EditOptions, config: Option<&Path>, mock: bool) -> Result<(), AppError> {
    let outcome = api::edit(options, config, mock)?;
    println!("✅ Exported {}", outcome.exported.display());
    if let (Some(id), Some(kind)) = (&outcome.saved_id, options.save) {
        println!("✅ Saved to library as {} ({})", kind, id);
    }
    Ok(())
}
