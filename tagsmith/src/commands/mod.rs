mod check;
mod generate;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use tagsmith_codegen::{Generator, GroupedModel, RenderOptions, builder::Indent};
use tagsmith_manifest::{IndentSetting, TagsmithToml};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tagsmith_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tagsmith")]
#[command(version)]
#[command(about = "Generate typed accessibility identifier constants from tagsmith.toml")]
pub(crate) struct Cli {
    /// Log generator internals (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the identifier module from tagsmith.toml
    Generate(GenerateCommand),

    /// Validate tagsmith.toml without generating code
    Check(CheckCommand),
}

/// Open the manifest and build a generator from it.
fn load(config: &Path) -> (TagsmithToml, Generator) {
    let tagsmith_toml = TagsmithToml::open(config).unwrap_or_exit();
    let manifest = tagsmith_toml.manifest();
    tracing::debug!(
        path = %tagsmith_toml.path().display(),
        identifiers = manifest.identifiers.len(),
        "loaded manifest"
    );

    let options = RenderOptions {
        module_name: manifest.output.module.clone(),
        indent: match manifest.output.indent {
            IndentSetting::Spaces(width) => Indent::Spaces(width),
            IndentSetting::Tab => Indent::Tab,
        },
    };
    let generator = Generator::with_options(manifest.records(), options);
    (tagsmith_toml, generator)
}

/// Print a warning for every name collision and return how many there were.
///
/// Colliding names are still generated; the output will not compile.
fn warn_collisions(model: &GroupedModel) -> usize {
    let duplicates = model.duplicate_names();
    for duplicate in &duplicates {
        eprintln!(
            "warning: {}::{} is declared {} times",
            duplicate.parent, duplicate.name, duplicate.count
        );
    }

    let type_collisions = model.type_name_collisions();
    for (type_name, parents) in &type_collisions {
        eprintln!(
            "warning: parents {} all generate type {}",
            parents.join(", "),
            type_name
        );
    }

    duplicates.len() + type_collisions.len()
}
