use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::{load, warn_collisions};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to tagsmith.toml (defaults to ./tagsmith.toml)
    #[arg(short, long, default_value = "tagsmith.toml")]
    pub config: PathBuf,

    /// Output file (overrides [output].path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (tagsmith_toml, generator) = load(&self.config);

        if self.dry_run {
            print!("{}", generator.render());
            return Ok(());
        }

        let destination = self
            .output
            .clone()
            .unwrap_or_else(|| tagsmith_toml.output_path());
        generator
            .generate(&destination)
            .wrap_err_with(|| format!("Failed to write {}", destination.display()))?;

        let model = generator.model();
        println!(
            "Generated {} identifiers in {} groups",
            model.len(),
            model.group_count()
        );
        println!("  -> {}", destination.display());
        warn_collisions(model);

        Ok(())
    }
}
