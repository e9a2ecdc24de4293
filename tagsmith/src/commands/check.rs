use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{load, warn_collisions};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to tagsmith.toml (defaults to ./tagsmith.toml)
    #[arg(short, long, default_value = "tagsmith.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (tagsmith_toml, generator) = load(&self.config);
        let model = generator.model();
        let collisions = warn_collisions(model);

        println!(
            "{}: {} identifiers in {} groups",
            tagsmith_toml.path().display(),
            model.len(),
            model.group_count()
        );
        println!("Output: {}", tagsmith_toml.output_path().display());

        if collisions == 0 {
            println!("All good!");
        } else {
            println!("{} name collision(s)", collisions);
        }

        Ok(())
    }
}
