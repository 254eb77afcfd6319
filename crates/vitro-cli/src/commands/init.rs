//! Initialize a new Vitro research folder.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing Vitro research folder...", "→".blue());

    let config = Config::default();

    // Search folders, in scan order
    for dir in &config.research.search_dirs {
        let dir_path = base_path.join(dir);
        std::fs::create_dir_all(&dir_path)
            .with_context(|| format!("Failed to create {}", dir_path.display()))?;
        println!("  {} Created {}", "✓".green(), dir_path.display());
    }

    let knowledge_dir = base_path.join(&config.knowledge.dir);
    std::fs::create_dir_all(&knowledge_dir)
        .with_context(|| format!("Failed to create {}", knowledge_dir.display()))?;
    println!("  {} Created {}", "✓".green(), knowledge_dir.display());

    let config_path = base_path.join(CONFIG_FILE);
    if !config_path.exists() {
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    println!();
    println!("{} Vitro research folder initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} add markdown notes under 01-Analysis, 02-Literature or 03-Vault", "1.".blue());
    println!("  {} vitro analyze \"organoid\"", "2.".blue());
    println!("  {} vitro debate \"progesterone resistance\"", "3.".blue());

    Ok(())
}
