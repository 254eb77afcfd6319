//! Show index and knowledge statistics.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use vitro::cartridge::SnapshotStatus;
use vitro::llm::MockBackend;
use vitro::research::ResearchEngine;

use crate::config::Config;
use crate::setup::{build_index, open_knowledge};

pub fn run(as_json: bool) -> Result<()> {
    let config = Config::load()?;
    let knowledge = open_knowledge(&config)?;
    let index = build_index(&knowledge);
    // stats never reasons, so no configured backend is needed
    let engine = ResearchEngine::new(index, MockBackend::new()).with_config(config.research.clone());
    let status = engine.get_stats();

    if as_json {
        let out = json!({
            "index": status,
            "snapshot": knowledge.snapshot_status(),
            "search_dirs": config
                .research
                .search_paths()
                .into_iter()
                .map(|(name, path)| json!({ "name": name, "present": path.is_dir() }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", "Vitro Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Vector Index".blue().bold());
    println!("  Backend:           {}", status.backend.cyan());
    println!("  Documents:         {}", status.documents.to_string().cyan());
    println!("  Dimension:         {}", status.dimension);
    println!(
        "  Ready:             {}",
        if status.ready { "yes".green() } else { "no".red() }
    );
    println!();

    println!("{}", "Knowledge Snapshot".blue().bold());
    match knowledge.snapshot_status() {
        SnapshotStatus::Missing => println!("  {} no snapshot", "•".yellow()),
        SnapshotStatus::Loaded { entries } => {
            println!("  {} {} keys loaded", "✓".green(), entries.to_string().cyan())
        }
        SnapshotStatus::Corrupt { reason } => {
            println!("  {} unreadable: {}", "✗".red(), reason)
        }
    }
    println!();

    println!("{}", "Research Folders".blue().bold());
    for (name, path) in config.research.search_paths() {
        let mark = if path.is_dir() { "✓".green() } else { "✗".red() };
        println!("  {} {}", mark, name);
    }

    println!();
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
