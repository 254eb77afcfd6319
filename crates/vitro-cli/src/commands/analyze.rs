//! Meta-analysis and debate over the research folders.

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;
use vitro::research::NO_RESULTS_MESSAGE;

use crate::config::Config;
use crate::setup::{build_engine, is_placeholder};

pub async fn run(topic: &str, debate: bool, as_json: bool) -> Result<()> {
    let config = Config::load()?;
    let engine = build_engine(&config)?;
    let placeholder = is_placeholder(engine.backend().as_ref());

    let mode = if debate { "debate" } else { "analysis" };
    if !as_json {
        println!(
            "{} Running {} on {}...",
            "→".blue(),
            mode,
            topic.cyan().bold()
        );
    }

    let answer = engine
        .analyze(topic, debate)
        .await
        .with_context(|| format!("{} failed for topic '{}'", mode, topic))?;

    if as_json {
        let out = json!({
            "topic": topic,
            "mode": mode,
            "found": answer != NO_RESULTS_MESSAGE,
            "placeholder": placeholder,
            "answer": answer,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    if answer == NO_RESULTS_MESSAGE {
        println!("{} {}", "•".yellow(), answer);
    } else {
        println!("{}", answer);
        println!();
        if placeholder {
            println!(
                "{}",
                "Placeholder answer from the mock backend. Set [reasoning] backend = \"ollama\" in vitro.toml."
                    .dimmed()
            );
        } else {
            println!("{} {} complete", "✓".green(), mode);
        }
    }

    Ok(())
}
