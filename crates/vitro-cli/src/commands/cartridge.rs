//! Biology cartridge commands.
//!
//! Each invocation opens a fresh session over the configured knowledge
//! directory; only `store` persists anything.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;
use vitro::cartridge::{Cartridge, ExperimentIntent, ExperimentPlan, ResearchRecord};
use vitro::core::types::{Hypothesis, ResearchDomain};

use crate::config::Config;
use crate::setup::open_knowledge;

fn session(config: &Config, activate: bool) -> Result<Cartridge> {
    let mut cartridge = Cartridge::new(open_knowledge(config)?);
    if activate {
        cartridge.activate();
    }
    Ok(cartridge)
}

fn parse_domain(domain: &str) -> Result<ResearchDomain> {
    domain
        .parse()
        .with_context(|| format!("Unknown domain '{}'", domain))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn status(as_json: bool) -> Result<()> {
    let config = Config::load()?;
    let cartridge = session(&config, false)?;
    let status = cartridge.status();

    if as_json {
        return print_json(&serde_json::json!({
            "status": status,
            "snapshot": cartridge.knowledge().snapshot_status(),
        }));
    }

    println!("{}", "Bio-Cartridge".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  Cartridge:         {}", status.cartridge.cyan());
    println!("  Mode:              {}", status.mode.to_string().yellow());
    println!("  Projects:          {}", status.projects);
    println!("  Confidence:        {:.0}%", status.confidence * 100.0);
    println!("  Ethics:            {}", status.ethics.green());
    println!("  Snapshot:          {:?}", cartridge.knowledge().snapshot_status());
    println!();
    println!("{}", "Protocols".blue().bold());
    for protocol in cartridge.planner().protocols() {
        println!(
            "  {} {} ({} days)",
            "•".blue(),
            protocol.name,
            protocol.duration_days
        );
    }
    Ok(())
}

pub fn query(text: &str, as_json: bool) -> Result<()> {
    let config = Config::load()?;
    let cartridge = session(&config, true)?;
    let response = cartridge.route_query(text)?;

    if as_json {
        return print_json(&response);
    }

    println!("{} {}", "→".blue(), response.query.cyan());
    println!("  Domain:            {}", response.domain.to_string().white().bold());
    println!("  Research value:    {:.0}%", response.research_value * 100.0);
    println!("  Reaction:          {}", response.emotional_response);
    match &response.knowledge {
        Some(record) => {
            println!("  Definition:        {}", record.definition);
            if !record.markers.is_empty() {
                println!("  Markers:           {}", record.markers.join(", "));
            }
            println!("  Research level:    {:.2}", record.research_level);
        }
        None => println!("  {} no stored knowledge for this domain", "•".yellow()),
    }
    Ok(())
}

fn print_plan(plan: &ExperimentPlan) {
    println!("  Domain:            {}", plan.domain.to_string().cyan());
    if plan.methods.is_empty() {
        println!("  Methods:           {}", "none mapped".dimmed());
    } else {
        println!("  Methods:           {}", plan.methods.join(", "));
    }
    println!("  Positive controls: {}", plan.controls.positive.join(", "));
    println!("  Negative controls: {}", plan.controls.negative.join(", "));
    println!("  Internal controls: {}", plan.controls.internal.join(", "));
    println!(
        "  Timeline:          {} days ({} prep / {} run / {} analysis / {} writing)",
        plan.timeline.total(),
        plan.timeline.preparation,
        plan.timeline.execution,
        plan.timeline.analysis,
        plan.timeline.writing
    );
    println!("  Sample size:       {}", plan.sample_size);
    println!("  Power:             {:.2}", plan.statistical_power);
    for criterion in &plan.success_criteria {
        println!("  {} {}", "✓".green(), criterion);
    }
}

pub fn plan(statement: &str, domain: &str, as_json: bool) -> Result<()> {
    let config = Config::load()?;
    let cartridge = session(&config, false)?;
    let hypothesis = Hypothesis::new(statement, parse_domain(domain)?);
    let plan = cartridge.planner().plan(&hypothesis);

    if as_json {
        return print_json(&plan);
    }

    println!("{} {}", "→".blue(), plan.hypothesis.white().bold());
    print_plan(&plan);
    Ok(())
}

pub fn start(statement: &str, domain: &str, as_json: bool) -> Result<()> {
    let config = Config::load()?;
    let mut cartridge = session(&config, true)?;
    let hypothesis = Hypothesis::new(statement, parse_domain(domain)?);
    let project = cartridge.start_project(&hypothesis)?;

    if as_json {
        return print_json(&project);
    }

    println!(
        "{} Project {} initiated (ethics approved)",
        "✓".green(),
        project.id.cyan().bold()
    );
    print_plan(&project.plan);
    Ok(())
}

pub fn summarize(values: &[f64], as_json: bool) -> Result<()> {
    let config = Config::load()?;
    let cartridge = session(&config, false)?;
    let Some(summary) = cartridge.planner().summarize(values) else {
        bail!("No values given");
    };

    if as_json {
        return print_json(&summary);
    }

    println!("{}", "Sample Summary".white().bold());
    println!("  n:                 {}", summary.n);
    println!("  mean:              {:.4}", summary.mean);
    println!("  stdev:             {:.4}", summary.stdev);
    println!("  median:            {:.4}", summary.median);
    println!("  min / max:         {:.4} / {:.4}", summary.min, summary.max);
    println!("  cv:                {:.4}", summary.cv);
    Ok(())
}

pub fn ethics(intent: ExperimentIntent, as_json: bool) -> Result<()> {
    let config = Config::load()?;
    let cartridge = session(&config, false)?;
    let check = cartridge.ethics().validate(&intent);

    if as_json {
        return print_json(&check);
    }

    if check.ok {
        println!("{}", check.message.green());
    } else {
        println!("{}", check.message.red());
    }
    println!();
    println!("{}", "Constraints".blue().bold());
    for constraint in cartridge.ethics().ethical_constraints() {
        println!("  {} {}", "•".blue(), constraint);
    }
    Ok(())
}

pub fn store(
    domain: &str,
    title: &str,
    summary: &str,
    source: Option<String>,
    as_json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let mut cartridge = session(&config, false)?;
    let domain = parse_domain(domain)?;

    let mut record = ResearchRecord::new(title, summary);
    if let Some(source) = source {
        record = record.with_source(source);
    }
    cartridge.knowledge_mut().store(domain.as_str(), record);
    cartridge
        .knowledge()
        .save_snapshot(&config.knowledge.dir)
        .context("Failed to save knowledge snapshot")?;

    let total = cartridge
        .knowledge()
        .research_data()
        .get(domain.as_str())
        .map(Vec::len)
        .unwrap_or(0);

    if as_json {
        return print_json(&serde_json::json!({
            "domain": domain,
            "records": total,
            "dir": config.knowledge.dir,
        }));
    }

    println!(
        "{} Stored under {} ({} records)",
        "✓".green(),
        domain.to_string().cyan(),
        total
    );
    Ok(())
}
