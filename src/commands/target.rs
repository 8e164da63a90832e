//! Target command - manage the learning-target catalog

use std::path::Path;

use anyhow::bail;

use crate::cli::TargetAction;
use sbgrader::models::LearningTarget;
use sbgrader::output::{OperationResult, OutputMode};
use sbgrader::storage;

/// Add to or list the catalog of a class period
pub fn target_cmd(file: &Path, action: TargetAction, output_mode: OutputMode) -> anyhow::Result<()> {
    match action {
        TargetAction::Add {
            label,
            brief,
            description,
        } => add(file, &label, brief, description, output_mode),
        TargetAction::List => list(file, output_mode),
    }
}

fn add(
    file: &Path,
    label: &str,
    brief: Option<String>,
    description: Option<String>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let mut period = storage::load_class_period(file)?;
    if period.has_target(label) {
        bail!("learning target {label:?} already exists in {:?}", period.description);
    }

    let mut target = LearningTarget::new(label)?;
    if let Some(brief) = brief {
        target.set_brief(brief)?;
    }
    if let Some(description) = description {
        target = LearningTarget::with_descriptions(label, target.brief.as_str(), description)?;
    }
    period.targets.push(target);
    storage::save_class_period(file, &period)?;

    let result = OperationResult {
        success: true,
        message: format!("Added learning target {label} to {}", period.description),
    };
    result.render(output_mode);
    Ok(())
}

fn list(file: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let period = storage::load_class_period(file)?;

    if output_mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&period.targets)?);
        return Ok(());
    }

    if period.targets.is_empty() {
        println!("No learning targets in {}.", period.description);
        return Ok(());
    }
    println!("Learning targets in {}:\n", period.description);
    for target in &period.targets {
        println!("  {}", target.brief_string());
        if target.description != sbgrader::models::NO_DESCRIPTION {
            println!("      {}", target.description);
        }
    }
    Ok(())
}
