//! The `quizform parse` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizform_core::config::load_config_from;
use quizform_core::{BuilderConfig, TemplateBuilder};

use super::read_input;

pub fn execute(
    input: PathBuf,
    output: Option<PathBuf>,
    ids: Option<String>,
    default_prompt: Option<String>,
    compact: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(ids) = ids {
        config.ids = ids.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;
    }
    if let Some(prompt) = default_prompt {
        config.default_prompt = prompt;
    }
    config.validate()?;

    if input.is_dir() {
        let out_dir = output.context("--output is required when --input is a directory")?;
        let converted = convert_directory(&input, &input, &out_dir, &config)?;
        println!("Converted {converted} document(s) into {}", out_dir.display());
        return Ok(());
    }

    let text = read_input(&input)?;
    let template = TemplateBuilder::from_config(config).build_text(&text);
    tracing::info!(
        questions = template.len(),
        "built template from {}",
        input.display()
    );

    match output {
        Some(path) => {
            template.save_json(&path)?;
            println!(
                "Wrote {} question(s) to {}",
                template.len(),
                path.display()
            );
        }
        None => println!("{}", template.to_json(!compact)?),
    }

    Ok(())
}

/// Convert every `.txt` file under `dir` into a JSON template under
/// `out_dir`, keeping the relative layout. Unreadable files are skipped.
fn convert_directory(
    root: &Path,
    dir: &Path,
    out_dir: &Path,
    config: &BuilderConfig,
) -> Result<usize> {
    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    let mut converted = 0;
    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            converted += convert_directory(root, &path, out_dir, config)?;
            continue;
        }
        if !path.extension().is_some_and(|ext| ext == "txt") {
            continue;
        }

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let template = TemplateBuilder::from_config(config.clone()).build_text(&text);
        let relative = path.strip_prefix(root).unwrap_or(&path);
        let target = out_dir.join(relative).with_extension("json");
        template.save_json(&target)?;
        tracing::info!(
            questions = template.len(),
            "{} -> {}",
            path.display(),
            target.display()
        );
        converted += 1;
    }

    Ok(converted)
}
