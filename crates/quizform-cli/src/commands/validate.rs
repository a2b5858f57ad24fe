//! The `quizform validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizform_core::validate::validate_template;
use quizform_core::Template;

pub fn execute(template_path: PathBuf, strict: bool) -> Result<()> {
    let template = Template::load_json(&template_path)?;
    println!(
        "Template: {} ({} questions)",
        template_path.display(),
        template.len()
    );

    let warnings = validate_template(&template);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Template valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
        if strict {
            std::process::exit(1);
        }
    }

    Ok(())
}
