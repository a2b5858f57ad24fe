//! The `quizform inspect` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizform_core::Template;

use super::truncate;

pub fn execute(template_path: PathBuf) -> Result<()> {
    let template = Template::load_json(&template_path)?;

    let mut table = Table::new();
    table.set_header(vec!["#", "Id", "Type", "Prompt", "Options"]);

    for (i, q) in template.questions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&q.id),
            Cell::new(q.kind),
            Cell::new(truncate(&q.prompt, 60)),
            Cell::new(truncate(&q.options.join(" | "), 50)),
        ]);
    }

    let summary = template.summary();
    println!("{table}");
    println!(
        "{} question(s): {} text, {} radio ({} options)",
        summary.total, summary.text, summary.radio, summary.options
    );

    Ok(())
}
