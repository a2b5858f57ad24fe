//! The `quizform explain` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizform_core::builder::lines_from_text;
use quizform_core::classify::{trace, LineKind};

use super::{read_input, truncate};

pub fn execute(input: PathBuf, conflicts_only: bool) -> Result<()> {
    let text = read_input(&input)?;
    let traces = trace(lines_from_text(&text));

    let mut table = Table::new();
    table.set_header(vec!["#", "Kind", "Also matched", "Line"]);

    let mut conflicts = 0;
    for t in &traces {
        if t.is_conflict() {
            conflicts += 1;
        } else if conflicts_only {
            continue;
        }
        let also: Vec<&str> = t
            .candidates
            .iter()
            .skip(1)
            .filter(|k| **k != LineKind::Plain)
            .map(|k| k.as_str())
            .collect();
        table.add_row(vec![
            Cell::new(t.index),
            Cell::new(t.kind),
            Cell::new(also.join(", ")),
            Cell::new(truncate(&t.line, 70)),
        ]);
    }

    println!("{table}");
    println!(
        "{} line(s), {conflicts} resolved by precedence",
        traces.len()
    );

    Ok(())
}
