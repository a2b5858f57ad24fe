//! Structural checks for stored templates.
//!
//! Templates built by [`crate::builder`] always pass. Hand-edited or
//! externally produced templates are checked before they are accepted.

use std::collections::HashSet;

use serde::Serialize;

use crate::classify::is_option;
use crate::model::{QuestionKind, Template};

/// A problem found in a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn for_question(id: &str, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(id.to_string()),
            message: message.into(),
        }
    }
}

/// Validate a template for common issues.
pub fn validate_template(template: &Template) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate or missing IDs
    let mut seen_ids = HashSet::new();
    for question in &template.questions {
        if question.id.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("question without an id: {:?}", question.prompt),
            });
        } else if !seen_ids.insert(question.id.as_str()) {
            warnings.push(ValidationWarning::for_question(
                &question.id,
                format!("duplicate question ID: {}", question.id),
            ));
        }
    }

    for question in &template.questions {
        let id = question.id.as_str();

        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning::for_question(id, "prompt is empty"));
        } else if question.prompt.trim() != question.prompt {
            warnings.push(ValidationWarning::for_question(
                id,
                "prompt has surrounding whitespace",
            ));
        }

        match question.kind {
            QuestionKind::Radio if question.options.is_empty() => {
                warnings.push(ValidationWarning::for_question(
                    id,
                    "radio question has no options",
                ));
            }
            QuestionKind::Text if !question.options.is_empty() => {
                warnings.push(ValidationWarning::for_question(
                    id,
                    format!(
                        "text question carries {} option(s) that will be ignored",
                        question.options.len()
                    ),
                ));
            }
            _ => {}
        }

        for (i, option) in question.options.iter().enumerate() {
            if option.trim().is_empty() {
                warnings.push(ValidationWarning::for_question(
                    id,
                    format!("option {} is empty", i + 1),
                ));
            } else if is_option(option) {
                warnings.push(ValidationWarning::for_question(
                    id,
                    format!("option {} still has a list marker: {option:?}", i + 1),
                ));
            }
        }
    }

    warnings
}
