//! Core data model types for quizform.
//!
//! A [`Template`] is what gets stored and later rendered to the people
//! answering it. Its JSON shape is
//! `{ "questions": [{ "id", "type": "text"|"radio", "prompt", "options"? }] }`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// The kind of answer field a question renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free-text answer.
    Text,
    /// Single choice among the question's options.
    Radio,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Text => write!(f, "text"),
            QuestionKind::Radio => write!(f, "radio"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(QuestionKind::Text),
            "radio" | "choice" => Ok(QuestionKind::Radio),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// A single question in an evaluation template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Opaque identifier, unique within its template.
    pub id: String,
    /// How the answer is collected.
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// The question text shown to the user.
    pub prompt: String,
    /// Choices for radio questions, in source order. Empty for text questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Question {
    /// A free-text question with no options.
    pub fn text(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::Text,
            prompt: prompt.into(),
            options: Vec::new(),
        }
    }

    /// A single-choice question.
    pub fn radio(id: impl Into<String>, prompt: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::Radio,
            prompt: prompt.into(),
            options,
        }
    }

    pub fn is_radio(&self) -> bool {
        self.kind == QuestionKind::Radio
    }
}

/// An ordered list of questions built from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Question counts for a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub total: usize,
    pub text: usize,
    pub radio: usize,
    pub options: usize,
}

impl Template {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Look up a question by its identifier.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Count questions by kind.
    pub fn summary(&self) -> TemplateSummary {
        self.questions
            .iter()
            .fold(TemplateSummary::default(), |mut acc, q| {
                acc.total += 1;
                match q.kind {
                    QuestionKind::Text => acc.text += 1,
                    QuestionKind::Radio => {
                        acc.radio += 1;
                        acc.options += q.options.len();
                    }
                }
                acc
            })
    }

    /// Serialize the template as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, TemplateError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(TemplateError::Serialize)
    }

    /// Parse a template from a JSON string.
    pub fn from_json(content: &str, source_path: &Path) -> Result<Self, TemplateError> {
        serde_json::from_str(content).map_err(|source| TemplateError::Parse {
            path: source_path.to_path_buf(),
            source,
        })
    }

    /// Save the template as pretty-printed JSON, creating parent directories.
    pub fn save_json(&self, path: &Path) -> Result<(), TemplateError> {
        let json = self.to_json(true)?;
        let write_err = |source| TemplateError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, json).map_err(write_err)
    }

    /// Load a template from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, path)
    }
}
