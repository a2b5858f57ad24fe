//! quizform-core — Line classification and evaluation template building.
//!
//! This crate turns the plain text extracted from an uploaded document into
//! a [`model::Template`]: an ordered list of free-text and single-choice
//! questions ready to be stored as JSON.

pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod validate;

pub use builder::{build_template, lines_from_text, TemplateBuilder};
pub use config::{load_config, BuilderConfig};
pub use error::TemplateError;
pub use model::{Question, QuestionKind, Template};
