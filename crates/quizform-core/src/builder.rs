//! Template building.
//!
//! Building is a single forward fold over the document's lines:
//! `(BuilderState, line) -> BuilderState`. The state holds the question being
//! built, the raw option lines collected for it, and the questions already
//! finished. Nothing here can fail; unexpected text degrades into text
//! questions or prompt continuations.

use crate::classify::{classify, normalize_blanks, strip_option_marker, LineKind};
use crate::config::BuilderConfig;
use crate::ids::IdSource;
use crate::model::{Question, QuestionKind, Template};

/// Split extracted document text into trimmed, non-blank lines.
pub fn lines_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Transient state between two lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderState {
    current: Option<Question>,
    option_buffer: Vec<String>,
    finished: Vec<Question>,
}

impl BuilderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question still being built, if any.
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Raw option lines (markers still attached) waiting for the next flush.
    pub fn pending_options(&self) -> &[String] {
        &self.option_buffer
    }

    /// Questions finalized so far, in output order.
    pub fn finished(&self) -> &[Question] {
        &self.finished
    }

    /// Apply one trimmed, non-empty line.
    pub fn step(mut self, line: &str, config: &BuilderConfig, ids: &mut dyn IdSource) -> Self {
        let kind = classify(line);
        tracing::trace!(%kind, line, "classified line");

        match kind {
            LineKind::QuestionStart => {
                let mut state = self.flush();
                state.current = Some(Question::text(ids.next_id(), line));
                state
            }
            LineKind::Option => {
                if self.current.is_none() {
                    self.current = Some(Question::radio(
                        ids.next_id(),
                        config.effective_default_prompt(),
                        Vec::new(),
                    ));
                }
                self.option_buffer.push(line.to_string());
                self
            }
            LineKind::AnswerBlank => {
                let prompt = normalize_blanks(line, config.effective_blank_width());
                let mut state = self.flush();
                state.current = Some(Question::text(ids.next_id(), prompt));
                state.flush()
            }
            LineKind::Plain => {
                let continues = self.option_buffer.is_empty()
                    && matches!(&self.current, Some(q) if q.kind == QuestionKind::Text);
                if continues {
                    if let Some(question) = self.current.as_mut() {
                        question.prompt.push(' ');
                        question.prompt.push_str(line);
                    }
                    self
                } else {
                    let mut state = self.flush();
                    state.current = Some(Question::text(ids.next_id(), line));
                    state
                }
            }
        }
    }

    /// Finalize the question in progress, if any.
    ///
    /// Buffered option lines turn the question into a radio question; their
    /// markers are stripped and entries left empty are dropped.
    pub fn flush(mut self) -> Self {
        let Some(mut question) = self.current.take() else {
            return self;
        };

        if !self.option_buffer.is_empty() {
            let options: Vec<String> = self
                .option_buffer
                .drain(..)
                .map(|raw| strip_option_marker(&raw))
                .filter(|option| !option.is_empty())
                .collect();
            if options.is_empty() {
                tracing::debug!(
                    id = %question.id,
                    "all options empty after stripping, keeping as text"
                );
                question.kind = QuestionKind::Text;
            } else {
                question.kind = QuestionKind::Radio;
                question.options = options;
            }
        }

        tracing::debug!(
            id = %question.id,
            kind = %question.kind,
            options = question.options.len(),
            "flushed question"
        );
        self.finished.push(question);
        self
    }

    /// Flush whatever is left and produce the template.
    pub fn finish(self) -> Template {
        Template::new(self.flush().finished)
    }
}

/// Builds templates with a fixed configuration and id source.
pub struct TemplateBuilder<S: IdSource> {
    config: BuilderConfig,
    ids: S,
}

impl TemplateBuilder<Box<dyn IdSource>> {
    /// Use the id strategy named in the configuration.
    pub fn from_config(config: BuilderConfig) -> Self {
        let ids = config.id_source();
        Self { config, ids }
    }
}

impl<S: IdSource> TemplateBuilder<S> {
    pub fn new(config: BuilderConfig, ids: S) -> Self {
        Self { config, ids }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build a template from document lines.
    ///
    /// Lines are trimmed and blank ones dropped before classification.
    /// Ids keep counting across calls on the same builder.
    pub fn build<I, L>(&mut self, lines: I) -> Template
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut consumed = 0usize;
        let state = lines
            .into_iter()
            .fold(BuilderState::new(), |state, line| {
                let line = line.as_ref().trim();
                if line.is_empty() {
                    return state;
                }
                consumed += 1;
                state.step(line, &self.config, &mut self.ids)
            });
        let template = state.finish();

        tracing::debug!(
            lines = consumed,
            questions = template.len(),
            "built template"
        );
        template
    }

    /// Build a template from raw extracted text.
    pub fn build_text(&mut self, text: &str) -> Template {
        self.build(lines_from_text(text))
    }
}

/// Build a template with a fresh id source taken from `config`.
pub fn build_template<I, L>(lines: I, config: &BuilderConfig) -> Template
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    TemplateBuilder::from_config(config.clone()).build(lines)
}
