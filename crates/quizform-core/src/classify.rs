//! Line classification.
//!
//! Every input line falls into exactly one [`LineKind`]. Kinds are tried in
//! [`PRECEDENCE`] order and the first one that matches wins; [`LineKind::Plain`]
//! matches everything, so classification is total.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// The category a line is sorted into before the builder acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Ends with `:` or `?` and is not an option line.
    QuestionStart,
    /// Starts with an enumerated marker (`a)`, `(B)`, `1.`, `C-`) or a bullet.
    Option,
    /// Contains a fill-in blank made of two or more underscores.
    AnswerBlank,
    /// Anything else; continues or starts a text question.
    Plain,
}

/// Classification order. The first kind whose predicate accepts a line wins.
pub const PRECEDENCE: [LineKind; 4] = [
    LineKind::QuestionStart,
    LineKind::Option,
    LineKind::AnswerBlank,
    LineKind::Plain,
];

impl LineKind {
    /// Whether this kind's predicate accepts the line, ignoring precedence.
    pub fn matches(self, line: &str) -> bool {
        match self {
            LineKind::QuestionStart => is_question_start(line),
            LineKind::Option => is_option(line),
            LineKind::AnswerBlank => is_answer_blank(line),
            LineKind::Plain => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::QuestionStart => "question_start",
            LineKind::Option => "option",
            LineKind::AnswerBlank => "answer_blank",
            LineKind::Plain => "plain",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn enumerated_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[(\[]?[A-Za-z0-9][)\].-]\s+").expect("invalid enumerated marker regex")
    })
}

fn bullet_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-•]\s+").expect("invalid bullet marker regex"))
}

fn blank_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_{2,}").expect("invalid blank run regex"))
}

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("invalid whitespace regex"))
}

/// Starts with an enumerated marker or a bullet, followed by whitespace.
pub fn is_option(line: &str) -> bool {
    enumerated_marker().is_match(line) || bullet_marker().is_match(line)
}

/// Contains two or more consecutive underscores, also when they are only
/// separated by whitespace (`_ _ _`).
pub fn is_answer_blank(line: &str) -> bool {
    blank_run().is_match(line) || blank_run().is_match(&whitespace().replace_all(line, ""))
}

/// Ends with `:` or `?`. Option lines never start a question, so `a) Qual?`
/// stays an option.
pub fn is_question_start(line: &str) -> bool {
    line.ends_with([':', '?']) && !is_option(line)
}

/// Classify a line against [`PRECEDENCE`].
pub fn classify(line: &str) -> LineKind {
    PRECEDENCE
        .into_iter()
        .find(|kind| kind.matches(line))
        .unwrap_or(LineKind::Plain)
}

/// Every kind whose predicate accepts the line, in precedence order.
///
/// The first entry is always what [`classify`] returns; any further entries
/// are the conflicts precedence resolved.
pub fn matching_kinds(line: &str) -> Vec<LineKind> {
    PRECEDENCE
        .into_iter()
        .filter(|kind| kind.matches(line))
        .collect()
}

/// Remove leading enumerated and bullet markers until neither is left, then
/// trim. The result never satisfies [`is_option`].
pub fn strip_option_marker(line: &str) -> String {
    let mut rest = line.trim();
    loop {
        let stripped = enumerated_marker()
            .find(rest)
            .or_else(|| bullet_marker().find(rest))
            .map(|m| rest[m.end()..].trim_start());
        match stripped {
            Some(next) => rest = next,
            None => return rest.trim_end().to_string(),
        }
    }
}

/// Replace every underscore run of two or more with a run of exactly `width`.
pub fn normalize_blanks(line: &str, width: usize) -> String {
    let placeholder = "_".repeat(width);
    blank_run()
        .replace_all(line, placeholder.as_str())
        .into_owned()
}

/// How one line was classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTrace {
    /// 1-based position among the non-blank lines.
    pub index: usize,
    pub line: String,
    pub kind: LineKind,
    /// All kinds that matched, winner first.
    pub candidates: Vec<LineKind>,
}

impl LineTrace {
    /// More than one predicate (besides the catch-all) accepted the line.
    pub fn is_conflict(&self) -> bool {
        self.candidates
            .iter()
            .filter(|k| **k != LineKind::Plain)
            .count()
            > 1
    }
}

/// Classify each line independently, for diagnostics.
pub fn trace<I, S>(lines: I) -> Vec<LineTrace>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let line = line.as_ref().trim();
            (!line.is_empty()).then(|| line.to_string())
        })
        .enumerate()
        .map(|(i, line)| {
            let candidates = matching_kinds(&line);
            LineTrace {
                index: i + 1,
                kind: candidates[0],
                candidates,
                line,
            }
        })
        .collect()
}
