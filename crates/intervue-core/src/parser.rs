//! TOML answer-script parser.
//!
//! Answer scripts drive non-interactive sessions: an ordered list of
//! answers consumed one per question. An entry may pin the question text it
//! expects; `match_questions` rejects a script whose pins don't line up
//! with the generated sequence.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One scripted answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptedAnswer {
    /// Answer text. Empty is a valid answer.
    pub text: String,
    /// Expected question text; validated against the generated sequence
    /// when present.
    #[serde(default)]
    pub question: Option<String>,
}

/// An ordered answer script.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerScript {
    #[serde(default)]
    pub answers: Vec<ScriptedAnswer>,
}

impl AnswerScript {
    /// Check the script's question pins against a generated sequence.
    ///
    /// Unpinned entries match any question. Extra questions beyond the
    /// script's length are allowed (they just go unanswered).
    pub fn match_questions(&self, questions: &[String]) -> Result<()> {
        anyhow::ensure!(
            self.answers.len() <= questions.len(),
            "script has {} answers but only {} questions were generated",
            self.answers.len(),
            questions.len()
        );
        for (i, answer) in self.answers.iter().enumerate() {
            if let Some(expected) = &answer.question {
                anyhow::ensure!(
                    expected == &questions[i],
                    "script answer {} expects question {expected:?} but question {} is {:?}",
                    i + 1,
                    i + 1,
                    questions[i]
                );
            }
        }
        Ok(())
    }
}

/// Parse an answer script from a TOML file.
pub fn parse_answer_script(path: &Path) -> Result<AnswerScript> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer script: {}", path.display()))?;
    let script: AnswerScript = toml::from_str(&content)
        .with_context(|| format!("failed to parse answer script: {}", path.display()))?;
    Ok(script)
}
