//! Prompting seam for interactive updates.
//!
//! The manager decides what to ask and how to interpret the answer; a
//! [`Prompter`] only shows the question and returns the raw response.

use crate::error::Result;

/// A question about one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub name: String,
    pub description: String,
    /// Current value as shown to the user; masked for secrets.
    pub hint: String,
    /// Read without echo.
    pub secret: bool,
}

impl Prompt {
    /// Single-line prompt text, e.g. `DBT_TARGET (Target profile) [dev]`.
    pub fn label(&self) -> String {
        let mut label = self.name.clone();
        if !self.description.is_empty() {
            label.push_str(&format!(" ({})", self.description));
        }
        label.push_str(&format!(" [{}]", self.hint));
        label
    }
}

/// Asks the user for a value.
pub trait Prompter {
    /// Show `prompt` and return the raw response. An empty string means the
    /// user just pressed enter.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn ask(&mut self, prompt: &Prompt) -> Result<String>;
}
