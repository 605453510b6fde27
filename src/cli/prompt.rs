//! Terminal prompter.
//!
//! Uses dialoguer when stdin is a terminal. Piped input is read one line per
//! question so the configuration can be scripted.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{Input, Password};

use crate::core::prompt::{Prompt, Prompter};
use crate::error::Result;

/// Prompts on the controlling terminal, or reads lines from piped stdin.
pub struct Terminal {
    interactive: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for Terminal {
    fn ask(&mut self, prompt: &Prompt) -> Result<String> {
        if !self.interactive {
            eprint!("{}: ", prompt.label());
            io::stderr().flush()?;

            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            return Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string());
        }

        let answer = if prompt.secret {
            Password::new()
                .with_prompt(prompt.label())
                .allow_empty_password(true)
                .interact()?
        } else {
            Input::<String>::new()
                .with_prompt(prompt.label())
                .allow_empty(true)
                .interact_text()?
        };
        Ok(answer)
    }
}
