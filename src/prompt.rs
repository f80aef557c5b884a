//! Operator input.
//!
//! Every interactive question goes through [`Prompt`], so the workflow can be
//! driven from a terminal or from a canned script.

use dialoguer::{Confirm, Input};
use std::collections::VecDeque;
use std::io;

use crate::utils::is_affirmative;

/// Source of operator answers.
pub trait Prompt {
    /// Show `message` and return one line of input without its line ending.
    ///
    /// End of input is reported as `io::ErrorKind::UnexpectedEof`.
    fn ask(&mut self, message: &str) -> io::Result<String>;

    /// Ask a yes/no question whose default is "no".
    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{} (y/N): ", message))?;
        Ok(is_affirmative(&answer))
    }
}

/// Interactive terminal prompt backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

// dialoguer renders its own ": " and "[y/N]" suffixes.
fn bare_question(message: &str) -> &str {
    message.trim().trim_end_matches(':').trim_end()
}

pub(crate) fn dialoguer_to_io(e: dialoguer::Error) -> io::Error {
    match e {
        dialoguer::Error::IO(err) => err,
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(bare_question(message))
            .allow_empty(true)
            .interact_text()
            .map_err(dialoguer_to_io)
    }

    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        Confirm::new()
            .with_prompt(bare_question(message))
            .default(false)
            .interact()
            .map_err(dialoguer_to_io)
    }
}

/// Replays a fixed list of answers and records every question asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> io::Result<String> {
        self.asked.push(message.to_string());
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answers left")
        })
    }
}
