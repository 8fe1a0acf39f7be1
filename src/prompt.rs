//! # Prompts
//!
//! Interactive questions asked while reconciling the lookup table. Business
//! logic receives a `Prompter` so tests can script the answers.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::debug;

/// Source of operator answers.
pub trait Prompter {
    /// Asks a yes/no question. Empty input selects `default`.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Asks for a line of text. Returns `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Parses a yes/no answer. Returns `None` for anything unrecognized.
pub fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Prompts on stderr and reads answers from stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_line(prompt: &str) -> Result<Option<String>> {
        eprint!("{} ", prompt.bold());
        io::stderr().flush()?;

        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .context("Failed to read from stdin")?;

        if read == 0 {
            eprintln!();
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let question = format!("{prompt} {hint}");

        loop {
            let Some(input) = Self::read_line(&question)? else {
                debug!(prompt, default, "stdin closed, using default answer");
                return Ok(default);
            };
            if let Some(answer) = parse_answer(&input, default) {
                return Ok(answer);
            }
            eprintln!("{} Please answer 'y' or 'n'.", "!".yellow());
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        Self::read_line(prompt)
    }
}

/// Answers prompts from a fixed script, recording every question asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
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

    /// Prompts asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        self.asked.push(prompt.to_string());
        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted answer for: {prompt}"))?;
        parse_answer(&answer, default)
            .ok_or_else(|| anyhow::anyhow!("Scripted answer '{answer}' is not yes or no"))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("", true), Some(true));
        assert_eq!(parse_answer("", false), Some(false));
        assert_eq!(parse_answer(" Y ", false), Some(true));
        assert_eq!(parse_answer("no", true), Some(false));
        assert_eq!(parse_answer("maybe", true), None);
    }

    #[test]
    fn test_scripted_prompter() {
        let mut prompter = ScriptedPrompter::new(["y", "", "notes"]);

        assert!(prompter.confirm("Create?", false).unwrap());
        assert!(!prompter.confirm("Again?", false).unwrap());
        assert_eq!(prompter.ask("Name:").unwrap().as_deref(), Some("notes"));
        assert_eq!(prompter.ask("Name:").unwrap(), None);
        assert!(prompter.confirm("More?", true).is_err());
        assert_eq!(prompter.asked().len(), 5);
    }
}
