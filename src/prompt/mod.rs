//! Interactive prompt abstraction
//!
//! Terminal prompting goes through a trait so the collector can be driven by
//! a scripted double in tests, mirroring the `System` abstraction.

use anyhow::{Result, anyhow};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Source of interactive answers
pub trait Prompter {
    /// Ask for a line of input; an empty answer is allowed and validated by
    /// the caller
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Production prompter backed by dialoguer
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    /// Create a new `TerminalPrompter`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(value) = default {
            input = input.default(value.to_owned());
        }
        Ok(input.interact_text()?)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let theme = ColorfulTheme::default();
        Ok(Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}

/// Scripted prompter for tests: answers are consumed in order
#[derive(Default)]
pub struct ScriptedPrompter {
    inputs: Mutex<VecDeque<String>>,
    confirms: Mutex<VecDeque<bool>>,
}

impl ScriptedPrompter {
    /// Create an empty `ScriptedPrompter`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an input answer (builder pattern)
    #[must_use]
    pub fn with_input<S: Into<String>>(self, answer: S) -> Self {
        if let Ok(mut inputs) = self.inputs.lock() {
            inputs.push_back(answer.into());
        }
        self
    }

    /// Queue a confirm answer (builder pattern)
    #[must_use]
    pub fn with_confirm(self, answer: bool) -> Self {
        if let Ok(mut confirms) = self.confirms.lock() {
            confirms.push_back(answer);
        }
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut inputs = self
            .inputs
            .lock()
            .map_err(|e| anyhow!("prompter lock poisoned: {e}"))?;
        let answer = inputs
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for prompt: {prompt}"))?;
        if answer.is_empty()
            && let Some(value) = default
        {
            return Ok(value.to_owned());
        }
        Ok(answer)
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        let mut confirms = self
            .confirms
            .lock()
            .map_err(|e| anyhow!("prompter lock poisoned: {e}"))?;
        confirms
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for prompt: {prompt}"))
    }
}
