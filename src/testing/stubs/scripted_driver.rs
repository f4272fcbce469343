use anyhow::Result;
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::ui::cli::drivers::PromptDriver;

/// Prompt driver answering from queues; an empty queue accepts the default.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    selection: usize,
    u64s: RefCell<VecDeque<u64>>,
    f64s: RefCell<VecDeque<f64>>,
    strings: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new(selection: usize) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn with_u64s<I: IntoIterator<Item = u64>>(self, answers: I) -> Self {
        self.u64s.borrow_mut().extend(answers);
        self
    }

    pub fn with_f64s<I: IntoIterator<Item = f64>>(self, answers: I) -> Self {
        self.f64s.borrow_mut().extend(answers);
        self
    }

    pub fn with_strings<I, S>(self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strings.borrow_mut().extend(answers.into_iter().map(Into::into));
        self
    }

    /// Titles of the value prompts, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn record(&self, title: &str) {
        self.asked.borrow_mut().push(title.to_string());
    }
}

impl PromptDriver for ScriptedDriver {
    fn select(&self, _title: &str, _help: &str, _options: &[String]) -> Result<usize> {
        Ok(self.selection)
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        self.record(title);
        Ok(self
            .strings
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| default.to_string()))
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        _min: Option<u64>,
        _max: Option<u64>,
    ) -> Result<u64> {
        self.record(title);
        Ok(self.u64s.borrow_mut().pop_front().unwrap_or(default))
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        _min: Option<f64>,
        _max: Option<f64>,
    ) -> Result<f64> {
        self.record(title);
        Ok(self.f64s.borrow_mut().pop_front().unwrap_or(default))
    }
}
