//! Test doubles shared by the unit tests

use crate::browser::UrlOpener;
use crate::error::Result;
use crate::form::{BookmarkForm, BookmarkPrompt, PromptOutcome};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned answers; each entry overwrites the fields and submits,
/// `None` cancels
#[derive(Default)]
pub struct ScriptedPrompt {
    pub answers: VecDeque<Option<(&'static str, &'static str)>>,
    /// Form as it looked at each ask
    pub seen: Vec<BookmarkForm>,
    pub warnings: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: Vec<Option<(&'static str, &'static str)>>) -> Self {
        Self {
            answers: answers.into(),
            ..Self::default()
        }
    }
}

impl BookmarkPrompt for ScriptedPrompt {
    fn ask(&mut self, form: &mut BookmarkForm) -> PromptOutcome {
        self.seen.push(form.clone());
        match self.answers.pop_front().flatten() {
            Some((title, url)) => {
                form.title = title.to_string();
                form.url = url.to_string();
                PromptOutcome::Submit
            }
            None => PromptOutcome::Cancel,
        }
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
