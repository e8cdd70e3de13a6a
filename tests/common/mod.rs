//! Shared fakes for integration tests

#![allow(dead_code)]

use poyo::operations::CommandRunner;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

pub const STORE: &str = "/home/user/.poyo.yaml";

/// Records every command instead of running it
pub struct RecordingRunner {
    pub commands: RefCell<Vec<String>>,
    exit_code: Option<i32>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::exiting_with(Some(0))
    }

    pub fn exiting_with(exit_code: Option<i32>) -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            exit_code,
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str) -> anyhow::Result<Option<i32>> {
        self.commands.borrow_mut().push(command.to_owned());
        Ok(self.exit_code)
    }
}

/// Answers prompts from a script and remembers what was asked
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|answer| (*answer).to_owned()).collect(),
            asked: Vec::new(),
        }
    }
}

impl poyo::template::Prompter for ScriptedPrompter {
    fn prompt(&mut self, name: &str) -> io::Result<String> {
        self.asked.push(name.to_owned());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
