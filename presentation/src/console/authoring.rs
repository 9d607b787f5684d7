//! Console adapter for the question authoring port

use super::io::ConsoleIo;
use colored::Colorize;
use quizmaker_application::{InteractionError, QuestionAuthoring};
use quizmaker_domain::{AnswerSelection, Question};
use std::io::{BufRead, Write};

/// Most choices a single question may have
pub const MAX_CHOICES: usize = 26;

/// Authors questions by prompting on the console
pub struct ConsoleAuthoring<'a, R, W> {
    io: &'a mut ConsoleIo<R, W>,
}

impl<'a, R: BufRead, W: Write> ConsoleAuthoring<'a, R, W> {
    pub fn new(io: &'a mut ConsoleIo<R, W>) -> Self {
        Self { io }
    }

    fn read_correct_answers(
        &mut self,
        choice_count: usize,
    ) -> Result<Option<AnswerSelection>, InteractionError> {
        loop {
            let Some(line) = self.io.prompt(
                "Enter the correct answer index(es) (comma-separated for multiple answers):",
            )?
            else {
                return Ok(None);
            };
            match AnswerSelection::parse(&line, choice_count) {
                Ok(selection) => return Ok(Some(selection)),
                Err(e) => self.io.say(format!("Invalid answers. {}", e).red()),
            }
        }
    }
}

impl<R: BufRead, W: Write> QuestionAuthoring for ConsoleAuthoring<'_, R, W> {
    fn compose_question(&mut self) -> Result<Option<Question>, InteractionError> {
        let Some(text) = self.io.read_non_empty("Enter the question:", "Question")? else {
            return Ok(None);
        };
        let Some(subject) = self.io.read_non_empty("Enter the subject:", "Subject")? else {
            return Ok(None);
        };
        let Some(count) = self
            .io
            .read_number("Enter the number of choices:", 1..=MAX_CHOICES)?
        else {
            return Ok(None);
        };

        let mut choices = Vec::new();
        for n in 1..=count {
            let label = format!("Enter choice {}:", n);
            let Some(choice) = self.io.read_non_empty(&label, "Choice")? else {
                return Ok(None);
            };
            choices.push(choice);
        }

        let Some(selection) = self.read_correct_answers(count)? else {
            return Ok(None);
        };

        // Every field was checked above, so this only fails on a logic error
        match Question::try_new(text, choices, selection.indexes().iter().copied(), subject) {
            Ok(question) => Ok(Some(question)),
            Err(e) => {
                self.io.say(format!("Question rejected: {}", e).red());
                Ok(None)
            }
        }
    }

    fn add_another(&mut self) -> Result<bool, InteractionError> {
        Ok(self
            .io
            .confirm("Do you want to add another question? (yes/no):")?
            .unwrap_or(false))
    }
}
