//! Console adapter for the quiz interaction port

use super::io::ConsoleIo;
use crate::output::console::ConsoleFormatter;
use quizmaker_application::{AnswerInput, InteractionError, QuizInteraction};
use quizmaker_domain::{AnswerOutcome, DomainError, Question};
use std::io::{BufRead, Write};

const ANSWER_PROMPT: &str = "Your answer(s) (comma-separated, q to stop):";

/// Takes a quiz on the console
pub struct ConsoleQuizInteraction<'a, R, W> {
    io: &'a mut ConsoleIo<R, W>,
}

impl<'a, R: BufRead, W: Write> ConsoleQuizInteraction<'a, R, W> {
    pub fn new(io: &'a mut ConsoleIo<R, W>) -> Self {
        Self { io }
    }
}

impl<R: BufRead, W: Write> QuizInteraction for ConsoleQuizInteraction<'_, R, W> {
    fn on_quiz_start(&mut self, subject: &str, effective_length: usize, requested: usize) {
        self.io
            .say(ConsoleFormatter::quiz_start(subject, effective_length, requested));
    }

    fn present_question(&mut self, number: usize, total: usize, question: &Question) {
        self.io
            .say(ConsoleFormatter::question(number, total, question).trim_end());
    }

    fn read_answer(&mut self, _question: &Question) -> Result<AnswerInput, InteractionError> {
        match self.io.prompt(ANSWER_PROMPT)? {
            None => Ok(AnswerInput::Quit),
            Some(line) if matches!(line.to_lowercase().as_str(), "q" | "quit") => {
                Ok(AnswerInput::Quit)
            }
            Some(line) => Ok(AnswerInput::Answer(line)),
        }
    }

    fn report_invalid_answer(&mut self, error: &DomainError) {
        self.io.say(ConsoleFormatter::invalid_answer(error));
    }

    fn report_outcome(&mut self, question: &Question, outcome: &AnswerOutcome) {
        self.io.say(ConsoleFormatter::outcome(question, outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn question() -> Question {
        Question::try_new(
            "2+2?",
            vec!["3".to_string(), "4".to_string()],
            [1],
            "math",
        )
        .unwrap()
    }

    #[test]
    fn test_read_answer_variants() {
        colored::control::set_override(false);
        let mut io = ConsoleIo::new(Cursor::new(b"2, 1\nQ\nquit\n".to_vec()), Vec::new());
        let mut interaction = ConsoleQuizInteraction::new(&mut io);
        let q = question();

        assert_eq!(
            interaction.read_answer(&q).unwrap(),
            AnswerInput::Answer("2, 1".to_string())
        );
        assert_eq!(interaction.read_answer(&q).unwrap(), AnswerInput::Quit);
        assert_eq!(interaction.read_answer(&q).unwrap(), AnswerInput::Quit);
        // End of input stops the quiz too
        assert_eq!(interaction.read_answer(&q).unwrap(), AnswerInput::Quit);
    }

    #[test]
    fn test_present_question_prints_choices() {
        colored::control::set_override(false);
        let mut io = ConsoleIo::new(Cursor::new(Vec::new()), Vec::new());
        ConsoleQuizInteraction::new(&mut io).present_question(1, 3, &question());

        let output = String::from_utf8(io.into_output()).unwrap();
        assert!(output.contains("Question 1/3"));
        assert!(output.contains("  1. 3\n  2. 4\n"));
    }
}
