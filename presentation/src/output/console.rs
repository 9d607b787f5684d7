//! Console output formatter for quiz screens

use colored::Colorize;
use quizmaker_application::StoreError;
use quizmaker_domain::{AnswerOutcome, DomainError, Question, QuizResult};
use std::collections::BTreeSet;

/// Formats quiz screens for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title shown when the app starts
    pub fn banner() -> String {
        Self::header("Quiz Maker")
    }

    /// Announce a quiz, mentioning when fewer questions exist than requested
    pub fn quiz_start(subject: &str, effective_length: usize, requested: usize) -> String {
        let mut output = format!(
            "\n{} {} ({} question{})",
            "Quiz:".cyan().bold(),
            subject,
            effective_length,
            if effective_length == 1 { "" } else { "s" }
        );
        if effective_length < requested {
            output.push_str(&format!(
                "\n{}",
                format!(
                    "Only {} question(s) available for this subject; {} requested.",
                    effective_length, requested
                )
                .dimmed()
            ));
        }
        output.push_str(&format!("\n{}", "Type q at an answer prompt to stop early.".dimmed()));
        output
    }

    /// A question with its 1-based numbered choices
    pub fn question(number: usize, total: usize, question: &Question) -> String {
        let mut output = format!(
            "\n{}\n{}\n",
            format!("── Question {}/{} ──", number, total).yellow().bold(),
            question.text()
        );
        for (i, choice) in question.choices().iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, choice));
        }
        output
    }

    /// Verdict for one answer; wrong answers show the right choices
    pub fn outcome(question: &Question, outcome: &AnswerOutcome) -> String {
        if outcome.correct {
            return format!("{}", "Correct!".green().bold());
        }
        format!(
            "{} Correct answer(s): {}",
            "Incorrect.".red().bold(),
            Self::choice_list(question, &outcome.correct_answers)
        )
    }

    pub fn invalid_answer(error: &DomainError) -> String {
        format!("{} {}", "Invalid answers.".red(), error)
    }

    /// Final score line
    pub fn result(result: &QuizResult) -> String {
        if result.abandoned {
            format!(
                "\n{} Your score is {}.",
                format!("Quiz stopped after {} of {} question(s).", result.answered, result.total)
                    .yellow(),
                result.to_string().bold()
            )
        } else {
            format!(
                "\n{} {}.",
                "Your final score is".cyan().bold(),
                result.to_string().bold()
            )
        }
    }

    pub fn subjects(subjects: &[&str]) -> String {
        if subjects.is_empty() {
            return format!("{}", "No questions have been added yet.".dimmed());
        }
        let mut output = format!("{}\n", "Subjects:".cyan().bold());
        for subject in subjects {
            output.push_str(&format!("  * {}\n", subject));
        }
        output
    }

    /// Summary after a batch of questions has been added
    pub fn added(count: usize, save_errors: &[StoreError]) -> String {
        let mut output = format!(
            "{}",
            format!("Added {} question{}.", count, if count == 1 { "" } else { "s" }).green()
        );
        if let Some(last) = save_errors.last() {
            output.push_str(&format!(
                "\n{} {}\n{}",
                "Warning:".yellow().bold(),
                last,
                "The questions stay available until you exit, but were not saved.".dimmed()
            ));
        }
        output
    }

    /// Warning printed when the store could not be loaded at startup
    pub fn load_warning(error: &StoreError) -> String {
        format!(
            "{} {}\n{}",
            "Warning:".yellow().bold(),
            error,
            "Starting with an empty question bank.".dimmed()
        )
    }

    fn choice_list(question: &Question, indexes: &BTreeSet<usize>) -> String {
        indexes
            .iter()
            .map(|&i| match question.choices().get(i) {
                Some(choice) => format!("{}. {}", i + 1, choice),
                None => (i + 1).to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn primes() -> Question {
        Question::try_new(
            "Which are prime?",
            vec!["2".to_string(), "4".to_string(), "5".to_string()],
            [0, 2],
            "math",
        )
        .unwrap()
    }

    #[test]
    fn test_question_lists_one_based_choices() {
        plain();
        let output = ConsoleFormatter::question(2, 5, &primes());
        assert!(output.contains("Question 2/5"));
        assert!(output.contains("Which are prime?"));
        assert!(output.contains("  1. 2\n"));
        assert!(output.contains("  3. 5\n"));
    }

    #[test]
    fn test_incorrect_outcome_shows_answers() {
        plain();
        let outcome = AnswerOutcome {
            number: 1,
            correct: false,
            correct_answers: BTreeSet::from([0, 2]),
        };
        let output = ConsoleFormatter::outcome(&primes(), &outcome);
        assert_eq!(output, "Incorrect. Correct answer(s): 1. 2, 3. 5");
    }

    #[test]
    fn test_quiz_start_mentions_truncation() {
        plain();
        let output = ConsoleFormatter::quiz_start("math", 3, 10);
        assert!(output.contains("Only 3 question(s) available"));
        let output = ConsoleFormatter::quiz_start("math", 10, 10);
        assert!(!output.contains("Only"));
    }

    #[test]
    fn test_result_lines() {
        plain();
        let mut result = QuizResult {
            subject: "math".to_string(),
            score: 4,
            total: 5,
            answered: 5,
            abandoned: false,
        };
        assert_eq!(
            ConsoleFormatter::result(&result),
            "\nYour final score is 4 out of 5."
        );

        result.abandoned = true;
        result.answered = 2;
        result.score = 1;
        assert!(ConsoleFormatter::result(&result).contains("Quiz stopped after 2 of 5"));
        assert!(ConsoleFormatter::result(&result).ends_with("Your score is 1 out of 2."));
    }

    #[test]
    fn test_subjects_empty_and_listed() {
        plain();
        assert!(ConsoleFormatter::subjects(&[]).contains("No questions"));
        let output = ConsoleFormatter::subjects(&["math", "History"]);
        assert!(output.contains("  * math\n"));
        assert!(output.contains("  * History\n"));
    }
}
