//! Interactive menu loop
//!
//! Wires the console adapters to the use cases. The loop ends on the exit
//! option or when input runs out.

use crate::console::{ConsoleAuthoring, ConsoleIo, ConsoleQuizInteraction};
use crate::menu::{Menu, MenuAction};
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use quizmaker_application::{
    AddQuestionsError, AddQuestionsUseCase, InteractionError, QuestionRepository, QuestionStore,
    QuizPolicy, RunQuizError, RunQuizInput, RunQuizUseCase,
};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// Console quiz application
pub struct QuizApp<S: QuestionStore, R, W, G> {
    repository: QuestionRepository<S>,
    policy: QuizPolicy,
    menu: Menu,
    io: ConsoleIo<R, W>,
    rng: G,
    notices: Vec<String>,
}

impl<S, R, W, G> QuizApp<S, R, W, G>
where
    S: QuestionStore,
    R: BufRead,
    W: Write,
    G: Rng,
{
    pub fn new(
        repository: QuestionRepository<S>,
        menu: Menu,
        io: ConsoleIo<R, W>,
        rng: G,
    ) -> Self {
        Self {
            repository,
            policy: QuizPolicy::default(),
            menu,
            io,
            rng,
            notices: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: QuizPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn repository(&self) -> &QuestionRepository<S> {
        &self.repository
    }

    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    /// Queue a line shown under the banner (e.g. a load warning)
    pub fn notice(&mut self, text: impl std::fmt::Display) {
        self.notices.push(text.to_string());
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> Result<(), InteractionError> {
        self.io.say(ConsoleFormatter::banner());
        for notice in std::mem::take(&mut self.notices) {
            self.io.say(notice);
        }

        loop {
            let rendered = self.menu.render();
            self.io.say(rendered.trim_end());

            let Some(choice) = self.io.prompt("Choose an option:")? else {
                debug!("Input ended at the menu");
                break;
            };
            let Some(action) = self.menu.lookup(&choice) else {
                self.io.say("Invalid option. Please choose again.".red());
                continue;
            };

            debug!("Menu action: {:?}", action);
            match action {
                MenuAction::AddQuestions => self.add_questions()?,
                MenuAction::TakeQuiz => self.take_quiz()?,
                MenuAction::ListSubjects => self.list_subjects(),
                MenuAction::Exit => break,
            }
        }

        self.io.say("Goodbye!");
        Ok(())
    }

    fn add_questions(&mut self) -> Result<(), InteractionError> {
        let mut authoring = ConsoleAuthoring::new(&mut self.io);
        let output = match AddQuestionsUseCase::new(&mut self.repository).execute(&mut authoring)
        {
            Ok(output) => output,
            Err(AddQuestionsError::Interaction(e)) => return Err(e),
        };

        if output.added > 0 {
            self.io
                .say(ConsoleFormatter::added(output.added, &output.save_errors));
        }
        Ok(())
    }

    fn take_quiz(&mut self) -> Result<(), InteractionError> {
        let Some(subject) = self.io.read_non_empty("Enter the subject:", "Subject")? else {
            return Ok(());
        };
        let label = format!(
            "How many questions? ({}-{}):",
            self.policy.min_questions, self.policy.max_questions
        );
        let Some(count) = self.io.read_number(&label, self.policy.count_range())? else {
            return Ok(());
        };

        let mut interaction = ConsoleQuizInteraction::new(&mut self.io);
        let result = RunQuizUseCase::new(&self.repository)
            .with_invalid_answer_policy(self.policy.invalid_answer)
            .execute(
                RunQuizInput::new(subject, count),
                &mut interaction,
                &mut self.rng,
            );

        match result {
            Ok(result) => self.io.say(ConsoleFormatter::result(&result)),
            Err(RunQuizError::Interaction(e)) => return Err(e),
            Err(e) => self.io.say(e.to_string().yellow()),
        }
        Ok(())
    }

    fn list_subjects(&mut self) {
        let listing = ConsoleFormatter::subjects(&self.repository.subjects());
        self.io.say(listing.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuEntry;
    use quizmaker_application::InMemoryQuestionStore;
    use quizmaker_domain::Question;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    type TestApp = QuizApp<InMemoryQuestionStore, Cursor<Vec<u8>>, Vec<u8>, StdRng>;

    fn math_question(text: &str) -> Question {
        Question::try_new(text, vec!["yes".to_string(), "no".to_string()], [0], "math").unwrap()
    }

    fn app(questions: Vec<Question>, input: &str) -> TestApp {
        colored::control::set_override(false);
        let repository =
            QuestionRepository::open(InMemoryQuestionStore::with_questions(questions)).unwrap();
        let io = ConsoleIo::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        QuizApp::new(repository, Menu::default(), io, StdRng::seed_from_u64(7))
            .with_policy(QuizPolicy::default().with_count_range(1, 5))
    }

    fn run(mut app: TestApp) -> (usize, String) {
        app.run().unwrap();
        let count = app.repository().len();
        (count, String::from_utf8(app.into_output()).unwrap())
    }

    #[test]
    fn test_add_question_then_list_subjects() {
        let app = app(Vec::new(), "1\n2+2?\nMath\n2\n3\n4\n2\nno\n3\n4\n");
        let (count, output) = run(app);

        assert_eq!(count, 1);
        assert!(output.contains("Added 1 question."));
        assert!(output.contains("  * Math\n"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_added_questions_are_persisted() {
        let input = "1\nq1\nmath\n1\nonly\n1\nyes\nq2\nmath\n1\nonly\n1\nno\n4\n";
        let mut app = app(Vec::new(), input);
        app.run().unwrap();
        assert_eq!(app.repository().store().stored().len(), 2);
        assert_eq!(app.repository().store().save_count(), 2);
    }

    #[test]
    fn test_take_quiz_full_score() {
        let app = app(
            vec![math_question("a?"), math_question("b?")],
            "2\nMATH\n2\n1\n1\n4\n",
        );
        let (_, output) = run(app);

        assert_eq!(output.matches("Correct!").count(), 2);
        assert!(output.contains("Your final score is 2 out of 2."));
    }

    #[test]
    fn test_take_quiz_reasks_count_out_of_range() {
        let app = app(vec![math_question("a?")], "2\nmath\n9\n1\n2\n4\n");
        let (_, output) = run(app);

        assert!(output.contains("Please enter a number between 1 and 5."));
        assert!(output.contains("Incorrect."));
        assert!(output.contains("Your final score is 0 out of 1."));
    }

    #[test]
    fn test_take_quiz_unknown_subject() {
        let app = app(vec![math_question("a?")], "2\nhistory\n1\n4\n");
        let (_, output) = run(app);
        assert!(output.contains("No questions available for the subject: history"));
    }

    #[test]
    fn test_quit_mid_quiz_reports_partial_score() {
        let app = app(
            vec![math_question("a?"), math_question("b?")],
            "2\nmath\n2\n1\nq\n4\n",
        );
        let (_, output) = run(app);

        assert!(output.contains("Quiz stopped after 1 of 2 question(s)."));
        assert!(output.contains("Your score is 1 out of 1."));
    }

    #[test]
    fn test_notice_follows_banner() {
        let mut app = app(Vec::new(), "4\n");
        app.notice("Warning: store is corrupt");
        let (_, output) = run(app);

        let banner = output.find("Quiz Maker").unwrap();
        let notice = output.find("Warning: store is corrupt").unwrap();
        let menu = output.find("Menu:").unwrap();
        assert!(banner < notice && notice < menu);
    }

    #[test]
    fn test_custom_menu_table() {
        colored::control::set_override(false);
        let repository = QuestionRepository::open(InMemoryQuestionStore::new()).unwrap();
        let menu = Menu::new(vec![
            MenuEntry::new("s", "Subjects", MenuAction::ListSubjects),
            MenuEntry::new("x", "Leave", MenuAction::Exit),
        ]);
        let io = ConsoleIo::new(Cursor::new(b"1\ns\nx\n".to_vec()), Vec::new());
        let app = QuizApp::new(repository, menu, io, StdRng::seed_from_u64(7));
        let (_, output) = run(app);

        assert!(output.contains("  s. Subjects\n"));
        assert!(output.contains("Invalid option. Please choose again."));
        assert!(output.contains("No questions have been added yet."));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_invalid_menu_option() {
        let (_, output) = run(app(Vec::new(), "9\n4\n"));
        assert!(output.contains("Invalid option. Please choose again."));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (count, output) = run(app(Vec::new(), "1\n2+2?\n"));
        assert_eq!(count, 0);
        assert!(output.ends_with("Goodbye!\n"));
    }
}
