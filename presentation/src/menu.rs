//! Main menu table: maps option codes to actions.
//!
//! The loop in [`crate::app`] only knows about [`MenuAction`]; codes and
//! labels live in the table.

use colored::Colorize;

/// What a menu option does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddQuestions,
    TakeQuiz,
    ListSubjects,
    Exit,
}

/// A single menu option
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub code: String,
    pub label: String,
    pub action: MenuAction,
}

impl MenuEntry {
    pub fn new(code: impl Into<String>, label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            action,
        }
    }
}

/// Menu table: option codes in display order
#[derive(Debug, Clone)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Find the action for a typed code (surrounding whitespace ignored)
    pub fn lookup(&self, code: &str) -> Option<MenuAction> {
        let code = code.trim();
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.action)
    }

    pub fn render(&self) -> String {
        let mut output = format!("\n{}\n", "Menu:".cyan().bold());
        for entry in &self.entries {
            output.push_str(&format!("  {}. {}\n", entry.code.bold(), entry.label));
        }
        output
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(vec![
            MenuEntry::new("1", "Add a Question", MenuAction::AddQuestions),
            MenuEntry::new("2", "Take the Quiz", MenuAction::TakeQuiz),
            MenuEntry::new("3", "List Subjects", MenuAction::ListSubjects),
            MenuEntry::new("4", "Exit", MenuAction::Exit),
        ])
    }
}
