//! Parsed answer selection value object

use crate::core::error::DomainError;
use std::collections::BTreeSet;

/// Separator between answer numbers in user input
pub const ANSWER_SEPARATOR: char = ',';

/// A set of chosen answers, stored as 0-based choice indexes (Value Object)
///
/// Built from user input with [`AnswerSelection::parse`], which accepts
/// 1-based display numbers and checks them against the number of choices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerSelection {
    indexes: BTreeSet<usize>,
}

impl AnswerSelection {
    /// Build a selection from 0-based indexes without range checks
    pub fn from_indexes(indexes: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indexes: indexes.into_iter().collect(),
        }
    }

    /// Parse comma-separated 1-based answer numbers.
    ///
    /// Blank tokens (e.g. a trailing comma) are ignored; any other token must
    /// be a number in `1..=choice_count`. Repeated numbers collapse.
    pub fn parse(input: &str, choice_count: usize) -> Result<Self, DomainError> {
        let mut indexes = BTreeSet::new();

        for token in input.split(ANSWER_SEPARATOR).map(str::trim) {
            if token.is_empty() {
                continue;
            }

            let number: usize = token.parse().map_err(|_| {
                DomainError::InvalidAnswerFormat(format!("'{}' is not a choice number", token))
            })?;

            if number == 0 || number > choice_count {
                return Err(DomainError::InvalidAnswerFormat(format!(
                    "{} is not between 1 and {}",
                    number, choice_count
                )));
            }

            indexes.insert(number - 1);
        }

        if indexes.is_empty() {
            return Err(DomainError::InvalidAnswerFormat(
                "no answer given".to_string(),
            ));
        }

        Ok(Self { indexes })
    }

    /// 0-based choice indexes
    pub fn indexes(&self) -> &BTreeSet<usize> {
        &self.indexes
    }

    /// 1-based numbers, as the user would type them
    pub fn display_numbers(&self) -> Vec<usize> {
        self.indexes.iter().map(|i| i + 1).collect()
    }
}

impl std::fmt::Display for AnswerSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let numbers: Vec<String> = self
            .display_numbers()
            .iter()
            .map(|n| n.to_string())
            .collect();
        write!(f, "{}", numbers.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_converts_to_zero_based() {
        let selection = AnswerSelection::parse("2", 3).unwrap();
        assert_eq!(selection.indexes().iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_parse_multiple_with_whitespace() {
        let selection = AnswerSelection::parse(" 3 ,1", 3).unwrap();
        assert_eq!(
            selection.indexes().iter().copied().collect::<Vec<_>>(),
            vec![0, 2]
        );
        assert_eq!(selection.to_string(), "1, 3");
    }

    #[test]
    fn test_parse_collapses_duplicates_and_skips_blanks() {
        let selection = AnswerSelection::parse("1,3,1,", 3).unwrap();
        assert_eq!(selection.display_numbers(), vec![1, 3]);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        let err = AnswerSelection::parse("1,b", 3).unwrap_err();
        assert!(err.is_answer_format());
        assert!(err.to_string().contains("'b'"));
        assert!(AnswerSelection::parse("-1", 3).is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(AnswerSelection::parse("0", 3).is_err());
        let err = AnswerSelection::parse("4", 3).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidAnswerFormat("4 is not between 1 and 3".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(AnswerSelection::parse("", 3).is_err());
        assert!(AnswerSelection::parse(" , ", 3).is_err());
    }
}
