//! Subject matching.
//!
//! Subjects are free-text labels. Two subjects are the same when they are
//! equal ignoring case, so "Math", "math" and "MATH" select the same pool.

/// Case-folded form of a subject, used as a comparison key
pub fn normalize(subject: &str) -> String {
    subject.to_lowercase()
}

/// Check whether two subject labels name the same subject
pub fn matches(left: &str, right: &str) -> bool {
    left == right || normalize(left) == normalize(right)
}
