/// A committed calculation: the expression as it was entered and the
/// formatted result it produced.
///
/// Entries are created only when `=` commits a successful evaluation and are
/// never mutated afterwards; the history list they live in is append-only and
/// can only be emptied wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}
