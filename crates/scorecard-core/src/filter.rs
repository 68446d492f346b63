//! Case-insensitive substring search over score records.

use crate::model::ScoreRecord;

/// An applied search: an email needle and a module needle, combined with AND.
///
/// Empty needles match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreQuery {
    email: String,
    module: String,
    email_needle: String,
    module_needle: String,
}

impl ScoreQuery {
    pub fn new(email: impl Into<String>, module: impl Into<String>) -> Self {
        let email = email.into();
        let module = module.into();
        Self {
            email_needle: email.to_lowercase(),
            module_needle: module.to_lowercase(),
            email,
            module,
        }
    }

    /// The email text as typed.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The module text as typed.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// True when the query matches every record.
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.module.is_empty()
    }

    /// Whether `record` satisfies both needles.
    pub fn matches(&self, record: &ScoreRecord) -> bool {
        field_matches(record.email.as_deref(), &self.email_needle)
            && field_matches(record.module.as_deref(), &self.module_needle)
    }
}

// A missing field only satisfies an empty needle.
fn field_matches(value: Option<&str>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    value.is_some_and(|v| v.to_lowercase().contains(needle))
}

/// Records matching `query`, in input order.
///
/// Takes any iterator of record references so a filtered result can be fed
/// back in.
pub fn filter_records<'a, I>(records: I, query: &ScoreQuery) -> Vec<&'a ScoreRecord>
where
    I: IntoIterator<Item = &'a ScoreRecord>,
{
    records.into_iter().filter(|r| query.matches(r)).collect()
}

/// Positions in `records` of the entries matching `query`, ascending.
pub fn filter_indices(records: &[ScoreRecord], query: &ScoreQuery) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| query.matches(r))
        .map(|(i, _)| i)
        .collect()
}
