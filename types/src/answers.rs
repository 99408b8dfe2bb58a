use std::collections::BTreeMap;

use crate::{Gender, QuestionId};

/// Answers collected so far, keyed by question.
///
/// Keys are never removed. Answering the same question again replaces the
/// stored text.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct AnswerMap {
    entries: BTreeMap<QuestionId, String>,
}

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` for `id`, returning the previous answer if any.
    pub fn record(&mut self, id: QuestionId, value: impl Into<String>) -> Option<String> {
        self.entries.insert(id, value.into())
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.entries.iter().map(|(id, value)| (*id, value.as_str()))
    }

    /// Gender branch selected by the `gender` answer, if it is exactly
    /// `"Female"` or `"Male"`.
    #[must_use]
    pub fn gender(&self) -> Option<Gender> {
        self.get(QuestionId::Gender).and_then(Gender::from_answer)
    }
}

impl<S: Into<String>> FromIterator<(QuestionId, S)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (QuestionId, S)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (id, value) in iter {
            answers.record(id, value);
        }
        answers
    }
}
