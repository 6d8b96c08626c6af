use super::Record;

/// Records sent back for a single question.
///
/// Equality is structural and order-sensitive on both sections; that is the
/// comparison the responder uses to suppress repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MdnsResponse {
    pub answers: Vec<Record>,
    pub additionals: Vec<Record>,
}

impl MdnsResponse {
    pub fn new(answers: Vec<Record>, additionals: Vec<Record>) -> Self {
        Self {
            answers,
            additionals,
        }
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }
}
