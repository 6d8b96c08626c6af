use ferrous_mdns_domain::{MdnsResponse, Query, QueryType, Question, Record, RecordType};

use super::RecordRegistry;

/// Resolves questions against a registry.
///
/// Answers for a concrete type come straight from the registry. For PTR
/// answers the DNS-SD glue is attached as additionals: the SRV and TXT
/// records of each pointed-at instance, then the A and AAAA records of every
/// distinct SRV target. `ANY` questions fan out over all types and never carry
/// additionals.
pub struct QueryMatcher<'a> {
    registry: &'a RecordRegistry,
}

impl<'a> QueryMatcher<'a> {
    pub fn new(registry: &'a RecordRegistry) -> Self {
        Self { registry }
    }

    /// One candidate response per answerable question, in question order.
    pub fn answer(&self, query: &Query) -> Vec<MdnsResponse> {
        query
            .questions
            .iter()
            .filter_map(|question| self.answer_question(question))
            .collect()
    }

    /// Returns `None` when nothing in the registry matches the question.
    pub fn answer_question(&self, question: &Question) -> Option<MdnsResponse> {
        let answers = self.answers(question);
        if answers.is_empty() {
            return None;
        }

        let additionals = match question.query_type {
            QueryType::Any => Vec::new(),
            QueryType::Type(_) => self.additionals(&answers),
        };

        Some(MdnsResponse::new(answers, additionals))
    }

    fn answers(&self, question: &Question) -> Vec<Record> {
        match question.query_type {
            QueryType::Any => self
                .registry
                .record_types()
                .flat_map(|record_type| self.registry.records_for(&question.name, record_type))
                .collect(),
            QueryType::Type(record_type) => self.registry.records_for(&question.name, record_type),
        }
    }

    fn additionals(&self, answers: &[Record]) -> Vec<Record> {
        let mut additionals = Vec::new();

        for instance in answers.iter().filter_map(|a| a.data.ptr_target()) {
            additionals.extend(self.registry.records_for(instance, RecordType::SRV));
            additionals.extend(self.registry.records_for(instance, RecordType::TXT));
        }

        let mut targets: Vec<&str> = Vec::new();
        for target in additionals.iter().filter_map(|r| r.data.srv_target()) {
            if !targets.contains(&target) {
                targets.push(target);
            }
        }

        let mut hosts = Vec::new();
        for target in targets {
            hosts.extend(self.registry.records_for(target, RecordType::A));
            hosts.extend(self.registry.records_for(target, RecordType::AAAA));
        }

        additionals.extend(hosts);
        additionals
    }
}
