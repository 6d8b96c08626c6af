use ferrous_mdns_domain::{DomainError, QueryEvent, Record, RemoteInfo};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::ports::{Clock, ResponseSender};
use crate::services::{QueryMatcher, RecordRegistry, ResponseDeduplicator};

/// What happened to the questions of one query event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub remote: RemoteInfo,
    pub sent: usize,
    pub suppressed: usize,
    pub unanswered: usize,
    pub failures: Vec<DomainError>,
}

impl QueryOutcome {
    fn new(remote: RemoteInfo) -> Self {
        Self {
            remote,
            sent: 0,
            suppressed: 0,
            unanswered: 0,
            failures: Vec::new(),
        }
    }
}

/// Answers multicast queries from the records this host advertises.
///
/// Owns the registry and the suppression state; everything runs on the
/// caller's task, one query event at a time.
pub struct MdnsResponder {
    registry: RecordRegistry,
    deduplicator: ResponseDeduplicator,
    sender: Arc<dyn ResponseSender>,
}

impl MdnsResponder {
    pub fn new(
        sender: Arc<dyn ResponseSender>,
        clock: Arc<dyn Clock>,
        cache_window: Duration,
    ) -> Self {
        Self {
            registry: RecordRegistry::new(),
            deduplicator: ResponseDeduplicator::new(cache_window, clock),
            sender,
        }
    }

    pub fn register<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Record>,
    {
        self.registry.register(records);
    }

    pub fn unregister<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a Record>,
    {
        self.registry.unregister(records);
    }

    pub fn registry(&self) -> &RecordRegistry {
        &self.registry
    }

    pub fn deduplicator(&self) -> &ResponseDeduplicator {
        &self.deduplicator
    }

    /// Answers every question of `event` independently.
    ///
    /// A response is recorded as sent before it is handed to the transport,
    /// so a failed send is still suppressed for the rest of the window.
    pub fn handle_query(&mut self, event: &QueryEvent) -> QueryOutcome {
        self.deduplicator.start_window();

        let mut outcome = QueryOutcome::new(event.remote);
        let matcher = QueryMatcher::new(&self.registry);

        for question in &event.query.questions {
            let Some(response) = matcher.answer_question(question) else {
                debug!(
                    name = %question.name,
                    query_type = %question.query_type,
                    "No records for question"
                );
                outcome.unanswered += 1;
                continue;
            };

            if self.deduplicator.should_suppress(&response) {
                debug!(
                    name = %question.name,
                    query_type = %question.query_type,
                    "Recently sent same response"
                );
                outcome.suppressed += 1;
                continue;
            }

            self.deduplicator.record(&response);

            match self.sender.respond(&response) {
                Ok(()) => {
                    debug!(
                        name = %question.name,
                        query_type = %question.query_type,
                        answers = response.answers.len(),
                        additionals = response.additionals.len(),
                        "Response sent"
                    );
                    outcome.sent += 1;
                }
                Err(e) => {
                    warn!(error = %e, name = %question.name, "Failed to send response");
                    outcome.failures.push(e);
                }
            }
        }

        outcome
    }

    /// Drops the held responses and stops the suppression window.
    pub fn shutdown(&mut self) {
        self.deduplicator.clear();
    }
}
