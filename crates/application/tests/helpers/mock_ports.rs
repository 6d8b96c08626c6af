use ferrous_mdns_application::ports::{Clock, ResponseSender};
use ferrous_mdns_domain::{DomainError, MdnsResponse};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Records every response handed to the transport.
#[derive(Default)]
pub struct MockResponseSender {
    sent: Mutex<Vec<MdnsResponse>>,
}

impl MockResponseSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<MdnsResponse> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl ResponseSender for MockResponseSender {
    fn respond(&self, response: &MdnsResponse) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(response.clone());
        Ok(())
    }
}

/// Fails the first `failures` sends, then behaves like `MockResponseSender`.
pub struct FailingResponseSender {
    remaining_failures: Mutex<usize>,
    attempts: Mutex<usize>,
    sent: Mutex<Vec<MdnsResponse>>,
}

impl FailingResponseSender {
    pub fn new(failures: usize) -> Self {
        Self {
            remaining_failures: Mutex::new(failures),
            attempts: Mutex::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl ResponseSender for FailingResponseSender {
    fn respond(&self, response: &MdnsResponse) -> Result<(), DomainError> {
        *self.attempts.lock().unwrap() += 1;

        let mut remaining = self.remaining_failures.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(DomainError::TransmissionFailed {
                destination: "224.0.0.251:5353".to_string(),
                reason: "network unreachable".to_string(),
            });
        }

        self.sent.lock().unwrap().push(response.clone());
        Ok(())
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}
