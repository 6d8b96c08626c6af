#![allow(dead_code)]

mod fixtures;
mod mock_ports;

pub use fixtures::*;
pub use mock_ports::{FailingResponseSender, ManualClock, MockResponseSender};
