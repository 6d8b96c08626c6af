pub mod responder;

pub use responder::{MdnsResponder, QueryOutcome};
