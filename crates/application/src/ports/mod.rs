mod clock;
mod response_sender;

pub use clock::{Clock, SystemClock};
pub use response_sender::ResponseSender;
