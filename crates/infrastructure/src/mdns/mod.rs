pub mod codec;
pub mod handle;
pub mod record_type_map;
pub mod server;
pub mod socket;
pub mod transport;

pub use codec::MdnsCodec;
pub use handle::{ResponderCommand, ResponderHandle};
pub use record_type_map::RecordTypeMapper;
pub use server::MdnsServer;
pub use transport::UdpResponseSender;
