//! Name service messages used by the node status exchange

pub mod common;
pub mod names;
pub mod node_status;
pub mod question;
pub mod statistics;

// Re-export commonly used types
pub use common::NbnsMessage;
pub use names::{NameFlags, NodeName, OwnerNodeType};
pub use node_status::{
    decode_response, encode_request, expected_response_len, NodeStatusRequest,
    NodeStatusResponse,
};
pub use question::{Question, ResourceRecord};
pub use statistics::Statistics;
