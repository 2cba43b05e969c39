//! NetBIOS name service protocol definitions

pub mod constants;
pub mod header;
pub mod messages;
pub mod wire;

pub use constants::Opcode;
pub use header::*;
pub use wire::WireReader;
