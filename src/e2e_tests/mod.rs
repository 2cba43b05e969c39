//! End-to-end tests against an in-process name service peer

pub mod responder;
pub mod test_context;

// Test scenario modules
pub mod malformed_responses;

pub use responder::{Responder, ResponderBehavior};
pub use test_context::TestContext;
