//! Session domain
//!
//! Shapes of replies coming back from the model client.

pub mod response;

pub use response::AgentReply;
