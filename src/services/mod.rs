//! Request factories and the seam to the transport-owning service client.

pub mod client;
pub mod download;
pub mod factory;
pub mod poll;
