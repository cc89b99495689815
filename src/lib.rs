//! Blocking, sequenced request/response calls over one shared message channel.

pub mod constants;
pub mod protocol;
pub mod rpc;
pub mod utils;
