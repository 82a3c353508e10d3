//! Domain records, value types and the storage/translation ports the
//! application layer depends on.

pub mod credential;
pub mod language;
pub mod message;
pub mod ports;
pub mod session;
pub mod subscriber;
