//! Outer adapters exposing the engine to USSD gateways.

pub mod http;
