//! Core types for the paramgen parameter generator.
//!
//! This crate holds the pure parts of the service: the plugin request and
//! response envelopes, the effective table name rule, and the storage
//! abstraction implemented by the binary's backends. Nothing here talks to
//! AWS.

pub mod params;
pub mod serde;
pub mod storage;
