//! Storage backend implementations.
//!
//! This module provides concrete implementations of `ItemRepository`
//! defined in `paramgen_core::storage`. The service runs against DynamoDB;
//! the in-memory backend exists for tests.

pub mod dynamodb;

#[cfg(test)]
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
