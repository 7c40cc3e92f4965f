//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `ItemRepository`
//! using `aws-sdk-dynamodb`.

pub(crate) mod conversions;
mod error;
mod pagination;
mod repository;

pub use repository::DynamoDbRepository;
