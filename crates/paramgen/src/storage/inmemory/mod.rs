//! In-memory storage backend for testing.
//!
//! Tables hold raw DynamoDB attribute maps, so scans go through the same
//! attribute conversion as the DynamoDB backend.

mod repository;

pub use repository::InMemoryRepository;
