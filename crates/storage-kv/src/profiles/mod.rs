//! Key-value storage implementation for user profiles.

mod repository;

pub use repository::ProfileRepository;
