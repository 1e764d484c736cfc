//! Key-value storage implementation for savings groups.

mod repository;

pub use repository::GroupRepository;
