//! User profile module - nickname resolution for wallet addresses.

mod profiles_service;
mod profiles_traits;

pub use profiles_service::ProfileService;
pub use profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
