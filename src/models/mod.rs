//! Domain models.

pub mod repository;
pub mod verdict;
