//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.

pub mod link_repository;

pub use link_repository::{InsertOutcome, LinkRepository};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
