//! Core domain entities.
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//! - [`NewLink`] - Creation data for a link

pub mod link;

pub use link::{Link, NewLink};
