//! Infrastructure layer implementing the interfaces defined by the domain layer.
//!
//! - [`persistence`] - Link storage implementations

pub mod persistence;
