//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; the rules that govern them live in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`Link`] - A registered short link and its usage counters
//! - [`NewLink`] - Creation input for a link

pub mod link;

pub use link::{Link, NewLink};
