//! Remote API access.
//!
//! SYSTEM CONTEXT
//! ==============
//! One generic gateway ([`api`]) builds URLs, attaches the bearer token and
//! normalizes every response; the facades ([`recipes`], [`users`]) map it to
//! typed operations over the wire DTOs in [`types`].

pub mod api;
pub mod recipes;
pub mod types;
pub mod users;
