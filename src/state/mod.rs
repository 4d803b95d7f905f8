//! Page-level state helpers.
//!
//! Pure decision and formatting logic factored out of the pages so it can be
//! tested natively, plus the toast queue context.

pub mod admin;
pub mod notify;
pub mod recipes;
