//! Route-level screens, one module per route.

pub mod about;
pub mod admin;
pub mod error404;
pub mod home;
pub mod ingredients;
pub mod login;
pub mod recipes;
