//! Authentication plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in the [`store`]; its payload is read by [`claims`];
//! [`session`] exposes both as reactive context; [`guards`] gate routes on
//! that context. The token is never verified client-side: the server is the
//! authority, the client only renders what the claims say.

pub mod claims;
pub mod guards;
pub mod session;
pub mod store;
