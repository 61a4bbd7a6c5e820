//! Network layer: REST client, wire types, and response normalization.
//!
//! DESIGN
//! ======
//! Every server response passes through [`normalize::normalize`] before any
//! other code sees it; pages and state modules only ever deal in the
//! normalized success-or-message shape, never raw HTTP status or bodies.

pub mod api;
pub mod normalize;
pub mod types;
