//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session` persistence, the `gate` machine for
//! protected views, per-form `form` state) so pages depend on small focused
//! models and the pure transition logic stays unit-testable.

pub mod form;
pub mod gate;
pub mod session;
