//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `track`) so pages can depend on
//! small focused models that stay testable without a reactive runtime.

pub mod session;
pub mod track;
