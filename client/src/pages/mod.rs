//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session gating, navigation)
//! and delegates rendering details to `components`.

pub mod landing;
pub mod track;
