//! Networking and data-access modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` reads the externally managed auth session, `reports` is the report
//! lookup seam used by the tracking page, and `types` defines the shared
//! wire and view-model schema.

pub mod api;
pub mod reports;
pub mod types;
