//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session itself is owned by an external auth provider. This module only
//! mirrors what the provider reported so route guards and user-aware
//! components can coordinate sign-in redirects and identity-dependent
//! rendering.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;

/// Resolution status of the external session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Not yet resolved; the initial state on both server and browser.
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Session data plus its resolution status, provided via context as
/// `RwSignal<SessionState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub data: Option<Session>,
    pub status: SessionStatus,
}

impl SessionState {
    /// Build an already-resolved state.
    pub fn resolved(data: Option<Session>) -> Self {
        let status = if data.is_some() { SessionStatus::Authenticated } else { SessionStatus::Unauthenticated };
        Self { data, status }
    }

    /// Resolve a loading session. Once resolved the state never goes back to
    /// loading, and later resolutions are ignored.
    ///
    /// Returns `true` when the state changed.
    pub fn resolve(&mut self, data: Option<Session>) -> bool {
        if self.status != SessionStatus::Loading {
            return false;
        }
        *self = Self::resolved(data);
        true
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    /// Display name of the signed-in user, if the provider sent one.
    pub fn user_name(&self) -> Option<&str> {
        self.data.as_ref().and_then(|s| s.user.name.as_deref())
    }
}
