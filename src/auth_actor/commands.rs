//! Commands and queries for the auth session store.

use crate::model::User;

/// Mutations of the auth session. The fake backend never rejects
/// credentials, so there is no failure variant to model.
#[derive(Debug, Clone)]
pub enum AuthCommand {
    /// Commit a signed-in user (the end of a simulated login/signup).
    SetUser(User),
    /// Sign out. Immediate, no simulated latency.
    ClearUser,
}

/// Read-only questions about the auth session.
#[derive(Debug, Clone)]
pub enum AuthQuery {
    CurrentUser,
    IsAuthenticated,
}

/// Results from auth queries - variants match 1:1 with [`AuthQuery`].
#[derive(Debug, Clone)]
pub enum AuthQueryResult {
    CurrentUser(Option<User>),
    IsAuthenticated(bool),
}
