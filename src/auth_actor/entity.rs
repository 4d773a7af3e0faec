//! The auth session aggregate and its [`StoreState`] implementation.

use serde::{Deserialize, Serialize};

use crate::auth_actor::{AuthCommand, AuthQuery, AuthQueryResult};
use crate::framework::StoreState;
use crate::model::User;

/// Session-scoped authentication state: who, if anyone, is signed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: Option<User>,
}

impl AuthSession {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl StoreState for AuthSession {
    type Command = AuthCommand;
    type Query = AuthQuery;
    type QueryResult = AuthQueryResult;

    fn apply(&mut self, command: AuthCommand) {
        match command {
            AuthCommand::SetUser(user) => self.user = Some(user),
            AuthCommand::ClearUser => self.user = None,
        }
    }

    fn query(&self, query: AuthQuery) -> AuthQueryResult {
        match query {
            AuthQuery::CurrentUser => AuthQueryResult::CurrentUser(self.user.clone()),
            AuthQuery::IsAuthenticated => {
                AuthQueryResult::IsAuthenticated(self.is_authenticated())
            }
        }
    }
}
