use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::auth_actor::{AuthCommand, AuthError, AuthQuery, AuthQueryResult, AuthSession};
use crate::clients::store_handle::StoreHandle;
use crate::framework::{FrameworkError, StoreClient};
use crate::model::User;

/// Default simulated backend latency for login and signup.
pub const DEFAULT_AUTH_LATENCY: Duration = Duration::from_millis(1000);

/// Client for the fake authentication store.
///
/// Login and signup are delay-based stubs: they sleep for the configured
/// latency and then commit the user. The futures are cancel-safe before the
/// commit point — dropping one during the simulated delay (e.g., the view
/// navigated away) leaves the session unchanged, instead of an orphaned timer
/// firing into nothing.
#[derive(Clone)]
pub struct AuthClient {
    inner: StoreClient<AuthSession>,
    latency: Duration,
}

impl AuthClient {
    pub fn new(inner: StoreClient<AuthSession>) -> Self {
        Self {
            inner,
            latency: DEFAULT_AUTH_LATENCY,
        }
    }

    /// Overrides the simulated backend latency. Tests pair this with a
    /// paused tokio clock.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Simulated login. The fake backend accepts any credentials and derives
    /// the display name from the email's local part.
    #[instrument(skip(self, _password))]
    pub async fn login(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        debug!(email, "login called");
        tokio::time::sleep(self.latency).await;

        let name = email.split('@').next().unwrap_or(email).to_owned();
        let user = User::new(1, name, email);
        self.inner
            .command(AuthCommand::SetUser(user.clone()))
            .await
            .map_err(Self::map_error)?;
        info!(email, "Signed in");
        Ok(user)
    }

    /// Simulated signup. Same stub semantics as [`AuthClient::login`], with
    /// an explicit display name.
    #[instrument(skip(self, _password))]
    pub async fn signup(&self, name: &str, email: &str, _password: &str) -> Result<User, AuthError> {
        debug!(name, email, "signup called");
        tokio::time::sleep(self.latency).await;

        let user = User::new(1, name, email);
        self.inner
            .command(AuthCommand::SetUser(user.clone()))
            .await
            .map_err(Self::map_error)?;
        info!(email, "Signed up");
        Ok(user)
    }

    /// Signs out immediately; no simulated latency.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.inner
            .command(AuthCommand::ClearUser)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    pub async fn current_user(&self) -> Result<Option<User>, AuthError> {
        match self.query(AuthQuery::CurrentUser).await? {
            AuthQueryResult::CurrentUser(user) => Ok(user),
            other => Err(AuthError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    pub async fn is_authenticated(&self) -> Result<bool, AuthError> {
        match self.query(AuthQuery::IsAuthenticated).await? {
            AuthQueryResult::IsAuthenticated(authed) => Ok(authed),
            other => Err(AuthError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    async fn query(&self, query: AuthQuery) -> Result<AuthQueryResult, AuthError> {
        self.inner.query(query).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreHandle<AuthSession> for AuthClient {
    type Error = AuthError;

    fn inner(&self) -> &StoreClient<AuthSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        AuthError::StoreCommunicationError(e.to_string())
    }
}
