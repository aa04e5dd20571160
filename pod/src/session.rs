//! Login configuration and session state.
//!
//! The identity provider itself is an opaque collaborator behind the
//! [`IdentityProvider`] trait; OIDC/OAuth mechanics are its concern, not
//! this crate's. What lives here is the explicit state the application
//! carries: which flow was chosen, which issuer to talk to, and who is
//! currently logged in.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The OAuth flow the user picked at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthFlow {
    /// Authorization code flow with PKCE.
    Pkce,
    /// Legacy implicit flow.
    Implicit,
    /// Plain authorization code flow.
    AuthorizationCode,
}

impl AuthFlow {
    /// Returns the human-readable flow name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AuthFlow::Pkce => "PKCE",
            AuthFlow::Implicit => "Implicit",
            AuthFlow::AuthorizationCode => "Authorization Code",
        }
    }
}

impl fmt::Display for AuthFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters handed to the identity provider at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginConfig {
    /// The OIDC issuer to authenticate against.
    pub oidc_issuer: String,
    /// Where the provider redirects after login.
    pub redirect_url: String,
    /// Client name shown on the provider's consent screen.
    pub client_name: String,
}

impl LoginConfig {
    /// Login configuration for the public `solidcommunity.net` issuer.
    #[must_use]
    pub fn solid_community(client_name: impl Into<String>, redirect_url: impl Into<String>) -> Self {
        Self {
            oidc_issuer: "https://solidcommunity.net".to_owned(),
            redirect_url: redirect_url.into(),
            client_name: client_name.into(),
        }
    }
}

/// Who is logged in, and a monotonically increasing epoch that
/// invalidates in-flight work when the session changes.
///
/// Every login and logout bumps the epoch. A profile resolution started
/// under an older epoch must be discarded rather than published (see
/// [`AppState::apply_profile`](crate::AppState::apply_profile)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInfo {
    web_id: Option<String>,
    epoch: u64,
}

impl SessionInfo {
    /// A fresh, logged-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a WebID is currently associated with the session.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.web_id.is_some()
    }

    /// The WebID of the logged-in user, if any.
    #[must_use]
    pub fn web_id(&self) -> Option<&str> {
        self.web_id.as_deref()
    }

    /// The current session epoch.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Associates `web_id` with the session and bumps the epoch.
    pub fn login_as(&mut self, web_id: impl Into<String>) {
        self.web_id = Some(web_id.into());
        self.epoch += 1;
    }

    /// Clears the session and bumps the epoch.
    pub fn logout(&mut self) {
        self.web_id = None;
        self.epoch += 1;
    }
}

/// Failure to establish a session.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider rejected the login attempt.
    #[error("{issuer} rejected the {flow} login")]
    Rejected {
        /// The issuer that rejected the attempt.
        issuer: String,
        /// The flow that was attempted.
        flow: AuthFlow,
    },
    /// The provider could not be reached at all.
    #[error("identity provider unreachable: {0}")]
    Unreachable(String),
}

/// Opaque identity-provider collaborator.
///
/// Implementations perform whatever redirect or token dance their
/// protocol requires and come back with the authenticated WebID.
pub trait IdentityProvider {
    /// Authenticates against `config.oidc_issuer` using `flow` and
    /// returns the WebID of the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the provider rejects the attempt or is
    /// unreachable.
    fn login(&self, config: &LoginConfig, flow: AuthFlow) -> Result<String, AuthError>;
}

/// Identity provider that always authenticates the same WebID.
/// Deterministic stand-in for tests and demos.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    web_id: String,
}

impl StaticProvider {
    /// Creates a provider that logs everyone in as `web_id`.
    #[must_use]
    pub fn new(web_id: impl Into<String>) -> Self {
        Self { web_id: web_id.into() }
    }
}

impl IdentityProvider for StaticProvider {
    fn login(&self, _config: &LoginConfig, _flow: AuthFlow) -> Result<String, AuthError> {
        Ok(self.web_id.clone())
    }
}
