//! Application state and handlers.
//!
//! The logged-in flag, profile data, and pod URL the original pod
//! reader held as ambient view state live here as one explicit value
//! passed to handlers. The resolver stays pure; this is the only
//! place resolved records are published.

use solid_graph::LinkedDataGraph;
use solid_profile_resolver::{resolve_profile, ProfileRecord};
use solid_vocab::iris::VCARD_NOTE;

use crate::session::{AuthError, AuthFlow, IdentityProvider, LoginConfig, SessionInfo};
use crate::store::{PodStore, StoreError};

/// Explicit application state: session, pod URL, and the last published
/// profile record.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current session.
    pub session: SessionInfo,
    /// URL of the pod document the read/write handlers target.
    pub pod_url: Option<String>,
    /// The last successfully published profile, if any.
    pub profile: Option<ProfileRecord>,
}

/// Receipt for an in-flight profile refresh: the WebID being resolved
/// and the session epoch the refresh started under.
///
/// If the session epoch moves before the refresh completes (logout or
/// re-login), the finished record is stale and must be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    web_id: String,
    epoch: u64,
}

impl RefreshTicket {
    /// The WebID document this refresh reads.
    #[must_use]
    pub fn web_id(&self) -> &str {
        &self.web_id
    }
}

impl AppState {
    /// A logged-out application with no pod URL and no profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs in through `provider` using the chosen `flow`. Any previous
    /// profile is dropped; the caller refreshes it against the new
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the provider rejects the attempt.
    pub fn handle_login(
        &mut self,
        provider: &dyn IdentityProvider,
        config: &LoginConfig,
        flow: AuthFlow,
    ) -> Result<(), AuthError> {
        let web_id = provider.login(config, flow)?;
        self.session.login_as(web_id);
        self.profile = None;
        Ok(())
    }

    /// Logs out, invalidating any in-flight refresh.
    pub fn handle_logout(&mut self) {
        self.session.logout();
        self.profile = None;
    }

    /// Starts a profile refresh for the logged-in WebID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotLoggedIn`] if no session is established.
    pub fn begin_refresh(&self) -> Result<RefreshTicket, StoreError> {
        let web_id = self.session.web_id().ok_or(StoreError::NotLoggedIn)?;
        Ok(RefreshTicket {
            web_id: web_id.to_owned(),
            epoch: self.session.epoch(),
        })
    }

    /// Publishes a finished resolution, unless the session moved since
    /// the ticket was issued. Returns whether the record was applied; a
    /// stale record is discarded wholesale, never partially applied.
    pub fn apply_profile(&mut self, ticket: &RefreshTicket, record: ProfileRecord) -> bool {
        if self.session.epoch() != ticket.epoch {
            return false;
        }
        self.profile = Some(record);
        true
    }

    /// Fetches the WebID document from `store`, resolves it, and
    /// publishes the record. Single-step convenience over
    /// [`begin_refresh`](Self::begin_refresh) /
    /// [`apply_profile`](Self::apply_profile).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if not logged in or the document cannot be
    /// fetched. Resolution itself never fails.
    pub fn refresh_profile(&mut self, store: &dyn PodStore) -> Result<(), StoreError> {
        let ticket = self.begin_refresh()?;
        let dataset = store.fetch(ticket.web_id())?;
        let record = resolve_profile(&dataset, ticket.web_id());
        self.apply_profile(&ticket, record);
        Ok(())
    }

    /// Lists the entity IRIs of the configured pod document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoPodUrl`] if no pod URL is configured, or
    /// a fetch failure from the store.
    pub fn read_pod(&self, store: &dyn PodStore) -> Result<Vec<String>, StoreError> {
        let url = self.pod_url.as_deref().ok_or(StoreError::NoPodUrl)?;
        let dataset = store.fetch(url)?;
        Ok(dataset.entities().iter().map(|e| e.id().to_owned()).collect())
    }

    /// Writes an example entity into the configured pod document,
    /// creating the document if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoPodUrl`] if no pod URL is configured, or
    /// a store failure on fetch or save.
    pub fn write_pod(&self, store: &dyn PodStore) -> Result<(), StoreError> {
        let url = self.pod_url.as_deref().ok_or(StoreError::NoPodUrl)?;
        let mut dataset = match store.fetch(url) {
            Ok(dataset) => dataset,
            Err(StoreError::NotFound(_)) => solid_graph::Dataset::new(),
            Err(err) => return Err(err),
        };
        dataset
            .upsert_entity(&format!("{url}#example"))
            .set_scalar(VCARD_NOTE, "example");
        store.save(url, &dataset)
    }

    /// Resolves a profile directly against an already-loaded graph and
    /// publishes it under the current epoch. Used by callers that manage
    /// their own document loading.
    pub fn publish_from_graph<G: LinkedDataGraph + ?Sized>(&mut self, graph: &G) -> bool {
        match self.begin_refresh() {
            Ok(ticket) => {
                let record = resolve_profile(graph, ticket.web_id());
                self.apply_profile(&ticket, record)
            }
            Err(_) => false,
        }
    }
}
