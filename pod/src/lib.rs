//! Session, storage, and application state for the Solid profile reader.
//!
//! The `solid-pod` crate is the layer between the pure profile resolver
//! and the outside world: explicit [`AppState`] instead of ambient view
//! state, an [`IdentityProvider`] seam in front of the OIDC dance, and a
//! [`PodStore`] seam in front of pod document storage with in-memory and
//! file-backed implementations.
//!
//! # Entry Point
//!
//! ```
//! use solid_pod::{AppState, AuthFlow, LoginConfig, StaticProvider};
//!
//! let mut app = AppState::new();
//! let provider = StaticProvider::new("https://ana.example/card#me");
//! let config = LoginConfig::solid_community("My Solid App", "https://app.example/");
//! app.handle_login(&provider, &config, AuthFlow::Pkce)?;
//! assert!(app.session.is_logged_in());
//! # Ok::<(), solid_pod::AuthError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod app;
pub mod session;
pub mod store;

pub use app::{AppState, RefreshTicket};
pub use session::{AuthError, AuthFlow, IdentityProvider, LoginConfig, SessionInfo, StaticProvider};
pub use store::{FilePod, MemoryPod, PodStore, StoreError};
