//! chantier content - cached JSON content client
//!
//! Loads the public site's content documents from a static JSON store:
//! a reqwest fetcher behind a TTL cache with stale-on-error fallback, a
//! manifest-driven collection loader with best-effort fan-out, and a
//! load-state adapter for reactive views. The admin module covers the thin
//! boundary to the external identity provider; authentication itself is
//! delegated, not implemented here.

pub mod admin;
pub mod cache;
pub mod config;
pub mod fetch;
pub mod load_state;
pub mod loader;
pub mod refresh;

pub use admin::{AdminGate, AuthEvent, AuthState, AuthUser, IdentityProvider};
pub use cache::{CacheConfig, ContentCache};
pub use config::{ConfigError, ContentConfig};
pub use fetch::{DocumentSource, HttpFetcher};
pub use load_state::{LoadSlot, LoadState, LoadToken};
pub use loader::ContentLoader;
pub use refresh::RefreshTask;
