//! Repository implementations module.
//!
//! Currently only the in-memory `local` backend is built; a SQL backend
//! would implement the same traits behind its own feature flag.

#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
