//! Storage layer: repository contracts, their implementations, and the
//! high-level service functions the rest of the crate uses.
//!
//! Application code should go through [`services`]; the repository
//! traits exist so backends can be swapped without touching callers.

pub mod factory;
pub mod repositories;
pub mod repository;
pub mod services;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repository::{
    BlockRepository, FullRepository, OverlapPolicy, RepositoryError, RepositoryResult,
    UserRepository,
};

#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;

#[cfg(not(any(feature = "local-repo")))]
compile_error!("at least one repository backend feature must be enabled (e.g. `local-repo`)");
