//! Network registration and configuration resolution
//!
//! [`NetworkRegistry`] holds the static network table; [`ConfigResolver`]
//! turns one registered network plus a secret source into a validated,
//! immutable [`ResolvedConfig`].

mod error;
mod registry;
mod resolved;
mod config_resolver;

pub use error::{ResolveError, ResolveResult};
pub use registry::{NetworkRegistry, NetworkNames};
pub(crate) use registry::validate_name;
pub use resolved::{ResolvedConfig, ResolvedNetwork, ResolvedVerification, SecretValue};
pub use config_resolver::{ConfigResolver, MAX_CHAIN_ID};
