//! Secret lookup abstractions and implementations
//!
//! Credentials referenced by network profiles are read through the
//! `SecretStore` trait, so callers decide where secrets come from:
//! - `EnvSecretStore`: process environment
//! - `DotenvSecretStore`: a `.env` file, without touching the environment
//! - `MemorySecretStore`: in-memory, for tests
//! - `ChainSecretStore`: ordered fallback over other stores
//! - plain `HashMap<String, String>` and `BTreeMap<String, String>`

mod traits;
mod env_store;
mod dotenv_store;
mod memory_store;
mod chain_store;
mod map_store;

pub use traits::{SecretStore, SecretInfo, SecretStoreError, SecretStoreResult};
pub use env_store::EnvSecretStore;
pub use dotenv_store::DotenvSecretStore;
pub use memory_store::MemorySecretStore;
pub use chain_store::ChainSecretStore;
