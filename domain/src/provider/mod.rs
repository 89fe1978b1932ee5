//! Provider domain
//!
//! Static description of the text-generation backends that may sit on the
//! board, and the per-call credentials that decide which of them take part.
//!
//! - [`ProviderId`]: opaque identifier, unique within a registry
//! - [`ProviderSpec`]: immutable model/transport description
//! - [`CredentialSet`]: per-invocation API keys; decides who is *active*

pub mod credentials;
pub mod id;
pub mod spec;

pub use credentials::CredentialSet;
pub use id::ProviderId;
pub use spec::{ProviderSpec, Transport, default_specs};
