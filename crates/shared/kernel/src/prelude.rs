//! One-stop imports for feature slices and the server app.

pub use crate::config::{ConfigError, load_config};
pub use crate::security::asset::AssetGuard;
pub use crate::server::reply::{ErrorReply, StatusReply};
pub use crate::server::state::{ApiState, ApiStateBuilder, ApiStateError};
pub use ihub_domain::asset::AssetKind;
pub use ihub_domain::capabilities::Capabilities;
pub use ihub_domain::config::ApiConfig;
pub use ihub_domain::registry::{FeatureSlice, InitializedSlice};
