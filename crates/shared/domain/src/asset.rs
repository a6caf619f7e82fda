use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The two asset categories the service manages.
///
/// Each kind maps to its own backing directory and static mount. The enum
/// replaces the raw `"icon"`/`"flag"` strings at the API boundary as early
/// as possible; everything past the handlers works with `AssetKind`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Icon,
    Flag,
}
