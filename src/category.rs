use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// A category ID.
#[allow(clippy::module_name_repetitions)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

/// A category payload exactly as the server returned it. Categories have no
/// pretty projection; they pass through untouched in every configuration.
pub type Category = serde_json::Value;
