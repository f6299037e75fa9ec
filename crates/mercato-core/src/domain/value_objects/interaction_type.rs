//! Interaction type value object.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// The kind of behavioral signal recorded between a user and a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    View,
    Like,
    Save,
    Purchase,
    Share,
}

impl InteractionType {
    /// Returns the canonical wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Like => "like",
            Self::Save => "save",
            Self::Purchase => "purchase",
            Self::Share => "share",
        }
    }
}

impl Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "like" => Ok(Self::Like),
            "save" => Ok(Self::Save),
            "purchase" => Ok(Self::Purchase),
            "share" => Ok(Self::Share),
            other => Err(format!(
                "invalid interaction_type '{}': must be one of view, like, save, purchase, share",
                other
            )),
        }
    }
}
