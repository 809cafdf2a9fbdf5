//! Element relationships
//!
//! Elements declare which element they control, which elements they close
//! and which buddies follow them. The graph resolves the primary target of
//! a gesture and the ordered set of elements moving with it.

mod graph;
mod opened_by;

pub use graph::{ElementDecl, RelationGraph};
pub use opened_by::OpenedBy;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable element identity
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Create an identity
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identity as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a comma separated identity list such as `overlay, backdrop`
pub fn parse_id_list(value: &str) -> Vec<ElementId> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ElementId::from)
        .collect()
}
