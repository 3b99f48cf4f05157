//! Fixed lane set and the category values tasks carry.

use super::ParseLaneError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One of the fixed board lanes, in display order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Lane {
    /// Work that has not started.
    #[default]
    #[serde(rename = "To-Do")]
    ToDo,
    /// Work currently underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Finished work.
    #[serde(rename = "Done")]
    Done,
}

impl Lane {
    /// Every lane in display order.
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Returns the wire and display name of the lane.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To-Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl TryFrom<&str> for Lane {
    type Error = ParseLaneError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|lane| lane.as_str() == value)
            .ok_or_else(|| ParseLaneError(value.to_owned()))
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category value stored on a task.
///
/// Remote records may carry a category outside the lane set. Such values are
/// preserved verbatim rather than rejected, and the board groups them into a
/// single uncategorized bucket after the fixed lanes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskCategory {
    /// A member of the fixed lane set.
    Known(Lane),
    /// A value the board does not recognise.
    Unrecognized(String),
}

impl TaskCategory {
    /// Parses a raw category, keeping unknown values as
    /// [`TaskCategory::Unrecognized`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Lane::try_from(raw).map_or_else(|_| Self::Unrecognized(raw.to_owned()), Self::Known)
    }

    /// Returns the lane when the category is recognised.
    #[must_use]
    pub const fn lane(&self) -> Option<Lane> {
        match self {
            Self::Known(lane) => Some(*lane),
            Self::Unrecognized(_) => None,
        }
    }

    /// Returns the board bucket this category falls into.
    #[must_use]
    pub const fn lane_key(&self) -> LaneKey {
        match self {
            Self::Known(lane) => LaneKey::Lane(*lane),
            Self::Unrecognized(_) => LaneKey::Uncategorized,
        }
    }

    /// Returns the raw category string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(lane) => lane.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<Lane> for TaskCategory {
    fn from(lane: Lane) -> Self {
        Self::Known(lane)
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TaskCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Key selecting one bucket of the board's per-lane partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaneKey {
    /// One of the fixed lanes.
    Lane(Lane),
    /// Tasks whose category is outside the fixed lane set.
    Uncategorized,
}

impl LaneKey {
    /// Every bucket in partition order.
    pub const ALL: [Self; 4] = [
        Self::Lane(Lane::ToDo),
        Self::Lane(Lane::InProgress),
        Self::Lane(Lane::Done),
        Self::Uncategorized,
    ];

    /// Returns whether a category belongs to this bucket.
    #[must_use]
    pub fn contains(self, category: &TaskCategory) -> bool {
        category.lane_key() == self
    }
}

impl From<Lane> for LaneKey {
    fn from(lane: Lane) -> Self {
        Self::Lane(lane)
    }
}

impl fmt::Display for LaneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lane(lane) => fmt::Display::fmt(lane, f),
            Self::Uncategorized => f.write_str("Uncategorized"),
        }
    }
}
