//! Roster data model as served by `GET /activities`.
//!
//! The wire format is a JSON object keyed by activity name. Key order is
//! meaningful for display, so [`Roster`] keeps the entries in the order the
//! server sent them instead of going through a hash map.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single activity and its current participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity as reported by the server's participant count.
    ///
    /// Signed so an over-full activity shows a negative number rather than
    /// wrapping; the client does not enforce capacity.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Activities keyed by name, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(String, Activity)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an activity, replacing an earlier one with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = activity;
        } else {
            self.entries.push((name, activity));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Activity)> for Roster {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for (name, activity) in iter {
            roster.insert(name, activity);
        }
        roster
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

struct RosterVisitor;

impl<'de> Visitor<'de> for RosterVisitor {
    type Value = Roster;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Roster, M::Error> {
        let mut roster = Roster {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
            roster.insert(name, activity);
        }
        Ok(roster)
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RosterVisitor)
    }
}
