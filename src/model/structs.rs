use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Activity fields as the server sends them, keyed by name in the directory.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_details(name: String, details: ActivityDetails) -> Self {
        Self {
            name,
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    // Negative when the server has over-allocated.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Snapshot of `GET /activities`, in server response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDirectory {
    activities: Vec<Activity>,
}

impl ActivityDirectory {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

// A JSON object is unordered as far as `HashMap` is concerned, so the map is
// walked entry by entry to keep the order the server chose.
impl<'de> Deserialize<'de> for ActivityDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = ActivityDirectory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut activities: Vec<Activity> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
                    match activities.iter_mut().find(|a| a.name == name) {
                        // Later duplicates replace earlier ones, as a JS object would.
                        Some(existing) => *existing = Activity::from_details(name, details),
                        None => activities.push(Activity::from_details(name, details)),
                    }
                }
                Ok(ActivityDirectory { activities })
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}
