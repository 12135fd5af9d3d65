use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One signup-able activity as served by `GET /activities`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Activity {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    pub max_participants: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the server is over capacity.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> core::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Activities keyed by name, in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivitySet {
    entries: Vec<(String, Activity)>,
}

impl ActivitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces in place, keeping the first position of the name.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for ActivitySet {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitySetVisitor;

        impl<'de> Visitor<'de> for ActivitySetVisitor {
            type Value = ActivitySet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<M>(self, mut access: M) -> core::result::Result<ActivitySet, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut set = ActivitySet::new();
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    set.insert(name, activity);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ActivitySetVisitor)
    }
}
