//! Core types for hirelist-core.
//!
//! The endpoint returns a flat JSON array; each element maps to one
//! [`Record`]. Records are built once by the parser and only ever read after
//! that: the pipeline filters and reorders references, it never edits fields.

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use std::fmt;

/// One entry of the hiring list as delivered by the endpoint.
///
/// `id` is not required to be unique. `name` is `None` both when the key is
/// absent and when it is an explicit JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub id: i64,
    /// Group key. `listId` on the wire.
    pub list_id: i64,
    pub name: Option<String>,
}

impl Record {
    pub fn new(id: i64, list_id: i64, name: Option<&str>) -> Self {
        Self {
            id,
            list_id,
            name: name.map(str::to_string),
        }
    }

    /// A record is shown only if it has a name of non-zero length.
    ///
    /// No trimming: a name made of spaces is displayable.
    pub fn is_displayable(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// The name as a display row. Empty string for records without one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "#{} [list {}] {:?}", self.id, self.list_id, name),
            None => write!(f, "#{} [list {}] <no name>", self.id, self.list_id),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

// Hand-written rather than derived: a derived struct impl would also accept a
// positional array like `[1, 2, "x"]`, and every element must be an object.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with integer `id` and `listId` and an optional string `name`")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Record, A::Error> {
        let mut id: Option<i64> = None;
        let mut list_id: Option<i64> = None;
        let mut name: Option<Option<String>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "id" => {
                    if id.is_some() {
                        return Err(de::Error::duplicate_field("id"));
                    }
                    id = Some(map.next_value()?);
                }
                "listId" => {
                    if list_id.is_some() {
                        return Err(de::Error::duplicate_field("listId"));
                    }
                    list_id = Some(map.next_value()?);
                }
                "name" => {
                    if name.is_some() {
                        return Err(de::Error::duplicate_field("name"));
                    }
                    name = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(Record {
            id: id.ok_or_else(|| de::Error::missing_field("id"))?,
            list_id: list_id.ok_or_else(|| de::Error::missing_field("listId"))?,
            name: name.flatten(),
        })
    }
}
