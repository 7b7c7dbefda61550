//! Device directory — the pairable devices reported by the backend.
//!
//! The directory is materialised once per page from the `/devices` payload
//! and is immutable afterwards. Insertion order is the order of the payload.
//!
//! ## Accepted payloads
//!
//! | Shape | Example |
//! |-------|---------|
//! | empty body / `{}` / `[]` | no pairable devices |
//! | key → name | `{"aa:bb": "Printer"}` |
//! | key → details | `{"aa:bb": {"name": "Printer", "security": "enterprise"}}` |
//! | list of pairs | `[["aa:bb", "Printer"], ["cc:dd", "TV", "NONE"]]` |

use std::fmt;

use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// Address-like identity of a pairable device (e.g. `00:16:BC:30:D8:76`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceKey(String);

impl DeviceKey {
    /// Wrap an address string.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the raw address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Security classification advertised for a device.
///
/// Parsing is case-insensitive. Values outside the known set are kept
/// verbatim in [`Security::Unknown`] so they can be logged and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Security {
    /// No credentials required.
    None,
    /// Enterprise pairing: service and protocol/port must be supplied.
    Enterprise,
    /// Any other classification.
    Unknown(String),
}

impl Security {
    /// Parse a classification string.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "NONE" => Self::None,
            "ENTERPRISE" => Self::Enterprise,
            _ => Self::Unknown(value.to_string()),
        }
    }
}

impl From<String> for Security {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Security> for String {
    fn from(value: Security) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("NONE"),
            Self::Enterprise => f.write_str("ENTERPRISE"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// A single pairable device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub key: DeviceKey,
    pub name: String,
    pub security: Option<Security>,
}

impl DeviceEntry {
    /// Build an entry without a security classification.
    #[must_use]
    pub fn new(key: impl Into<DeviceKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            security: None,
        }
    }

    /// Attach a security classification.
    #[must_use]
    pub fn with_security(mut self, security: Security) -> Self {
        self.security = Some(security);
        self
    }
}

/// Ordered collection of pairable devices with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceDirectory {
    entries: Vec<DeviceEntry>,
}

impl DeviceDirectory {
    /// Decode a `/devices` response body.
    ///
    /// A blank body is the backend's way of saying "no devices" and yields an
    /// empty directory.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Malformed`] when the body is neither blank
    /// nor one of the accepted JSON shapes.
    pub fn parse(body: &str) -> Result<Self, DirectoryError> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(body)?)
    }

    /// Append an entry, keeping the first occurrence of a duplicated key.
    ///
    /// Returns `false` when the key was already present.
    pub fn insert(&mut self, entry: DeviceEntry) -> bool {
        if self.contains(&entry.key) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    #[must_use]
    pub fn get(&self, key: &DeviceKey) -> Option<&DeviceEntry> {
        self.entries.iter().find(|entry| &entry.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &DeviceKey) -> bool {
        self.get(key).is_some()
    }

    /// The entry a selection control shows by default.
    #[must_use]
    pub fn first(&self) -> Option<&DeviceEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in payload order.
    pub fn iter(&self) -> impl Iterator<Item = &DeviceEntry> {
        self.entries.iter()
    }
}

impl FromIterator<DeviceEntry> for DeviceDirectory {
    fn from_iter<T: IntoIterator<Item = DeviceEntry>>(iter: T) -> Self {
        let mut directory = Self::default();
        for entry in iter {
            directory.insert(entry);
        }
        directory
    }
}

/// Value side of the key → value object form.
#[derive(Deserialize)]
#[serde(untagged)]
enum EntryValue {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        security: Option<Security>,
    },
}

/// Element of the list-of-pairs form.
#[derive(Deserialize)]
#[serde(untagged)]
enum EntryTuple {
    Secured(DeviceKey, String, Security),
    Plain(DeviceKey, String),
}

impl<'de> Deserialize<'de> for DeviceDirectory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DirectoryVisitor)
    }
}

struct DirectoryVisitor;

impl<'de> Visitor<'de> for DirectoryVisitor {
    type Value = DeviceDirectory;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of device keys to names or a list of [key, name] pairs")
    }

    // Walking the map directly keeps payload order regardless of how
    // serde_json stores objects.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut directory = DeviceDirectory::default();
        while let Some((key, value)) = map.next_entry::<DeviceKey, EntryValue>()? {
            let entry = match value {
                EntryValue::Name(name) => DeviceEntry::new(key, name),
                EntryValue::Detailed { name, security } => DeviceEntry {
                    key,
                    name,
                    security,
                },
            };
            directory.insert(entry);
        }
        Ok(directory)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut directory = DeviceDirectory::default();
        while let Some(tuple) = seq.next_element::<EntryTuple>()? {
            let entry = match tuple {
                EntryTuple::Secured(key, name, security) => {
                    DeviceEntry::new(key, name).with_security(security)
                }
                EntryTuple::Plain(key, name) => DeviceEntry::new(key, name),
            };
            directory.insert(entry);
        }
        Ok(directory)
    }
}
