//! Stable name + description carried by every bridge entity.

use serde::{Deserialize, Serialize};

/// Human-facing identity of a bridge entity: a stable lookup name and a
/// free-form description.
///
/// Immutable in normal use. Renaming happens only through an explicit
/// rename operation exposed by the owning entity, never by mutating a
/// shared `Identification` in place. Resolved handles compare equal by
/// name; reference identity is meaningless across resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identification {
    name: String,
    description: String,
}

impl Identification {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the name. Owning entities call this from their own rename
    /// operation; the field stays private so nothing else can.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

/// Implemented by every entity that carries an [`Identification`].
///
/// Composition over inheritance: entities embed an `Identification` value
/// and delegate through this trait.
pub trait Identified {
    fn identification(&self) -> &Identification;

    fn name(&self) -> &str {
        self.identification().name()
    }

    fn description(&self) -> &str {
        self.identification().description()
    }
}
