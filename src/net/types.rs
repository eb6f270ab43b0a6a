//! Record wire types shared between pages, components, and the REST layer.
//!
//! DESIGN
//! ======
//! Member subtypes are a tagged enum rather than one struct of optional
//! fields, so each role carries exactly the fields that are relevant to it
//! and "required field missing for this type" cannot be represented.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::browser::Browsable;

/// One person on the team roster. `role` is flattened into the wire object
/// under a `type` discriminator field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub designation: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Epoch milliseconds assigned by the store at creation; default ordering key.
    #[serde(default)]
    pub created_at: i64,
    #[serde(flatten)]
    pub role: MemberRole,
}

/// Member subtype discriminator and its role-specific fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MemberRole {
    Faculty {
        department: String,
    },
    Advisory {
        education: String,
    },
    Executive {
        position: String,
        education: String,
    },
    Core {
        position: String,
        education: String,
    },
    Member {
        education: String,
    },
}

impl MemberRole {
    /// Filter-tab options in display order: (discriminator value, label).
    pub const FILTERS: [(&'static str, &'static str); 5] = [
        ("faculty", "Faculty"),
        ("advisory", "Advisory Board"),
        ("executive", "Executive Committee"),
        ("core", "Core Committee"),
        ("member", "Members"),
    ];

    /// The wire discriminator for this role.
    pub fn type_key(&self) -> &'static str {
        match self {
            Self::Faculty { .. } => "faculty",
            Self::Advisory { .. } => "advisory",
            Self::Executive { .. } => "executive",
            Self::Core { .. } => "core",
            Self::Member { .. } => "member",
        }
    }

    pub fn department(&self) -> Option<&str> {
        match self {
            Self::Faculty { department } => Some(department),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<&str> {
        match self {
            Self::Executive { position, .. } | Self::Core { position, .. } => Some(position),
            _ => None,
        }
    }

    pub fn education(&self) -> Option<&str> {
        match self {
            Self::Advisory { education } | Self::Member { education } => Some(education),
            Self::Executive { education, .. } | Self::Core { education, .. } => Some(education),
            Self::Faculty { .. } => None,
        }
    }

    /// The role-appropriate secondary search field.
    fn search_field(&self) -> &str {
        match self {
            Self::Faculty { department } => department,
            Self::Executive { position, .. } | Self::Core { position, .. } => position,
            Self::Advisory { education } | Self::Member { education } => education,
        }
    }
}

impl Browsable for MemberRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }

    fn type_key(&self) -> Option<&str> {
        Some(self.role.type_key())
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.designation, self.role.search_field()]
    }
}

/// One event, past or upcoming.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: i64,
}

impl Browsable for EventRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

/// One award or recognition entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRecord {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub awarded_by: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: i64,
}

impl Browsable for AwardRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut haystacks = vec![self.title.as_str()];
        if let Some(awarded_by) = self.awarded_by.as_deref() {
            haystacks.push(awarded_by);
        }
        haystacks
    }
}
