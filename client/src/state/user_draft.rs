//! User creation form draft.

#[cfg(test)]
#[path = "user_draft_test.rs"]
mod user_draft_test;

use serde::Serialize;

use super::draft::{Choice, Draft, DraftError, FieldKind, FieldSpec};

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_ROLE: &str = "role";

const ROLE_CHOICES: &[Choice] = &[
    Choice { value: "user", label: "Utilisateur" },
    Choice { value: "admin", label: "Administrateur" },
    Choice { value: "moderator", label: "Modérateur" },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    Moderator,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            "moderator" => Some(Self::Moderator),
            _ => None,
        }
    }
}

/// Draft for the user creation dialog. No field is required.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Draft for UserDraft {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { name: FIELD_NAME, label: "Username", kind: FieldKind::Text, required: false },
        FieldSpec { name: FIELD_EMAIL, label: "Email", kind: FieldKind::Email, required: false },
        FieldSpec { name: FIELD_ROLE, label: "Rôle", kind: FieldKind::Select(ROLE_CHOICES), required: false },
    ];

    fn value(&self, name: &str) -> Option<String> {
        match name {
            FIELD_NAME => Some(self.name.clone()),
            FIELD_EMAIL => Some(self.email.clone()),
            FIELD_ROLE => Some(self.role.as_str().to_owned()),
            _ => None,
        }
    }

    fn set_value(&mut self, name: &str, raw: &str) -> Result<(), DraftError> {
        match name {
            FIELD_NAME => self.name = raw.to_owned(),
            FIELD_EMAIL => self.email = raw.to_owned(),
            FIELD_ROLE => self.role = Role::parse(raw).ok_or_else(|| DraftError::invalid(FIELD_ROLE, raw))?,
            other => return Err(DraftError::UnknownField(other.to_owned())),
        }
        Ok(())
    }
}
