//! Absence request form draft.

#[cfg(test)]
#[path = "request_draft_test.rs"]
mod request_draft_test;

use serde::{Serialize, Serializer};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::draft::{Choice, Draft, DraftError, FieldKind, FieldSpec};

const DUE_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub const FIELD_TITLE: &str = "titre";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_PRIORITY: &str = "priorite";
pub const FIELD_CATEGORY: &str = "categorie";
pub const FIELD_DUE_DATE: &str = "dateEcheance";

const PRIORITY_CHOICES: &[Choice] = &[
    Choice { value: "basse", label: "Basse" },
    Choice { value: "normale", label: "Normale" },
    Choice { value: "haute", label: "Haute" },
    Choice { value: "urgente", label: "Urgente" },
];

const CATEGORY_CHOICES: &[Choice] = &[
    Choice { value: "general", label: "Général" },
    Choice { value: "technique", label: "Technique" },
    Choice { value: "fonctionnelle", label: "Fonctionnelle" },
    Choice { value: "support", label: "Support" },
    Choice { value: "amelioration", label: "Amélioration" },
];

/// Request urgency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Basse,
    #[default]
    Normale,
    Haute,
    Urgente,
}

impl Priority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basse => "basse",
            Self::Normale => "normale",
            Self::Haute => "haute",
            Self::Urgente => "urgente",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "basse" => Some(Self::Basse),
            "normale" => Some(Self::Normale),
            "haute" => Some(Self::Haute),
            "urgente" => Some(Self::Urgente),
            _ => None,
        }
    }
}

/// Request category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Technique,
    Fonctionnelle,
    Support,
    Amelioration,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Technique => "technique",
            Self::Fonctionnelle => "fonctionnelle",
            Self::Support => "support",
            Self::Amelioration => "amelioration",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "general" => Some(Self::General),
            "technique" => Some(Self::Technique),
            "fonctionnelle" => Some(Self::Fonctionnelle),
            "support" => Some(Self::Support),
            "amelioration" => Some(Self::Amelioration),
            _ => None,
        }
    }
}

/// Draft for the "Nouvelle Demande" dialog.
///
/// Serializes with the form's input names, an absent due date as `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RequestDraft {
    #[serde(rename = "titre")]
    pub title: String,
    pub description: String,
    #[serde(rename = "priorite")]
    pub priority: Priority,
    #[serde(rename = "categorie")]
    pub category: Category,
    #[serde(rename = "dateEcheance", serialize_with = "serialize_due_date")]
    pub due_date: Option<Date>,
}

impl Draft for RequestDraft {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { name: FIELD_TITLE, label: "Titre", kind: FieldKind::Text, required: true },
        FieldSpec {
            name: FIELD_DESCRIPTION,
            label: "Description",
            kind: FieldKind::TextArea { rows: 3 },
            required: true,
        },
        FieldSpec {
            name: FIELD_PRIORITY,
            label: "Priorité",
            kind: FieldKind::Select(PRIORITY_CHOICES),
            required: false,
        },
        FieldSpec {
            name: FIELD_CATEGORY,
            label: "Catégorie",
            kind: FieldKind::Select(CATEGORY_CHOICES),
            required: false,
        },
        FieldSpec { name: FIELD_DUE_DATE, label: "Date d'échéance", kind: FieldKind::Date, required: false },
    ];

    fn value(&self, name: &str) -> Option<String> {
        match name {
            FIELD_TITLE => Some(self.title.clone()),
            FIELD_DESCRIPTION => Some(self.description.clone()),
            FIELD_PRIORITY => Some(self.priority.as_str().to_owned()),
            FIELD_CATEGORY => Some(self.category.as_str().to_owned()),
            FIELD_DUE_DATE => Some(format_due_date(self.due_date)),
            _ => None,
        }
    }

    fn set_value(&mut self, name: &str, raw: &str) -> Result<(), DraftError> {
        match name {
            FIELD_TITLE => self.title = raw.to_owned(),
            FIELD_DESCRIPTION => self.description = raw.to_owned(),
            FIELD_PRIORITY => {
                self.priority = Priority::parse(raw).ok_or_else(|| DraftError::invalid(FIELD_PRIORITY, raw))?;
            }
            FIELD_CATEGORY => {
                self.category = Category::parse(raw).ok_or_else(|| DraftError::invalid(FIELD_CATEGORY, raw))?;
            }
            FIELD_DUE_DATE => self.due_date = parse_due_date(raw)?,
            other => return Err(DraftError::UnknownField(other.to_owned())),
        }
        Ok(())
    }
}

/// Parse the `<input type="date">` value; empty clears the date.
fn parse_due_date(raw: &str) -> Result<Option<Date>, DraftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Date::parse(raw, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| DraftError::invalid(FIELD_DUE_DATE, raw))
}

fn format_due_date(date: Option<Date>) -> String {
    date.and_then(|d| d.format(DUE_DATE_FORMAT).ok()).unwrap_or_default()
}

fn serialize_due_date<S: Serializer>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_due_date(*date))
}
