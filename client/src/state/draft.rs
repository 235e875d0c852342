//! Field schema shared by every form dialog.
//!
//! DESIGN
//! ======
//! A draft type describes its own inputs through a static [`FieldSpec`] list
//! and accepts edits keyed by the input `name`. The generic `FormModal`
//! renders from the schema, so adding a form means adding a draft type, not
//! another dialog component.

use serde::Serialize;

/// Kind of input rendered for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Date,
    TextArea { rows: u32 },
    Select(&'static [Choice]),
}

impl FieldKind {
    /// `type` attribute for `<input>` kinds; `None` for textarea and select.
    #[must_use]
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Date => Some("date"),
            Self::TextArea { .. } | Self::Select(_) => None,
        }
    }
}

/// One `<option>` of a select field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Static description of one form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Input `name`/`id`; also the key accepted by [`Draft::set_value`].
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Rejected field edit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("invalid value `{value}` for field `{field}`")]
    InvalidValue { field: &'static str, value: String },
}

impl DraftError {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_owned(),
        }
    }
}

/// An in-progress form value owned by one dialog.
///
/// `Default` is the empty form; `Serialize` produces the payload handed to
/// the submit sink.
pub trait Draft: Clone + Default + Serialize + Send + Sync + 'static {
    /// Inputs in display order.
    const FIELDS: &'static [FieldSpec];

    /// Current value of `name` as the DOM expects it.
    fn value(&self, name: &str) -> Option<String>;

    /// Replace exactly one field from its DOM string.
    ///
    /// # Errors
    ///
    /// [`DraftError::UnknownField`] for a name outside [`Draft::FIELDS`],
    /// [`DraftError::InvalidValue`] when the string does not parse.
    fn set_value(&mut self, name: &str, raw: &str) -> Result<(), DraftError>;
}

/// Look up a field spec by input name.
#[must_use]
pub fn field_spec<D: Draft>(name: &str) -> Option<&'static FieldSpec> {
    D::FIELDS.iter().find(|spec| spec.name == name)
}
