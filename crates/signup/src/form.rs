// File: src/form.rs
// Purpose: Value types held by the form: field values, touched flags, errors, snapshot

use crate::field::Field;
use crate::validation::ValidationError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};

/// The four current input values of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSet {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FieldSet {
    /// Empty form values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Builder-style [`FieldSet::set`]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// True when every value is the empty string.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

/// Fields the user has interacted with. A field that is absent is untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TouchedSet(BTreeSet<Field>);

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field marked as touched
    pub fn all() -> Self {
        Self(Field::ALL.into_iter().collect())
    }

    pub fn touch(&mut self, field: Field) {
        self.0.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }
}

/// Per-field validation errors.
///
/// An `ErrorSet` is only ever built by the validator from a whole
/// [`FieldSet`]; there is no way to insert or remove a single
/// entry from outside this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet(BTreeMap<Field, ValidationError>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, error: ValidationError) {
        self.0.insert(error.field(), error);
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// User-facing message for a field, if it has an error
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

impl Serialize for ErrorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field.name(), &error.to_string())?;
        }
        map.end()
    }
}

/// Copy of the [`FieldSet`] taken at a successful submit.
///
/// Immutable once taken; a later successful submit replaces it as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot(FieldSet);

impl Snapshot {
    pub(crate) fn take(fields: &FieldSet) -> Self {
        Self(fields.clone())
    }

    pub fn fields(&self) -> &FieldSet {
        &self.0
    }

    pub fn get(&self, field: Field) -> &str {
        self.0.get(field)
    }

    pub fn into_inner(self) -> FieldSet {
        self.0
    }
}
