//! Provides a declarative schema for JSON payloads with strict validation.
use std::{
    collections::BTreeMap,
    error::Error,
    fmt::Display,
};

use serde_json::Value;

/// The JSON type a field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
    Bool,
    Object,
    Array,
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Bool => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Object => value.is_object(),
            FieldType::Array => value.is_array(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Field {
    kind: FieldType,
    required: bool,
}

/// A single reason a payload failed validation.
#[derive(Debug, PartialEq, Eq)]
pub enum Violation {
    MissingField(String),
    UnknownField(String),
    WrongType { field: String, expected: &'static str },
    NotAnObject,
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::MissingField(field) => {
                write!(f, "required key not provided: '{}'", field)
            }
            Violation::UnknownField(field) => {
                write!(f, "extra keys not allowed: '{}'", field)
            }
            Violation::WrongType { field, expected } => {
                write!(f, "expected {} for key '{}'", expected, field)
            }
            Violation::NotAnObject => write!(f, "expected an object"),
        }
    }
}

/// Every violation found in a payload, reported together.
#[derive(Debug)]
pub struct SchemaViolations(Vec<Violation>);

impl SchemaViolations {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

impl Display for SchemaViolations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl Error for SchemaViolations {}

/// Declarative description of the expected shape of a JSON object.
///
/// Validation is strict: keys not declared on the schema are rejected, as
/// are missing required keys and values of the wrong type.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: BTreeMap<String, Field>,
}

impl Schema {
    pub fn build() -> SchemaBuilder {
        SchemaBuilder {
            fields: BTreeMap::new(),
        }
    }

    /// Checks a parsed JSON value against the schema.
    ///
    /// Collects every violation before failing, so a payload that is both
    /// missing a key and carrying an extra one reports both problems.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolations> {
        let object = match value.as_object() {
            Some(object) => object,
            None => return Err(SchemaViolations(vec![Violation::NotAnObject])),
        };

        let mut violations = Vec::new();

        for (name, field) in &self.fields {
            match object.get(name) {
                Some(value) if !field.kind.matches(value) => {
                    violations.push(Violation::WrongType {
                        field: name.clone(),
                        expected: field.kind.name(),
                    })
                }
                Some(_) => {}
                None if field.required => {
                    violations.push(Violation::MissingField(name.clone()))
                }
                None => {}
            }
        }

        for name in object.keys() {
            if !self.fields.contains_key(name) {
                violations.push(Violation::UnknownField(name.clone()));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaViolations(violations))
        }
    }
}

pub struct SchemaBuilder {
    fields: BTreeMap<String, Field>,
}

impl SchemaBuilder {
    pub fn required(mut self, name: &str, kind: FieldType) -> Self {
        self.fields.insert(
            name.to_owned(),
            Field {
                kind,
                required: true,
            },
        );
        self
    }

    pub fn optional(mut self, name: &str, kind: FieldType) -> Self {
        self.fields.insert(
            name.to_owned(),
            Field {
                kind,
                required: false,
            },
        );
        self
    }

    pub fn finish(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}
