use crate::schema::Schema;
use serde::{Deserialize, Serialize};
// row.rs

/// Trait defining the interface for a row in a table.
/// Provides methods to get and set the values of the row.
pub trait RowInterface {
    /// Returns a reference to the values stored in the row.
    fn get_values(&self) -> &Vec<String>;
    /// Sets the values of the row.
    fn set_values(&mut self, values: Vec<String>);
    /// Returns the row key, if the row carries one.
    fn key(&self) -> Option<&str>;
}

/// A single row: an optional key plus one string cell per schema column.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Row {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    values: Vec<String>,
}

impl Row {
    /// Creates a new unkeyed Row with the given values.
    pub fn new(values: Vec<String>) -> Self {
        Row { key: None, values }
    }

    pub fn with_key(key: impl Into<String>, values: Vec<String>) -> Self {
        Row {
            key: Some(key.into()),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn from_parts(key: Option<String>, values: Vec<String>) -> Self {
        Row { key, values }
    }

    /// Splits the row into its key and cells.
    pub fn into_parts(self) -> (Option<String>, Vec<String>) {
        (self.key, self.values)
    }

    /// Get a reference to a value by column name using the schema.
    pub fn get_by_name<'a>(&'a self, col_name: &str, schema: &Schema) -> Option<&'a String> {
        schema
            .position(col_name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Set a value by column name using the schema.
    pub fn set_by_name(&mut self, col_name: &str, value: String, schema: &Schema) -> bool {
        if let Some(idx) = schema.position(col_name) {
            if idx < self.values.len() {
                self.values[idx] = value;
                return true;
            }
        }
        false
    }
}

impl RowInterface for Row {
    fn get_values(&self) -> &Vec<String> {
        &self.values
    }

    fn set_values(&mut self, values: Vec<String>) {
        self.values = values;
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}
