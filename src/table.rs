use crate::error::{Error, Result};
use crate::row::{Row, RowInterface};
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
// table.rs

/// Read side of a table: its schema and its rows in table order.
pub trait RowSource {
    fn schema(&self) -> &Schema;
    /// Yields owned copies of the rows, first to last.
    fn rows(&self) -> impl Iterator<Item = Row> + '_;
}

/// Write side of a table: appends one row at a time.
pub trait RowSink {
    fn append(&mut self, key: Option<String>, cells: Vec<String>) -> Result<()>;
}

/// Struct representing a named table.
/// Stores the table's name, schema and rows.
///
/// Every row holds exactly `schema.len()` cells. `RowSink::append` enforces
/// this; code pushing to `rows` directly must keep it, and realignment
/// reports a violating row as `Error::RowArity`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Table {
    name: String,       // Name of the table
    pub schema: Schema, // Table schema
    pub rows: Vec<Row>, // Rows in table order
}

impl Table {
    /// Creates a new empty Table with the given name and schema.
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Table {
            name: name.into(),
            schema,
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Adds an unkeyed row; its length must match the column count.
    pub fn add_row(&mut self, values: Vec<String>) -> Result<()> {
        self.append(None, values)
    }

    /// Adds a keyed row; its length must match the column count.
    pub fn add_keyed_row(&mut self, key: impl Into<String>, values: Vec<String>) -> Result<()> {
        self.append(Some(key.into()), values)
    }

    /// Get a value from a row by column name.
    pub fn get_value(&self, row_idx: usize, col_name: &str) -> Option<&String> {
        self.rows.get(row_idx)?.get_by_name(col_name, &self.schema)
    }

    /// Returns every row as a column name to value map.
    pub fn rows_named(&self) -> Vec<HashMap<String, String>> {
        self.rows
            .iter()
            .map(|row| {
                self.schema
                    .columns
                    .iter()
                    .enumerate()
                    .map(|(i, col)| {
                        (
                            col.name.clone(),
                            row.get_values().get(i).cloned().unwrap_or_default(),
                        )
                    })
                    .collect::<HashMap<String, String>>()
            })
            .collect()
    }
}

impl RowSource for Table {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.rows.iter().cloned()
    }
}

impl RowSink for Table {
    fn append(&mut self, key: Option<String>, cells: Vec<String>) -> Result<()> {
        if cells.len() != self.schema.len() {
            return Err(Error::RowArity {
                expected: self.schema.len(),
                actual: cells.len(),
            });
        }
        self.rows.push(Row::from_parts(key, cells));
        Ok(())
    }
}
