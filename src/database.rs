use crate::error::{Error, Result};
use crate::realign::realign_table;
use crate::schema::{ColumnSchema, Schema};
use crate::table::{RowSink, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;
// database.rs

pub trait DatabaseInterface {
    fn create_table(&mut self, table_name: &str, columns: Vec<ColumnSchema>);
    /// Table names, sorted.
    fn list_tables(&self) -> Vec<String>;
    fn insert(&mut self, table_name: &str, key: Option<String>, values: Vec<String>)
    -> Result<()>;
    /// Writes table `source` rearranged into the column order of table
    /// `target` as table `output`. Returns the number of rows written.
    fn realign(&mut self, source: &str, target: &str, output: &str) -> Result<usize>;
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Database {
    pub tables: HashMap<String, Table>,
}

impl Database {
    pub fn new() -> Self {
        Database {
            tables: HashMap::new(),
        }
    }

    pub fn get_table(&self, table_name: &str) -> Result<&Table> {
        self.tables
            .get(table_name)
            .ok_or_else(|| Error::TableNotFound(table_name.to_string()))
    }

    /// Returns the column names of the table with the given name, or an empty vec if not found.
    pub fn get_table_columns(&self, table_name: &str) -> Vec<String> {
        self.tables
            .get(table_name)
            .map(|t| t.schema.columns.iter().map(|c| c.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Save the database to a file as JSON
    pub fn save_to_file(&self, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Parent directory does not exist",
                )));
            }
        }

        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };

        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        info!(path = %path.display(), tables = self.tables.len(), "saved database");
        Ok(())
    }

    /// Load the database from a file (JSON)
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "File does not exist",
            )));
        }

        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let db: Database = serde_json::from_str(&contents)?;
        info!(path = %path.display(), tables = db.tables.len(), "loaded database");
        Ok(db)
    }
}

impl DatabaseInterface for Database {
    fn create_table(&mut self, table_name: &str, columns: Vec<ColumnSchema>) {
        let table = Table::new(table_name, Schema::new(columns));
        self.tables.insert(table_name.to_string(), table);
        info!(table = table_name, "created table");
    }

    fn list_tables(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    fn insert(
        &mut self,
        table_name: &str,
        key: Option<String>,
        values: Vec<String>,
    ) -> Result<()> {
        self.tables
            .get_mut(table_name)
            .ok_or_else(|| Error::TableNotFound(table_name.to_string()))?
            .append(key, values)
    }

    fn realign(&mut self, source: &str, target: &str, output: &str) -> Result<usize> {
        let source_table = self.get_table(source)?;
        let target_schema = &self.get_table(target)?.schema;
        let realigned = realign_table(source_table, target_schema, output)?;
        let written = realigned.rows.len();
        self.tables.insert(output.to_string(), realigned);
        Ok(written)
    }
}
