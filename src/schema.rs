use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Represents the type of a column in a table schema.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum ColumnType {
    Int,
    String,
    Float,
}

/// Represents a column in a schema (name and type).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ColumnSchema {
    pub name: String,
    pub col_type: ColumnType,
}

impl ColumnSchema {
    pub fn new(name: impl Into<String>, col_type: ColumnType) -> Self {
        ColumnSchema {
            name: name.into(),
            col_type,
        }
    }
}

/// Represents the schema of a table (list of columns).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Schema {
    pub columns: Vec<ColumnSchema>,
}

/// Column names present in one schema but not the other, each list sorted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NameDiff {
    pub only_in_self: Vec<String>,
    pub only_in_other: Vec<String>,
}

impl NameDiff {
    pub fn is_empty(&self) -> bool {
        self.only_in_self.is_empty() && self.only_in_other.is_empty()
    }
}

impl Schema {
    pub fn new(columns: Vec<ColumnSchema>) -> Self {
        Schema { columns }
    }

    /// Builds a schema of `String` columns from bare names.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Schema {
            columns: names
                .iter()
                .map(|n| ColumnSchema::new(n.as_ref(), ColumnType::String))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Index of the first column with the given name.
    pub fn position(&self, col_name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == col_name)
    }

    /// Name to index lookup. On duplicate names the first column wins, which
    /// keeps it consistent with `position`.
    pub fn index_by_name(&self) -> HashMap<&str, usize> {
        let mut index = HashMap::with_capacity(self.columns.len());
        for (i, col) in self.columns.iter().enumerate() {
            index.entry(col.name.as_str()).or_insert(i);
        }
        index
    }

    /// Compares the column name sets of two schemas, ignoring order.
    pub fn name_diff(&self, other: &Schema) -> NameDiff {
        let mine: BTreeSet<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        let theirs: BTreeSet<&str> = other.columns.iter().map(|c| c.name.as_str()).collect();
        NameDiff {
            only_in_self: mine.difference(&theirs).map(|s| s.to_string()).collect(),
            only_in_other: theirs.difference(&mine).map(|s| s.to_string()).collect(),
        }
    }
}
