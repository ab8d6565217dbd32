// realign.rs
//
// Reorders the columns of a row stream so that it matches another schema
// with the same column names. Two phases: build a ColumnMap once per schema
// pair, then stream rows through it.

use crate::error::{Error, Result};
use crate::row::Row;
use crate::schema::Schema;
use crate::table::{RowSink, RowSource, Table};
use tracing::{debug, info, warn};

/// Index correspondence between a source schema and a target schema.
///
/// A `ColumnMap` always describes a permutation: every source index maps to a
/// distinct target index and every target index is covered exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl ColumnMap {
    /// The map of a schema onto itself.
    pub fn identity(width: usize) -> Self {
        ColumnMap {
            forward: (0..width).collect(),
            inverse: (0..width).collect(),
        }
    }

    /// Number of columns on either side.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn is_identity(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &j)| i == j)
    }

    /// Target position of source column `source_idx`.
    pub fn target_index(&self, source_idx: usize) -> Option<usize> {
        self.forward.get(source_idx).copied()
    }

    /// Source column feeding target position `target_idx`.
    pub fn source_index(&self, target_idx: usize) -> Option<usize> {
        self.inverse.get(target_idx).copied()
    }

    /// Source index to target index pairs, in source order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.forward.iter().copied().enumerate()
    }

    /// Reorders one row's cells from source order into target order.
    pub fn apply<T: Default>(&self, mut values: Vec<T>) -> Result<Vec<T>> {
        if values.len() != self.len() {
            return Err(Error::RowArity {
                expected: self.len(),
                actual: values.len(),
            });
        }
        Ok(self
            .inverse
            .iter()
            .map(|&i| std::mem::take(&mut values[i]))
            .collect())
    }

    /// Reorders a row, keeping its key.
    pub fn realign_row(&self, row: Row) -> Result<Row> {
        let (key, values) = row.into_parts();
        debug!(key = ?key, "realigning row");
        let values = self.apply(values)?;
        Ok(Row::from_parts(key, values))
    }
}

/// Builds the column map taking `source` column order to `target` column order.
///
/// Each source column is matched to the first target column with the same
/// name. Fails with `SchemaMismatch` unless the two schemas carry the same
/// set of names with one column per name on each side.
pub fn build_column_map(source: &Schema, target: &Schema) -> Result<ColumnMap> {
    let lookup = target.index_by_name();
    let mut forward = Vec::with_capacity(source.len());
    let mut inverse: Vec<Option<usize>> = vec![None; target.len()];
    let mut unmatched = Vec::new();

    for (i, col) in source.columns.iter().enumerate() {
        match lookup.get(col.name.as_str()) {
            Some(&j) if inverse[j].is_none() => {
                inverse[j] = Some(i);
                forward.push(j);
            }
            // absent from the target, or a repeat of a name already taken
            _ => unmatched.push(col.name.clone()),
        }
    }

    let inverse: Option<Vec<usize>> = inverse.into_iter().collect();
    match inverse {
        Some(inverse) if unmatched.is_empty() => Ok(ColumnMap { forward, inverse }),
        _ => {
            let diff = source.name_diff(target);
            let missing_in_target = if diff.is_empty() {
                unmatched
            } else {
                diff.only_in_self
            };
            warn!(
                missing_in_target = ?missing_in_target,
                missing_in_source = ?diff.only_in_other,
                "column names do not line up"
            );
            Err(Error::SchemaMismatch {
                missing_in_target,
                missing_in_source: diff.only_in_other,
            })
        }
    }
}

/// Lazy realignment of a row stream. Yields one result per input row, in
/// input order.
pub struct Realigned<'m, I> {
    rows: I,
    map: &'m ColumnMap,
}

impl<I> Iterator for Realigned<'_, I>
where
    I: Iterator<Item = Row>,
{
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(self.map.realign_row(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

pub fn realign<I>(rows: I, map: &ColumnMap) -> Realigned<'_, I::IntoIter>
where
    I: IntoIterator<Item = Row>,
{
    Realigned {
        rows: rows.into_iter(),
        map,
    }
}

/// Realigns `rows` into `sink`, stopping at the first failing row.
/// Returns the number of rows written.
pub fn realign_into<I, S>(rows: I, map: &ColumnMap, sink: &mut S) -> Result<usize>
where
    I: IntoIterator<Item = Row>,
    S: RowSink + ?Sized,
{
    let mut written = 0;
    for row in realign(rows, map) {
        let (key, cells) = row?.into_parts();
        sink.append(key, cells)?;
        written += 1;
    }
    Ok(written)
}

/// Produces a new table named `name` holding the rows of `source` in the
/// column order of `target`. The output takes the target's column names and
/// types. Nothing is returned unless every row realigns.
pub fn realign_table<S>(source: &S, target: &Schema, name: &str) -> Result<Table>
where
    S: RowSource,
{
    let map = build_column_map(source.schema(), target)?;
    let mut out = Table::new(name, target.clone());
    let written = realign_into(source.rows(), &map, &mut out)?;
    info!(
        table = name,
        rows = written,
        columns = map.len(),
        identity = map.is_identity(),
        "realigned table"
    );
    Ok(out)
}
