//! The columnar frame and its builder
//!
//! A `Frame` is a fixed set of equally long named columns over unique
//! string row keys. Row order is always sorted by key, so any frame built
//! from the same records is byte-identical regardless of input order.

use crate::error::{FrameError, FrameResult};
use crate::value::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Row-wise frame assembly with key-collision detection
///
/// Rows may carry different column sets; the builder unions them in
/// first-seen order and fills the gaps with a configurable value at
/// `finish` time.
#[derive(Debug)]
pub struct FrameBuilder {
    key_name: String,
    rows: Vec<(String, IndexMap<String, Value>)>,
}

impl FrameBuilder {
    pub fn new(key_name: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
            rows: Vec::new(),
        }
    }

    /// Add one row. Key uniqueness is checked at `finish`.
    pub fn push(&mut self, key: impl Into<String>, fields: IndexMap<String, Value>) {
        self.rows.push((key.into(), fields));
    }

    /// Build the frame, filling absent cells with `Value::Null`.
    pub fn finish(self) -> FrameResult<Frame> {
        self.finish_with_fill(Value::Null)
    }

    /// Build the frame, filling absent cells with `fill`.
    pub fn finish_with_fill(mut self, fill: Value) -> FrameResult<Frame> {
        // Union of column names in first-seen order.
        let mut names: IndexMap<String, ()> = IndexMap::new();
        for (_, fields) in &self.rows {
            for name in fields.keys() {
                names.entry(name.clone()).or_insert(());
            }
        }

        // Sorted row order makes the output independent of scan order.
        self.rows.sort_by(|a, b| a.0.cmp(&b.0));

        let mut keys = Vec::with_capacity(self.rows.len());
        let mut lookup = HashMap::with_capacity(self.rows.len());
        for (idx, (key, _)) in self.rows.iter().enumerate() {
            if lookup.insert(key.clone(), idx).is_some() {
                return Err(FrameError::DuplicateKey { key: key.clone() });
            }
            keys.push(key.clone());
        }

        let mut columns: IndexMap<String, Vec<Value>> = IndexMap::new();
        for name in names.keys() {
            let mut values = Vec::with_capacity(self.rows.len());
            for (_, fields) in &mut self.rows {
                values.push(fields.swap_remove(name).unwrap_or_else(|| fill.clone()));
            }
            columns.insert(name.clone(), values);
        }

        Ok(Frame {
            key_name: self.key_name,
            keys,
            lookup,
            columns,
        })
    }
}

/// An in-memory columnar table keyed by unique row keys
#[derive(Debug, Clone)]
pub struct Frame {
    key_name: String,
    keys: Vec<String>,
    lookup: HashMap<String, usize>,
    columns: IndexMap<String, Vec<Value>>,
}

impl Frame {
    /// Build a frame directly from parallel columns.
    ///
    /// Rows keep the given key order; keys must be unique and every
    /// column must match the key count.
    pub fn from_columns(
        key_name: impl Into<String>,
        keys: Vec<String>,
        columns: IndexMap<String, Vec<Value>>,
    ) -> FrameResult<Self> {
        let mut lookup = HashMap::with_capacity(keys.len());
        for (idx, key) in keys.iter().enumerate() {
            if lookup.insert(key.clone(), idx).is_some() {
                return Err(FrameError::DuplicateKey { key: key.clone() });
            }
        }
        for (name, values) in &columns {
            if values.len() != keys.len() {
                return Err(FrameError::LengthMismatch {
                    name: name.clone(),
                    expected: keys.len(),
                    actual: values.len(),
                });
            }
        }
        Ok(Self {
            key_name: key_name.into(),
            keys,
            lookup,
            columns,
        })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column names in their stored (output) order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    pub fn column(&self, name: &str) -> FrameResult<&[Value]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| FrameError::UnknownColumn {
                name: name.to_string(),
            })
    }

    pub fn column_mut(&mut self, name: &str) -> FrameResult<&mut Vec<Value>> {
        self.columns
            .get_mut(name)
            .ok_or_else(|| FrameError::UnknownColumn {
                name: name.to_string(),
            })
    }

    /// Single cell lookup by row key and column name
    pub fn value(&self, key: &str, column: &str) -> FrameResult<&Value> {
        let idx = self
            .lookup
            .get(key)
            .ok_or_else(|| FrameError::JoinKeyMismatch {
                key: key.to_string(),
                side: "frame",
            })?;
        Ok(&self.column(column)?[*idx])
    }

    /// Append a new column; its length must match the row count.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<Value>) -> FrameResult<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(FrameError::DuplicateColumn { name });
        }
        if values.len() != self.keys.len() {
            return Err(FrameError::LengthMismatch {
                name,
                expected: self.keys.len(),
                actual: values.len(),
            });
        }
        self.columns.insert(name, values);
        Ok(())
    }

    /// Remove a column that must exist
    pub fn drop_column(&mut self, name: &str) -> FrameResult<()> {
        self.columns
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| FrameError::UnknownColumn {
                name: name.to_string(),
            })
    }

    /// Remove any of the named columns that are present
    pub fn drop_columns_if_present(&mut self, names: &[&str]) {
        for name in names {
            self.columns.shift_remove(*name);
        }
    }

    pub fn rename_column(&mut self, old: &str, new: impl Into<String>) -> FrameResult<()> {
        let new = new.into();
        if self.columns.contains_key(&new) {
            return Err(FrameError::DuplicateColumn { name: new });
        }
        let idx = self
            .columns
            .get_index_of(old)
            .ok_or_else(|| FrameError::UnknownColumn {
                name: old.to_string(),
            })?;
        let (_, values) = self.columns.shift_remove_index(idx).expect("index just found");
        self.columns.shift_insert(idx, new, values);
        Ok(())
    }

    /// Prefix every column name, preserving order
    pub fn prefix_columns(&mut self, prefix: &str) {
        let old = std::mem::take(&mut self.columns);
        self.columns = old
            .into_iter()
            .map(|(name, values)| (format!("{prefix}{name}"), values))
            .collect();
    }

    /// Project onto an explicit column allowlist, in allowlist order.
    /// Unknown names are fatal; unlisted columns are dropped.
    pub fn select(&self, names: &[&str]) -> FrameResult<Frame> {
        let mut columns = IndexMap::with_capacity(names.len());
        for name in names {
            let values = self.column(name)?.to_vec();
            columns.insert(name.to_string(), values);
        }
        Ok(Frame {
            key_name: self.key_name.clone(),
            keys: self.keys.clone(),
            lookup: self.lookup.clone(),
            columns,
        })
    }

    /// Strict one-to-one inner join on the row key.
    ///
    /// Both sides must carry exactly the same key set; any key present on
    /// only one side is fatal, as is a column name collision. The result
    /// keeps the left row order and appends the right columns after the
    /// left ones.
    pub fn inner_join_one_to_one(&self, other: &Frame) -> FrameResult<Frame> {
        for key in &self.keys {
            if !other.lookup.contains_key(key) {
                return Err(FrameError::JoinKeyMismatch {
                    key: key.clone(),
                    side: "right",
                });
            }
        }
        for key in &other.keys {
            if !self.lookup.contains_key(key) {
                return Err(FrameError::JoinKeyMismatch {
                    key: key.clone(),
                    side: "left",
                });
            }
        }

        let mut columns = self.columns.clone();
        for (name, values) in &other.columns {
            if columns.contains_key(name) {
                return Err(FrameError::JoinColumnCollision { name: name.clone() });
            }
            // Reorder the right column into the left key order.
            let reordered = self
                .keys
                .iter()
                .map(|key| values[other.lookup[key]].clone())
                .collect();
            columns.insert(name.clone(), reordered);
        }

        Ok(Frame {
            key_name: self.key_name.clone(),
            keys: self.keys.clone(),
            lookup: self.lookup.clone(),
            columns,
        })
    }

    /// Per-row count of listed columns holding a positive value
    pub fn count_positive_across(&self, names: &[String]) -> FrameResult<Vec<Value>> {
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            selected.push(self.column(name)?);
        }
        let counts = (0..self.len())
            .map(|row| {
                let n = selected.iter().filter(|col| col[row].is_positive()).count();
                Value::Int(n as i64)
            })
            .collect();
        Ok(counts)
    }
}

#[cfg(test)]
#[path = "frame_test.rs"]
mod tests;
