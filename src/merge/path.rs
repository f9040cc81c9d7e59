//! Dotted key paths into structured documents

use crate::error::InitError;
use anyhow::Result;
use serde_json::{Map, Value};
use std::fmt;

/// A dotted sequence of mapping keys (`tool.ruff.line-length`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted path
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or has an empty segment.
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(InitError::validation("key path must not be empty").into());
        }
        let segments: Vec<String> = path.split('.').map(str::to_owned).collect();
        if segments.iter().any(String::is_empty) {
            return Err(InitError::validation(format!(
                "key path '{path}' has an empty segment"
            ))
            .into());
        }
        Ok(Self { segments })
    }

    /// Read the value at this path, if present
    #[must_use]
    pub fn get<'doc>(&self, document: &'doc Value) -> Option<&'doc Value> {
        let mut current = document;
        for segment in &self.segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Write `value` at this path, creating intermediate mappings as needed
    ///
    /// A non-mapping value standing where an intermediate mapping is needed
    /// is replaced by an empty mapping.
    pub fn set(&self, document: &mut Value, value: Value) {
        let mut current = document;
        let Some((last, intermediate)) = self.segments.split_last() else {
            return;
        };

        for segment in intermediate {
            if !current.is_object() {
                *current = Value::Object(Map::new());
            }
            let map = match current.as_object_mut() {
                Some(map) => map,
                None => return,
            };
            current = map
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
        }

        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        if let Some(map) = current.as_object_mut() {
            map.insert(last.clone(), value);
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
