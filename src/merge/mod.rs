//! Structured configuration merging
//!
//! Pure functions over (source, target) document trees: neither input is
//! ever mutated, so a partial failure cannot corrupt either file. The
//! additive strategy deep-merges with target-wins semantics ("template
//! proposes, user customization survives"); the selective strategy starts
//! from the source and overlays an explicit allow-list of key paths from
//! the target.

pub mod document;
pub mod path;

pub use document::Format;
pub use path::KeyPath;

use crate::error::InitError;
use crate::system::System;
use anyhow::Result;
use serde_json::{Map, Value};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Merge strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Deep merge; target values win on conflicts, keys are unioned
    Additive,
    /// Source as base; only the named key paths are taken from target
    Selective,
}

impl FromStr for Strategy {
    type Err = InitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "additive" => Ok(Self::Additive),
            "selective" => Ok(Self::Selective),
            other => Err(InitError::merge(format!(
                "unknown merge strategy '{other}'. Supported strategies: additive, selective"
            ))),
        }
    }
}

/// Deep-merge `target` over `source`
///
/// For keys where both sides are mappings the merge recurses; otherwise the
/// target value wins when the key exists in target, and the source value is
/// used when it doesn't. Idempotent: merging the output with the same
/// source again changes nothing.
#[must_use]
pub fn merge_additive(source: &Value, target: &Value) -> Value {
    match (source, target) {
        (Value::Object(source_map), Value::Object(target_map)) => {
            let mut merged = Map::new();
            for (key, source_value) in source_map {
                match target_map.get(key) {
                    Some(target_value) => {
                        merged.insert(key.clone(), merge_additive(source_value, target_value));
                    }
                    None => {
                        merged.insert(key.clone(), source_value.clone());
                    }
                }
            }
            // Keys only the target has are adopted unchanged
            for (key, target_value) in target_map {
                if !source_map.contains_key(key) {
                    merged.insert(key.clone(), target_value.clone());
                }
            }
            Value::Object(merged)
        }
        (_, target_value) => target_value.clone(),
    }
}

/// Overlay `keep_paths` from `target` onto a copy of `source`
///
/// Paths absent from the target are left at their source values.
#[must_use]
pub fn merge_selective(source: &Value, target: &Value, keep_paths: &[KeyPath]) -> Value {
    let mut merged = source.clone();
    for path in keep_paths {
        if let Some(value) = path.get(target) {
            path.set(&mut merged, value.clone());
        } else {
            debug!("Keep path '{path}' not present in target");
        }
    }
    merged
}

/// Merge two document files and return the serialized output
///
/// The source file must exist; a missing target makes the merge a no-op
/// that returns the source unchanged (first-time adoption). Output is
/// serialized in the source file's format.
///
/// # Errors
///
/// Returns an error if:
/// - The source file is missing, unreadable, or unparsable
/// - The target exists with a different format than the source
/// - The merged tree cannot be serialized
pub fn merge_files(
    system: &dyn System,
    source_path: &Path,
    target_path: &Path,
    strategy: Strategy,
    keep_paths: &[KeyPath],
) -> Result<String> {
    if !system.is_file(source_path)? {
        return Err(InitError::merge(format!(
            "source file not found: {}",
            source_path.display()
        ))
        .into());
    }

    let format = Format::from_path(source_path)?;
    let source = document::load(system, source_path)?;

    // A fork that never customized this file adopts the template version
    if !system.is_file(target_path)? {
        debug!(
            "Target {} missing; emitting source unchanged",
            target_path.display()
        );
        return format.serialize(&source);
    }

    let target_format = Format::from_path(target_path)?;
    if target_format != format {
        return Err(InitError::merge(format!(
            "source and target must share a format ({} vs {})",
            source_path.display(),
            target_path.display()
        ))
        .into());
    }
    let target = document::load(system, target_path)?;

    let merged = match strategy {
        Strategy::Additive => merge_additive(&source, &target),
        Strategy::Selective => merge_selective(&source, &target, keep_paths),
    };

    format.serialize(&merged)
}
