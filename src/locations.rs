//! Source locations of AST nodes.
//!
//! The location map is a side channel: the producer emits it alongside the
//! AST, keyed by node id. It is loaded in full before any lookup and is
//! read-only afterwards, so a loaded [`Locations`] can be shared freely
//! across threads.
//!
//! ## Usage Workflow
//! ```rust
//! use fpp_model::locations::Locations;
//! let locations = Locations::from_json_str(
//!     r#"{"5": {"file": "a.fpp", "pos": "1:1", "includingLoc": null}}"#,
//! ).unwrap();
//! assert_eq!(locations.get(5).unwrap().pos, "1:1");
//! assert!(locations.get_opt(6).is_none());
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::ast::AstId;
use crate::errors::{Result, TranslateError};
use crate::internal;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Where a node came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: PathBuf,
    pub pos: String,
    /// Position of the include specifier that pulled `file` in, if any.
    #[serde(rename = "includingLoc")]
    pub including_loc: Option<String>,
}

impl Location {
    pub fn new(file: impl Into<PathBuf>, pos: impl Into<String>, including_loc: Option<String>) -> Self {
        Self {
            file: file.into(),
            pos: pos.into(),
            including_loc,
        }
    }
}

/// The id → location table.
#[derive(Debug, Clone, Default)]
pub struct Locations {
    map: HashMap<AstId, Location>,
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Locations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a location, replacing any previous entry for `id`.
    pub fn put(&mut self, id: AstId, loc: Location) {
        self.map.insert(id, loc);
    }

    /// Looks up a location. Every node of a well-formed input has one, so a
    /// miss is an internal error.
    pub fn get(&self, id: AstId) -> Result<&Location> {
        self.map
            .get(&id)
            .ok_or_else(|| internal!("unknown location for AST node {}", id))
    }

    pub fn get_opt(&self, id: AstId) -> Option<&Location> {
        self.map.get(&id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AstId, &Location)> {
        self.map.iter().map(|(id, loc)| (*id, loc))
    }

    /// Reads a location map file.
    ///
    /// # Errors
    /// `FileNotFound`, `Io` or `Json` for unusable input, otherwise whatever
    /// [`Locations::from_json_value`] reports.
    pub fn load(path: &Path) -> Result<Self> {
        let value = read_json(path)?;
        let locations = Self::from_json_value(&value)?;
        info!(entries = locations.len(), path = %path.display(), "location map loaded");
        Ok(locations)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|source| TranslateError::Json {
            path: PathBuf::from("<string>"),
            source,
        })?;
        Self::from_json_value(&value)
    }

    /// Builds the table from a parsed location map.
    ///
    /// # Errors
    /// `MissingLocationField` naming the id and field when `file` or `pos`
    /// is absent; `Internal` when the map, a key, or a descriptor has the
    /// wrong shape.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let entries = value
            .as_object()
            .ok_or_else(|| internal!("location map must be a JSON object"))?;

        let mut locations = Locations::new();
        for (key, descriptor) in entries {
            let id: AstId = key
                .parse()
                .map_err(|_| internal!("location map key {:?} is not a node id", key))?;
            locations.put(id, parse_descriptor(key, descriptor)?);
        }
        Ok(locations)
    }
}

// ============================================================================
// INTERNAL HELPERS
// ============================================================================

fn parse_descriptor(key: &str, descriptor: &Value) -> Result<Location> {
    let fields = descriptor
        .as_object()
        .ok_or_else(|| internal!("location for ID {} must be an object", key))?;

    let file = required_str(fields, key, "file")?;
    let pos = required_str(fields, key, "pos")?;
    let including_loc = match fields.get("includingLoc") {
        None | Some(Value::Null) => None,
        Some(Value::String(loc)) => Some(loc.clone()),
        Some(_) => return Err(internal!("field includingLoc for ID {} must be a string", key)),
    };

    Ok(Location::new(file, pos, including_loc))
}

fn required_str<'a>(
    fields: &'a serde_json::Map<String, Value>,
    key: &str,
    field: &'static str,
) -> Result<&'a str> {
    match fields.get(field) {
        None => Err(TranslateError::MissingLocationField {
            id: key.to_string(),
            field,
        }),
        Some(value) => value
            .as_str()
            .ok_or_else(|| internal!("field {} for ID {} must be a string", field, key)),
    }
}

/// Reads and parses a JSON input, checking that it exists first.
pub(crate) fn read_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(TranslateError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| TranslateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| TranslateError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn put_overwrites() {
        let mut locations = Locations::new();
        locations.put(1, Location::new("a.fpp", "1.1", None));
        locations.put(1, Location::new("b.fpp", "2.2", None));
        assert_eq!(locations.len(), 1);
        assert_eq!(locations.get(1).unwrap().file, PathBuf::from("b.fpp"));
    }

    #[test]
    fn get_missing_is_internal_error() {
        let locations = Locations::new();
        let err = locations.get(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.to_string(), "Internal error: unknown location for AST node 3");
        assert!(locations.get_opt(3).is_none());
    }

    #[test]
    fn loads_including_loc_variants() {
        let locations = Locations::from_json_value(&json!({
            "1": {"file": "a.fpp", "pos": "1.1", "includingLoc": null},
            "2": {"file": "b.fpp", "pos": "4.2", "includingLoc": "a.fpp: 3.1"},
            "3": {"file": "c.fpp", "pos": "9.9"}
        }))
        .unwrap();
        assert_eq!(locations.len(), 3);
        assert_eq!(locations.get(1).unwrap().including_loc, None);
        assert_eq!(
            locations.get(2).unwrap().including_loc.as_deref(),
            Some("a.fpp: 3.1")
        );
        assert_eq!(locations.get(3).unwrap().including_loc, None);
    }

    #[test]
    fn missing_field_names_field_and_id() {
        let err = Locations::from_json_value(&json!({
            "17": {"file": "a.fpp", "includingLoc": null}
        }))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingLocationField);
        assert_eq!(
            err.to_string(),
            "Location map for ID 17 is missing required field pos"
        );

        let err = Locations::from_json_value(&json!({"4": {"pos": "1.1"}})).unwrap_err();
        assert!(err.to_string().contains("missing required field file"));
    }

    #[test]
    fn malformed_maps_are_internal() {
        for bad in [
            json!([1, 2]),
            json!({"x": {"file": "a", "pos": "1"}}),
            json!({"1": "a.fpp"}),
            json!({"1": {"file": 3, "pos": "1"}}),
        ] {
            let err = Locations::from_json_value(&bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Internal, "{bad}");
        }
    }

    #[test]
    fn location_serializes_with_wire_field_names() {
        let loc = Location::new("a.fpp", "2.1", Some("main.fpp:4.1".into()));
        assert_eq!(
            serde_json::to_value(&loc).unwrap(),
            json!({"file": "a.fpp", "pos": "2.1", "includingLoc": "main.fpp:4.1"})
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Locations::load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, TranslateError::FileNotFound { .. }));
    }
}
