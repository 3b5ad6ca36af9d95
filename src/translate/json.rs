//! Readers for the fpp-to-json wire shapes.
//!
//! These helpers only look at JSON structure. They never decode a child node;
//! the translator combinators do that.

use serde_json::{Map, Value};
use tracing::debug;

use crate::ast::AstId;
use crate::errors::{Result, TranslateError};
use crate::internal;

static NULL: Value = Value::Null;

// ============================================================================
// NODES AND VARIANTS
// ============================================================================

/// The `(id, data)` pair of an `{"AstNode": {"id", "data"}}` object.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawNode<'a> {
    pub id: AstId,
    pub data: &'a Value,
}

pub(crate) fn raw_node(value: &Value) -> Result<RawNode<'_>> {
    let inner = value
        .get("AstNode")
        .ok_or_else(|| internal!("expected an AstNode object, found {}", describe(value)))?;
    let id = inner
        .get("id")
        .and_then(Value::as_u64)
        .ok_or_else(|| internal!("AstNode has no integer id"))?;
    let data = inner
        .get("data")
        .ok_or_else(|| internal!("AstNode {} has no data", id))?;
    Ok(RawNode { id, data })
}

/// Returns the single populated key of a closed-union object with its
/// payload. A bare string is a tag without payload.
pub(crate) fn active_variant(value: &Value) -> Result<(&str, &Value)> {
    match value {
        Value::Object(map) => {
            let mut entries = map.iter();
            match (entries.next(), entries.next()) {
                (Some((tag, payload)), None) => Ok((tag.as_str(), payload)),
                (None, _) => Err(internal!("expected one variant key, found none")),
                (Some(_), Some(_)) => Err(internal!(
                    "expected one variant key, found {}: {}",
                    map.len(),
                    map.keys().cloned().collect::<Vec<_>>().join(", ")
                )),
            }
        }
        Value::String(tag) => Ok((tag.as_str(), &NULL)),
        other => Err(internal!("expected a tagged object, found {}", describe(other))),
    }
}

/// Reads the presence/absence encoding of an optional field.
///
/// `"None"`, `null` and `{"None": ..}` are absent; `{"Some": v}` is present.
/// A bare node in option position is a shape error, not an unknown tag.
pub(crate) fn option(value: &Value) -> Result<Option<&Value>> {
    match value {
        Value::Null => Ok(None),
        Value::String(tag) if tag == "None" => Ok(None),
        Value::Object(_) => match active_variant(value)? {
            ("Some", inner) => Ok(Some(inner)),
            ("None", _) => Ok(None),
            ("AstNode", _) => Err(internal!("expected Some or None, found an AstNode")),
            (tag, _) => Err(TranslateError::invalid_field(tag)),
        },
        other => Err(internal!("expected an optional value, found {}", describe(other))),
    }
}

/// Unwraps the `{"node": X}` envelope around member payloads.
pub(crate) fn member_envelope(value: &Value) -> Result<&Value> {
    value
        .get("node")
        .ok_or_else(|| internal!("expected a member envelope, found {}", describe(value)))
}

pub(crate) fn array(value: &Value) -> Result<&[Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| internal!("expected an array, found {}", describe(value)))
}

pub(crate) fn string(value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| internal!("expected a string, found {}", describe(value)))
}

pub(crate) fn strings(value: &Value) -> Result<Vec<String>> {
    array(value)?.iter().map(string).collect()
}

/// Short description of a JSON value for error messages.
pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// RECORD FIELDS
// ============================================================================

/// Named-field access on a record payload.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    owner: &'static str,
}

impl<'a> Fields<'a> {
    pub fn of(value: &'a Value, owner: &'static str) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| internal!("{} must be an object, found {}", owner, describe(value)))?;
        Ok(Self { map, owner })
    }

    pub fn required(&self, name: &str) -> Result<&'a Value> {
        self.map
            .get(name)
            .ok_or_else(|| internal!("{} is missing required field {}", self.owner, name))
    }

    /// An optional field. A missing key counts as absent.
    pub fn optional(&self, name: &str) -> Result<Option<&'a Value>> {
        match self.map.get(name) {
            None => Ok(None),
            Some(value) => option(value),
        }
    }

    pub fn string(&self, name: &str) -> Result<String> {
        let value = self.required(name)?;
        value.as_str().map(str::to_string).ok_or_else(|| {
            internal!("{}.{} must be a string, found {}", self.owner, name, describe(value))
        })
    }

    pub fn boolean(&self, name: &str) -> Result<bool> {
        let value = self.required(name)?;
        value.as_bool().ok_or_else(|| {
            internal!("{}.{} must be a boolean, found {}", self.owner, name, describe(value))
        })
    }

    pub fn array(&self, name: &str) -> Result<&'a [Value]> {
        array(self.required(name)?)
    }
}

// ============================================================================
// FAMILIES
// ============================================================================

/// A closed variant family and the grammar tags it deliberately excludes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Family {
    pub name: &'static str,
    pub unsupported: &'static [&'static str],
}

impl Family {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            unsupported: &[],
        }
    }

    pub const fn excluding(name: &'static str, unsupported: &'static [&'static str]) -> Self {
        Self { name, unsupported }
    }

    /// Classifies a tag that matched none of the family's variants.
    pub fn reject(&self, tag: &str) -> TranslateError {
        debug!(family = self.name, tag, "rejected variant");
        if self.unsupported.contains(&tag) {
            TranslateError::not_supported(tag)
        } else {
            TranslateError::invalid_field(tag)
        }
    }
}

pub(crate) const MODULE_MEMBER: Family =
    Family::excluding("module member", &["SpecInclude", "SpecLoc"]);
pub(crate) const COMPONENT_MEMBER: Family =
    Family::excluding("component member", &["SpecInclude"]);
pub(crate) const STATE_MACHINE_MEMBER: Family = Family::new("state machine member");
pub(crate) const STATE_MEMBER: Family = Family::new("state member");
pub(crate) const INTERFACE_MEMBER: Family = Family::new("interface member");
pub(crate) const TOPOLOGY_MEMBER: Family = Family::excluding("topology member", &["SpecInclude"]);
pub(crate) const TLM_PACKET_SET_MEMBER: Family =
    Family::excluding("telemetry packet set member", &["SpecInclude"]);
pub(crate) const TLM_PACKET_MEMBER: Family =
    Family::excluding("telemetry packet member", &["SpecInclude"]);
pub(crate) const EXPR: Family = Family::new("expression");
pub(crate) const TYPE_NAME: Family = Family::new("type name");
pub(crate) const QUAL_IDENT: Family = Family::new("qualified identifier");
pub(crate) const PORT_INSTANCE: Family = Family::new("port instance");
pub(crate) const CONNECTION_GRAPH: Family = Family::new("connection graph");
pub(crate) const TRANSITION_OR_DO: Family = Family::new("transition or do");
