//! # Test Fixtures
//!
//! Builders for fpp-to-json shaped input. Every builder takes the node id
//! explicitly so tests can assert identity preservation.

#![allow(dead_code)]

use serde_json::{json, Value};

pub fn node(id: u64, data: Value) -> Value {
    json!({"AstNode": {"id": id, "data": data}})
}

pub fn ident(id: u64, name: &str) -> Value {
    node(id, json!(name))
}

pub fn some(value: Value) -> Value {
    json!({"Some": value})
}

pub fn none() -> Value {
    json!("None")
}

/// `[pre, {"<tag>": {"node": inner}}, post]`
pub fn member(tag: &str, inner: Value) -> Value {
    annotated_member(&[], tag, inner, &[])
}

pub fn annotated_member(pre: &[&str], tag: &str, inner: Value, post: &[&str]) -> Value {
    json!([pre, {tag: {"node": inner}}, post])
}

/// Interface and telemetry packet set members carry an outer envelope.
pub fn enveloped_member(tag: &str, inner: Value) -> Value {
    json!({"node": member(tag, inner)})
}

pub fn document(units: Vec<Vec<Value>>) -> Value {
    Value::Array(
        units
            .into_iter()
            .map(|members| json!({"members": members}))
            .collect(),
    )
}

// ============================================================================
// EXPRESSIONS AND NAMES
// ============================================================================

pub fn int(id: u64, text: &str) -> Value {
    node(id, json!({"ExprLiteralInt": {"value": text}}))
}

pub fn string_lit(id: u64, text: &str) -> Value {
    node(id, json!({"ExprLiteralString": {"value": text}}))
}

pub fn expr_ident(id: u64, name: &str) -> Value {
    node(id, json!({"ExprIdent": {"value": name}}))
}

pub fn unqualified(id: u64, name: &str) -> Value {
    node(id, json!({"Unqualified": {"name": name}}))
}

pub fn u32_type(id: u64) -> Value {
    node(id, json!({"TypeNameInt": {"name": {"U32": {}}}}))
}

// ============================================================================
// DEFINITIONS
// ============================================================================

pub fn constant(id: u64, name: &str, value: Value) -> Value {
    member("DefConstant", node(id, json!({"name": name, "value": value})))
}

pub fn module(id: u64, name: &str, members: Vec<Value>) -> Value {
    member("DefModule", node(id, json!({"name": name, "members": members})))
}

pub fn component(id: u64, kind: &str, name: &str, members: Vec<Value>) -> Value {
    member(
        "DefComponent",
        node(id, json!({"kind": {kind: {}}, "name": name, "members": members})),
    )
}

pub fn topology(id: u64, name: &str, members: Vec<Value>) -> Value {
    member("DefTopology", node(id, json!({"name": name, "members": members})))
}

pub fn state_machine(id: u64, name: &str, members: Option<Vec<Value>>) -> Value {
    let members = match members {
        Some(members) => some(Value::Array(members)),
        None => none(),
    };
    member("DefStateMachine", node(id, json!({"name": name, "members": members})))
}
