//! Typed AST for FPP models.
//!
//! This module provides the node identity type, the closed variant families of
//! the FPP grammar, and the qualified-identifier builder. All types here are
//! plain data: they are built once by the translator and never mutated.

// ============================================================================
// IMPORTS
// ============================================================================

use serde::{Serialize, Serializer};

// ============================================================================
// MODULE EXPORTS
// ============================================================================

pub mod defs;
pub mod expr;
pub mod keywords;
pub mod members;
pub mod node;
pub mod qual_ident;
pub mod specs;

pub use defs::*;
pub use expr::*;
pub use keywords::*;
pub use members::*;
pub use node::{AstId, AstNode, AstSession};
pub use qual_ident::{NodeList, QualIdent};
pub use specs::*;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// An FPP identifier.
pub type Ident = String;

/// A value with the comment lines that precede and follow it in the source.
///
/// Exactly one value is held. On the wire, and in serialized output, an
/// annotated value is a single-element list holding the triple
/// `[pre, value, post]`.
///
/// # Examples
///
/// ```rust
/// use fpp_model::ast::Annotated;
/// let a = Annotated::new(vec!["leading".to_string()], 7, vec![]);
/// assert_eq!(serde_json::to_string(&a).unwrap(), r#"[[["leading"],7,[]]]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotated<T> {
    pub pre: Vec<String>,
    pub value: T,
    pub post: Vec<String>,
}

impl<T> Annotated<T> {
    pub fn new(pre: Vec<String>, value: T, post: Vec<String>) -> Self {
        Self { pre, value, post }
    }

    /// A value without comments.
    pub fn bare(value: T) -> Self {
        Self::new(Vec::new(), value, Vec::new())
    }
}

impl<T: Serialize> Serialize for Annotated<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [(&self.pre, &self.value, &self.post)].serialize(serializer)
    }
}

/// Translation unit: the members decoded from one input description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransUnit {
    pub members: Vec<ModuleMember>,
}
