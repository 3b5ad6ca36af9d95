//! # Translator
//!
//! Rebuilds the typed AST from fpp-to-json output.
//!
//! ## Core Principles
//! - One handler per variant family; each handler reads its fields by name and
//!   recurses into children through the same few combinators.
//! - Every dispatch point is closed: a tag outside the family is
//!   `InvalidField`, a deliberately excluded tag is `NotSupported`, and a
//!   shape the contract rules out is `Internal`.
//! - Decoded nodes keep the producer's ids.
//!
//! ## Invariants
//! - Translation is a pure function of the input subtree. Sibling subtrees
//!   are independent and may be decoded in parallel.
//! - The first error aborts the run; partial results are never returned.
//!
//! ## Usage Workflow
//! ```rust
//! use fpp_model::ast::AstSession;
//! use fpp_model::translate::{translate_ast_str, TranslateOptions};
//! let session = AstSession::new();
//! let units = translate_ast_str("[]", &session, TranslateOptions::default()).unwrap();
//! assert!(units.is_empty());
//! ```

use std::path::Path;

use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, info, trace};

use crate::ast::{Annotated, AstNode, AstSession, Keyword, TransUnit};
use crate::errors::{Result, TranslateError};
use crate::internal;
use crate::locations::read_json;

mod defs;
mod expr;
pub(crate) mod json;
mod members;
mod specs;

use json::{active_variant, array, raw_node, strings};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Knobs for a translation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Decode sibling list elements in parallel.
    pub parallel: bool,
    /// Lists shorter than this are always decoded sequentially.
    pub parallel_threshold: usize,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 8,
        }
    }
}

impl TranslateOptions {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Reads an AST file and translates every translation unit in it.
///
/// # Errors
/// `FileNotFound` before any decoding if `path` does not exist; otherwise the
/// first translation error.
pub fn translate_ast_json(
    path: &Path,
    session: &AstSession,
    options: TranslateOptions,
) -> Result<Vec<TransUnit>> {
    let document = read_json(path)?;
    debug!(path = %path.display(), "AST document loaded");
    Translator::new(session, options).translate_document(&document)
}

/// Translates an AST document held in memory.
pub fn translate_ast_str(
    text: &str,
    session: &AstSession,
    options: TranslateOptions,
) -> Result<Vec<TransUnit>> {
    let document: Value = serde_json::from_str(text).map_err(|source| TranslateError::Json {
        path: "<string>".into(),
        source,
    })?;
    Translator::new(session, options).translate_document(&document)
}

/// The recursive decoder.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'s> {
    session: &'s AstSession,
    options: TranslateOptions,
}

impl<'s> Translator<'s> {
    pub fn new(session: &'s AstSession, options: TranslateOptions) -> Self {
        Self { session, options }
    }

    pub fn session(&self) -> &'s AstSession {
        self.session
    }

    /// Translates a whole document: an array of single-key objects, each
    /// holding the annotated module members of one translation unit.
    pub fn translate_document(&self, document: &Value) -> Result<Vec<TransUnit>> {
        let units = array(document)?
            .iter()
            .map(|unit| self.translate_trans_unit(unit))
            .collect::<Result<Vec<_>>>()?;
        info!(
            units = units.len(),
            nodes = self.session.decoded_nodes(),
            "translation complete"
        );
        Ok(units)
    }

    /// Translates one `{"<key>": [members...]}` object.
    pub fn translate_trans_unit(&self, unit: &Value) -> Result<TransUnit> {
        if !unit.is_object() {
            return Err(internal!(
                "translation unit must be an object, found {}",
                json::describe(unit)
            ));
        }
        let (key, members) = active_variant(unit)?;
        let members = array(members)?;
        debug!(key, members = members.len(), "translating unit");
        Ok(TransUnit {
            members: self.module_members(members)?,
        })
    }

    // ------------------------------------------------------------------------
    // Combinators
    // ------------------------------------------------------------------------

    /// Decodes an `AstNode` object, keeping its id.
    pub(crate) fn node<T>(
        &self,
        value: &Value,
        decode: impl FnOnce(&Value) -> Result<T>,
    ) -> Result<AstNode<T>> {
        let raw = raw_node(value)?;
        let data = decode(raw.data)?;
        self.session.note_decoded();
        trace!(id = raw.id, "decoded node");
        Ok(AstNode::with_id(data, raw.id))
    }

    /// Decodes a value that may be absent. Absence never calls `decode`.
    pub(crate) fn optional<T>(
        &self,
        value: Option<&Value>,
        decode: impl FnOnce(&Value) -> Result<T>,
    ) -> Result<Option<T>> {
        value.map(decode).transpose()
    }

    /// Decodes every element of a list, in order, fanning out across threads
    /// for long lists.
    pub(crate) fn list<T, F>(&self, items: &[Value], decode: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&Value) -> Result<T> + Sync + Send,
    {
        if self.options.parallel && items.len() >= self.options.parallel_threshold {
            items.par_iter().map(decode).collect()
        } else {
            items.iter().map(decode).collect()
        }
    }

    /// Decodes a `[pre, value, post]` triple.
    pub(crate) fn annotated<T>(
        &self,
        raw: &Value,
        decode: impl FnOnce(&Value) -> Result<T>,
    ) -> Result<Annotated<T>> {
        match array(raw)? {
            [pre, value, post] => Ok(Annotated::new(strings(pre)?, decode(value)?, strings(post)?)),
            other => Err(internal!(
                "annotated value must have 3 parts, found {}",
                other.len()
            )),
        }
    }

    pub(crate) fn annotated_list<T, F>(&self, items: &[Value], decode: F) -> Result<Vec<Annotated<T>>>
    where
        T: Send,
        F: Fn(&Value) -> Result<T> + Sync + Send,
    {
        self.list(items, |raw| self.annotated(raw, &decode))
    }

    /// Decodes a keyword from its bare tag.
    pub(crate) fn keyword<K: Keyword>(&self, value: &Value) -> Result<K> {
        let (tag, _) = active_variant(value)?;
        K::from_tag(tag).ok_or_else(|| {
            debug!(family = K::FAMILY, tag, "rejected keyword");
            TranslateError::invalid_field(tag)
        })
    }
}
