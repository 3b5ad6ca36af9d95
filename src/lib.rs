//! # fpp-model
//!
//! Typed FPP abstract syntax trees rebuilt from the JSON emitted by
//! `fpp-to-json`.
//!
//! ## Usage Workflow
//! 1. Load the location map with [`Locations::load`].
//! 2. Translate the AST file with [`translate_ast_json`], sharing one
//!    [`AstSession`] per run.
//! 3. Walk the returned [`TransUnit`]s and resolve node ids through the
//!    location map.

pub mod ast;
pub mod cli;
pub mod errors;
pub mod locations;
pub mod translate;

pub use ast::{AstId, AstNode, AstSession, QualIdent, TransUnit};
pub use errors::{ErrorKind, Result, TranslateError};
pub use locations::{Location, Locations};
pub use translate::{translate_ast_json, translate_ast_str, TranslateOptions, Translator};
