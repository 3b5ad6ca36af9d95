//! Qualified identifiers and the builder that derives them from token lists.

use std::fmt;

use serde::Serialize;

use crate::ast::{AstNode, Ident};
use crate::errors::Result;
use crate::internal;

/// A possibly-qualified identifier such as `A.B.C`.
///
/// `Qualified` nests to the left: `A.B.C` is
/// `Qualified(Qualified(Unqualified(A), B), C)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum QualIdent {
    Unqualified(Ident),
    Qualified {
        qualifier: Box<AstNode<QualIdent>>,
        name: AstNode<Ident>,
    },
}

/// A qualified identifier as a flat list of identifier nodes.
pub type NodeList = [AstNode<Ident>];

impl QualIdent {
    /// Builds a qualified identifier from a flat, non-empty token list.
    ///
    /// Each synthesized qualifier node borrows the identity of the rightmost
    /// token of its prefix, so location lookups on it land on that token.
    ///
    /// ```rust
    /// use fpp_model::ast::{AstNode, QualIdent};
    /// let tokens = vec![
    ///     AstNode::with_id("a".to_string(), 1),
    ///     AstNode::with_id("b".to_string(), 2),
    ///     AstNode::with_id("c".to_string(), 3),
    /// ];
    /// let qi = QualIdent::from_node_list(&tokens).unwrap();
    /// assert_eq!(qi.to_ident_list(), vec!["a", "b", "c"]);
    /// ```
    pub fn from_node_list(node_list: &NodeList) -> Result<QualIdent> {
        let (prefix, last) = split(node_list)?;
        match prefix.last() {
            None => Ok(QualIdent::Unqualified(last.data.clone())),
            Some(prefix_name) => {
                let qualifier = QualIdent::from_node_list(prefix)?;
                Ok(QualIdent::Qualified {
                    qualifier: Box::new(AstNode::with_id(qualifier, prefix_name.id)),
                    name: last.clone(),
                })
            }
        }
    }

    /// Flattens the qualifier chain, then appends the name.
    pub fn to_ident_list(&self) -> Vec<Ident> {
        match self {
            QualIdent::Unqualified(name) => vec![name.clone()],
            QualIdent::Qualified { qualifier, name } => {
                let mut idents = qualifier.data.to_ident_list();
                idents.push(name.data.clone());
                idents
            }
        }
    }

    /// The unqualified (rightmost) name.
    pub fn name(&self) -> &str {
        match self {
            QualIdent::Unqualified(name) => name,
            QualIdent::Qualified { name, .. } => &name.data,
        }
    }
}

impl fmt::Display for QualIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualIdent::Unqualified(name) => write!(f, "{name}"),
            QualIdent::Qualified { qualifier, name } => {
                write!(f, "{}.{}", qualifier.data, name.data)
            }
        }
    }
}

/// Splits a token list into its qualifier prefix and its name.
pub fn split(node_list: &NodeList) -> Result<(&NodeList, &AstNode<Ident>)> {
    match node_list.split_last() {
        Some((last, prefix)) => Ok((prefix, last)),
        None => Err(internal!("node list should not be empty")),
    }
}

/// The qualifier prefix of a token list.
pub fn qualifier(node_list: &NodeList) -> Result<&NodeList> {
    split(node_list).map(|(prefix, _)| prefix)
}

/// The unqualified name of a token list.
pub fn name(node_list: &NodeList) -> Result<&AstNode<Ident>> {
    split(node_list).map(|(_, last)| last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn tokens(names: &[&str]) -> Vec<AstNode<Ident>> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| AstNode::with_id(n.to_string(), 10 + i as u64))
            .collect()
    }

    #[test]
    fn single_token_is_unqualified() {
        let qi = QualIdent::from_node_list(&tokens(&["a"])).unwrap();
        assert_eq!(qi, QualIdent::Unqualified("a".to_string()));
    }

    #[test]
    fn three_tokens_nest_left() {
        let list = tokens(&["a", "b", "c"]);
        let qi = QualIdent::from_node_list(&list).unwrap();
        let expected = QualIdent::Qualified {
            qualifier: Box::new(AstNode::with_id(
                QualIdent::Qualified {
                    qualifier: Box::new(AstNode::with_id(
                        QualIdent::Unqualified("a".to_string()),
                        10,
                    )),
                    name: list[1].clone(),
                },
                11,
            )),
            name: list[2].clone(),
        };
        assert_eq!(qi, expected);
        assert_eq!(qi.to_string(), "a.b.c");
        assert_eq!(qi.name(), "c");
    }

    #[test]
    fn qualifier_borrows_rightmost_prefix_identity() {
        let list = tokens(&["Fw", "Cmd", "Reg", "Port"]);
        let qi = QualIdent::from_node_list(&list).unwrap();
        let QualIdent::Qualified { qualifier, .. } = &qi else {
            panic!("expected a qualified identifier");
        };
        assert_eq!(qualifier.id, list[2].id);
        let QualIdent::Qualified { qualifier: inner, .. } = &qualifier.data else {
            panic!("expected a nested qualifier");
        };
        assert_eq!(inner.id, list[1].id);
    }

    #[test]
    fn round_trips_for_every_length() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        for n in 1..=names.len() {
            let list = tokens(&names[..n]);
            let qi = QualIdent::from_node_list(&list).unwrap();
            assert_eq!(qi.to_ident_list(), names[..n].to_vec());
        }
    }

    #[test]
    fn empty_list_is_internal_error() {
        let err = QualIdent::from_node_list(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(qualifier(&[]).is_err());
        assert!(name(&[]).is_err());
    }

    #[test]
    fn split_helpers() {
        let list = tokens(&["a", "b"]);
        assert_eq!(qualifier(&list).unwrap().len(), 1);
        assert_eq!(name(&list).unwrap().data, "b");
    }
}
