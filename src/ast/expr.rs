//! Expressions and type names.

use serde::Serialize;

use crate::ast::{AstNode, Binop, Ident, LiteralBool, QualIdent, TypeFloat, TypeInt, Unop};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    ExprArray {
        elts: Vec<AstNode<Expr>>,
    },
    ExprBinop {
        e1: Box<AstNode<Expr>>,
        op: Binop,
        e2: Box<AstNode<Expr>>,
    },
    ExprDot {
        e: Box<AstNode<Expr>>,
        id: AstNode<Ident>,
    },
    ExprIdent {
        value: Ident,
    },
    ExprLiteralBool {
        value: LiteralBool,
    },
    /// Integer literals keep their source text; FPP integers are unbounded.
    ExprLiteralInt {
        value: String,
    },
    ExprLiteralFloat {
        value: String,
    },
    ExprLiteralString {
        value: String,
    },
    ExprParen {
        e: Box<AstNode<Expr>>,
    },
    ExprStruct {
        members: Vec<AstNode<StructMember>>,
    },
    ExprUnop {
        op: Unop,
        e: Box<AstNode<Expr>>,
    },
}

/// A member of a struct expression: `name = value`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructMember {
    pub name: Ident,
    pub value: AstNode<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TypeName {
    TypeNameBool,
    TypeNameFloat { name: TypeFloat },
    TypeNameInt { name: TypeInt },
    TypeNameQualIdent { name: AstNode<QualIdent> },
    TypeNameString { size: Option<AstNode<Expr>> },
}
