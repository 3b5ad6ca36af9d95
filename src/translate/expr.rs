//! Identifiers, qualified identifiers, expressions and type names.

use serde_json::Value;

use crate::ast::{AstNode, Expr, Ident, QualIdent, StructMember, TypeName};
use crate::errors::Result;
use crate::translate::json::{self, active_variant, Fields, EXPR, QUAL_IDENT, TYPE_NAME};
use crate::translate::Translator;

impl Translator<'_> {
    /// Decodes an identifier node: `{"AstNode": {"id", "data": "name"}}`.
    pub fn ident(&self, value: &Value) -> Result<AstNode<Ident>> {
        self.node(value, json::string)
    }

    pub(crate) fn idents(&self, items: &[Value]) -> Result<Vec<AstNode<Ident>>> {
        self.list(items, |v| self.ident(v))
    }

    /// Decodes a string-literal node such as a format string or file name.
    pub(crate) fn string_node(&self, value: &Value) -> Result<AstNode<String>> {
        self.node(value, json::string)
    }

    /// Decodes a qualified-identifier node.
    ///
    /// The payload is either tagged (`Unqualified` / `Qualified`) or a flat
    /// array of identifier nodes, which goes through
    /// [`QualIdent::from_node_list`].
    pub fn qual_ident(&self, value: &Value) -> Result<AstNode<QualIdent>> {
        self.node(value, |data| self.qual_ident_data(data))
    }

    fn qual_ident_data(&self, data: &Value) -> Result<QualIdent> {
        if let Value::Array(tokens) = data {
            let tokens = self.idents(tokens)?;
            return QualIdent::from_node_list(&tokens);
        }
        let (tag, payload) = active_variant(data)?;
        match tag {
            "Unqualified" => {
                let f = Fields::of(payload, "Unqualified")?;
                Ok(QualIdent::Unqualified(f.string("name")?))
            }
            "Qualified" => {
                let f = Fields::of(payload, "Qualified")?;
                Ok(QualIdent::Qualified {
                    qualifier: Box::new(self.qual_ident(f.required("qualifier")?)?),
                    name: self.ident(f.required("name")?)?,
                })
            }
            other => Err(QUAL_IDENT.reject(other)),
        }
    }

    pub(crate) fn qual_idents(&self, items: &[Value]) -> Result<Vec<AstNode<QualIdent>>> {
        self.list(items, |v| self.qual_ident(v))
    }

    // ------------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------------

    /// Decodes an expression node.
    pub fn expr(&self, value: &Value) -> Result<AstNode<Expr>> {
        self.node(value, |data| self.expr_data(data))
    }

    fn boxed_expr(&self, value: &Value) -> Result<Box<AstNode<Expr>>> {
        self.expr(value).map(Box::new)
    }

    pub(crate) fn optional_expr(&self, value: Option<&Value>) -> Result<Option<AstNode<Expr>>> {
        self.optional(value, |v| self.expr(v))
    }

    fn expr_data(&self, data: &Value) -> Result<Expr> {
        let (tag, payload) = active_variant(data)?;
        match tag {
            "ExprArray" => {
                let f = Fields::of(payload, "ExprArray")?;
                Ok(Expr::ExprArray {
                    elts: self.list(f.array("elts")?, |v| self.expr(v))?,
                })
            }
            "ExprBinop" => {
                let f = Fields::of(payload, "ExprBinop")?;
                Ok(Expr::ExprBinop {
                    e1: self.boxed_expr(f.required("e1")?)?,
                    op: self.keyword(f.required("op")?)?,
                    e2: self.boxed_expr(f.required("e2")?)?,
                })
            }
            "ExprDot" => {
                let f = Fields::of(payload, "ExprDot")?;
                Ok(Expr::ExprDot {
                    e: self.boxed_expr(f.required("e")?)?,
                    id: self.ident(f.required("id")?)?,
                })
            }
            "ExprIdent" => {
                let f = Fields::of(payload, "ExprIdent")?;
                Ok(Expr::ExprIdent {
                    value: f.string("value")?,
                })
            }
            "ExprLiteralBool" => {
                let f = Fields::of(payload, "ExprLiteralBool")?;
                Ok(Expr::ExprLiteralBool {
                    value: self.keyword(f.required("value")?)?,
                })
            }
            "ExprLiteralInt" => {
                let f = Fields::of(payload, "ExprLiteralInt")?;
                Ok(Expr::ExprLiteralInt {
                    value: f.string("value")?,
                })
            }
            "ExprLiteralFloat" => {
                let f = Fields::of(payload, "ExprLiteralFloat")?;
                Ok(Expr::ExprLiteralFloat {
                    value: f.string("value")?,
                })
            }
            "ExprLiteralString" => {
                let f = Fields::of(payload, "ExprLiteralString")?;
                Ok(Expr::ExprLiteralString {
                    value: f.string("value")?,
                })
            }
            "ExprParen" => {
                let f = Fields::of(payload, "ExprParen")?;
                Ok(Expr::ExprParen {
                    e: self.boxed_expr(f.required("e")?)?,
                })
            }
            "ExprStruct" => {
                let f = Fields::of(payload, "ExprStruct")?;
                Ok(Expr::ExprStruct {
                    members: self.list(f.array("members")?, |v| self.struct_member(v))?,
                })
            }
            "ExprUnop" => {
                let f = Fields::of(payload, "ExprUnop")?;
                Ok(Expr::ExprUnop {
                    op: self.keyword(f.required("op")?)?,
                    e: self.boxed_expr(f.required("e")?)?,
                })
            }
            other => Err(EXPR.reject(other)),
        }
    }

    fn struct_member(&self, value: &Value) -> Result<AstNode<StructMember>> {
        self.node(value, |data| {
            let f = Fields::of(data, "StructMember")?;
            Ok(StructMember {
                name: f.string("name")?,
                value: self.expr(f.required("value")?)?,
            })
        })
    }

    // ------------------------------------------------------------------------
    // Type names
    // ------------------------------------------------------------------------

    /// Decodes a type-name node.
    pub fn type_name(&self, value: &Value) -> Result<AstNode<TypeName>> {
        self.node(value, |data| self.type_name_data(data))
    }

    pub(crate) fn optional_type_name(
        &self,
        value: Option<&Value>,
    ) -> Result<Option<AstNode<TypeName>>> {
        self.optional(value, |v| self.type_name(v))
    }

    fn type_name_data(&self, data: &Value) -> Result<TypeName> {
        let (tag, payload) = active_variant(data)?;
        match tag {
            "TypeNameBool" => Ok(TypeName::TypeNameBool),
            "TypeNameFloat" => {
                let f = Fields::of(payload, "TypeNameFloat")?;
                Ok(TypeName::TypeNameFloat {
                    name: self.keyword(f.required("name")?)?,
                })
            }
            "TypeNameInt" => {
                let f = Fields::of(payload, "TypeNameInt")?;
                Ok(TypeName::TypeNameInt {
                    name: self.keyword(f.required("name")?)?,
                })
            }
            "TypeNameQualIdent" => {
                let f = Fields::of(payload, "TypeNameQualIdent")?;
                Ok(TypeName::TypeNameQualIdent {
                    name: self.qual_ident(f.required("name")?)?,
                })
            }
            "TypeNameString" => {
                let f = Fields::of(payload, "TypeNameString")?;
                Ok(TypeName::TypeNameString {
                    size: self.optional_expr(f.optional("size")?)?,
                })
            }
            other => Err(TYPE_NAME.reject(other)),
        }
    }
}
