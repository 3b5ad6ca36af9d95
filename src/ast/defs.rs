//! Definitions.
//!
//! Each definition is an immutable record whose fields follow the FPP grammar:
//! `Option` marks an optional clause, `Vec` a (possibly empty) repeated one.

use serde::Serialize;

use crate::ast::{
    Annotated, AstNode, ComponentKind, ComponentMember, Expr, FormalParamList, Ident,
    InterfaceMember, ModuleMember, QualIdent, SpecInit, StateMachineMember, StateMember,
    TopologyMember, TransitionExpr, TypeName,
};

/// `type T`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefAbsType {
    pub name: Ident,
}

/// `type T = U`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefAliasType {
    pub name: Ident,
    pub type_name: AstNode<TypeName>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefArray {
    pub name: Ident,
    pub size: AstNode<Expr>,
    pub elt_type: AstNode<TypeName>,
    pub default: Option<AstNode<Expr>>,
    pub format: Option<AstNode<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefComponent {
    pub kind: ComponentKind,
    pub name: Ident,
    pub members: Vec<ComponentMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefComponentInstance {
    pub name: Ident,
    pub component: AstNode<QualIdent>,
    pub base_id: AstNode<Expr>,
    pub impl_type: Option<AstNode<String>>,
    pub file: Option<AstNode<String>>,
    pub queue_size: Option<AstNode<Expr>>,
    pub stack_size: Option<AstNode<Expr>>,
    pub priority: Option<AstNode<Expr>>,
    pub cpu: Option<AstNode<Expr>>,
    pub init_specs: Vec<Annotated<AstNode<SpecInit>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefConstant {
    pub name: Ident,
    pub value: AstNode<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefEnum {
    pub name: Ident,
    pub type_name: Option<AstNode<TypeName>>,
    pub constants: Vec<Annotated<AstNode<DefEnumConstant>>>,
    pub default: Option<AstNode<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefEnumConstant {
    pub name: Ident,
    pub value: Option<AstNode<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefModule {
    pub name: Ident,
    pub members: Vec<ModuleMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefPort {
    pub name: Ident,
    pub params: FormalParamList,
    pub return_type: Option<AstNode<TypeName>>,
}

/// A state machine definition. `members` is `None` for an external state
/// machine, whose behavior is implemented outside FPP.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefStateMachine {
    pub name: Ident,
    pub members: Option<Vec<StateMachineMember>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefAction {
    pub name: Ident,
    pub type_name: Option<AstNode<TypeName>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefChoice {
    pub name: Ident,
    pub guard: AstNode<Ident>,
    pub if_transition: AstNode<TransitionExpr>,
    pub else_transition: AstNode<TransitionExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefGuard {
    pub name: Ident,
    pub type_name: Option<AstNode<TypeName>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefSignal {
    pub name: Ident,
    pub type_name: Option<AstNode<TypeName>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefState {
    pub name: Ident,
    pub members: Vec<StateMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefInterface {
    pub name: Ident,
    pub members: Vec<InterfaceMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefStruct {
    pub name: Ident,
    pub members: Vec<Annotated<AstNode<StructTypeMember>>>,
    pub default: Option<AstNode<Expr>>,
}

/// A member of a struct type definition: `name: [size] type format`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructTypeMember {
    pub name: Ident,
    pub size: Option<AstNode<Expr>>,
    pub type_name: AstNode<TypeName>,
    pub format: Option<AstNode<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefTopology {
    pub name: Ident,
    pub members: Vec<TopologyMember>,
}
