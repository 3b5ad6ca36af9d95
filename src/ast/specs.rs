//! Specifiers and the auxiliary nodes they are built from.

use serde::Serialize;

use crate::ast::{
    Annotated, AstNode, Expr, FormalParamKind, GeneralKind, Ident, LimitKind, PatternKind,
    QualIdent, QueueFull, SpecCommandKind, SpecEventSeverity, SpecTlmChannelUpdate,
    SpecialInputKind, SpecialKind, TlmPacketMember, TlmPacketSetMember, TypeName, Visibility,
};

/// Formal parameters of a port, command, event or internal port.
pub type FormalParamList = Vec<Annotated<AstNode<FormalParam>>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormalParam {
    pub kind: FormalParamKind,
    pub name: Ident,
    pub type_name: AstNode<TypeName>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecCommand {
    pub kind: SpecCommandKind,
    pub name: Ident,
    pub params: FormalParamList,
    pub opcode: Option<AstNode<Expr>>,
    pub priority: Option<AstNode<Expr>>,
    pub queue_full: Option<AstNode<QueueFull>>,
}

/// A component instance in a topology
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecCompInstance {
    pub visibility: Visibility,
    pub instance: AstNode<QualIdent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SpecConnectionGraph {
    Direct {
        name: Ident,
        connections: Vec<Connection>,
    },
    Pattern {
        kind: PatternKind,
        source: AstNode<QualIdent>,
        targets: Vec<AstNode<QualIdent>>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    pub is_unmatched: bool,
    pub from_port: AstNode<PortInstanceIdentifier>,
    pub from_index: Option<AstNode<Expr>>,
    pub to_port: AstNode<PortInstanceIdentifier>,
    pub to_index: Option<AstNode<Expr>>,
}

/// `component_instance.port_name`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortInstanceIdentifier {
    pub component_instance: AstNode<QualIdent>,
    pub port_name: AstNode<Ident>,
}

/// A data product container
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecContainer {
    pub name: Ident,
    pub id: Option<AstNode<Expr>>,
    pub default_priority: Option<AstNode<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecEvent {
    pub name: Ident,
    pub params: FormalParamList,
    pub severity: SpecEventSeverity,
    pub id: Option<AstNode<Expr>>,
    pub format: AstNode<String>,
}

/// An init specifier of a component instance: `phase P "code"`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecInit {
    pub phase: AstNode<Expr>,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecInternalPort {
    pub name: Ident,
    pub params: FormalParamList,
    pub priority: Option<AstNode<Expr>>,
    pub queue_full: Option<QueueFull>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecParam {
    pub name: Ident,
    pub type_name: AstNode<TypeName>,
    pub default: Option<AstNode<Expr>>,
    pub id: Option<AstNode<Expr>>,
    pub set_opcode: Option<AstNode<Expr>>,
    pub save_opcode: Option<AstNode<Expr>>,
    pub is_external: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SpecPortInstance {
    General {
        kind: GeneralKind,
        name: Ident,
        size: Option<AstNode<Expr>>,
        port: Option<AstNode<QualIdent>>,
        priority: Option<AstNode<Expr>>,
        queue_full: Option<AstNode<QueueFull>>,
    },
    Special {
        input_kind: Option<SpecialInputKind>,
        kind: SpecialKind,
        name: Ident,
        priority: Option<AstNode<Expr>>,
        queue_full: Option<AstNode<QueueFull>>,
    },
}

impl SpecPortInstance {
    pub fn name(&self) -> &str {
        match self {
            SpecPortInstance::General { name, .. } | SpecPortInstance::Special { name, .. } => {
                name
            }
        }
    }
}

/// `match port1 with port2`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecPortMatching {
    pub port1: AstNode<Ident>,
    pub port2: AstNode<Ident>,
}

/// A data product record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecRecord {
    pub name: Ident,
    pub record_type: AstNode<TypeName>,
    pub is_array: bool,
    pub id: Option<AstNode<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecStateMachineInstance {
    pub name: Ident,
    pub state_machine: AstNode<QualIdent>,
    pub priority: Option<AstNode<Expr>>,
    pub queue_full: Option<QueueFull>,
}

/// A telemetry limit: kind and threshold.
pub type Limit = (AstNode<LimitKind>, AstNode<Expr>);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecTlmChannel {
    pub name: Ident,
    pub type_name: AstNode<TypeName>,
    pub id: Option<AstNode<Expr>>,
    pub update: Option<SpecTlmChannelUpdate>,
    pub format: Option<AstNode<String>>,
    pub low: Vec<Limit>,
    pub high: Vec<Limit>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecTlmPacket {
    pub name: Ident,
    pub id: Option<AstNode<Expr>>,
    pub group: AstNode<Expr>,
    pub members: Vec<TlmPacketMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecTlmPacketSet {
    pub name: Ident,
    pub members: Vec<TlmPacketSetMember>,
    pub omitted: Vec<AstNode<TlmChannelIdentifier>>,
}

/// `component_instance.channel_name`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TlmChannelIdentifier {
    pub component_instance: AstNode<QualIdent>,
    pub channel_name: AstNode<Ident>,
}

/// An `import` of an interface or topology
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecImport {
    pub sym: AstNode<QualIdent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecInitialTransition {
    pub transition: AstNode<TransitionExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecStateEntry {
    pub actions: Vec<AstNode<Ident>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecStateExit {
    pub actions: Vec<AstNode<Ident>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecStateTransition {
    pub signal: AstNode<Ident>,
    pub guard: Option<AstNode<Ident>>,
    pub transition_or_do: TransitionOrDo,
}

/// `do { actions } enter target`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionExpr {
    pub actions: Vec<AstNode<Ident>>,
    pub target: AstNode<QualIdent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TransitionOrDo {
    Transition { transition: AstNode<TransitionExpr> },
    Do { actions: Vec<AstNode<Ident>> },
}
