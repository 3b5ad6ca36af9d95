//! Member families.
//!
//! A member wraps an annotated node of its family. The node enums are closed:
//! every variant the translator can produce is listed here, and the
//! translator rejects every other tag.

use serde::Serialize;

use crate::ast::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleMember {
    pub node: Annotated<ModuleMemberNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ModuleMemberNode {
    DefAbsType(AstNode<DefAbsType>),
    DefAliasType(AstNode<DefAliasType>),
    DefArray(AstNode<DefArray>),
    DefComponent(AstNode<DefComponent>),
    DefComponentInstance(AstNode<DefComponentInstance>),
    DefConstant(AstNode<DefConstant>),
    DefEnum(AstNode<DefEnum>),
    DefInterface(AstNode<DefInterface>),
    DefModule(AstNode<DefModule>),
    DefPort(AstNode<DefPort>),
    DefStateMachine(AstNode<DefStateMachine>),
    DefStruct(AstNode<DefStruct>),
    DefTopology(AstNode<DefTopology>),
}

impl ModuleMemberNode {
    /// Identity of the wrapped definition node.
    pub fn id(&self) -> AstId {
        match self {
            ModuleMemberNode::DefAbsType(n) => n.id,
            ModuleMemberNode::DefAliasType(n) => n.id,
            ModuleMemberNode::DefArray(n) => n.id,
            ModuleMemberNode::DefComponent(n) => n.id,
            ModuleMemberNode::DefComponentInstance(n) => n.id,
            ModuleMemberNode::DefConstant(n) => n.id,
            ModuleMemberNode::DefEnum(n) => n.id,
            ModuleMemberNode::DefInterface(n) => n.id,
            ModuleMemberNode::DefModule(n) => n.id,
            ModuleMemberNode::DefPort(n) => n.id,
            ModuleMemberNode::DefStateMachine(n) => n.id,
            ModuleMemberNode::DefStruct(n) => n.id,
            ModuleMemberNode::DefTopology(n) => n.id,
        }
    }

    /// Name of the wrapped definition.
    pub fn name(&self) -> &str {
        match self {
            ModuleMemberNode::DefAbsType(n) => &n.data.name,
            ModuleMemberNode::DefAliasType(n) => &n.data.name,
            ModuleMemberNode::DefArray(n) => &n.data.name,
            ModuleMemberNode::DefComponent(n) => &n.data.name,
            ModuleMemberNode::DefComponentInstance(n) => &n.data.name,
            ModuleMemberNode::DefConstant(n) => &n.data.name,
            ModuleMemberNode::DefEnum(n) => &n.data.name,
            ModuleMemberNode::DefInterface(n) => &n.data.name,
            ModuleMemberNode::DefModule(n) => &n.data.name,
            ModuleMemberNode::DefPort(n) => &n.data.name,
            ModuleMemberNode::DefStateMachine(n) => &n.data.name,
            ModuleMemberNode::DefStruct(n) => &n.data.name,
            ModuleMemberNode::DefTopology(n) => &n.data.name,
        }
    }

    /// The wire tag of this member kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ModuleMemberNode::DefAbsType(_) => "DefAbsType",
            ModuleMemberNode::DefAliasType(_) => "DefAliasType",
            ModuleMemberNode::DefArray(_) => "DefArray",
            ModuleMemberNode::DefComponent(_) => "DefComponent",
            ModuleMemberNode::DefComponentInstance(_) => "DefComponentInstance",
            ModuleMemberNode::DefConstant(_) => "DefConstant",
            ModuleMemberNode::DefEnum(_) => "DefEnum",
            ModuleMemberNode::DefInterface(_) => "DefInterface",
            ModuleMemberNode::DefModule(_) => "DefModule",
            ModuleMemberNode::DefPort(_) => "DefPort",
            ModuleMemberNode::DefStateMachine(_) => "DefStateMachine",
            ModuleMemberNode::DefStruct(_) => "DefStruct",
            ModuleMemberNode::DefTopology(_) => "DefTopology",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentMember {
    pub node: Annotated<ComponentMemberNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ComponentMemberNode {
    DefAbsType(AstNode<DefAbsType>),
    DefAliasType(AstNode<DefAliasType>),
    DefArray(AstNode<DefArray>),
    DefConstant(AstNode<DefConstant>),
    DefEnum(AstNode<DefEnum>),
    DefStateMachine(AstNode<DefStateMachine>),
    DefStruct(AstNode<DefStruct>),
    SpecCommand(AstNode<SpecCommand>),
    SpecContainer(AstNode<SpecContainer>),
    SpecEvent(AstNode<SpecEvent>),
    SpecImportInterface(AstNode<SpecImport>),
    SpecInternalPort(AstNode<SpecInternalPort>),
    SpecParam(AstNode<SpecParam>),
    SpecPortInstance(AstNode<SpecPortInstance>),
    SpecPortMatching(AstNode<SpecPortMatching>),
    SpecRecord(AstNode<SpecRecord>),
    SpecStateMachineInstance(AstNode<SpecStateMachineInstance>),
    SpecTlmChannel(AstNode<SpecTlmChannel>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateMachineMember {
    pub node: Annotated<StateMachineMemberNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StateMachineMemberNode {
    DefAction(AstNode<DefAction>),
    DefChoice(AstNode<DefChoice>),
    DefGuard(AstNode<DefGuard>),
    DefSignal(AstNode<DefSignal>),
    DefState(AstNode<DefState>),
    SpecInitialTransition(AstNode<SpecInitialTransition>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateMember {
    pub node: Annotated<StateMemberNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StateMemberNode {
    DefChoice(AstNode<DefChoice>),
    DefState(AstNode<DefState>),
    SpecInitialTransition(AstNode<SpecInitialTransition>),
    SpecStateEntry(AstNode<SpecStateEntry>),
    SpecStateExit(AstNode<SpecStateExit>),
    SpecStateTransition(AstNode<SpecStateTransition>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceMember {
    pub node: Annotated<InterfaceMemberNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InterfaceMemberNode {
    SpecPortInstance(AstNode<SpecPortInstance>),
    SpecImportInterface(AstNode<SpecImport>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyMember {
    pub node: Annotated<TopologyMemberNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TopologyMemberNode {
    SpecCompInstance(AstNode<SpecCompInstance>),
    SpecConnectionGraph(AstNode<SpecConnectionGraph>),
    SpecTlmPacketSet(AstNode<SpecTlmPacketSet>),
    SpecTopImport(AstNode<SpecImport>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TlmPacketSetMember {
    pub node: Annotated<TlmPacketSetMemberNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TlmPacketSetMemberNode {
    SpecTlmPacket(AstNode<SpecTlmPacket>),
}

/// Telemetry packet members are not annotated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TlmPacketMember {
    TlmChannelIdentifier(AstNode<TlmChannelIdentifier>),
}
