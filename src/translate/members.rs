//! Member-family dispatch.
//!
//! A member is an annotated triple whose middle element names its variant:
//! `[pre, {"<Tag>": {"node": <AstNode>}}, post]`. Interface and telemetry
//! packet set members add an outer `{"node": ..}` around the triple, and
//! telemetry packet members carry no annotation at all.
//!
//! Tags are classified before the payload is touched, so an excluded or
//! unknown member fails the same way whatever its payload looks like.

use serde_json::Value;

use crate::ast::{
    Annotated, AstNode, ComponentMember, ComponentMemberNode, InterfaceMember,
    InterfaceMemberNode, ModuleMember, ModuleMemberNode, StateMachineMember,
    StateMachineMemberNode, StateMember, StateMemberNode, TlmPacketMember, TlmPacketSetMember,
    TlmPacketSetMemberNode, TopologyMember, TopologyMemberNode,
};
use crate::errors::Result;
use crate::translate::json::{
    active_variant, member_envelope, COMPONENT_MEMBER, INTERFACE_MEMBER, MODULE_MEMBER,
    STATE_MACHINE_MEMBER, STATE_MEMBER, TLM_PACKET_MEMBER, TLM_PACKET_SET_MEMBER,
    TOPOLOGY_MEMBER,
};
use crate::translate::Translator;

impl Translator<'_> {
    /// Decodes an annotated triple whose middle element is a tagged member.
    fn member<N>(
        &self,
        raw: &Value,
        decode: impl FnOnce(&str, &Value) -> Result<N>,
    ) -> Result<Annotated<N>> {
        self.annotated(raw, |tagged| {
            let (tag, payload) = active_variant(tagged)?;
            decode(tag, payload)
        })
    }

    /// Decodes the node inside a `{"node": <AstNode>}` member payload.
    fn enveloped<T>(
        &self,
        payload: &Value,
        decode: impl FnOnce(&Value) -> Result<T>,
    ) -> Result<AstNode<T>> {
        self.node(member_envelope(payload)?, decode)
    }

    // ------------------------------------------------------------------------
    // Modules
    // ------------------------------------------------------------------------

    pub fn module_members(&self, items: &[Value]) -> Result<Vec<ModuleMember>> {
        self.list(items, |raw| self.module_member(raw))
    }

    /// Decodes one annotated module member.
    ///
    /// # Errors
    /// `NotSupported` for `SpecInclude` and `SpecLoc`, `InvalidField` for any
    /// other unknown tag.
    pub fn module_member(&self, raw: &Value) -> Result<ModuleMember> {
        use ModuleMemberNode as M;
        let node = self.member(raw, |tag, payload| {
            Ok(match tag {
                "DefAbsType" => M::DefAbsType(self.enveloped(payload, |d| self.def_abs_type(d))?),
                "DefAliasType" => {
                    M::DefAliasType(self.enveloped(payload, |d| self.def_alias_type(d))?)
                }
                "DefArray" => M::DefArray(self.enveloped(payload, |d| self.def_array(d))?),
                "DefComponent" => {
                    M::DefComponent(self.enveloped(payload, |d| self.def_component(d))?)
                }
                "DefComponentInstance" => M::DefComponentInstance(
                    self.enveloped(payload, |d| self.def_component_instance(d))?,
                ),
                "DefConstant" => M::DefConstant(self.enveloped(payload, |d| self.def_constant(d))?),
                "DefEnum" => M::DefEnum(self.enveloped(payload, |d| self.def_enum(d))?),
                "DefInterface" => {
                    M::DefInterface(self.enveloped(payload, |d| self.def_interface(d))?)
                }
                "DefModule" => M::DefModule(self.enveloped(payload, |d| self.def_module(d))?),
                "DefPort" => M::DefPort(self.enveloped(payload, |d| self.def_port(d))?),
                "DefStateMachine" => {
                    M::DefStateMachine(self.enveloped(payload, |d| self.def_state_machine(d))?)
                }
                "DefStruct" => M::DefStruct(self.enveloped(payload, |d| self.def_struct(d))?),
                "DefTopology" => M::DefTopology(self.enveloped(payload, |d| self.def_topology(d))?),
                other => return Err(MODULE_MEMBER.reject(other)),
            })
        })?;
        Ok(ModuleMember { node })
    }

    // ------------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------------

    pub fn component_members(&self, items: &[Value]) -> Result<Vec<ComponentMember>> {
        self.list(items, |raw| self.component_member(raw))
    }

    pub fn component_member(&self, raw: &Value) -> Result<ComponentMember> {
        use ComponentMemberNode as C;
        let node = self.member(raw, |tag, payload| {
            Ok(match tag {
                "DefAbsType" => C::DefAbsType(self.enveloped(payload, |d| self.def_abs_type(d))?),
                "DefAliasType" => {
                    C::DefAliasType(self.enveloped(payload, |d| self.def_alias_type(d))?)
                }
                "DefArray" => C::DefArray(self.enveloped(payload, |d| self.def_array(d))?),
                "DefConstant" => C::DefConstant(self.enveloped(payload, |d| self.def_constant(d))?),
                "DefEnum" => C::DefEnum(self.enveloped(payload, |d| self.def_enum(d))?),
                "DefStateMachine" => {
                    C::DefStateMachine(self.enveloped(payload, |d| self.def_state_machine(d))?)
                }
                "DefStruct" => C::DefStruct(self.enveloped(payload, |d| self.def_struct(d))?),
                "SpecCommand" => C::SpecCommand(self.enveloped(payload, |d| self.spec_command(d))?),
                "SpecContainer" => {
                    C::SpecContainer(self.enveloped(payload, |d| self.spec_container(d))?)
                }
                "SpecEvent" => C::SpecEvent(self.enveloped(payload, |d| self.spec_event(d))?),
                "SpecImportInterface" => {
                    C::SpecImportInterface(self.enveloped(payload, |d| self.spec_import(d))?)
                }
                "SpecInternalPort" => {
                    C::SpecInternalPort(self.enveloped(payload, |d| self.spec_internal_port(d))?)
                }
                "SpecParam" => C::SpecParam(self.enveloped(payload, |d| self.spec_param(d))?),
                "SpecPortInstance" => {
                    C::SpecPortInstance(self.enveloped(payload, |d| self.spec_port_instance(d))?)
                }
                "SpecPortMatching" => {
                    C::SpecPortMatching(self.enveloped(payload, |d| self.spec_port_matching(d))?)
                }
                "SpecRecord" => C::SpecRecord(self.enveloped(payload, |d| self.spec_record(d))?),
                "SpecStateMachineInstance" => C::SpecStateMachineInstance(
                    self.enveloped(payload, |d| self.spec_state_machine_instance(d))?,
                ),
                "SpecTlmChannel" => {
                    C::SpecTlmChannel(self.enveloped(payload, |d| self.spec_tlm_channel(d))?)
                }
                other => return Err(COMPONENT_MEMBER.reject(other)),
            })
        })?;
        Ok(ComponentMember { node })
    }

    // ------------------------------------------------------------------------
    // State machines and states
    // ------------------------------------------------------------------------

    pub fn state_machine_members(&self, items: &[Value]) -> Result<Vec<StateMachineMember>> {
        self.list(items, |raw| self.state_machine_member(raw))
    }

    pub fn state_machine_member(&self, raw: &Value) -> Result<StateMachineMember> {
        use StateMachineMemberNode as S;
        let node = self.member(raw, |tag, payload| {
            Ok(match tag {
                "DefAction" => S::DefAction(self.enveloped(payload, |d| self.def_action(d))?),
                "DefChoice" => S::DefChoice(self.enveloped(payload, |d| self.def_choice(d))?),
                "DefGuard" => S::DefGuard(self.enveloped(payload, |d| self.def_guard(d))?),
                "DefSignal" => S::DefSignal(self.enveloped(payload, |d| self.def_signal(d))?),
                "DefState" => S::DefState(self.enveloped(payload, |d| self.def_state(d))?),
                "SpecInitialTransition" => S::SpecInitialTransition(
                    self.enveloped(payload, |d| self.spec_initial_transition(d))?,
                ),
                other => return Err(STATE_MACHINE_MEMBER.reject(other)),
            })
        })?;
        Ok(StateMachineMember { node })
    }

    pub fn state_members(&self, items: &[Value]) -> Result<Vec<StateMember>> {
        self.list(items, |raw| self.state_member(raw))
    }

    pub fn state_member(&self, raw: &Value) -> Result<StateMember> {
        use StateMemberNode as S;
        let node = self.member(raw, |tag, payload| {
            Ok(match tag {
                "DefChoice" => S::DefChoice(self.enveloped(payload, |d| self.def_choice(d))?),
                "DefState" => S::DefState(self.enveloped(payload, |d| self.def_state(d))?),
                "SpecInitialTransition" => S::SpecInitialTransition(
                    self.enveloped(payload, |d| self.spec_initial_transition(d))?,
                ),
                "SpecStateEntry" => {
                    S::SpecStateEntry(self.enveloped(payload, |d| self.spec_state_entry(d))?)
                }
                "SpecStateExit" => {
                    S::SpecStateExit(self.enveloped(payload, |d| self.spec_state_exit(d))?)
                }
                "SpecStateTransition" => S::SpecStateTransition(
                    self.enveloped(payload, |d| self.spec_state_transition(d))?,
                ),
                other => return Err(STATE_MEMBER.reject(other)),
            })
        })?;
        Ok(StateMember { node })
    }

    // ------------------------------------------------------------------------
    // Interfaces and topologies
    // ------------------------------------------------------------------------

    pub fn interface_members(&self, items: &[Value]) -> Result<Vec<InterfaceMember>> {
        self.list(items, |raw| self.interface_member(raw))
    }

    pub fn interface_member(&self, raw: &Value) -> Result<InterfaceMember> {
        use InterfaceMemberNode as I;
        let node = self.member(member_envelope(raw)?, |tag, payload| {
            Ok(match tag {
                "SpecPortInstance" => {
                    I::SpecPortInstance(self.enveloped(payload, |d| self.spec_port_instance(d))?)
                }
                "SpecImportInterface" => {
                    I::SpecImportInterface(self.enveloped(payload, |d| self.spec_import(d))?)
                }
                other => return Err(INTERFACE_MEMBER.reject(other)),
            })
        })?;
        Ok(InterfaceMember { node })
    }

    pub fn topology_members(&self, items: &[Value]) -> Result<Vec<TopologyMember>> {
        self.list(items, |raw| self.topology_member(raw))
    }

    pub fn topology_member(&self, raw: &Value) -> Result<TopologyMember> {
        use TopologyMemberNode as T;
        let node = self.member(raw, |tag, payload| {
            Ok(match tag {
                "SpecCompInstance" => {
                    T::SpecCompInstance(self.enveloped(payload, |d| self.spec_comp_instance(d))?)
                }
                "SpecConnectionGraph" => T::SpecConnectionGraph(
                    self.enveloped(payload, |d| self.spec_connection_graph(d))?,
                ),
                "SpecTlmPacketSet" => {
                    T::SpecTlmPacketSet(self.enveloped(payload, |d| self.spec_tlm_packet_set(d))?)
                }
                "SpecTopImport" => {
                    T::SpecTopImport(self.enveloped(payload, |d| self.spec_import(d))?)
                }
                other => return Err(TOPOLOGY_MEMBER.reject(other)),
            })
        })?;
        Ok(TopologyMember { node })
    }

    // ------------------------------------------------------------------------
    // Telemetry packets
    // ------------------------------------------------------------------------

    pub fn tlm_packet_set_members(&self, items: &[Value]) -> Result<Vec<TlmPacketSetMember>> {
        self.list(items, |raw| self.tlm_packet_set_member(raw))
    }

    pub fn tlm_packet_set_member(&self, raw: &Value) -> Result<TlmPacketSetMember> {
        let node = self.member(member_envelope(raw)?, |tag, payload| match tag {
            "SpecTlmPacket" => Ok(TlmPacketSetMemberNode::SpecTlmPacket(
                self.enveloped(payload, |d| self.spec_tlm_packet(d))?,
            )),
            other => Err(TLM_PACKET_SET_MEMBER.reject(other)),
        })?;
        Ok(TlmPacketSetMember { node })
    }

    pub fn tlm_packet_members(&self, items: &[Value]) -> Result<Vec<TlmPacketMember>> {
        self.list(items, |raw| self.tlm_packet_member(raw))
    }

    /// Telemetry packet members are not annotated.
    pub fn tlm_packet_member(&self, raw: &Value) -> Result<TlmPacketMember> {
        let (tag, payload) = active_variant(raw)?;
        match tag {
            "TlmChannelIdentifier" => Ok(TlmPacketMember::TlmChannelIdentifier(
                self.tlm_channel_identifier(member_envelope(payload)?)?,
            )),
            other => Err(TLM_PACKET_MEMBER.reject(other)),
        }
    }
}
