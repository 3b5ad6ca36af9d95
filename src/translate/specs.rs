//! Specifier handlers and the auxiliary nodes they are built from.

use serde_json::Value;

use crate::ast::{
    AstNode, Connection, FormalParam, FormalParamList, Ident, Keyword, Limit,
    PortInstanceIdentifier, SpecCommand, SpecCompInstance, SpecConnectionGraph, SpecContainer,
    SpecEvent, SpecImport, SpecInitialTransition, SpecInternalPort, SpecParam, SpecPortInstance,
    SpecPortMatching, SpecRecord, SpecStateEntry, SpecStateExit, SpecStateMachineInstance,
    SpecStateTransition, SpecTlmChannel, SpecTlmPacket, SpecTlmPacketSet, TlmChannelIdentifier,
    TransitionExpr, TransitionOrDo,
};
use crate::errors::Result;
use crate::internal;
use crate::translate::json::{
    active_variant, array, Fields, CONNECTION_GRAPH, PORT_INSTANCE, TRANSITION_OR_DO,
};
use crate::translate::Translator;

impl Translator<'_> {
    // ------------------------------------------------------------------------
    // Formal parameters
    // ------------------------------------------------------------------------

    pub(crate) fn formal_params(&self, items: &[Value]) -> Result<FormalParamList> {
        self.annotated_list(items, |v| self.formal_param(v))
    }

    fn formal_param(&self, value: &Value) -> Result<AstNode<FormalParam>> {
        self.node(value, |data| {
            let f = Fields::of(data, "FormalParam")?;
            Ok(FormalParam {
                kind: self.keyword(f.required("kind")?)?,
                name: f.string("name")?,
                type_name: self.type_name(f.required("typeName")?)?,
            })
        })
    }

    // ------------------------------------------------------------------------
    // Component specifiers
    // ------------------------------------------------------------------------

    pub(crate) fn spec_command(&self, data: &Value) -> Result<SpecCommand> {
        let f = Fields::of(data, "SpecCommand")?;
        Ok(SpecCommand {
            kind: self.keyword(f.required("kind")?)?,
            name: f.string("name")?,
            params: self.formal_params(f.array("params")?)?,
            opcode: self.optional_expr(f.optional("opcode")?)?,
            priority: self.optional_expr(f.optional("priority")?)?,
            queue_full: self.optional_keyword_node(f.optional("queueFull")?)?,
        })
    }

    pub(crate) fn spec_container(&self, data: &Value) -> Result<SpecContainer> {
        let f = Fields::of(data, "SpecContainer")?;
        Ok(SpecContainer {
            name: f.string("name")?,
            id: self.optional_expr(f.optional("id")?)?,
            default_priority: self.optional_expr(f.optional("defaultPriority")?)?,
        })
    }

    pub(crate) fn spec_event(&self, data: &Value) -> Result<SpecEvent> {
        let f = Fields::of(data, "SpecEvent")?;
        Ok(SpecEvent {
            name: f.string("name")?,
            params: self.formal_params(f.array("params")?)?,
            severity: self.keyword(f.required("severity")?)?,
            id: self.optional_expr(f.optional("id")?)?,
            format: self.string_node(f.required("format")?)?,
        })
    }

    pub(crate) fn spec_internal_port(&self, data: &Value) -> Result<SpecInternalPort> {
        let f = Fields::of(data, "SpecInternalPort")?;
        Ok(SpecInternalPort {
            name: f.string("name")?,
            params: self.formal_params(f.array("params")?)?,
            priority: self.optional_expr(f.optional("priority")?)?,
            queue_full: self.optional(f.optional("queueFull")?, |v| self.keyword(v))?,
        })
    }

    /// Queue-full clauses of commands and port instances are nodes.
    fn optional_keyword_node<K: Keyword>(
        &self,
        value: Option<&Value>,
    ) -> Result<Option<AstNode<K>>> {
        self.optional(value, |v| self.node(v, |k| self.keyword(k)))
    }

    pub(crate) fn spec_param(&self, data: &Value) -> Result<SpecParam> {
        let f = Fields::of(data, "SpecParam")?;
        Ok(SpecParam {
            name: f.string("name")?,
            type_name: self.type_name(f.required("typeName")?)?,
            default: self.optional_expr(f.optional("default")?)?,
            id: self.optional_expr(f.optional("id")?)?,
            set_opcode: self.optional_expr(f.optional("setOpcode")?)?,
            save_opcode: self.optional_expr(f.optional("saveOpcode")?)?,
            is_external: f.boolean("isExternal")?,
        })
    }

    /// Port instances are either `General` or `Special`.
    pub(crate) fn spec_port_instance(&self, data: &Value) -> Result<SpecPortInstance> {
        let (tag, payload) = active_variant(data)?;
        match tag {
            "General" => {
                let f = Fields::of(payload, "General")?;
                Ok(SpecPortInstance::General {
                    kind: self.keyword(f.required("kind")?)?,
                    name: f.string("name")?,
                    size: self.optional_expr(f.optional("size")?)?,
                    port: self.optional(f.optional("port")?, |v| self.qual_ident(v))?,
                    priority: self.optional_expr(f.optional("priority")?)?,
                    queue_full: self.optional_keyword_node(f.optional("queueFull")?)?,
                })
            }
            "Special" => {
                let f = Fields::of(payload, "Special")?;
                Ok(SpecPortInstance::Special {
                    input_kind: self.optional(f.optional("inputKind")?, |v| self.keyword(v))?,
                    kind: self.keyword(f.required("kind")?)?,
                    name: f.string("name")?,
                    priority: self.optional_expr(f.optional("priority")?)?,
                    queue_full: self.optional_keyword_node(f.optional("queueFull")?)?,
                })
            }
            other => Err(PORT_INSTANCE.reject(other)),
        }
    }

    pub(crate) fn spec_port_matching(&self, data: &Value) -> Result<SpecPortMatching> {
        let f = Fields::of(data, "SpecPortMatching")?;
        Ok(SpecPortMatching {
            port1: self.ident(f.required("port1")?)?,
            port2: self.ident(f.required("port2")?)?,
        })
    }

    pub(crate) fn spec_record(&self, data: &Value) -> Result<SpecRecord> {
        let f = Fields::of(data, "SpecRecord")?;
        Ok(SpecRecord {
            name: f.string("name")?,
            record_type: self.type_name(f.required("recordType")?)?,
            is_array: f.boolean("isArray")?,
            id: self.optional_expr(f.optional("id")?)?,
        })
    }

    pub(crate) fn spec_state_machine_instance(
        &self,
        data: &Value,
    ) -> Result<SpecStateMachineInstance> {
        let f = Fields::of(data, "SpecStateMachineInstance")?;
        Ok(SpecStateMachineInstance {
            name: f.string("name")?,
            state_machine: self.qual_ident(f.required("stateMachine")?)?,
            priority: self.optional_expr(f.optional("priority")?)?,
            queue_full: self.optional(f.optional("queueFull")?, |v| self.keyword(v))?,
        })
    }

    pub(crate) fn spec_tlm_channel(&self, data: &Value) -> Result<SpecTlmChannel> {
        let f = Fields::of(data, "SpecTlmChannel")?;
        Ok(SpecTlmChannel {
            name: f.string("name")?,
            type_name: self.type_name(f.required("typeName")?)?,
            id: self.optional_expr(f.optional("id")?)?,
            update: self.optional(f.optional("update")?, |v| self.keyword(v))?,
            format: self.optional(f.optional("format")?, |v| self.string_node(v))?,
            low: self.list(f.array("low")?, |v| self.limit(v))?,
            high: self.list(f.array("high")?, |v| self.limit(v))?,
        })
    }

    /// A limit is the pair `[kind node, threshold expression]`.
    fn limit(&self, value: &Value) -> Result<Limit> {
        match array(value)? {
            [kind, threshold] => Ok((
                self.node(kind, |k| self.keyword(k))?,
                self.expr(threshold)?,
            )),
            other => Err(internal!("limit must have 2 parts, found {}", other.len())),
        }
    }

    pub(crate) fn spec_import(&self, data: &Value) -> Result<SpecImport> {
        let f = Fields::of(data, "SpecImport")?;
        Ok(SpecImport {
            sym: self.qual_ident(f.required("sym")?)?,
        })
    }

    // ------------------------------------------------------------------------
    // Topology specifiers
    // ------------------------------------------------------------------------

    pub(crate) fn spec_comp_instance(&self, data: &Value) -> Result<SpecCompInstance> {
        let f = Fields::of(data, "SpecCompInstance")?;
        Ok(SpecCompInstance {
            visibility: self.keyword(f.required("visibility")?)?,
            instance: self.qual_ident(f.required("instance")?)?,
        })
    }

    pub(crate) fn spec_connection_graph(&self, data: &Value) -> Result<SpecConnectionGraph> {
        let (tag, payload) = active_variant(data)?;
        match tag {
            "Direct" => {
                let f = Fields::of(payload, "Direct")?;
                Ok(SpecConnectionGraph::Direct {
                    name: f.string("name")?,
                    connections: self.list(f.array("connections")?, |v| self.connection(v))?,
                })
            }
            "Pattern" => {
                let f = Fields::of(payload, "Pattern")?;
                Ok(SpecConnectionGraph::Pattern {
                    kind: self.keyword(f.required("kind")?)?,
                    source: self.qual_ident(f.required("source")?)?,
                    targets: self.qual_idents(f.array("targets")?)?,
                })
            }
            other => Err(CONNECTION_GRAPH.reject(other)),
        }
    }

    fn connection(&self, value: &Value) -> Result<Connection> {
        let f = Fields::of(value, "Connection")?;
        Ok(Connection {
            is_unmatched: f.boolean("isUnmatched")?,
            from_port: self.port_instance_identifier(f.required("fromPort")?)?,
            from_index: self.optional_expr(f.optional("fromIndex")?)?,
            to_port: self.port_instance_identifier(f.required("toPort")?)?,
            to_index: self.optional_expr(f.optional("toIndex")?)?,
        })
    }

    fn port_instance_identifier(&self, value: &Value) -> Result<AstNode<PortInstanceIdentifier>> {
        self.node(value, |data| {
            let f = Fields::of(data, "PortInstanceIdentifier")?;
            Ok(PortInstanceIdentifier {
                component_instance: self.qual_ident(f.required("componentInstance")?)?,
                port_name: self.ident(f.required("portName")?)?,
            })
        })
    }

    pub(crate) fn spec_tlm_packet_set(&self, data: &Value) -> Result<SpecTlmPacketSet> {
        let f = Fields::of(data, "SpecTlmPacketSet")?;
        Ok(SpecTlmPacketSet {
            name: f.string("name")?,
            members: self.tlm_packet_set_members(f.array("members")?)?,
            omitted: self.list(f.array("omitted")?, |v| self.tlm_channel_identifier(v))?,
        })
    }

    pub(crate) fn spec_tlm_packet(&self, data: &Value) -> Result<SpecTlmPacket> {
        let f = Fields::of(data, "SpecTlmPacket")?;
        Ok(SpecTlmPacket {
            name: f.string("name")?,
            id: self.optional_expr(f.optional("id")?)?,
            group: self.expr(f.required("group")?)?,
            members: self.tlm_packet_members(f.array("members")?)?,
        })
    }

    pub(crate) fn tlm_channel_identifier(
        &self,
        value: &Value,
    ) -> Result<AstNode<TlmChannelIdentifier>> {
        self.node(value, |data| {
            let f = Fields::of(data, "TlmChannelIdentifier")?;
            Ok(TlmChannelIdentifier {
                component_instance: self.qual_ident(f.required("componentInstance")?)?,
                channel_name: self.ident(f.required("channelName")?)?,
            })
        })
    }

    // ------------------------------------------------------------------------
    // State machine specifiers
    // ------------------------------------------------------------------------

    pub(crate) fn spec_initial_transition(&self, data: &Value) -> Result<SpecInitialTransition> {
        let f = Fields::of(data, "SpecInitialTransition")?;
        Ok(SpecInitialTransition {
            transition: self.transition_expr(f.required("transition")?)?,
        })
    }

    pub(crate) fn spec_state_entry(&self, data: &Value) -> Result<SpecStateEntry> {
        let f = Fields::of(data, "SpecStateEntry")?;
        Ok(SpecStateEntry {
            actions: self.actions(f.array("actions")?)?,
        })
    }

    pub(crate) fn spec_state_exit(&self, data: &Value) -> Result<SpecStateExit> {
        let f = Fields::of(data, "SpecStateExit")?;
        Ok(SpecStateExit {
            actions: self.actions(f.array("actions")?)?,
        })
    }

    pub(crate) fn spec_state_transition(&self, data: &Value) -> Result<SpecStateTransition> {
        let f = Fields::of(data, "SpecStateTransition")?;
        Ok(SpecStateTransition {
            signal: self.ident(f.required("signal")?)?,
            guard: self.optional(f.optional("guard")?, |v| self.ident(v))?,
            transition_or_do: self.transition_or_do(f.required("transitionOrDo")?)?,
        })
    }

    /// `TransitionOrDo` is a plain tagged object, not a node.
    fn transition_or_do(&self, value: &Value) -> Result<TransitionOrDo> {
        let (tag, payload) = active_variant(value)?;
        match tag {
            "Transition" => {
                let f = Fields::of(payload, "Transition")?;
                Ok(TransitionOrDo::Transition {
                    transition: self.transition_expr(f.required("transition")?)?,
                })
            }
            "Do" => {
                let f = Fields::of(payload, "Do")?;
                Ok(TransitionOrDo::Do {
                    actions: self.actions(f.array("actions")?)?,
                })
            }
            other => Err(TRANSITION_OR_DO.reject(other)),
        }
    }

    pub(crate) fn transition_expr(&self, value: &Value) -> Result<AstNode<TransitionExpr>> {
        self.node(value, |data| {
            let f = Fields::of(data, "TransitionExpr")?;
            Ok(TransitionExpr {
                actions: self.actions(f.array("actions")?)?,
                target: self.qual_ident(f.required("target")?)?,
            })
        })
    }

    fn actions(&self, items: &[Value]) -> Result<Vec<AstNode<Ident>>> {
        self.idents(items)
    }
}
