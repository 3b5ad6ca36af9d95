//! Definition handlers.
//!
//! Each handler receives the `data` payload of a definition node and reads
//! its fields by wire name. Node identity is handled by the caller.

use serde_json::Value;

use crate::ast::{
    AstNode, DefAbsType, DefAction, DefAliasType, DefArray, DefChoice, DefComponent,
    DefComponentInstance, DefConstant, DefEnum, DefEnumConstant, DefGuard, DefInterface,
    DefModule, DefPort, DefSignal, DefState, DefStateMachine, DefStruct, DefTopology, SpecInit,
    StructTypeMember,
};
use crate::errors::Result;
use crate::translate::json::{array, Fields};
use crate::translate::Translator;

impl Translator<'_> {
    // ------------------------------------------------------------------------
    // Types and constants
    // ------------------------------------------------------------------------

    pub(crate) fn def_abs_type(&self, data: &Value) -> Result<DefAbsType> {
        let f = Fields::of(data, "DefAbsType")?;
        Ok(DefAbsType {
            name: f.string("name")?,
        })
    }

    pub(crate) fn def_alias_type(&self, data: &Value) -> Result<DefAliasType> {
        let f = Fields::of(data, "DefAliasType")?;
        Ok(DefAliasType {
            name: f.string("name")?,
            type_name: self.type_name(f.required("typeName")?)?,
        })
    }

    pub(crate) fn def_array(&self, data: &Value) -> Result<DefArray> {
        let f = Fields::of(data, "DefArray")?;
        Ok(DefArray {
            name: f.string("name")?,
            size: self.expr(f.required("size")?)?,
            elt_type: self.type_name(f.required("eltType")?)?,
            default: self.optional_expr(f.optional("default")?)?,
            format: self.optional(f.optional("format")?, |v| self.string_node(v))?,
        })
    }

    pub(crate) fn def_constant(&self, data: &Value) -> Result<DefConstant> {
        let f = Fields::of(data, "DefConstant")?;
        Ok(DefConstant {
            name: f.string("name")?,
            value: self.expr(f.required("value")?)?,
        })
    }

    pub(crate) fn def_enum(&self, data: &Value) -> Result<DefEnum> {
        let f = Fields::of(data, "DefEnum")?;
        Ok(DefEnum {
            name: f.string("name")?,
            type_name: self.optional_type_name(f.optional("typeName")?)?,
            constants: self.annotated_list(f.array("constants")?, |v| self.def_enum_constant(v))?,
            default: self.optional_expr(f.optional("default")?)?,
        })
    }

    fn def_enum_constant(&self, value: &Value) -> Result<AstNode<DefEnumConstant>> {
        self.node(value, |data| {
            let f = Fields::of(data, "DefEnumConstant")?;
            Ok(DefEnumConstant {
                name: f.string("name")?,
                value: self.optional_expr(f.optional("value")?)?,
            })
        })
    }

    pub(crate) fn def_struct(&self, data: &Value) -> Result<DefStruct> {
        let f = Fields::of(data, "DefStruct")?;
        Ok(DefStruct {
            name: f.string("name")?,
            members: self.annotated_list(f.array("members")?, |v| self.struct_type_member(v))?,
            default: self.optional_expr(f.optional("default")?)?,
        })
    }

    fn struct_type_member(&self, value: &Value) -> Result<AstNode<StructTypeMember>> {
        self.node(value, |data| {
            let f = Fields::of(data, "StructTypeMember")?;
            Ok(StructTypeMember {
                name: f.string("name")?,
                size: self.optional_expr(f.optional("size")?)?,
                type_name: self.type_name(f.required("typeName")?)?,
                format: self.optional(f.optional("format")?, |v| self.string_node(v))?,
            })
        })
    }

    // ------------------------------------------------------------------------
    // Containers
    // ------------------------------------------------------------------------

    pub(crate) fn def_module(&self, data: &Value) -> Result<DefModule> {
        let f = Fields::of(data, "DefModule")?;
        Ok(DefModule {
            name: f.string("name")?,
            members: self.module_members(f.array("members")?)?,
        })
    }

    pub(crate) fn def_component(&self, data: &Value) -> Result<DefComponent> {
        let f = Fields::of(data, "DefComponent")?;
        Ok(DefComponent {
            kind: self.keyword(f.required("kind")?)?,
            name: f.string("name")?,
            members: self.component_members(f.array("members")?)?,
        })
    }

    pub(crate) fn def_interface(&self, data: &Value) -> Result<DefInterface> {
        let f = Fields::of(data, "DefInterface")?;
        Ok(DefInterface {
            name: f.string("name")?,
            members: self.interface_members(f.array("members")?)?,
        })
    }

    pub(crate) fn def_topology(&self, data: &Value) -> Result<DefTopology> {
        let f = Fields::of(data, "DefTopology")?;
        Ok(DefTopology {
            name: f.string("name")?,
            members: self.topology_members(f.array("members")?)?,
        })
    }

    pub(crate) fn def_component_instance(&self, data: &Value) -> Result<DefComponentInstance> {
        let f = Fields::of(data, "DefComponentInstance")?;
        Ok(DefComponentInstance {
            name: f.string("name")?,
            component: self.qual_ident(f.required("component")?)?,
            base_id: self.expr(f.required("baseId")?)?,
            impl_type: self.optional(f.optional("implType")?, |v| self.string_node(v))?,
            file: self.optional(f.optional("file")?, |v| self.string_node(v))?,
            queue_size: self.optional_expr(f.optional("queueSize")?)?,
            stack_size: self.optional_expr(f.optional("stackSize")?)?,
            priority: self.optional_expr(f.optional("priority")?)?,
            cpu: self.optional_expr(f.optional("cpu")?)?,
            init_specs: self.annotated_list(f.array("initSpecs")?, |v| self.spec_init(v))?,
        })
    }

    fn spec_init(&self, value: &Value) -> Result<AstNode<SpecInit>> {
        self.node(value, |data| {
            let f = Fields::of(data, "SpecInit")?;
            Ok(SpecInit {
                phase: self.expr(f.required("phase")?)?,
                code: f.string("code")?,
            })
        })
    }

    pub(crate) fn def_port(&self, data: &Value) -> Result<DefPort> {
        let f = Fields::of(data, "DefPort")?;
        Ok(DefPort {
            name: f.string("name")?,
            params: self.formal_params(f.array("params")?)?,
            return_type: self.optional_type_name(f.optional("returnType")?)?,
        })
    }

    // ------------------------------------------------------------------------
    // State machines
    // ------------------------------------------------------------------------

    /// An absent member list marks an external state machine.
    pub(crate) fn def_state_machine(&self, data: &Value) -> Result<DefStateMachine> {
        let f = Fields::of(data, "DefStateMachine")?;
        let members = self.optional(f.optional("members")?, |v| {
            self.state_machine_members(array(v)?)
        })?;
        Ok(DefStateMachine {
            name: f.string("name")?,
            members,
        })
    }

    pub(crate) fn def_action(&self, data: &Value) -> Result<DefAction> {
        let f = Fields::of(data, "DefAction")?;
        Ok(DefAction {
            name: f.string("name")?,
            type_name: self.optional_type_name(f.optional("typeName")?)?,
        })
    }

    pub(crate) fn def_guard(&self, data: &Value) -> Result<DefGuard> {
        let f = Fields::of(data, "DefGuard")?;
        Ok(DefGuard {
            name: f.string("name")?,
            type_name: self.optional_type_name(f.optional("typeName")?)?,
        })
    }

    pub(crate) fn def_signal(&self, data: &Value) -> Result<DefSignal> {
        let f = Fields::of(data, "DefSignal")?;
        Ok(DefSignal {
            name: f.string("name")?,
            type_name: self.optional_type_name(f.optional("typeName")?)?,
        })
    }

    pub(crate) fn def_choice(&self, data: &Value) -> Result<DefChoice> {
        let f = Fields::of(data, "DefChoice")?;
        Ok(DefChoice {
            name: f.string("name")?,
            guard: self.ident(f.required("guard")?)?,
            if_transition: self.transition_expr(f.required("ifTransition")?)?,
            else_transition: self.transition_expr(f.required("elseTransition")?)?,
        })
    }

    pub(crate) fn def_state(&self, data: &Value) -> Result<DefState> {
        let f = Fields::of(data, "DefState")?;
        Ok(DefState {
            name: f.string("name")?,
            members: self.state_members(f.array("members")?)?,
        })
    }
}
