mod common;

use serde_json::{json, Value};

use common::*;
use fpp_model::ast::{
    ComponentKind, ComponentMemberNode, Expr, ModuleMemberNode, QualIdent, QueueFull,
    SpecConnectionGraph, StateMachineMemberNode, StateMemberNode, TlmPacketMember,
    TlmPacketSetMemberNode, TopologyMemberNode, TransitionOrDo, Visibility,
};
use fpp_model::{
    translate_ast_str, AstSession, ErrorKind, Locations, TransUnit, TranslateOptions, Translator,
};

fn translate(doc: &Value) -> fpp_model::Result<Vec<TransUnit>> {
    let session = AstSession::new();
    Translator::new(&session, TranslateOptions::sequential()).translate_document(doc)
}

// ============================================================================
// END TO END
// ============================================================================

#[test]
fn module_with_constant_resolves_location() {
    let locations = Locations::from_json_str(
        r#"{"5": {"file": "a.fpp", "pos": "1:1", "includingLoc": null}}"#,
    )
    .unwrap();
    let doc = document(vec![vec![module(4, "M", vec![constant(5, "c", int(6, "3"))])]]);
    let units = translate_ast_str(&doc.to_string(), &AstSession::new(), TranslateOptions::default())
        .unwrap();

    assert_eq!(units.len(), 1);
    let ModuleMemberNode::DefModule(m) = &units[0].members[0].node.value else {
        panic!("expected a module");
    };
    assert_eq!(m.data.name, "M");
    let ModuleMemberNode::DefConstant(c) = &m.data.members[0].node.value else {
        panic!("expected a constant");
    };
    assert_eq!(c.id, 5);
    assert_eq!(c.data.value.data, Expr::ExprLiteralInt { value: "3".into() });

    let loc = locations.get(c.id).unwrap();
    assert_eq!(loc.file.to_str(), Some("a.fpp"));
    assert_eq!(loc.pos, "1:1");
}

#[test]
fn every_unit_is_translated_in_order() {
    let doc = document(vec![
        vec![constant(1, "a", int(2, "1"))],
        vec![],
        vec![constant(3, "b", int(4, "2")), constant(5, "c", int(6, "3"))],
    ]);
    let units = translate(&doc).unwrap();
    let counts: Vec<_> = units.iter().map(|u| u.members.len()).collect();
    assert_eq!(counts, vec![1, 0, 2]);
    let names: Vec<_> = units[2].members.iter().map(|m| m.node.value.name()).collect();
    assert_eq!(names, vec!["b", "c"]);
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

#[test]
fn excluded_member_anywhere_fails_the_whole_document() {
    let doc = document(vec![vec![module(
        1,
        "M",
        vec![
            constant(2, "ok", int(3, "1")),
            member("SpecLoc", node(4, json!({}))),
        ],
    )]]);
    let err = translate(&doc).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotSupported);
    assert_eq!(err.to_string(), "The SpecLoc field is not supported in fpp-to-json");
}

#[test]
fn unknown_tag_is_never_not_supported() {
    for tag in ["DefWidget", "Spec", "specinclude", ""] {
        let doc = document(vec![vec![member(tag, node(1, json!({})))]]);
        let err = translate(&doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidField, "{tag:?}");
    }
}

#[test]
fn two_variant_keys_is_internal() {
    let doc = json!([{"members": [[[], {
        "DefConstant": {"node": node(1, json!({"name": "a", "value": int(2, "1")}))},
        "DefAbsType": {"node": node(3, json!({"name": "T"}))}
    }, []]]}]);
    assert_eq!(translate(&doc).unwrap_err().kind(), ErrorKind::Internal);
}

#[test]
fn malformed_documents_are_internal() {
    for doc in [
        json!([42]),
        json!([{"members": {}}]),
        json!([{"members": [[[], {"DefAbsType": {"node": node(1, json!({"name": "T"}))}}]]}]),
    ] {
        assert_eq!(translate(&doc).unwrap_err().kind(), ErrorKind::Internal, "{doc}");
    }
}

#[test]
fn unwrapped_optional_clause_is_internal() {
    let array_with = |default: Value| {
        document(vec![vec![member(
            "DefArray",
            node(
                1,
                json!({"name": "A", "size": int(2, "3"), "eltType": u32_type(3), "default": default, "format": none()}),
            ),
        )]])
    };
    let unwrapped = array_with(string_lit(4, "x"));
    let err = translate(&unwrapped).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(err.to_string().contains("found an AstNode"));

    let units = translate(&array_with(some(string_lit(4, "x")))).unwrap();
    let ModuleMemberNode::DefArray(a) = &units[0].members[0].node.value else {
        panic!("expected an array");
    };
    assert!(matches!(
        a.data.default.as_ref().map(|d| &d.data),
        Some(Expr::ExprLiteralString { value }) if value == "x"
    ));
}

// ============================================================================
// FIDELITY
// ============================================================================

#[test]
fn optional_fields_follow_presence() {
    let absent = document(vec![vec![member(
        "DefArray",
        node(
            1,
            json!({"name": "A", "size": int(2, "3"), "eltType": u32_type(3), "default": none(), "format": none()}),
        ),
    )]]);
    let present = document(vec![vec![member(
        "DefArray",
        node(
            1,
            json!({
                "name": "A",
                "size": int(2, "3"),
                "eltType": u32_type(3),
                "default": some(node(4, json!({"ExprArray": {"elts": [int(5, "0")]}}))),
                "format": some(ident(6, "{x}"))
            }),
        ),
    )]]);

    let units = translate(&absent).unwrap();
    let ModuleMemberNode::DefArray(a) = &units[0].members[0].node.value else {
        panic!("expected an array");
    };
    assert!(a.data.default.is_none());
    assert!(a.data.format.is_none());

    let units = translate(&present).unwrap();
    let ModuleMemberNode::DefArray(a) = &units[0].members[0].node.value else {
        panic!("expected an array");
    };
    assert_eq!(a.data.default.as_ref().map(|d| d.id), Some(4));
    assert_eq!(a.data.format.as_ref().map(|f| f.data.as_str()), Some("{x}"));
}

#[test]
fn decoding_twice_gives_equal_trees() {
    let doc = document(vec![vec![module(
        1,
        "M",
        vec![
            constant(2, "a", int(3, "1")),
            constant(
                4,
                "b",
                node(5, json!({"ExprBinop": {"e1": expr_ident(6, "a"), "op": "Mul", "e2": int(7, "2")}})),
            ),
        ],
    )]]);
    assert_eq!(translate(&doc).unwrap(), translate(&doc).unwrap());
}

#[test]
fn parallel_and_sequential_agree() {
    let constants: Vec<Value> = (0..64)
        .map(|i| constant(1000 + i, &format!("c{i}"), int(2000 + i, &i.to_string())))
        .collect();
    let doc = document(vec![vec![module(1, "Wide", constants.clone())], constants]);

    let sequential = translate(&doc).unwrap();
    let session = AstSession::new();
    let eager = TranslateOptions {
        parallel: true,
        parallel_threshold: 2,
    };
    let parallel = Translator::new(&session, eager).translate_document(&doc).unwrap();
    assert_eq!(sequential, parallel);
    // 64 constants and 64 literals in each unit, plus the module
    assert_eq!(session.decoded_nodes(), 64 * 4 + 1);
}

#[test]
fn annotations_are_kept_on_members() {
    let doc = document(vec![vec![annotated_member(
        &["A counter"],
        "DefConstant",
        node(1, json!({"name": "n", "value": int(2, "0")})),
        &["trailing"],
    )]]);
    let units = translate(&doc).unwrap();
    let annotated = &units[0].members[0].node;
    assert_eq!(annotated.pre, vec!["A counter".to_string()]);
    assert_eq!(annotated.post, vec!["trailing".to_string()]);
}

// ============================================================================
// NESTED FAMILIES
// ============================================================================

#[test]
fn component_members_decode() {
    let doc = document(vec![vec![component(
        1,
        "Active",
        "Sensor",
        vec![
            member(
                "SpecPortInstance",
                node(
                    2,
                    json!({"General": {
                        "kind": "AsyncInput",
                        "name": "schedIn",
                        "size": none(),
                        "port": some(node(3, json!([ident(4, "Svc"), ident(5, "Sched")]))),
                        "priority": none(),
                        "queueFull": some(node(20, json!("Drop")))
                    }}),
                ),
            ),
            member(
                "SpecEvent",
                node(
                    6,
                    json!({
                        "name": "Overheat",
                        "params": [],
                        "severity": {"WarningHigh": {}},
                        "id": none(),
                        "format": ident(7, "too hot")
                    }),
                ),
            ),
            member(
                "SpecParam",
                node(
                    8,
                    json!({
                        "name": "Gain",
                        "typeName": u32_type(9),
                        "default": some(int(10, "1")),
                        "id": none(),
                        "setOpcode": none(),
                        "saveOpcode": none(),
                        "isExternal": true
                    }),
                ),
            ),
            state_machine(11, "Ctl", None),
            member(
                "SpecCommand",
                node(
                    12,
                    json!({
                        "kind": {"Async": {}},
                        "name": "RESET",
                        "params": [],
                        "opcode": none(),
                        "priority": some(int(13, "2")),
                        "queueFull": some(node(14, json!({"Drop": {}})))
                    }),
                ),
            ),
            member(
                "SpecImportInterface",
                node(15, json!({"sym": unqualified(16, "Commandable")})),
            ),
        ],
    )]]);
    let units = translate(&doc).unwrap();
    let ModuleMemberNode::DefComponent(c) = &units[0].members[0].node.value else {
        panic!("expected a component");
    };
    assert_eq!(c.data.kind, ComponentKind::Active);
    let tags: Vec<_> = c
        .data
        .members
        .iter()
        .map(|m| match &m.node.value {
            ComponentMemberNode::SpecPortInstance(p) => p.data.name().to_string(),
            ComponentMemberNode::SpecEvent(e) => e.data.name.clone(),
            ComponentMemberNode::SpecParam(p) => {
                assert!(p.data.is_external);
                p.data.name.clone()
            }
            ComponentMemberNode::DefStateMachine(s) => {
                assert!(s.data.members.is_none());
                s.data.name.clone()
            }
            ComponentMemberNode::SpecCommand(cmd) => {
                let queue_full = cmd.data.queue_full.as_ref().map(|q| (q.id, q.data));
                assert_eq!(queue_full, Some((14, QueueFull::Drop)));
                cmd.data.name.clone()
            }
            ComponentMemberNode::SpecImportInterface(i) => {
                assert_eq!(i.id, 15);
                i.data.sym.data.to_string()
            }
            other => panic!("unexpected member {other:?}"),
        })
        .collect();
    assert_eq!(
        tags,
        vec!["schedIn", "Overheat", "Gain", "Ctl", "RESET", "Commandable"]
    );

    let ComponentMemberNode::SpecEvent(event) = &c.data.members[1].node.value else {
        panic!("expected an event");
    };
    assert_eq!(event.data.format.id, 7);
    assert_eq!(event.data.format.data, "too hot");
}

#[test]
fn state_machine_members_decode() {
    let transition = |id: u64, target: &str| {
        node(id, json!({"actions": [ident(id + 1, "log")], "target": unqualified(id + 2, target)}))
    };
    let running = member(
        "DefState",
        node(
            20,
            json!({"name": "Running", "members": [
                member("SpecStateEntry", node(21, json!({"actions": [ident(22, "start")]}))),
                member("SpecStateTransition", node(23, json!({
                    "signal": ident(24, "stop"),
                    "guard": none(),
                    "transitionOrDo": {"Transition": {"transition": transition(25, "Idle")}}
                }))),
                member("SpecStateTransition", node(28, json!({
                    "signal": ident(29, "tick"),
                    "guard": some(ident(30, "enabled")),
                    "transitionOrDo": {"Do": {"actions": [ident(31, "count")]}}
                })))
            ]}),
        ),
    );
    let doc = document(vec![vec![state_machine(
        1,
        "Ctl",
        Some(vec![
            member("DefSignal", node(2, json!({"name": "stop", "typeName": none()}))),
            member("DefGuard", node(3, json!({"name": "enabled", "typeName": some(u32_type(4))}))),
            member("DefAction", node(5, json!({"name": "log", "typeName": none()}))),
            member("SpecInitialTransition", node(6, json!({"transition": transition(7, "Idle")}))),
            member("DefChoice", node(10, json!({
                "name": "Pick",
                "guard": ident(11, "enabled"),
                "ifTransition": transition(12, "Running"),
                "elseTransition": transition(15, "Idle")
            }))),
            running,
        ]),
    )]]);

    let units = translate(&doc).unwrap();
    let ModuleMemberNode::DefStateMachine(sm) = &units[0].members[0].node.value else {
        panic!("expected a state machine");
    };
    let members = sm.data.members.as_ref().expect("internal state machine");
    assert_eq!(members.len(), 6);
    let StateMachineMemberNode::DefState(state) = &members[5].node.value else {
        panic!("expected a state");
    };
    assert!(matches!(state.data.members[0].node.value, StateMemberNode::SpecStateEntry(_)));
    let StateMemberNode::SpecStateTransition(t) = &state.data.members[2].node.value else {
        panic!("expected a transition");
    };
    assert!(matches!(&t.data.transition_or_do, TransitionOrDo::Do { actions } if actions.len() == 1));
    let StateMachineMemberNode::DefChoice(choice) = &members[4].node.value else {
        panic!("expected a choice");
    };
    assert_eq!(choice.data.if_transition.data.target.data, QualIdent::Unqualified("Running".into()));
}

#[test]
fn topology_members_decode() {
    let channel = |id: u64, inst: &str, name: &str| {
        node(id, json!({"componentInstance": unqualified(id + 1, inst), "channelName": ident(id + 2, name)}))
    };
    let packet = node(
        30,
        json!({
            "name": "Health",
            "id": some(int(31, "1")),
            "group": int(32, "0"),
            "members": [{"TlmChannelIdentifier": {"node": channel(33, "sensor", "Temp")}}]
        }),
    );
    let doc = document(vec![vec![topology(
        1,
        "Ref",
        vec![
            member("SpecCompInstance", node(2, json!({"visibility": "Private", "instance": unqualified(3, "sensor")}))),
            member("SpecConnectionGraph", node(4, json!({"Pattern": {
                "kind": "Time",
                "source": unqualified(5, "clock"),
                "targets": []
            }}))),
            member("SpecTlmPacketSet", node(6, json!({
                "name": "Packets",
                "members": [enveloped_member("SpecTlmPacket", packet)],
                "omitted": [channel(40, "sensor", "Debug")]
            }))),
            member("SpecTopImport", node(50, json!({"sym": unqualified(51, "Base")}))),
        ],
    )]]);

    let units = translate(&doc).unwrap();
    let ModuleMemberNode::DefTopology(top) = &units[0].members[0].node.value else {
        panic!("expected a topology");
    };
    let members: Vec<_> = top.data.members.iter().map(|m| &m.node.value).collect();
    assert!(matches!(members[0], TopologyMemberNode::SpecCompInstance(i) if i.data.visibility == Visibility::Private));
    assert!(matches!(
        members[1],
        TopologyMemberNode::SpecConnectionGraph(g) if matches!(g.data, SpecConnectionGraph::Pattern { .. })
    ));
    let TopologyMemberNode::SpecTlmPacketSet(set) = members[2] else {
        panic!("expected a packet set");
    };
    assert_eq!(set.data.omitted[0].data.channel_name.data, "Debug");
    let TlmPacketSetMemberNode::SpecTlmPacket(pkt) = &set.data.members[0].node.value;
    assert_eq!(pkt.id, 30);
    let TlmPacketMember::TlmChannelIdentifier(chan) = &pkt.data.members[0];
    assert_eq!(chan.data.component_instance.data.to_string(), "sensor");
    assert!(matches!(members[3], TopologyMemberNode::SpecTopImport(i) if i.id == 50));
}

#[test]
fn interface_members_decode() {
    let doc = document(vec![vec![member(
        "DefInterface",
        node(
            1,
            json!({"name": "Cmd", "members": [
                enveloped_member("SpecPortInstance", node(2, json!({"Special": {
                    "inputKind": none(),
                    "kind": "CommandReg",
                    "name": "cmdRegOut",
                    "priority": none(),
                    "queueFull": none()
                }}))),
                enveloped_member("SpecImportInterface", node(3, json!({"sym": unqualified(4, "Base")})))
            ]}),
        ),
    )]]);
    let units = translate(&doc).unwrap();
    let ModuleMemberNode::DefInterface(i) = &units[0].members[0].node.value else {
        panic!("expected an interface");
    };
    assert_eq!(i.data.members.len(), 2);
}

#[test]
fn serialized_members_use_single_element_annotation() {
    let doc = document(vec![vec![member("DefAbsType", node(9, json!({"name": "T"})))]]);
    let units = translate(&doc).unwrap();
    let value = serde_json::to_value(&units[0].members[0]).unwrap();
    assert_eq!(
        value,
        json!({"node": [[[], {"DefAbsType": {"data": {"name": "T"}, "id": 9}}, []]]})
    );
}
