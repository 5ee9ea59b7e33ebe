//! Tests for the callback registry and the core callback contracts.

use super::*;
use serde_json::json;

fn core_registry() -> CallbackRegistry {
    let mut registry = CallbackRegistry::new();
    register_core_callbacks(&mut registry, CoreConfig { side_width: 350 });
    registry
}

// ===== Registry mechanics =====

#[test]
fn core_registration_wires_three_callbacks() {
    let registry = core_registry();
    assert_eq!(registry.len(), 3);
    assert!(registry.contains(CORE_NAMESPACE, CB_SIDEBAR_TOGGLE));
    assert!(registry.contains(CORE_NAMESPACE, CB_SEARCH_SELECT));
    assert!(registry.contains(CORE_NAMESPACE, CB_SEARCH_FOCUS));
}

#[test]
fn unknown_callback_is_reported_not_panicked() {
    let registry = core_registry();
    let err = registry
        .dispatch("nav", "does_not_exist", &[])
        .expect_err("unknown pair must error");

    assert_eq!(
        err,
        BindingError::UnknownCallback {
            namespace: "nav".to_string(),
            name: "does_not_exist".to_string(),
        }
    );
}

#[test]
fn arity_is_checked_before_decoding() {
    let registry = core_registry();
    let err = registry
        .dispatch(CORE_NAMESPACE, CB_SEARCH_FOCUS, &[json!(1), json!(2)])
        .expect_err("wrong arity must error");

    assert_eq!(
        err,
        BindingError::ArityMismatch {
            namespace: CORE_NAMESPACE.to_string(),
            name: CB_SEARCH_FOCUS.to_string(),
            expected: 1,
            got: 2,
        }
    );
}

#[test]
fn reregistering_replaces_the_callback() {
    let mut registry = CallbackRegistry::new();
    registry.register("ns", "cb", 0, |_| Ok(DispatchOutcome::default()));
    registry.register("ns", "cb", 0, |_| {
        Ok(DispatchOutcome {
            outputs: vec![json!("second")],
            navigate: None,
        })
    });

    assert_eq!(registry.len(), 1);
    let outcome = registry.dispatch("ns", "cb", &[]).unwrap();
    assert_eq!(outcome.outputs, vec![json!("second")]);
}

// ===== nav.sidebar_toggle =====

#[test]
fn sidebar_toggle_collapse_over_the_wire() {
    let registry = core_registry();
    let outcome = registry
        .dispatch(
            CORE_NAMESPACE,
            CB_SIDEBAR_TOGGLE,
            &[json!(1), json!("antd-menu-fold"), json!({"color": "red"})],
        )
        .unwrap();

    assert_eq!(
        outcome.outputs,
        vec![
            json!("antd-menu-unfold"),
            json!({"color": "red", "width": 110}),
            json!({"display": "none"}),
            json!({"width": 110}),
            json!(true),
        ]
    );
    assert_eq!(outcome.navigate, None);
}

#[test]
fn sidebar_toggle_expand_over_the_wire() {
    let registry = core_registry();
    let outcome = registry
        .dispatch(
            CORE_NAMESPACE,
            CB_SIDEBAR_TOGGLE,
            &[json!(2), json!("antd-menu-unfold"), json!({})],
        )
        .unwrap();

    assert_eq!(
        outcome.outputs,
        vec![
            json!("antd-menu-fold"),
            json!({"width": 350}),
            json!({}),
            json!({"width": 350}),
            json!(false),
        ]
    );
}

#[test]
fn sidebar_toggle_unrecognized_icon_takes_expand_branch() {
    let registry = core_registry();
    let outcome = registry
        .dispatch(
            CORE_NAMESPACE,
            CB_SIDEBAR_TOGGLE,
            &[json!(1), json!("antd-hamburger"), json!({})],
        )
        .unwrap();

    assert_eq!(outcome.outputs[0], json!("antd-menu-fold"));
    assert_eq!(outcome.outputs[4], json!(false));
}

#[test]
fn sidebar_toggle_accepts_null_click_count() {
    let registry = core_registry();
    let outcome = registry
        .dispatch(
            CORE_NAMESPACE,
            CB_SIDEBAR_TOGGLE,
            &[Value::Null, json!("antd-menu-fold"), json!({})],
        )
        .unwrap();

    assert_eq!(outcome.outputs[4], json!(true));
}

#[test]
fn sidebar_toggle_rejects_non_object_style() {
    let registry = core_registry();
    let err = registry
        .dispatch(
            CORE_NAMESPACE,
            CB_SIDEBAR_TOGGLE,
            &[json!(1), json!("antd-menu-fold"), json!("not a style")],
        )
        .expect_err("style argument must be an object");

    assert!(matches!(
        err,
        BindingError::InvalidArgument {
            index: 2,
            ..
        }
    ));
}

// ===== nav.search_select =====

#[test]
fn search_select_requests_navigation() {
    let registry = core_registry();
    let outcome = registry
        .dispatch(
            CORE_NAMESPACE,
            CB_SEARCH_SELECT,
            &[json!("/reports|Reports Page")],
        )
        .unwrap();

    assert!(outcome.outputs.is_empty());
    assert_eq!(outcome.navigate.as_deref(), Some("/reports"));
}

#[test]
fn search_select_with_empty_value_is_a_noop() {
    let registry = core_registry();
    let outcome = registry
        .dispatch(CORE_NAMESPACE, CB_SEARCH_SELECT, &[json!("")])
        .unwrap();

    assert_eq!(outcome, DispatchOutcome::default());
}

#[test]
fn search_select_with_null_value_is_a_noop() {
    let registry = core_registry();
    let outcome = registry
        .dispatch(CORE_NAMESPACE, CB_SEARCH_SELECT, &[Value::Null])
        .unwrap();

    assert_eq!(outcome.navigate, None);
}

#[test]
fn search_select_rejects_non_string_value() {
    let registry = core_registry();
    let err = registry
        .dispatch(CORE_NAMESPACE, CB_SEARCH_SELECT, &[json!(42)])
        .expect_err("numeric selection must error");

    assert!(matches!(err, BindingError::InvalidArgument { index: 0, .. }));
}

// ===== nav.search_focus =====

#[test]
fn search_focus_echoes_counter() {
    let registry = core_registry();
    let outcome = registry
        .dispatch(CORE_NAMESPACE, CB_SEARCH_FOCUS, &[json!(5)])
        .unwrap();

    assert_eq!(outcome.outputs, vec![json!(true), json!("5")]);
}

#[test]
fn search_focus_accepts_zero() {
    let registry = core_registry();
    let outcome = registry
        .dispatch(CORE_NAMESPACE, CB_SEARCH_FOCUS, &[json!(0)])
        .unwrap();

    assert_eq!(outcome.outputs, vec![json!(true), json!("0")]);
}

#[test]
fn search_focus_rejects_non_numeric_counter() {
    let registry = core_registry();
    let err = registry
        .dispatch(CORE_NAMESPACE, CB_SEARCH_FOCUS, &[json!("five")])
        .expect_err("string counter must error");

    assert!(matches!(err, BindingError::InvalidArgument { index: 0, .. }));
}
