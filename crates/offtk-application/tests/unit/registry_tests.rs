//! Tests for precedence-based resolution in `ToolkitRegistry`

use std::sync::Arc;

use offtk_application::domain_services::{ResolvedOperation, ToolkitRegistry};
use offtk_domain::error::Error;
use offtk_domain::value_objects::{
    Atom, Bond, Molecule, Operation, OperationOutput, OperationRequest,
};

use crate::test_utils::{FakeToolkit, as_wrapper};

fn ethane() -> Molecule {
    let mut molecule = Molecule::new().with_name("ethane");
    let c1 = molecule.add_atom(Atom::new(6));
    let c2 = molecule.add_atom(Atom::new(6));
    molecule
        .add_bond(Bond::new(c1, c2, 1))
        .expect("bond indices are valid");
    molecule
}

fn charges_request(model: Option<&str>) -> OperationRequest {
    OperationRequest::ComputePartialCharges {
        molecule: ethane(),
        charge_model: model.map(str::to_string),
    }
}

#[test]
fn test_first_declaring_toolkit_wins() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let b = FakeToolkit::new("b", &[Operation::ToSmiles]).shared();
    let registry = ToolkitRegistry::with_precedence([as_wrapper(&a), as_wrapper(&b)]);

    let resolved = registry.resolve(Operation::ToSmiles).expect("resolves");

    assert_eq!(resolved.toolkit_name(), "a");
    assert_eq!(
        resolved,
        ResolvedOperation::bind(
            Arc::clone(&registry.registered_toolkits()[0]),
            Operation::ToSmiles
        )
    );
}

#[test]
fn test_later_toolkit_serves_operations_earlier_ones_lack() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let b = FakeToolkit::new("b", &[Operation::ToSmiles, Operation::FindRotatableBonds]).shared();
    let registry = ToolkitRegistry::with_precedence([as_wrapper(&a), as_wrapper(&b)]);

    let resolved = registry
        .resolve(Operation::FindRotatableBonds)
        .expect("resolves");

    assert_eq!(resolved.toolkit_name(), "b");
}

#[tokio::test]
async fn test_unsupported_operation_fails_resolve_and_call() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let registry = ToolkitRegistry::with_precedence([as_wrapper(&a)]);

    let err = registry
        .resolve(Operation::AssignFractionalBondOrders)
        .expect_err("nobody declares it");
    assert!(err.is_no_suitable_toolkit());

    let err = registry
        .call(OperationRequest::AssignFractionalBondOrders {
            molecule: ethane(),
            bond_order_model: None,
        })
        .await
        .expect_err("nobody declares it");
    match err {
        Error::NoSuitableToolkit {
            operation,
            registered,
        } => {
            assert_eq!(operation, Operation::AssignFractionalBondOrders);
            assert_eq!(registered, vec!["a".to_string()]);
        }
        other => panic!("expected NoSuitableToolkit, got {other:?}"),
    }
    assert_eq!(a.calls(), 0);
}

#[test]
fn test_registering_appends_to_precedence() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let b = FakeToolkit::new("b", &[Operation::ToSmiles, Operation::GenerateConformers]).shared();
    let mut registry = ToolkitRegistry::with_precedence([as_wrapper(&a)]);

    assert!(registry.resolve(Operation::GenerateConformers).is_err());

    let added = registry.register_toolkit(as_wrapper(&b)).expect("available");

    assert!(added);
    assert_eq!(registry.toolkit_names(), vec!["a", "b"]);
    assert_eq!(
        registry
            .resolve(Operation::GenerateConformers)
            .expect("resolves")
            .toolkit_name(),
        "b"
    );
    // `a` keeps precedence for what it already served
    assert_eq!(
        registry
            .resolve(Operation::ToSmiles)
            .expect("resolves")
            .toolkit_name(),
        "a"
    );
}

#[test]
fn test_only_unavailable_toolkits_yield_empty_registry() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles])
        .unavailable()
        .shared();
    let b = FakeToolkit::new("b", &[Operation::FromSmiles])
        .unavailable()
        .shared();

    let registry = ToolkitRegistry::with_precedence([as_wrapper(&a), as_wrapper(&b)]);

    assert!(registry.is_empty());
    assert!(registry.registered_toolkits().is_empty());
}

#[test]
fn test_unavailable_toolkit_is_skipped_in_precedence() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles])
        .unavailable()
        .shared();
    let b = FakeToolkit::new("b", &[Operation::ToSmiles]).shared();

    let registry = ToolkitRegistry::with_precedence([as_wrapper(&a), as_wrapper(&b)]);

    assert_eq!(registry.toolkit_names(), vec!["b"]);
    assert_eq!(
        registry
            .resolve(Operation::ToSmiles)
            .expect("resolves")
            .toolkit_name(),
        "b"
    );
}

#[tokio::test]
async fn test_empty_registry_cannot_call_anything() {
    let registry = ToolkitRegistry::new();

    for operation in Operation::ALL {
        let err = registry.resolve(operation).expect_err("empty registry");
        assert!(err.is_no_suitable_toolkit(), "{operation}: {err}");
    }

    let err = registry
        .call(OperationRequest::to_smiles(ethane()))
        .await
        .expect_err("empty registry");
    assert!(err.is_no_suitable_toolkit());
}

#[tokio::test]
async fn test_call_matches_resolve_then_invoke() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let registry = ToolkitRegistry::with_precedence([as_wrapper(&a)]);

    let called = registry
        .call(OperationRequest::to_smiles(ethane()))
        .await
        .expect("call succeeds");
    let invoked = registry
        .resolve(Operation::ToSmiles)
        .expect("resolves")
        .invoke(OperationRequest::to_smiles(ethane()))
        .await
        .expect("invoke succeeds");

    assert_eq!(called, invoked);
    assert_eq!(called, OperationOutput::Smiles("a:ethane".to_string()));
}

#[tokio::test]
async fn test_wrapper_error_is_not_retried_on_later_toolkits() {
    let x = FakeToolkit::new("x", &[Operation::ComputePartialCharges]).shared();
    let y = FakeToolkit::new("y", &[Operation::ComputePartialCharges]).shared();
    let registry = ToolkitRegistry::with_precedence([as_wrapper(&x), as_wrapper(&y)]);

    let err = registry
        .call(charges_request(Some("not-a-model")))
        .await
        .expect_err("model is unsupported");

    match err {
        Error::ChargeModelUnsupported { model, toolkit, .. } => {
            assert_eq!(model, "not-a-model");
            assert_eq!(toolkit, "x");
        }
        other => panic!("expected ChargeModelUnsupported, got {other:?}"),
    }
    assert_eq!(x.calls(), 1);
    assert_eq!(y.calls(), 0);
}

#[tokio::test]
async fn test_backend_failure_is_returned_unchanged() {
    let x = FakeToolkit::new("x", &[Operation::ToSmiles])
        .failing("segfault in native code")
        .shared();
    let y = FakeToolkit::new("y", &[Operation::ToSmiles]).shared();
    let registry = ToolkitRegistry::with_precedence([as_wrapper(&x), as_wrapper(&y)]);

    let via_call = registry
        .call(OperationRequest::to_smiles(ethane()))
        .await
        .expect_err("x fails");
    let via_invoke = registry
        .resolve(Operation::ToSmiles)
        .expect("resolves")
        .invoke(OperationRequest::to_smiles(ethane()))
        .await
        .expect_err("x fails");

    assert_eq!(via_call.to_string(), via_invoke.to_string());
    assert_eq!(via_call.to_string(), "x backend error: segfault in native code");
    assert_eq!(y.calls(), 0);
}

#[tokio::test]
async fn test_supported_model_is_computed_by_first_toolkit() {
    let x = FakeToolkit::new("x", &[Operation::ComputePartialCharges]).shared();
    let registry = ToolkitRegistry::with_precedence([as_wrapper(&x)]);

    let charged = registry
        .call(charges_request(Some("gasteiger")))
        .await
        .expect("model is supported")
        .into_molecule()
        .expect("molecule output");

    assert_eq!(charged.partial_charges, Some(vec![0.0, 0.0]));
}

#[test]
fn test_register_unavailable_toolkit_is_rejected() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let missing = FakeToolkit::new("missing", &[Operation::FromSmiles])
        .unavailable()
        .shared();
    let mut registry = ToolkitRegistry::with_precedence([as_wrapper(&a)]);

    let err = registry
        .register_toolkit(as_wrapper(&missing))
        .expect_err("unavailable");

    assert!(matches!(err, Error::ToolkitUnavailable { ref toolkit, .. } if toolkit == "missing"));
    assert_eq!(registry.toolkit_names(), vec!["a"]);
}

#[test]
fn test_duplicate_names_keep_first_position() {
    let first = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let b = FakeToolkit::new("b", &[Operation::ToSmiles]).shared();
    let again = FakeToolkit::new("a", &[Operation::ToSmiles, Operation::FromSmiles]).shared();

    let mut registry = ToolkitRegistry::with_precedence([
        as_wrapper(&first),
        as_wrapper(&b),
        as_wrapper(&again),
    ]);
    assert_eq!(registry.toolkit_names(), vec!["a", "b"]);

    let added = registry
        .register_toolkit(as_wrapper(&again))
        .expect("available");
    assert!(!added);
    assert_eq!(registry.len(), 2);

    // The first instance stays registered; it does not declare FromSmiles
    assert!(registry.resolve(Operation::FromSmiles).is_err());
}

#[test]
fn test_deregister_moves_resolution_to_next_toolkit() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let b = FakeToolkit::new("b", &[Operation::ToSmiles]).shared();
    let mut registry = ToolkitRegistry::with_precedence([as_wrapper(&a), as_wrapper(&b)]);

    let removed = registry.deregister_toolkit("a").expect("registered");

    assert_eq!(removed.toolkit_name(), "a");
    assert_eq!(registry.toolkit_names(), vec!["b"]);
    assert_eq!(
        registry
            .resolve(Operation::ToSmiles)
            .expect("resolves")
            .toolkit_name(),
        "b"
    );
}

#[test]
fn test_deregister_unknown_toolkit_fails() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let mut registry = ToolkitRegistry::with_precedence([as_wrapper(&a)]);

    let err = registry.deregister_toolkit("zz").expect_err("not registered");

    assert!(matches!(err, Error::ToolkitNotRegistered { ref toolkit } if toolkit == "zz"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_resolve_named_parses_boundary_names() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let registry = ToolkitRegistry::with_precedence([as_wrapper(&a)]);

    let resolved = registry.resolve_named("to_smiles").expect("known name");
    assert_eq!(resolved.operation(), Operation::ToSmiles);

    let err = registry.resolve_named("to_smile").expect_err("typo");
    assert!(matches!(err, Error::UnknownOperation { ref name } if name == "to_smile"));
}

#[tokio::test]
async fn test_invoke_rejects_mismatched_request() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles, Operation::FromSmiles]).shared();
    let registry = ToolkitRegistry::with_precedence([as_wrapper(&a)]);
    let resolved = registry.resolve(Operation::ToSmiles).expect("resolves");

    let err = resolved
        .invoke(OperationRequest::from_smiles("CC"))
        .await
        .expect_err("wrong request kind");

    assert!(matches!(err, Error::InvalidInput { .. }));
    assert_eq!(a.calls(), 0);
}

#[test]
fn test_toolkits_supporting_lists_in_precedence_order() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let b = FakeToolkit::new("b", &[Operation::FromSmiles]).shared();
    let c = FakeToolkit::new("c", &[Operation::ToSmiles, Operation::FromSmiles]).shared();
    let registry =
        ToolkitRegistry::with_precedence([as_wrapper(&a), as_wrapper(&b), as_wrapper(&c)]);

    assert_eq!(registry.toolkits_supporting(Operation::ToSmiles), vec!["a", "c"]);
    assert_eq!(registry.toolkits_supporting(Operation::FromSmiles), vec!["b", "c"]);
    assert!(
        registry
            .toolkits_supporting(Operation::GenerateConformers)
            .is_empty()
    );
}

#[test]
fn test_clones_are_independent() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let b = FakeToolkit::new("b", &[Operation::FromSmiles]).shared();
    let registry = ToolkitRegistry::with_precedence([as_wrapper(&a)]);

    let mut extended = registry.clone();
    extended.register_toolkit(as_wrapper(&b)).expect("available");

    assert_eq!(registry.toolkit_names(), vec!["a"]);
    assert_eq!(extended.toolkit_names(), vec!["a", "b"]);
}

#[test]
fn test_debug_lists_toolkit_names() {
    let a = FakeToolkit::new("a", &[Operation::ToSmiles]).shared();
    let registry = ToolkitRegistry::with_precedence([as_wrapper(&a)]);

    let rendered = format!("{registry:?}");

    assert!(rendered.contains("\"a\""), "{rendered}");
}
