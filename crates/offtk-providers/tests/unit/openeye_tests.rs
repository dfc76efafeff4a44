//! Tests for the OpenEye wrapper

use std::sync::Arc;

use offtk_domain::error::Error;
use offtk_domain::ports::{BackendReply, ToolkitWrapper};
use offtk_domain::value_objects::{FileFormat, Operation, OperationOutput, OperationRequest};
use offtk_providers::toolkits::OpenEyeToolkitWrapper;
use tempfile::NamedTempFile;

use crate::test_utils::{ScriptedBackend, ethane, ethane_with_conformer};

fn licensed(backend: &Arc<ScriptedBackend>) -> (OpenEyeToolkitWrapper, NamedTempFile) {
    let license = NamedTempFile::new().expect("license file");
    let wrapper = OpenEyeToolkitWrapper::new(
        Arc::clone(backend) as Arc<dyn offtk_domain::ports::ToolkitBackend>,
        Some(license.path().to_path_buf()),
    );
    (wrapper, license)
}

#[test]
fn test_names_and_capabilities() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    assert_eq!(openeye.toolkit_name(), "openeye");
    assert_eq!(openeye.display_name(), "OpenEyeToolkitWrapper");
    assert!(openeye.supports(Operation::AssignFractionalBondOrders));
    assert!(openeye.supports(Operation::ToOpenEye));
    assert!(!openeye.supports(Operation::ToRdkit));
    assert!(!openeye.supports(Operation::FromRdkit));
}

#[test]
fn test_available_with_license_and_backend() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    assert!(openeye.is_available());
}

#[test]
fn test_missing_license_makes_toolkit_unavailable() {
    let backend = Arc::new(ScriptedBackend::echo());
    let openeye = OpenEyeToolkitWrapper::new(
        backend,
        Some("/definitely/not/here/oe_license.txt".into()),
    );

    let availability = openeye.availability();
    assert!(!availability.is_available());
    assert!(availability.reason().is_some_and(|r| r.contains("license")));
}

#[test]
fn test_unreachable_backend_makes_toolkit_unavailable() {
    let backend = Arc::new(ScriptedBackend::echo().unreachable());
    let (openeye, _license) = licensed(&backend);

    assert!(!openeye.is_available());
}

#[test]
fn test_availability_is_probed_once() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    for _ in 0..5 {
        assert!(openeye.is_available());
    }

    assert_eq!(backend.probes(), 1);
}

#[tokio::test]
async fn test_unsupported_bond_order_model_message() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    let err = openeye
        .execute(OperationRequest::AssignFractionalBondOrders {
            molecule: ethane(),
            bond_order_model: Some("not a real model".to_string()),
        })
        .await
        .expect_err("model is unsupported");

    assert_eq!(
        err.to_string(),
        "Bond order model 'not a real model' is not supported by OpenEyeToolkitWrapper. \
         Supported models are ['am1-wiberg', 'pm3-wiberg']"
    );
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_unsupported_model_is_echoed_as_written() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    let err = openeye
        .execute(OperationRequest::AssignFractionalBondOrders {
            molecule: ethane(),
            bond_order_model: Some("Not A Real Bond Order Model".to_string()),
        })
        .await
        .expect_err("model is unsupported");

    assert!(matches!(
        err,
        Error::BondOrderModelUnsupported { ref model, .. } if model == "Not A Real Bond Order Model"
    ));
    assert!(err.to_string().starts_with(
        "Bond order model 'Not A Real Bond Order Model' is not supported by OpenEyeToolkitWrapper."
    ));
}

#[tokio::test]
async fn test_default_bond_order_model_is_forwarded() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    let molecule = openeye
        .execute(OperationRequest::AssignFractionalBondOrders {
            molecule: ethane(),
            bond_order_model: None,
        })
        .await
        .expect("supported")
        .into_molecule()
        .expect("molecule");

    assert_eq!(molecule.bonds[0].fractional_bond_order, Some(1.0));
    let requests = backend.requests();
    assert_eq!(requests[0].0, "openeye");
    assert!(matches!(
        &requests[0].1,
        OperationRequest::AssignFractionalBondOrders { bond_order_model: Some(m), .. } if m == "am1-wiberg"
    ));
}

#[tokio::test]
async fn test_charges_default_to_am1bcc() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    openeye
        .execute(OperationRequest::ComputePartialCharges {
            molecule: ethane_with_conformer(),
            charge_model: None,
        })
        .await
        .expect("supported");

    assert!(matches!(
        &backend.requests()[0].1,
        OperationRequest::ComputePartialCharges { charge_model: Some(m), .. } if m == "am1bcc"
    ));
}

#[tokio::test]
async fn test_charge_model_names_are_case_insensitive() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    openeye
        .execute(OperationRequest::ComputePartialCharges {
            molecule: ethane_with_conformer(),
            charge_model: Some("AM1BCCELF10".to_string()),
        })
        .await
        .expect("supported");

    assert!(matches!(
        &backend.requests()[0].1,
        OperationRequest::ComputePartialCharges { charge_model: Some(m), .. } if m == "am1bccelf10"
    ));
}

#[tokio::test]
async fn test_unsupported_charge_model_is_rejected() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    let err = openeye
        .execute(OperationRequest::ComputePartialCharges {
            molecule: ethane_with_conformer(),
            charge_model: Some("gasteiger".to_string()),
        })
        .await
        .expect_err("not an OpenEye model");

    match err {
        Error::ChargeModelUnsupported {
            model,
            toolkit,
            supported,
        } => {
            assert_eq!(model, "gasteiger");
            assert_eq!(toolkit, "OpenEyeToolkitWrapper");
            assert!(supported.contains(&"am1bccelf10".to_string()));
        }
        other => panic!("expected ChargeModelUnsupported, got {other:?}"),
    }
}

#[tokio::test]
async fn test_charges_require_a_conformer() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    let err = openeye
        .execute(OperationRequest::ComputePartialChargesAm1bcc { molecule: ethane() })
        .await
        .expect_err("no geometry");

    assert!(matches!(
        err,
        Error::MissingConformers {
            operation: Operation::ComputePartialChargesAm1bcc
        }
    ));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_noop_charges_need_no_conformer() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    let molecule = openeye
        .execute(OperationRequest::ComputePartialCharges {
            molecule: ethane(),
            charge_model: Some("noop".to_string()),
        })
        .await
        .expect("noop reads no geometry")
        .into_molecule()
        .expect("molecule");

    assert_eq!(molecule.partial_charges, Some(vec![0.0, 0.0]));
}

#[tokio::test]
async fn test_wrong_charge_count_from_backend_is_rejected() {
    let backend = Arc::new(ScriptedBackend::new(|request| match request {
        OperationRequest::ComputePartialCharges { molecule, .. } => {
            let mut molecule = molecule.clone();
            molecule.partial_charges = Some(vec![0.5]);
            Ok(BackendReply::new(OperationOutput::Molecule(molecule)))
        }
        _ => unreachable!("only charges are requested"),
    }));
    let (openeye, _license) = licensed(&backend);

    let err = openeye
        .execute(OperationRequest::ComputePartialCharges {
            molecule: ethane_with_conformer(),
            charge_model: None,
        })
        .await
        .expect_err("one charge missing");

    assert!(matches!(err, Error::Backend { ref toolkit, .. } if toolkit == "openeye"));
}

#[tokio::test]
async fn test_every_oechem_format_is_readable() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    for format in OpenEyeToolkitWrapper::file_formats() {
        let molecules = openeye
            .execute(OperationRequest::FromFile {
                path: format!("input.{}", format.as_str().to_lowercase()).into(),
                file_format: *format,
                allow_undefined_stereo: false,
            })
            .await
            .expect("readable format")
            .into_molecules()
            .expect("molecules");
        assert_eq!(molecules.len(), 1);
    }
    assert_eq!(
        backend.requests().len(),
        OpenEyeToolkitWrapper::file_formats().len()
    );
    assert!(OpenEyeToolkitWrapper::file_formats().contains(&FileFormat::Oeb));
}

#[tokio::test]
async fn test_backend_stereo_error_propagates() {
    let backend = Arc::new(ScriptedBackend::new(|_| {
        Err(Error::undefined_stereochemistry(
            "Unable to make OEMol from SMILES: unspecified stereocenter at atom 1",
        ))
    }));
    let (openeye, _license) = licensed(&backend);

    let err = openeye
        .execute(OperationRequest::from_smiles("CC(F)(Cl)Br"))
        .await
        .expect_err("undefined stereo");

    assert!(matches!(err, Error::UndefinedStereochemistry { .. }));
}

#[tokio::test]
async fn test_empty_smiles_is_rejected_before_backend() {
    let backend = Arc::new(ScriptedBackend::echo());
    let (openeye, _license) = licensed(&backend);

    let err = openeye
        .execute(OperationRequest::from_smiles("   "))
        .await
        .expect_err("empty");

    assert!(matches!(err, Error::InvalidInput { .. }));
    assert!(backend.requests().is_empty());
}
