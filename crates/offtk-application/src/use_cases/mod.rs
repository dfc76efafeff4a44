//! Use cases built on the registry

pub mod molecule_service;

pub use molecule_service::MoleculeService;
