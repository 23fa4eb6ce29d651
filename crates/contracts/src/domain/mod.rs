//! Read models for the agri-business entities.
//!
//! The backend only ever reads these; creation and lifecycle belong to the
//! external store, so there is no aggregate/event machinery here.

pub mod a001_company;
pub mod a002_parcel;
pub mod a003_planting;
pub mod a004_harvest;
pub mod a005_machine;
pub mod a006_machine_job;
pub mod a007_product;
pub mod a008_cheque;
pub mod graph;

pub use a001_company::Company;
pub use a002_parcel::Parcel;
pub use a003_planting::Planting;
pub use a004_harvest::Harvest;
pub use a005_machine::Machine;
pub use a006_machine_job::MachineJob;
pub use a007_product::Product;
pub use a008_cheque::Cheque;
pub use graph::{CompanyGraph, MachineWithJobs, ParcelWithPlantings, PlantingWithHarvests};
