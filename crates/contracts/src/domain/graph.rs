use serde::{Deserialize, Serialize};

use super::{Cheque, Company, Harvest, Machine, MachineJob, Parcel, Planting, Product};

/// Planting with its harvest records loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingWithHarvests {
    pub planting: Planting,
    pub harvests: Vec<Harvest>,
}

/// Parcel with its plantings (and their harvests) loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelWithPlantings {
    pub parcel: Parcel,
    pub plantings: Vec<PlantingWithHarvests>,
}

/// Machine with its job records loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineWithJobs {
    pub machine: Machine,
    pub jobs: Vec<MachineJob>,
}

/// The fully loaded company graph: one broad read, reduced in memory
/// afterwards. Nothing here is paginated; the dataset is a single company's
/// operational records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyGraph {
    pub company: Company,
    pub parcels: Vec<ParcelWithPlantings>,
    pub machines: Vec<MachineWithJobs>,
    pub products: Vec<Product>,
    pub cheques: Vec<Cheque>,
}

impl CompanyGraph {
    /// All harvest records across every parcel and planting.
    pub fn harvests(&self) -> impl Iterator<Item = &Harvest> {
        self.parcels
            .iter()
            .flat_map(|p| p.plantings.iter())
            .flat_map(|c| c.harvests.iter())
    }
}
