pub mod a001_company;
pub mod a002_parcel;
pub mod a003_planting;
pub mod a004_harvest;
pub mod a005_machine;
pub mod a006_machine_job;
pub mod a007_product;
pub mod a008_cheque;
