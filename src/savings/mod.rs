//! Savings growth: simple and compound projections with contributions

mod params;
mod growth;

pub use params::{SavingsParameters, InterestType, CompoundingFrequency};
pub use growth::{project, ProjectionPoint, SavingsProjection};
