//! Stat domains and the fixed-shape vectors indexed by them

mod domain;
mod vector;

pub use domain::StatDomain;
pub use vector::{StatVector, WeightVector};
