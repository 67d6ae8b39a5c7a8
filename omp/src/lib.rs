pub mod params;
pub mod potentials;
pub mod utility;

pub use params::OmpParameters;
pub use potentials::potential_factory::{PotentialKind, UnknownPotentialError, create_parameters};
