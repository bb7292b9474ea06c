pub mod parameters;
pub mod probability;

pub use parameters::ParameterSet;
pub use probability::Probability;
