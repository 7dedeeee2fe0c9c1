// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! The catalogue of built-in polarisation models.

Models are addressed by small integer identifiers, following the numbering
conventions that QU-fitting packages use for their model catalogues. The
[`load_model`] lookup is the only way the rest of the crate reaches a
concrete model, so a caller holding an identifier and a parameter mapping
never has to name a model type.

*/

mod composite;
mod depolarised;
mod thin;

pub use composite::{DoubleThin, DoubleThinDispersion};
pub use depolarised::{ExternalDispersion, UniformSlab};
pub use thin::FaradayThin;

use crate::{PolarisationModel, Result, SimulationError};

/// Look up a polarisation model by its registry identifier.
///
/// Unknown identifiers surface [`SimulationError::UnknownModel`].
pub fn load_model(id: u32) -> Result<Box<dyn PolarisationModel>> {
    match id {
        1 => Ok(Box::new(FaradayThin)),
        2 => Ok(Box::new(ExternalDispersion)),
        3 => Ok(Box::new(UniformSlab)),
        5 => Ok(Box::new(DoubleThin)),
        11 => Ok(Box::new(DoubleThinDispersion)),
        other => Err(SimulationError::UnknownModel(other)),
    }
}
