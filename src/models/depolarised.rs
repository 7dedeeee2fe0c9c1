// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Depolarising variants of the thin-component model.

Two classic wavelength-dependent depolarisation mechanisms (Burn 1966;
Sokoloff et al. 1998):

- **External dispersion**: a turbulent foreground screen with rotation
  measure scatter σ_RM multiplies the thin-component polarisation by
  `exp(−2 σ_RM² λ⁴)`.
- **Uniform slab**: emission and rotation are mixed through a slab of total
  Faraday depth ΔRM, multiplying the amplitude by `sinc(ΔRM λ²)` while the
  mean rotation measure RM still winds the angle.

*/

use num_complex::Complex64;

use super::thin::thin_term;
use crate::{ModelParams, PolarisationModel, Result};

/// A Faraday-thin component seen through a turbulent external screen.
///
/// Parameters: `fracPol`, `psi0_deg`, `RM_radm2`, `sigmaRM_radm2`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct ExternalDispersion;

impl PolarisationModel for ExternalDispersion {
    fn evaluate(&self, params: &ModelParams, lambda2: &[f64]) -> Result<Vec<Complex64>> {
        let frac_pol = params.get("fracPol")?;
        let psi0_deg = params.get("psi0_deg")?;
        let rm = params.get("RM_radm2")?;
        let sigma_rm = params.get("sigmaRM_radm2")?;

        Ok(lambda2
            .iter()
            .map(|&l2| {
                thin_term(frac_pol, psi0_deg, rm, l2) * (-2. * sigma_rm.powi(2) * l2 * l2).exp()
            })
            .collect())
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        &["fracPol", "psi0_deg", "RM_radm2", "sigmaRM_radm2"]
    }
}

/// A uniform emitting and rotating slab (differential Faraday rotation).
///
/// Parameters: `fracPol`, `psi0_deg`, `RM_radm2`, `deltaRM_radm2`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct UniformSlab;

fn sinc(x: f64) -> f64 {
    if x == 0. {
        1.
    } else {
        x.sin() / x
    }
}

impl PolarisationModel for UniformSlab {
    fn evaluate(&self, params: &ModelParams, lambda2: &[f64]) -> Result<Vec<Complex64>> {
        let frac_pol = params.get("fracPol")?;
        let psi0_deg = params.get("psi0_deg")?;
        let rm = params.get("RM_radm2")?;
        let delta_rm = params.get("deltaRM_radm2")?;

        Ok(lambda2
            .iter()
            .map(|&l2| thin_term(frac_pol, psi0_deg, rm, l2) * sinc(delta_rm * l2))
            .collect())
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        &["fracPol", "psi0_deg", "RM_radm2", "deltaRM_radm2"]
    }
}
