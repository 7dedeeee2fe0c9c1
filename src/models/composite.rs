// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Two-component models.

The complex fractional polarisations of two components along the same line
of sight add vectorially, so spectra from these models show the
characteristic beating of interfering rotation measures. Component
parameters carry `1`/`2` suffixes (`fracPol1`, `RM2_radm2`, ...).

*/

use num_complex::Complex64;

use super::thin::thin_term;
use crate::{ModelParams, PolarisationModel, Result};

/// Two interfering Faraday-thin components.
///
/// Parameters: `fracPol1`, `fracPol2`, `psi01_deg`, `psi02_deg`,
/// `RM1_radm2`, `RM2_radm2`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct DoubleThin;

impl PolarisationModel for DoubleThin {
    fn evaluate(&self, params: &ModelParams, lambda2: &[f64]) -> Result<Vec<Complex64>> {
        let frac_pol1 = params.get("fracPol1")?;
        let frac_pol2 = params.get("fracPol2")?;
        let psi01_deg = params.get("psi01_deg")?;
        let psi02_deg = params.get("psi02_deg")?;
        let rm1 = params.get("RM1_radm2")?;
        let rm2 = params.get("RM2_radm2")?;

        Ok(lambda2
            .iter()
            .map(|&l2| {
                thin_term(frac_pol1, psi01_deg, rm1, l2) + thin_term(frac_pol2, psi02_deg, rm2, l2)
            })
            .collect())
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        &[
            "fracPol1",
            "fracPol2",
            "psi01_deg",
            "psi02_deg",
            "RM1_radm2",
            "RM2_radm2",
        ]
    }
}

/// Two Faraday-thin components, each behind its own turbulent screen.
///
/// Extends [`DoubleThin`] with per-component dispersions `sigmaRM1_radm2`
/// and `sigmaRM2_radm2`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct DoubleThinDispersion;

impl PolarisationModel for DoubleThinDispersion {
    fn evaluate(&self, params: &ModelParams, lambda2: &[f64]) -> Result<Vec<Complex64>> {
        let frac_pol1 = params.get("fracPol1")?;
        let frac_pol2 = params.get("fracPol2")?;
        let psi01_deg = params.get("psi01_deg")?;
        let psi02_deg = params.get("psi02_deg")?;
        let rm1 = params.get("RM1_radm2")?;
        let rm2 = params.get("RM2_radm2")?;
        let sigma_rm1 = params.get("sigmaRM1_radm2")?;
        let sigma_rm2 = params.get("sigmaRM2_radm2")?;

        Ok(lambda2
            .iter()
            .map(|&l2| {
                let l4 = l2 * l2;
                thin_term(frac_pol1, psi01_deg, rm1, l2) * (-2. * sigma_rm1.powi(2) * l4).exp()
                    + thin_term(frac_pol2, psi02_deg, rm2, l2) * (-2. * sigma_rm2.powi(2) * l4).exp()
            })
            .collect())
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        &[
            "fracPol1",
            "fracPol2",
            "psi01_deg",
            "psi02_deg",
            "RM1_radm2",
            "RM2_radm2",
            "sigmaRM1_radm2",
            "sigmaRM2_radm2",
        ]
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::{DoubleThin, DoubleThinDispersion};
    use crate::models::FaradayThin;
    use crate::{ModelParams, PolarisationModel};

    const L2S: &[f64] = &[0., 0.03, 0.07, 0.12];

    fn double_params() -> ModelParams {
        ModelParams::new()
            .set("fracPol1", 0.2)
            .set("fracPol2", 0.1)
            .set("psi01_deg", 10.)
            .set("psi02_deg", 70.)
            .set("RM1_radm2", 50.)
            .set("RM2_radm2", -120.)
    }

    #[test]
    fn vanishing_second_component_reduces_to_thin() {
        let double = DoubleThin
            .evaluate(&double_params().set("fracPol2", 0.), L2S)
            .unwrap();
        let thin = FaradayThin
            .evaluate(
                &ModelParams::new()
                    .set("fracPol", 0.2)
                    .set("psi0_deg", 10.)
                    .set("RM_radm2", 50.),
                L2S,
            )
            .unwrap();
        for (a, b) in double.iter().zip(&thin) {
            assert_approx_eq!(a.re, b.re, 1e-15);
            assert_approx_eq!(a.im, b.im, 1e-15);
        }
    }

    #[test]
    fn components_add_vectorially() {
        let sum = DoubleThin.evaluate(&double_params(), L2S).unwrap();
        for (k, v) in sum.iter().enumerate() {
            assert!(v.norm() <= 0.3 + 1e-12, "channel {} exceeds total", k);
        }
        // At λ² = 0 the terms are set by the intrinsic angles alone.
        let expected = super::thin_term(0.2, 10., 0., 0.) + super::thin_term(0.1, 70., 0., 0.);
        assert_approx_eq!(sum[0].re, expected.re, 1e-15);
        assert_approx_eq!(sum[0].im, expected.im, 1e-15);
    }

    #[test]
    fn undispersed_double_matches_plain_double() {
        let plain = DoubleThin.evaluate(&double_params(), L2S).unwrap();
        let dispersed = DoubleThinDispersion
            .evaluate(
                &double_params()
                    .set("sigmaRM1_radm2", 0.)
                    .set("sigmaRM2_radm2", 0.),
                L2S,
            )
            .unwrap();
        for (a, b) in dispersed.iter().zip(&plain) {
            assert_approx_eq!(a.re, b.re, 1e-15);
            assert_approx_eq!(a.im, b.im, 1e-15);
        }
    }
}
