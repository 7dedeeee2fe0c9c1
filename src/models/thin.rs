// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! The Faraday-thin component model.

A single emitting region behind a purely rotating foreground screen. The
fractional polarisation has constant amplitude and a phase that winds
linearly with squared wavelength:

```text
p(λ²) = fracPol · exp(2i (ψ0 + RM λ²))
```

where ψ0 is the intrinsic polarisation angle and RM the rotation measure of
the screen (Burn 1966). Parameters: `fracPol`, `psi0_deg`, `RM_radm2`.

*/

use num_complex::Complex64;

use crate::{ModelParams, PolarisationModel, Result};

/// One Faraday-thin component behind a rotating screen.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct FaradayThin;

/// The complex polarisation of one thin component at one squared wavelength.
///
/// The polarisation angle is `psi0 + RM λ²` and the complex phase winds at
/// twice that rate, since Stokes Q and U describe an orientation rather than
/// a direction.
pub(crate) fn thin_term(frac_pol: f64, psi0_deg: f64, rm: f64, l2: f64) -> Complex64 {
    Complex64::from_polar(frac_pol, 2. * (psi0_deg.to_radians() + rm * l2))
}

impl PolarisationModel for FaradayThin {
    fn evaluate(&self, params: &ModelParams, lambda2: &[f64]) -> Result<Vec<Complex64>> {
        let frac_pol = params.get("fracPol")?;
        let psi0_deg = params.get("psi0_deg")?;
        let rm = params.get("RM_radm2")?;

        Ok(lambda2
            .iter()
            .map(|&l2| thin_term(frac_pol, psi0_deg, rm, l2))
            .collect())
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        &["fracPol", "psi0_deg", "RM_radm2"]
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    use super::FaradayThin;
    use crate::{ModelParams, PolarisationModel};

    fn params(frac_pol: f64, psi0_deg: f64, rm: f64) -> ModelParams {
        ModelParams::new()
            .set("fracPol", frac_pol)
            .set("psi0_deg", psi0_deg)
            .set("RM_radm2", rm)
    }

    #[test]
    fn zero_wavelength_gives_intrinsic_angle() {
        let p = FaradayThin
            .evaluate(&params(0.25, 30., 170.), &[0.])
            .unwrap();
        assert_approx_eq!(p[0].norm(), 0.25, 1e-15);
        assert_approx_eq!(p[0].arg(), 2. * 30_f64.to_radians(), 1e-15);
    }

    #[test]
    fn rotation_winds_with_squared_wavelength() {
        // 2 RM λ² = π/2 turns pure Q into pure U.
        let rm = 100.;
        let l2 = 0.25 * PI / rm;
        let p = FaradayThin.evaluate(&params(0.3, 0., rm), &[l2]).unwrap();
        assert_approx_eq!(p[0].re, 0., 1e-15);
        assert_approx_eq!(p[0].im, 0.3, 1e-15);
    }

    #[test]
    fn amplitude_is_wavelength_independent() {
        let l2s: Vec<f64> = (0..50).map(|k| 1e-3 * k as f64).collect();
        let p = FaradayThin.evaluate(&params(0.42, 12., -80.), &l2s).unwrap();
        assert_eq!(p.len(), l2s.len());
        for v in &p {
            assert_approx_eq!(v.norm(), 0.42, 1e-14);
        }
    }
}
