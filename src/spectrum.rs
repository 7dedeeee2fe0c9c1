// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Generate simulated Stokes I/Q/U spectra.

A [`SpectrumSimulator`] couples a polarisation model from the registry with a
power-law total-intensity spectrum, a noise level and a seed. Running it over
an array of channel frequencies produces three channel-aligned flux arrays:

```text
I(ν) = S₀ (ν/ν₀)^α + n_I
Q(ν) = I(ν) Re p(λ²) + n_Q
U(ν) = I(ν) Im p(λ²) + n_U
```

with the `n` terms drawn independently per channel from a zero-mean Gaussian
of the configured standard deviation. The generator is rebuilt from the seed
on every call, so a simulator is cheap to rerun and two simulators can never
perturb each other's streams.

*/

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use slog::Logger;

use crate::models::load_model;
use crate::{ModelParams, PolarisationModel, Result, SimulationError, SPEED_LIGHT};

/// Convert channel frequencies in Hz to squared wavelengths in m².
pub fn lambda_squared(freq_hz: &[f64]) -> Vec<f64> {
    freq_hz.iter().map(|&f| (SPEED_LIGHT / f).powi(2)).collect()
}

/// A power-law total-intensity spectrum, `S(ν) = S₀ (ν/ν₀)^α`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StokesIPowerLaw {
    /// The flux density at the reference frequency, in Jy.
    pub flux: f64,

    /// The reference frequency, in Hz.
    pub reffreq: f64,

    /// The spectral index α.
    pub alpha: f64,
}

impl StokesIPowerLaw {
    /// Evaluate the spectrum at each channel frequency, in Jy.
    pub fn evaluate(&self, freq_hz: &[f64]) -> Vec<f64> {
        freq_hz
            .iter()
            .map(|&f| self.flux * (f / self.reffreq).powf(self.alpha))
            .collect()
    }
}

/// Simulated Stokes spectra, channel-aligned with the input frequencies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IquSpectra {
    /// Total intensity per channel, in Jy.
    pub i: Vec<f64>,

    /// Stokes Q per channel, in Jy.
    pub q: Vec<f64>,

    /// Stokes U per channel, in Jy.
    pub u: Vec<f64>,
}

impl IquSpectra {
    /// The number of channels.
    pub fn len(&self) -> usize {
        self.i.len()
    }

    /// Whether the spectra have no channels.
    pub fn is_empty(&self) -> bool {
        self.i.is_empty()
    }
}

/// A configured simulation of one polarised source.
///
/// Built from a model identifier and its parameter mapping, then customized
/// with chained setters:
///
/// ```
/// use qusim::{ModelParams, SpectrumSimulator, StokesIPowerLaw};
///
/// let log = slog::Logger::root(slog::Discard, slog::o!());
/// let params = ModelParams::new()
///     .set("fracPol", 0.3)
///     .set("psi0_deg", 25.)
///     .set("RM_radm2", 170.);
/// let spectra = SpectrumSimulator::new(1, params)
///     .unwrap()
///     .stokes_i(StokesIPowerLaw { flux: 500e-6, reffreq: 944e6, alpha: -0.7 })
///     .noise(20e-6)
///     .seed(9999)
///     .simulate(&log, &[800e6, 900e6, 1000e6])
///     .unwrap();
/// assert_eq!(spectra.len(), 3);
/// ```
#[derive(Debug)]
pub struct SpectrumSimulator {
    model: Box<dyn PolarisationModel>,
    model_id: u32,
    params: ModelParams,
    stokes_i: StokesIPowerLaw,
    noise: f64,
    seed: u64,
}

impl SpectrumSimulator {
    /// Create a simulator for the given registry model and parameters.
    ///
    /// The defaults are a flat 1 Jy total-intensity spectrum referenced to
    /// 1.4 GHz, no noise, and seed 0.
    pub fn new(model_id: u32, params: ModelParams) -> Result<Self> {
        Ok(SpectrumSimulator {
            model: load_model(model_id)?,
            model_id,
            params,
            stokes_i: StokesIPowerLaw {
                flux: 1.,
                reffreq: 1.4e9,
                alpha: 0.,
            },
            noise: 0.,
            seed: 0,
        })
    }

    /// Set the total-intensity spectrum.
    pub fn stokes_i(mut self, stokes_i: StokesIPowerLaw) -> Self {
        self.stokes_i = stokes_i;
        self
    }

    /// Set the injected noise level: one standard deviation, in Jy, applied
    /// uniformly to every channel of every Stokes spectrum.
    pub fn noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    /// Set the seed of the pseudo-random stream.
    ///
    /// Two `simulate` calls with identical configurations and seeds produce
    /// bit-identical spectra.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run the simulation over the given channel frequencies (Hz).
    ///
    /// The noise stream is consumed in a fixed order so that a seed pins the
    /// whole realization: every channel of I, then of Q, then of U.
    pub fn simulate(&self, log: &Logger, freq_hz: &[f64]) -> Result<IquSpectra> {
        if !self.noise.is_finite() || self.noise < 0. {
            return Err(SimulationError::InvalidNoise(self.noise));
        }

        let noise_dist = Normal::new(0., self.noise)
            .map_err(|_| SimulationError::InvalidNoise(self.noise))?;
        let mut rng = StdRng::seed_from_u64(self.seed);

        trace!(log, "beginning spectrum simulation";
               "model" => self.model_id,
               "nchan" => freq_hz.len(),
               "noise_jy" => self.noise,
               "seed" => self.seed);

        let l2 = lambda_squared(freq_hz);
        let frac_pol = self.model.evaluate(&self.params, &l2)?;
        let i = self.stokes_i.evaluate(freq_hz);

        let mut spectra = IquSpectra {
            q: i.iter().zip(&frac_pol).map(|(i, p)| i * p.re).collect(),
            u: i.iter().zip(&frac_pol).map(|(i, p)| i * p.im).collect(),
            i,
        };

        for x in spectra
            .i
            .iter_mut()
            .chain(spectra.q.iter_mut())
            .chain(spectra.u.iter_mut())
        {
            *x += noise_dist.sample(&mut rng);
        }

        trace!(log, "simulated spectra"; "nchan" => spectra.len());

        Ok(spectra)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::{lambda_squared, SpectrumSimulator, StokesIPowerLaw};
    use crate::{ModelParams, SimulationError, SPEED_LIGHT};

    fn quiet() -> slog::Logger {
        slog::Logger::root(slog::Discard, o!())
    }

    #[test]
    fn lambda_squared_conversion() {
        let l2 = lambda_squared(&[944e6]);
        assert_approx_eq!(l2[0], (SPEED_LIGHT / 944e6) * (SPEED_LIGHT / 944e6), 1e-15);
        assert_approx_eq!(l2[0], 0.10085, 1e-5);
    }

    #[test]
    fn power_law_flux_at_reference() {
        let spec = StokesIPowerLaw {
            flux: 500e-6,
            reffreq: 944e6,
            alpha: -0.7,
        };
        assert_eq!(spec.evaluate(&[944e6])[0], 500e-6);
    }

    #[test]
    fn power_law_scaling() {
        let spec = StokesIPowerLaw {
            flux: 1e-3,
            reffreq: 1e9,
            alpha: -1.,
        };
        assert_approx_eq!(spec.evaluate(&[2e9])[0], 0.5e-3, 1e-18);
    }

    #[test]
    fn negative_noise_is_an_error() {
        let params = ModelParams::new()
            .set("fracPol", 0.3)
            .set("psi0_deg", 0.)
            .set("RM_radm2", 0.);
        let err = SpectrumSimulator::new(1, params)
            .unwrap()
            .noise(-1e-6)
            .simulate(&quiet(), &[1e9])
            .unwrap_err();
        assert_eq!(err, SimulationError::InvalidNoise(-1e-6));
    }

    #[test]
    fn unknown_model_is_an_error() {
        let err = SpectrumSimulator::new(99, ModelParams::new()).unwrap_err();
        assert_eq!(err, SimulationError::UnknownModel(99));
    }
}
