/*! Simulate polarised radio spectra for exercising QU-fitting tools.

This crate generates synthetic Stokes I, Q and U spectra of the kind produced
by broadband radio polarimetry observations. A parametric model supplies the
complex fractional polarisation as a function of squared wavelength, a power
law supplies the total-intensity spectrum, and Gaussian noise drawn from a
seeded generator is injected so that every simulated realization is
reproducible. The resulting spectra are meant to be fed to a QU-fitting
package as test and validation inputs.

The basic structure of the problem is that linear polarisation is naturally
expressed as a complex quantity `p = (Q + iU) / I` whose phase rotates with
squared wavelength under Faraday rotation. Models of the magnetoionic medium
predict `p(λ²)`; multiplying by a Stokes I spectrum and perturbing each
channel independently yields the observable quantities.

*/

#![deny(missing_docs)]

#[macro_use]
extern crate slog;

use std::collections::HashMap;

use num_complex::Complex64;
use thiserror::Error;

/// The speed of light in SI units (meters per second).
pub const SPEED_LIGHT: f64 = 2.99792458e8;

/// Things that can go wrong while configuring or running a simulation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimulationError {
    /// The model registry has no entry for the requested identifier.
    #[error("unknown polarisation model {0}")]
    UnknownModel(u32),

    /// The parameter mapping lacks a key that the selected model consumes.
    #[error("polarisation model parameter `{0}` is missing")]
    MissingParameter(&'static str),

    /// The injected noise level is negative or not finite.
    #[error("invalid noise level {0} Jy")]
    InvalidNoise(f64),
}

/// A `Result` whose error type is [`SimulationError`].
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Named parameters for a polarisation model.
///
/// The mapping is consumed opaquely by the selected model: this type places
/// no interpretation on the keys, and a model asking for a key that is not
/// present surfaces [`SimulationError::MissingParameter`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelParams(HashMap<String, f64>);

impl ModelParams {
    /// Create an empty parameter mapping.
    pub fn new() -> Self {
        ModelParams(HashMap::new())
    }

    /// Set a parameter, replacing any previous value under the same name.
    pub fn set(mut self, name: &str, value: f64) -> Self {
        self.0.insert(name.to_owned(), value);
        self
    }

    /// Fetch a parameter by name.
    pub fn get(&self, name: &'static str) -> Result<f64> {
        self.0
            .get(name)
            .copied()
            .ok_or(SimulationError::MissingParameter(name))
    }

    /// The number of parameters in the mapping.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A parametric model of complex fractional polarisation.
///
/// Implementations map squared wavelengths λ² (m²) to `p(λ²) = q + iu`, the
/// ratio of the complex linear polarisation to the total intensity. The
/// returned vector is channel-aligned with `lambda2`.
pub trait PolarisationModel: std::fmt::Debug {
    /// Evaluate the model at each squared wavelength.
    fn evaluate(&self, params: &ModelParams, lambda2: &[f64]) -> Result<Vec<Complex64>>;

    /// The names of the parameters the model consumes from the mapping.
    fn parameter_names(&self) -> &'static [&'static str];
}

pub mod models;
pub mod spectrum;

pub use models::load_model;
pub use spectrum::{lambda_squared, IquSpectra, SpectrumSimulator, StokesIPowerLaw};
