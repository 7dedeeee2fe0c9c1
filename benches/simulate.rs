// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/// Time the spectrum simulator across models and channel counts.

#[macro_use]
extern crate bencher;

use bencher::Bencher;
use qusim::{ModelParams, SpectrumSimulator, StokesIPowerLaw};

fn band(nchan: usize) -> Vec<f64> {
    (0..nchan).map(|k| 800e6 + 1e6 * k as f64).collect()
}

fn single_params() -> ModelParams {
    ModelParams::new()
        .set("fracPol", 0.3)
        .set("psi0_deg", 25.)
        .set("RM_radm2", 170.)
}

fn double_params() -> ModelParams {
    ModelParams::new()
        .set("fracPol1", 0.2)
        .set("fracPol2", 0.1)
        .set("psi01_deg", 10.)
        .set("psi02_deg", 70.)
        .set("RM1_radm2", 50.)
        .set("RM2_radm2", -120.)
        .set("sigmaRM1_radm2", 5.)
        .set("sigmaRM2_radm2", 15.)
}

fn run(model_id: u32, params: ModelParams, nchan: usize) {
    let log = slog::Logger::root(slog::Discard, slog::o!());
    let freq = band(nchan);

    SpectrumSimulator::new(model_id, params)
        .unwrap()
        .stokes_i(StokesIPowerLaw {
            flux: 500e-6,
            reffreq: 944e6,
            alpha: -0.7,
        })
        .noise(20e-6)
        .seed(9999)
        .simulate(&log, &freq)
        .unwrap();
}

fn thin_289(b: &mut Bencher) {
    b.iter(|| run(1, single_params(), 289));
}

fn thin_4096(b: &mut Bencher) {
    b.iter(|| run(1, single_params(), 4096));
}

fn slab_289(b: &mut Bencher) {
    b.iter(|| run(3, single_params().set("deltaRM_radm2", 40.), 289));
}

fn double_dispersion_289(b: &mut Bencher) {
    b.iter(|| run(11, double_params(), 289));
}

fn double_dispersion_4096(b: &mut Bencher) {
    b.iter(|| run(11, double_params(), 4096));
}

benchmark_group!(
    simulate,
    thin_289,
    thin_4096,
    slab_289,
    double_dispersion_289,
    double_dispersion_4096
);
benchmark_main!(simulate);
