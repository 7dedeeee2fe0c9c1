// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/// Crank out simulated spectra for random thin-component parameters.
///
/// Each draw samples a rotation measure and fractional polarisation in the
/// given ranges, simulates a noisy band and appends the channels to the
/// output file, one block per spectrum. Handy for generating bulk inputs to
/// fitting-tool shakedown runs.

use clap::{Arg, Command};
use qusim::{ModelParams, SpectrumSimulator, StokesIPowerLaw};
use qusim_test_support::Sampler;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::OpenOptions;
use std::io::prelude::*;
use std::path::PathBuf;

fn main() {
    let matches = Command::new("crank-out-spectra")
        .version("0.1.0")
        .about("Crank out simulated spectra for random source parameters")
        .arg(
            Arg::new("OUTFILE")
                .help("The path of the output file to create")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("N_SPECTRA")
                .help("The number of spectra to generate")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("RM_MIN")
                .help("The minimum rotation measure to sample, in rad/m^2")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::new("RM_MAX")
                .help("The maximum rotation measure to sample, in rad/m^2")
                .required(true)
                .index(4),
        )
        .arg(
            Arg::new("NOISE")
                .help("The injected noise level, in Jy")
                .required(true)
                .index(5),
        )
        .arg(
            Arg::new("SEED")
                .help("The master randomisation seed")
                .required(true)
                .index(6),
        )
        .get_matches();

    let outfile = PathBuf::from(matches.get_one::<String>("OUTFILE").unwrap());
    let n_spectra = matches
        .get_one::<String>("N_SPECTRA")
        .unwrap()
        .parse::<u64>()
        .unwrap();
    let rm_min = matches
        .get_one::<String>("RM_MIN")
        .unwrap()
        .parse::<f64>()
        .unwrap();
    let rm_max = matches
        .get_one::<String>("RM_MAX")
        .unwrap()
        .parse::<f64>()
        .unwrap();
    let noise = matches
        .get_one::<String>("NOISE")
        .unwrap()
        .parse::<f64>()
        .unwrap();
    let seed = matches
        .get_one::<String>("SEED")
        .unwrap()
        .parse::<u64>()
        .unwrap();

    let rm_sampler = Sampler::new(false, rm_min, rm_max);
    let frac_pol_sampler = Sampler::new(true, 0.01, 0.7);
    let psi0_sampler = Sampler::new(false, 0., 180.);

    let mut param_rng = StdRng::seed_from_u64(seed);

    let freq_hz: Vec<f64> = (0..289).map(|k| 800e6 + 1e6 * k as f64).collect();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(outfile)
        .unwrap();

    let log = qusim_test_support::default_log();

    for n in 0..n_spectra {
        let rm = rm_sampler.get(&mut param_rng);
        let frac_pol = frac_pol_sampler.get(&mut param_rng);
        let psi0 = psi0_sampler.get(&mut param_rng);

        let params = ModelParams::new()
            .set("fracPol", frac_pol)
            .set("psi0_deg", psi0)
            .set("RM_radm2", rm);

        let spectra = SpectrumSimulator::new(1, params)
            .unwrap()
            .stokes_i(StokesIPowerLaw {
                flux: 500e-6,
                reffreq: 944e6,
                alpha: -0.7,
            })
            .noise(noise)
            .seed(seed.wrapping_add(n))
            .simulate(&log, &freq_hz)
            .unwrap();

        writeln!(
            file,
            "# spectrum {} fracPol(log) {:.6e} psi0_deg(lin) {:.6e} RM_radm2(lin) {:.6e}",
            n, frac_pol, psi0, rm
        )
        .expect("write error");

        for (k, &f) in freq_hz.iter().enumerate() {
            writeln!(
                file,
                "{:.16e}\t{:.16e}\t{:.16e}\t{:.16e}",
                f, spectra.i[k], spectra.q[k], spectra.u[k]
            )
            .expect("write error");
        }
    }
}
