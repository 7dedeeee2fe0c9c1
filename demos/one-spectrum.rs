/// Simulate one polarised spectrum for a fixed example source.
///
/// This uses a single Faraday-thin component observed over 289 channels of
/// 1 MHz width between 800 and 1088 MHz, and prints the noisy spectra as a
/// table that can be fed straight to a QU-fitting tool.

use qusim::{ModelParams, SpectrumSimulator, StokesIPowerLaw};

fn main() {
    const FRAC_POL: f64 = 0.3;
    const PSI0_DEG: f64 = 25.;
    const RM_RADM2: f64 = 170.;
    const FLUX_JY: f64 = 500e-6;
    const REFFREQ_HZ: f64 = 944e6;
    const ALPHA: f64 = -0.7;
    const NOISE_JY: f64 = 20e-6;
    const SEED: u64 = 9999;

    let log = qusim_test_support::default_log();

    let freq_hz: Vec<f64> = (0..289).map(|k| 800e6 + 1e6 * k as f64).collect();

    let params = ModelParams::new()
        .set("fracPol", FRAC_POL)
        .set("psi0_deg", PSI0_DEG)
        .set("RM_radm2", RM_RADM2);

    let spectra = SpectrumSimulator::new(1, params)
        .unwrap()
        .stokes_i(StokesIPowerLaw {
            flux: FLUX_JY,
            reffreq: REFFREQ_HZ,
            alpha: ALPHA,
        })
        .noise(NOISE_JY)
        .seed(SEED)
        .simulate(&log, &freq_hz)
        .unwrap();

    println!("# freq_hz stokes_i_jy stokes_q_jy stokes_u_jy err_jy");

    for (k, &f) in freq_hz.iter().enumerate() {
        println!(
            "{:.8e}\t{:.8e}\t{:.8e}\t{:.8e}\t{:.8e}",
            f, spectra.i[k], spectra.q[k], spectra.u[k], NOISE_JY
        );
    }
}
