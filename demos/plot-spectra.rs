/// Simulate the fixed example spectrum and show it in an interactive window.
///
/// The three Stokes series are drawn as points against frequency, each with
/// a fixed-magnitude error bar equal to the injected noise level, plus a
/// horizontal zero line. Zoom and pan come for free from the plot widget.

use eframe::egui::{self, Color32};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points};
use qusim::{IquSpectra, ModelParams, SpectrumSimulator, StokesIPowerLaw};

const NOISE_JY: f64 = 20e-6;

struct PlotSpectraApp {
    freq_hz: Vec<f64>,
    spectra: IquSpectra,
}

impl PlotSpectraApp {
    fn series(&self) -> [(&'static str, &[f64], Color32); 3] {
        [
            ("Stokes I", &self.spectra.i, Color32::LIGHT_GRAY),
            ("Stokes Q", &self.spectra.q, Color32::LIGHT_BLUE),
            ("Stokes U", &self.spectra.u, Color32::LIGHT_RED),
        ]
    }
}

impl eframe::App for PlotSpectraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("iqu_spectra")
                .legend(Legend::default())
                .x_axis_label("Frequency (Hz)")
                .y_axis_label("Flux Density (Jy)")
                .show(ui, |plot_ui| {
                    plot_ui.hline(
                        HLine::new(0.)
                            .color(Color32::GRAY)
                            .style(LineStyle::dotted_dense()),
                    );

                    for (name, series, color) in self.series() {
                        for (&f, &y) in self.freq_hz.iter().zip(series) {
                            let bar = vec![[f, y - NOISE_JY], [f, y + NOISE_JY]];
                            plot_ui.line(
                                Line::new(PlotPoints::from(bar)).color(color).width(1.),
                            );
                        }

                        let points: PlotPoints = self
                            .freq_hz
                            .iter()
                            .zip(series)
                            .map(|(&f, &y)| [f, y])
                            .collect();
                        plot_ui.points(Points::new(points).name(name).color(color).radius(2.));
                    }
                });
        });
    }
}

fn main() -> eframe::Result {
    let log = qusim_test_support::default_log();

    let freq_hz: Vec<f64> = (0..289).map(|k| 800e6 + 1e6 * k as f64).collect();

    let params = ModelParams::new()
        .set("fracPol", 0.3)
        .set("psi0_deg", 25.)
        .set("RM_radm2", 170.);

    let spectra = SpectrumSimulator::new(1, params)
        .unwrap()
        .stokes_i(StokesIPowerLaw {
            flux: 500e-6,
            reffreq: 944e6,
            alpha: -0.7,
        })
        .noise(NOISE_JY)
        .seed(9999)
        .simulate(&log, &freq_hz)
        .unwrap();

    let app = PlotSpectraApp { freq_hz, spectra };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900., 600.]),
        ..Default::default()
    };

    eframe::run_native(
        "qusim - simulated spectrum",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
