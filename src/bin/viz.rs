use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use rocket_apogee::config;
use rocket_apogee::sim::{self, FlightSummary, Trajectory};
use rocket_apogee::vehicle::SimulationParameters;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional first argument: TOML parameter file.
    let params = match std::env::args().nth(1) {
        Some(path) => match config::load_parameters(&path) {
            Ok(p) => p,
            Err(e) => {
                log::error!("cannot load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SimulationParameters::default(),
    };

    let trajectory = sim::simulate(&params);
    let headline = match FlightSummary::from_trajectory(&trajectory, &params) {
        Ok(s) => format!(
            "Max height: {:.2} m  |  Max velocity: {:.2} m/s  |  Max acceleration: {:.2} m/s^2",
            s.max_height, s.max_velocity, s.max_acceleration
        ),
        Err(e) => e.to_string(),
    };

    let app = TrajectoryViz { trajectory, headline };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Rocket Flight Profile", options, Box::new(|_| Ok(Box::new(app))))
}

struct TrajectoryViz {
    trajectory: Trajectory,
    headline: String,
}

impl TrajectoryViz {
    fn panel(&self, ui: &mut egui::Ui, id: &str, title: &str, y_label: &str, series: &[f64], height: f32) {
        ui.label(title);
        let points: PlotPoints = self
            .trajectory
            .time()
            .iter()
            .zip(series)
            .map(|(&t, &y)| [t, y])
            .collect();
        Plot::new(id)
            .height(height)
            .x_axis_label("Time (s)")
            .y_axis_label(y_label)
            .show_grid(true)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(y_label, points));
            });
    }
}

impl eframe::App for TrajectoryViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Vertical flight");
            ui.label(self.headline.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let h = ui.available_height() / 3.0 - 24.0;
            self.panel(ui, "height", "Height over time", "Height (m)", self.trajectory.height(), h);
            self.panel(ui, "velocity", "Velocity over time", "Velocity (m/s)", self.trajectory.velocity(), h);
            self.panel(
                ui,
                "acceleration",
                "Acceleration over time",
                "Acceleration (m/s^2)",
                self.trajectory.acceleration(),
                h,
            );
        });
    }
}
