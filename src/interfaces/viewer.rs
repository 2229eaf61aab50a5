use crate::domain::reference::LineColor;
use crate::interfaces::chart::ChartSpec;
use eframe::egui;
use egui_plot::{Legend, Plot, VLine};

/// Blocking chart window. egui_plot has no native log axes, so points are
/// plotted in log10 space and the axis formatters print the underlying
/// magnitudes. Non-positive values map to NaN and are simply not drawn.
pub struct LatencyViewer {
    spec: ChartSpec,
}

impl LatencyViewer {
    pub fn new(spec: ChartSpec) -> Self {
        Self { spec }
    }
}

fn line_color(color: LineColor) -> egui::Color32 {
    match color {
        LineColor::Red => egui::Color32::RED,
        LineColor::Green => egui::Color32::GREEN,
        LineColor::Brown => egui::Color32::from_rgb(139, 69, 19),
        LineColor::Blue => egui::Color32::from_rgb(88, 166, 255),
    }
}

/// Axis tick label for a log10-transformed axis: integer marks become
/// powers of ten, everything else stays unlabeled to avoid clutter.
fn log_tick_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-6 {
        format!("10^{}", value.round() as i64)
    } else {
        String::new()
    }
}

impl eframe::App for LatencyViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        egui::TopBottomPanel::top("title_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.spec.title);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("latency_chart")
                .show_grid([true, true])
                .legend(Legend::default())
                .x_axis_label(self.spec.x_label.clone())
                .y_axis_label(self.spec.y_label.clone())
                .x_axis_formatter(|mark, _range| log_tick_label(mark.value))
                .y_axis_formatter(|mark, _range| log_tick_label(mark.value))
                .show(ui, |plot_ui| {
                    let series_colors = [
                        egui::Color32::from_rgb(100, 200, 255),
                        egui::Color32::from_rgb(255, 165, 0),
                    ];

                    for (series, color) in self.spec.series.iter().zip(series_colors) {
                        let points: Vec<[f64; 2]> = series
                            .points
                            .iter()
                            .map(|&[x, y]| [x.log10(), y.log10()])
                            .collect();
                        plot_ui.line(
                            egui_plot::Line::new(series.name.clone(), points).color(color),
                        );
                    }

                    for reference in &self.spec.reference_lines {
                        plot_ui.vline(
                            VLine::new(reference.label.clone(), (reference.bytes as f64).log10())
                                .color(line_color(reference.color)),
                        );
                    }
                });
        });
    }
}

/// Opens the chart window and blocks until it is closed.
pub fn run(spec: ChartSpec) -> anyhow::Result<()> {
    let title = spec.title.clone();
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        "memlat",
        native_options,
        Box::new(|_cc| Ok(Box::new(LatencyViewer::new(spec)))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
