// main.rs - Stopwatch + activation grid desktop app

use eframe::egui;
use egui::{Color32, Rect, RichText, Stroke, Vec2};
use std::time::{Duration, Instant};

use chronogrid::TimerGridController;
use chronogrid::tuning::{GRID_COLS, GRID_ROWS, GRID_SIZE};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stopwatch Grid",
        options,
        Box::new(|_cc| Box::new(StopwatchApp::default())),
    )
}

struct StopwatchApp {
    controller: TimerGridController,
    last_update: Instant,
    base_color: Color32,
    activated_color: Color32,
}

impl Default for StopwatchApp {
    fn default() -> Self {
        Self {
            controller: TimerGridController::new(),
            last_update: Instant::now(),
            base_color: Color32::from_gray(90),
            activated_color: Color32::from_rgb(255, 140, 0),
        }
    }
}

impl eframe::App for StopwatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Feed real elapsed time to the controller in whole milliseconds,
        // carrying the sub-millisecond remainder to the next frame.
        if self.controller.is_running() {
            let delta_ms = self.last_update.elapsed().as_millis() as u64;
            if delta_ms > 0 {
                self.controller.advance(delta_ms);
                self.last_update += Duration::from_millis(delta_ms);
            }
        } else {
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Stopwatch Grid");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.controller.is_running() {
                    "⏸ Pause"
                } else {
                    "▶ Start"
                };
                if ui.button(button_text).clicked() {
                    self.controller.toggle_run_state();
                    if self.controller.is_running() {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏹ Reset").clicked() {
                    self.controller.reset();
                }

                ui.separator();

                ui.label(format!("Interval passes: {}", self.controller.trigger_counter()));
            });

            ui.separator();

            // Time readout
            ui.label(
                RichText::new(self.controller.time_parts().to_string())
                    .monospace()
                    .size(48.0),
            );

            ui.separator();

            // Show current colors
            ui.horizontal(|ui| {
                ui.label("Base:");
                ui.color_edit_button_srgba(&mut self.base_color);
                ui.label("Activated:");
                ui.color_edit_button_srgba(&mut self.activated_color);
            });

            ui.separator();

            // Draw the grid
            let box_size = 18.0;
            let spacing = 0.5;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((box_size + spacing) * GRID_COLS as f32 - spacing);

            let (_response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());

            // Fill background
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for row in 0..GRID_ROWS {
                for col in 0..GRID_COLS {
                    let x = start_pos.x + col as f32 * (box_size + spacing);
                    let y = start_pos.y + row as f32 * (box_size + spacing);

                    let rect = Rect::from_min_size(
                        egui::pos2(x, y),
                        Vec2::splat(box_size),
                    );

                    // Choose color based on cell state
                    let cell_color = if self.controller.grid().cell(row, col).is_activated() {
                        self.activated_color
                    } else {
                        self.base_color
                    };

                    painter.rect_filled(rect, 1.0, cell_color);

                    // Draw subtle border
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            ui.separator();

            // Statistics
            let activated = self.controller.grid().activated_count();
            ui.horizontal(|ui| {
                ui.label(format!("Activated cells: {activated}"));
                ui.label(format!("Base cells: {}", GRID_SIZE - activated));
                ui.label(format!(
                    "Coverage: {:.1}%",
                    (activated as f32 / GRID_SIZE as f32) * 100.0
                ));
            });
        });

        // Request repaint if running to keep the readout smooth
        if self.controller.is_running() {
            ctx.request_repaint();
        }
    }
}
