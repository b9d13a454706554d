// ui.rs - egui front end; all state changes go through LifeApp / LifeEngine

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use life_engine::PATTERNS;

use crate::app::LifeApp;

const BOX_SIZE: f32 = 20.0;
const SPACING: f32 = 1.0;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.tick(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let running = self.engine.is_running();
                let button_text = if running { "⏸ Stop" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.add_enabled(!running, egui::Button::new("⏭ Step")).clicked() {
                    self.engine.step();
                }

                if ui.button("⏹ Reset").clicked() {
                    self.engine.reset();
                }

                if ui.button("🎲 Random").clicked() {
                    self.apply_random_pattern();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                let generation = self.engine.generation();
                if generation > 0 {
                    ui.label(format!("Generation: {}", generation));
                }
            });

            ui.separator();

            // Speed and colours
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.ticker.interval().as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                    self.ticker.set_interval(Duration::from_millis((1000.0 / speed) as u64));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label(format!(
                "Boundary: {:?}. Click cells to toggle them while stopped.",
                self.engine.boundary_mode()
            ));

            ui.separator();

            let clicked = draw_grid(ui, self);
            if let Some((row, col)) = clicked {
                self.click_cell(row, col);
            }

            ui.separator();

            // Statistics
            let grid = self.engine.grid();
            let total = grid.rows() * grid.cols();
            let live_cells = grid.live_cells();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });
        });

        if self.engine.is_running() {
            let wait = self.ticker.time_until_next(now).unwrap_or(self.ticker.interval());
            ctx.request_repaint_after(wait);
        }
    }
}

/// Paints the snapshot and returns the cell under a click, if any.
fn draw_grid(ui: &mut egui::Ui, app: &LifeApp) -> Option<(usize, usize)> {
    let snapshot = app.engine.snapshot();
    let (rows, cols) = snapshot.grid.dimensions();
    let pitch = BOX_SIZE + SPACING;

    let total_size = Vec2::new(pitch * cols as f32 - SPACING, pitch * rows as f32 - SPACING);
    let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
    let origin = response.rect.min;

    painter.rect_filled(response.rect, 0.0, Color32::BLACK);

    for (row, cells) in snapshot.grid.row_slices().enumerate() {
        for (col, &alive) in cells.iter().enumerate() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                Vec2::splat(BOX_SIZE),
            );
            let color = if alive { app.live_color } else { app.dead_color };
            painter.rect_filled(rect, 1.0, color);
            painter.rect_stroke(rect, 1.0, Stroke::new(0.5, Color32::from_gray(0xe6)));
        }
    }

    if !response.clicked() {
        return None;
    }
    let pos = response.interact_pointer_pos()?;
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let row = (offset.y / pitch) as usize;
    let col = (offset.x / pitch) as usize;
    (row < rows && col < cols).then_some((row, col))
}
