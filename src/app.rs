// Состояние приложения и отрисовка страницы вынесены из main.rs.
// Здесь живёт FolioApp: загруженные текстуры, эффект подсветки и кадровый цикл.

use eframe::egui::RichText;
use eframe::{egui, App};

use crate::profile::PROFILE;
use crate::ui_constants::{spacing, CARD_GAP};
use crate::views::cards::CARD_WIDTH;
use crate::views::header::draw_page_header;
use crate::views::highlight::CursorHighlight;

mod about_ui;
mod fetch;
mod grid;
pub mod images;
mod logs_ui;
pub mod nav;
mod runtime;
mod state;

pub use fetch::ImageMsg;
pub use runtime::rt;
use state::ImagesState;

pub struct FolioApp {
    images: ImagesState,
    highlight: CursorHighlight,
}

impl Default for FolioApp {
    fn default() -> Self {
        Self {
            images: ImagesState::new(),
            highlight: CursorHighlight::new(),
        }
    }
}

impl App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? ensure we repaint to keep the logs window fresh
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        // Входящие результаты фоновых загрузок картинок
        self.poll_incoming(ctx);
        // Ensure every profile image is scheduled (idempotent)
        self.schedule_image_loads(ctx);

        // Pointer movement is applied against the card rects registered on
        // the previous frame; for a static page the rects only change with
        // the window size, which also reruns this path.
        if let Some(pointer) = ctx.input(|i| i.pointer.hover_pos()) {
            self.highlight.on_pointer_move(pointer);
        }
        self.highlight.begin_frame();

        let profile = { PROFILE.read().unwrap().clone() };

        let mut grid_rect = None;
        let mut open_about = false;
        let mut open_logs = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let avail_w = ui.available_width().floor();
                    let card_w = CARD_WIDTH;
                    let gap = CARD_GAP;

                    let mut cols = ((avail_w + gap) / (card_w + gap)).floor() as usize;
                    if cols == 0 {
                        cols = 1;
                    }
                    cols = cols.min(profile.projects.len().max(1));
                    let row_w = (cols as f32) * card_w + ((cols - 1) as f32) * gap;
                    let left_pad = ((avail_w - row_w) / 2.0).max(0.0);

                    let avatar = self.images.texture_for(&profile.avatar).cloned();
                    draw_page_header(ui, &profile, avatar.as_ref());

                    // Секция проектов — сетка карточек
                    ui.add_space(spacing::XLARGE);
                    ui.label(
                        RichText::new(&profile.projects_title)
                            .heading()
                            .color(egui::Color32::from_rgb(230, 230, 230)),
                    );
                    ui.add_space(spacing::MEDIUM);
                    grid_rect =
                        self.draw_project_grid(ui, &profile, cols, left_pad, gap, card_w);

                    ui.add_space(spacing::LARGE);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(format!("© {}", profile.owner))
                                .small()
                                .color(egui::Color32::from_rgb(140, 140, 140)),
                        );
                        ui.add_space(spacing::SMALL);
                        ui.horizontal(|ui| {
                            // Center the two small buttons under the copyright line.
                            let w = 120.0;
                            ui.add_space(((ui.available_width() - w) / 2.0).max(0.0));
                            open_about = ui.small_button("About").clicked();
                            open_logs = ui.small_button("Logs").clicked();
                        });
                    });
                    ui.add_space(spacing::MEDIUM);
                });
        });

        // Attach once the grid exists; the effect stays attached for the
        // whole session and is torn down in on_exit.
        self.highlight.attach(grid_rect);

        if open_about {
            about_ui::open_about();
            ctx.request_repaint();
        }
        if open_logs {
            logs_ui::open_logs();
            ctx.request_repaint();
        }

        // About and Logs windows (separate OS viewports)
        about_ui::draw_about_viewport(ctx);
        logs_ui::draw_logs_viewport(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Tear down the pointer observer so nothing outlives the page.
        self.highlight.detach();
    }
}
