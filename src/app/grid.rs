use eframe::egui;

use crate::profile::{Profile, ProjectEntry};
use crate::views::cards::project_card;

/// Grid rendering split from app.rs.
impl super::FolioApp {
    fn on_card_ui(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        project: &ProjectEntry,
        card_w: f32,
        gap: f32,
        c: usize,
        cols: usize,
    ) -> egui::Rect {
        let mut rect = egui::Rect::NOTHING;
        ui.vertical(|ui| {
            ui.set_min_width(card_w);
            ui.set_max_width(card_w);

            let card_id = egui::Id::new(("project_card", index));
            let logo = project
                .logo
                .as_ref()
                .and_then(|s| self.images.texture_for(s))
                .cloned();
            let offset = self.highlight.offset_for(card_id);

            let out = project_card(ui, project, card_w, logo.as_ref(), offset);
            self.highlight.register_card(card_id, out.rect);
            rect = out.rect;
        });
        if c + 1 < cols {
            ui.add_space(gap);
        }
        rect
    }

    /// Draw all project cards in centered rows. Returns the grid's bounding
    /// rect, or None when there is nothing to draw.
    pub(super) fn draw_project_grid(
        &mut self,
        ui: &mut egui::Ui,
        profile: &Profile,
        cols: usize,
        left_pad: f32,
        gap: f32,
        card_w: f32,
    ) -> Option<egui::Rect> {
        let total = profile.projects.len();
        if total == 0 || cols == 0 {
            return None;
        }
        let cols = cols.max(1);
        let rows = (total + cols - 1) / cols;

        let mut bounds: Option<egui::Rect> = None;
        for r in 0..rows {
            ui.horizontal(|ui| {
                ui.add_space(left_pad);
                let base = r * cols;
                for c in 0..cols {
                    if let Some(project) = profile.projects.get(base + c) {
                        let rect = self.on_card_ui(ui, base + c, project, card_w, gap, c, cols);
                        bounds = Some(bounds.map_or(rect, |b| b.union(rect)));
                    }
                }
            });
            ui.add_space(gap);
        }
        bounds
    }
}
