use eframe::egui::{self, Color32, RichText, Rounding, Stroke};
use url::Url;

use super::action_row::draw_action_row;
use crate::profile::ProjectEntry;
use crate::ui_constants::{card as card_c, spacing, LOGO_SIZE};
use crate::views::highlight;
use crate::views::ui_helpers::circular_image;

/// Outcome of drawing one card: the rect to register with the highlight
/// effect plus hover state.
pub struct CardResponse {
    pub rect: egui::Rect,
    pub hovered: bool,
}

/// Scheme-less form of a URL for the line under the title.
pub fn display_url(url: &Url) -> String {
    let s = url.as_str();
    let s = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))
        .unwrap_or(s);
    s.trim_end_matches('/').to_string()
}

/// Fixed-width project card: title (+ optional circular logo) on top,
/// description in the middle, action icons at the bottom.
/// Strictly constrained to `width` so rows form a proper grid.
pub fn project_card(
    ui: &mut egui::Ui,
    entry: &ProjectEntry,
    width: f32,
    logo_tex: Option<&egui::TextureHandle>,
    highlight_offset: Option<egui::Vec2>,
) -> CardResponse {
    let fill = Color32::from_rgb(36, 36, 36);
    let stroke = Stroke::new(1.0, Color32::from_rgb(64, 64, 64));

    ui.set_min_width(width);
    ui.set_max_width(width);

    let frame_out = egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(Rounding::same(card_c::ROUNDING))
        .inner_margin(egui::Margin::symmetric(
            card_c::INNER_MARGIN,
            card_c::INNER_MARGIN,
        ))
        .show(ui, |ui| {
            let inner_w = width - card_c::INNER_MARGIN * 2.0;
            ui.set_width(inner_w);

            // Header: title and trimmed external URL, logo pinned right.
            ui.horizontal(|ui| {
                let text_w = if entry.logo.is_some() {
                    inner_w - LOGO_SIZE - spacing::MEDIUM
                } else {
                    inner_w
                };
                ui.vertical(|ui| {
                    ui.set_width(text_w);
                    ui.label(
                        RichText::new(&entry.title)
                            .heading()
                            .color(Color32::from_rgb(230, 230, 230)),
                    );
                    if let Some(url) = &entry.external_url {
                        ui.label(
                            RichText::new(display_url(url))
                                .small()
                                .color(Color32::from_rgb(140, 140, 140)),
                        );
                    }
                });
                if entry.logo.is_some() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        let initial = entry.title.chars().next().unwrap_or('?');
                        circular_image(ui, logo_tex, LOGO_SIZE, initial);
                    });
                }
            });

            ui.add_space(card_c::POST_HEADER_GAP);

            // Body keeps a minimum height so footers line up across a row.
            ui.allocate_ui(egui::vec2(inner_w, card_c::BODY_MIN_HEIGHT), |ui| {
                ui.set_min_height(card_c::BODY_MIN_HEIGHT);
                ui.label(RichText::new(&entry.description).color(Color32::from_rgb(200, 200, 200)));
            });

            ui.add_space(spacing::MEDIUM);
            draw_action_row(ui, entry);
        });

    let rect = frame_out.response.rect;
    let hovered = frame_out.response.hovered();

    // Pointer-following glow, clipped to this card.
    if let Some(offset) = highlight_offset {
        let painter = ui.painter_at(rect);
        highlight::paint_card_highlight(&painter, rect, offset);
    }

    CardResponse { rect, hovered }
}

#[cfg(test)]
mod tests {
    use super::display_url;
    use url::Url;

    #[test]
    fn display_url_drops_scheme_and_trailing_slash() {
        let url = Url::parse("https://biocon.international").unwrap();
        assert_eq!(display_url(&url), "biocon.international");
        let url = Url::parse("http://x.example/path/").unwrap();
        assert_eq!(display_url(&url), "x.example/path");
    }

    #[test]
    fn display_url_keeps_paths() {
        let url = Url::parse("https://doi.org/10.1021/acs.jchemed.3c00138").unwrap();
        assert_eq!(display_url(&url), "doi.org/10.1021/acs.jchemed.3c00138");
    }
}
