use eframe::egui::{self, Color32, FontId, Rounding, Sense, Vec2};

/// Circular image with an initial-letter placeholder while (or if) the
/// texture is not loaded. The circle is a fully rounded square image, so
/// non-square sources get center-cropped by the fit.
pub fn circular_image(
    ui: &mut egui::Ui,
    tex: Option<&egui::TextureHandle>,
    size: f32,
    fallback_initial: char,
) -> egui::Response {
    let (rect, resp) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());

    match tex {
        Some(tex) => {
            egui::Image::new(tex)
                .fit_to_exact_size(Vec2::splat(size))
                .rounding(Rounding::same(size / 2.0))
                .paint_at(ui, rect);
        }
        None => {
            let painter = ui.painter_at(rect);
            painter.circle_filled(rect.center(), size / 2.0, Color32::from_rgb(58, 58, 58));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                fallback_initial,
                FontId::proportional(size * 0.42),
                Color32::from_gray(200),
            );
        }
    }

    resp
}
