// Page header: avatar, owner name and tagline, contact icon-buttons,
// then the biography section.

use eframe::egui::{self, Color32, RichText};

use crate::app::nav;
use crate::profile::{ContactEntry, Profile};
use crate::ui_constants::{spacing, AVATAR_SIZE};
use crate::views::ui_helpers::circular_image;

pub fn draw_page_header(
    ui: &mut egui::Ui,
    profile: &Profile,
    avatar: Option<&egui::TextureHandle>,
) {
    ui.add_space(spacing::XLARGE);
    ui.horizontal(|ui| {
        ui.add_space(spacing::LARGE);
        let initial = profile.owner.chars().next().unwrap_or('?');
        circular_image(ui, avatar, AVATAR_SIZE, initial);
        ui.add_space(spacing::LARGE);
        ui.vertical(|ui| {
            ui.add_space(spacing::LARGE);
            ui.label(
                RichText::new(&profile.owner)
                    .size(28.0)
                    .strong()
                    .color(Color32::from_rgb(230, 230, 230)),
            );
            if !profile.tagline.is_empty() {
                ui.label(RichText::new(&profile.tagline).color(Color32::from_rgb(180, 180, 180)));
            }
            ui.add_space(spacing::MEDIUM);
            draw_contacts_row(ui, profile);
        });
    });

    ui.add_space(spacing::XLARGE);
    ui.label(
        RichText::new(&profile.about_title)
            .heading()
            .color(Color32::from_rgb(230, 230, 230)),
    );
    ui.add_space(spacing::SMALL);
    for paragraph in &profile.about {
        ui.label(RichText::new(paragraph).color(Color32::from_rgb(200, 200, 200)));
        ui.add_space(spacing::SMALL);
    }
    if let Some(aff) = &profile.affiliation {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = spacing::SMALL;
            ui.label(RichText::new(&aff.text).color(Color32::from_rgb(200, 200, 200)));
            ui.hyperlink_to(RichText::new(&aff.label).strong(), aff.url.as_str());
        });
    }
}

/// One icon-button per contact, in profile order.
fn draw_contacts_row(ui: &mut egui::Ui, profile: &Profile) {
    ui.horizontal(|ui| {
        for contact in &profile.contacts {
            contact_button(ui, contact);
        }
    });
}

/// A single icon-button; activation opens the target (http(s) or mailto)
/// via the platform opener, never inside the app window.
fn contact_button(ui: &mut egui::Ui, contact: &ContactEntry) -> egui::Response {
    let glyph = contact.icon.glyph().to_string();
    let resp = ui
        .add(egui::Button::new(RichText::new(glyph).size(18.0)).min_size(egui::vec2(32.0, 32.0)))
        .on_hover_text(&contact.label)
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if resp.clicked() {
        log::info!("contact {} -> {}", contact.label, contact.target);
        nav::open_in_browser(contact.target.as_str());
    }
    resp
}
