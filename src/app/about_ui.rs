// About viewport (separate OS window) with version and source link.

use eframe::egui;
use lazy_static::lazy_static;
use std::sync::RwLock;

lazy_static! {
    static ref ABOUT_OPEN: RwLock<bool> = RwLock::new(false);
}

pub fn open_about() {
    if let Ok(mut v) = ABOUT_OPEN.write() {
        *v = true;
    }
}

pub fn draw_about_viewport(ctx: &egui::Context) {
    let is_open = ABOUT_OPEN.read().map(|g| *g).unwrap_or(false);
    if !is_open {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("about_window");

    ctx.show_viewport_immediate(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title("About")
            .with_inner_size([420.0, 200.0])
            .with_resizable(false),
        move |ctx, _class| {
            // If user clicked the OS close (X), mark as closed and ensure
            // the viewport actually closes.
            if ctx.input(|i| i.viewport().close_requested()) {
                if let Ok(mut v) = ABOUT_OPEN.write() {
                    *v = false;
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                ctx.request_repaint();
                return;
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                let owner = { crate::profile::PROFILE.read().unwrap().owner.clone() };
                ui.heading(owner);
                ui.add_space(4.0);
                ui.label(format!("folio {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(8.0);
                ui.hyperlink_to("Source code and updates", env!("CARGO_PKG_REPOSITORY"));
            });
        },
    );
}
