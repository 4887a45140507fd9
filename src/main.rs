#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // скрыть консоль только в release
// Точка входа оставлена минимальной: только конфиг окна и запуск приложения.
// Вся логика отрисовки и состояния живёт в модуле app (src/app.rs).

use eframe::{egui, egui_wgpu::WgpuConfiguration, wgpu::PresentMode};

mod app;
mod icons;
mod logger;
mod profile;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    // Initialize in-app GUI logger (also mirrors to stderr when enabled)
    logger::init();
    // Load page content: embedded default, overridden by profile.json if present
    profile::load_profile_from_disk();

    let window_title = { profile::PROFILE.read().unwrap().owner.clone() };

    // Wgpu renderer with no vsync: the highlight follows the cursor with
    // minimal latency, tearing is a non-issue for a mostly static page.
    let wgpu_options = WgpuConfiguration {
        present_mode: PresentMode::AutoNoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        vsync: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1120.0, 760.0])
            .with_min_inner_size([480.0, 320.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        &window_title,
        native_options,
        Box::new(|_cc| Box::new(app::FolioApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
