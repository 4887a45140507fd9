// Async image loading: one task per distinct source key, results delivered
// over mpsc and uploaded as textures at frame start.

use eframe::egui;

use super::images::{provider, ImageData, ImageProvider};
use super::rt;
use crate::profile::{ImageSource, PROFILE};

/// Messages from image-loading tasks.
pub enum ImageMsg {
    Loaded { key: String, data: ImageData },
    Failed { key: String },
}

impl super::FolioApp {
    /// Schedule loads for every image the profile references. Idempotent:
    /// loaded, in-flight and failed keys are skipped.
    pub(super) fn schedule_image_loads(&mut self, ctx: &egui::Context) {
        let sources: Vec<ImageSource> = {
            let profile = PROFILE.read().unwrap();
            profile.image_sources().cloned().collect()
        };

        for source in sources {
            let key = source.key();
            if self.images.textures.contains_key(&key)
                || self.images.loading.contains(&key)
                || self.images.failed.contains(&key)
            {
                continue;
            }
            self.images.loading.insert(key.clone());
            let tx = self.images.tx.clone();
            let ctx2 = ctx.clone();

            log::info!("image schedule: {key}");
            rt().spawn(async move {
                let msg = match provider().fetch(&source).await {
                    Ok(data) => ImageMsg::Loaded { key, data },
                    Err(err) => {
                        log::warn!("image load failed: {err} (source {key})");
                        ImageMsg::Failed { key }
                    }
                };
                let _ = tx.send(msg);
                ctx2.request_repaint();
            });
        }
    }

    /// Poll incoming load results and upload textures.
    pub(super) fn poll_incoming(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.images.rx.try_recv() {
            match msg {
                ImageMsg::Loaded { key, data } => {
                    let size = [data.width as usize, data.height as usize];
                    let color = egui::ColorImage::from_rgba_unmultiplied(size, &data.rgba);
                    let tex =
                        ctx.load_texture(key.clone(), color, egui::TextureOptions::default());
                    log::info!("image ok: {key} ({}x{})", data.width, data.height);
                    self.images.loading.remove(&key);
                    self.images.textures.insert(key, tex);
                }
                ImageMsg::Failed { key } => {
                    self.images.loading.remove(&key);
                    self.images.failed.insert(key);
                }
            }
        }
    }
}
