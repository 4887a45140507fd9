// App state grouped into one struct to keep FolioApp small.

use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use super::fetch::ImageMsg;
use crate::profile::ImageSource;

/// Loaded textures and in-flight image loads, keyed by source key.
pub struct ImagesState {
    pub textures: HashMap<String, egui::TextureHandle>,
    pub loading: HashSet<String>,
    /// Sources that failed to load; never retried within one session.
    pub failed: HashSet<String>,
    pub tx: mpsc::Sender<ImageMsg>,
    pub rx: mpsc::Receiver<ImageMsg>,
}

impl ImagesState {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            textures: HashMap::new(),
            loading: HashSet::new(),
            failed: HashSet::new(),
            tx,
            rx,
        }
    }

    pub fn texture_for(&self, source: &ImageSource) -> Option<&egui::TextureHandle> {
        self.textures.get(&source.key())
    }
}
