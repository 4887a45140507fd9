// Footer action links: presence of a URL decides presence of a button.
// The plan is computed separately from drawing so it stays testable.

use eframe::egui::{self, RichText};
use url::Url;

use crate::app::nav;
use crate::profile::ProjectEntry;
use crate::ui_constants::card::ACTION_BUTTON_SIZE;

/// What an action button does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Open the live project page
    External,
    /// Open the source repository
    Source,
}

impl ActionKind {
    fn glyph(&self) -> char {
        match self {
            ActionKind::External => '🌐',
            ActionKind::Source => egui::special_emojis::GITHUB,
        }
    }
}

/// Footer plan for one entry: external link first, then source link.
/// Absent URLs contribute nothing; an entry with neither gets an empty row.
pub fn action_links(entry: &ProjectEntry) -> Vec<(ActionKind, &Url)> {
    let mut links = Vec::new();
    if let Some(url) = &entry.external_url {
        links.push((ActionKind::External, url));
    }
    if let Some(url) = &entry.source_url {
        links.push((ActionKind::Source, url));
    }
    links
}

pub fn draw_action_row(ui: &mut egui::Ui, entry: &ProjectEntry) {
    let links = action_links(entry);
    if links.is_empty() {
        return;
    }
    ui.horizontal(|ui| {
        for (kind, url) in links {
            let button = egui::Button::new(RichText::new(kind.glyph().to_string()).size(16.0))
                .min_size(egui::vec2(ACTION_BUTTON_SIZE, ACTION_BUTTON_SIZE));
            let resp = ui
                .add(button)
                .on_hover_text(url.as_str())
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if resp.clicked() {
                log::info!("open {kind:?} link: {url}");
                nav::open_in_browser(url.as_str());
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(external: Option<&str>, source: Option<&str>) -> ProjectEntry {
        ProjectEntry {
            title: "X".to_string(),
            description: "Y".to_string(),
            external_url: external.map(|u| Url::parse(u).unwrap()),
            source_url: source.map(|u| Url::parse(u).unwrap()),
            logo: None,
        }
    }

    #[test]
    fn buttons_follow_url_presence() {
        assert_eq!(action_links(&entry(None, None)).len(), 0);
        assert_eq!(action_links(&entry(Some("https://x.example"), None)).len(), 1);
        assert_eq!(
            action_links(&entry(None, Some("https://github.com/x/y"))).len(),
            1
        );
        assert_eq!(
            action_links(&entry(
                Some("https://x.example"),
                Some("https://github.com/x/y")
            ))
            .len(),
            2
        );
    }

    #[test]
    fn external_link_comes_before_source() {
        let e = entry(Some("https://x.example"), Some("https://github.com/x/y"));
        let links = action_links(&e);
        assert_eq!(links[0].0, ActionKind::External);
        assert_eq!(links[1].0, ActionKind::Source);
    }

    #[test]
    fn planning_is_idempotent() {
        let e = entry(Some("https://x.example"), None);
        let once: Vec<_> = action_links(&e)
            .iter()
            .map(|(k, u)| (*k, u.as_str().to_string()))
            .collect();
        let twice: Vec<_> = action_links(&e)
            .iter()
            .map(|(k, u)| (*k, u.as_str().to_string()))
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn spec_scenario_single_external_link() {
        let e = entry(Some("https://x.example"), None);
        let links = action_links(&e);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].0, ActionKind::External);
        assert_eq!(links[0].1.as_str(), "https://x.example/");
        assert!(e.logo.is_none());
    }
}
