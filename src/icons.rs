use serde::Deserialize;

/// Icon identifiers for contact and action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, strum::EnumIter, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IconId {
    Github,
    Telegram,
    Email,
    Website,
}

impl IconId {
    /// Glyph drawn on the icon-button. The GitHub logo is baked into
    /// egui's default fonts; the rest are plain emoji the font covers.
    pub fn glyph(&self) -> char {
        match self {
            IconId::Github => eframe::egui::special_emojis::GITHUB,
            IconId::Telegram => '✈',
            IconId::Email => '✉',
            IconId::Website => '🌐',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IconId;
    use strum::IntoEnumIterator;

    #[test]
    fn every_icon_has_a_glyph() {
        for icon in IconId::iter() {
            assert!(!icon.glyph().is_whitespace(), "{icon} maps to whitespace");
        }
    }

    #[test]
    fn icons_deserialize_from_lowercase_names() {
        let icon: IconId = serde_json::from_str("\"github\"").unwrap();
        assert_eq!(icon, IconId::Github);
        let icon: IconId = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(icon, IconId::Email);
    }
}
