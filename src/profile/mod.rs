// Content model: the page is a static document authored once and rendered
// as-is. The default profile is compiled in; a profile.json next to the
// executable overrides it when present and valid.

use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;
use url::Url;

use crate::icons::IconId;

const EMBEDDED_PROFILE: &str = include_str!("profile.json");

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("owner name is empty")]
    EmptyOwner,

    #[error("project #{index} has an empty {field}")]
    EmptyProjectField { index: usize, field: &'static str },

    #[error("contact #{index} has an empty label")]
    EmptyContactLabel { index: usize },

    #[error("empty image source")]
    EmptyImageSource,

    #[error("invalid url {raw:?}: {source}")]
    BadUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed profile: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where an image comes from. Remote URLs and bundled asset paths are
/// carried as-is; the image pipeline treats both as opaque keyed sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Remote(Url),
    Bundled(PathBuf),
}

impl ImageSource {
    pub fn parse(raw: &str) -> Result<Self, ProfileError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ProfileError::EmptyImageSource);
        }
        if raw.starts_with("http://") || raw.starts_with("https://") {
            let url = Url::parse(raw).map_err(|e| ProfileError::BadUrl {
                raw: raw.to_string(),
                source: e,
            })?;
            Ok(ImageSource::Remote(url))
        } else {
            Ok(ImageSource::Bundled(PathBuf::from(raw)))
        }
    }

    /// Stable key used to dedupe loads and name textures.
    pub fn key(&self) -> String {
        match self {
            ImageSource::Remote(url) => url.as_str().to_string(),
            ImageSource::Bundled(path) => path.to_string_lossy().into_owned(),
        }
    }
}

impl<'de> Deserialize<'de> for ImageSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ImageSource::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub external_url: Option<Url>,
    #[serde(default)]
    pub source_url: Option<Url>,
    #[serde(default)]
    pub logo: Option<ImageSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    pub target: Url,
    pub icon: IconId,
}

/// Lead-in text plus a hyperlink, rendered at the end of the bio section.
#[derive(Debug, Clone, Deserialize)]
pub struct Affiliation {
    pub text: String,
    pub label: String,
    pub url: Url,
}

fn default_about_title() -> String {
    "About".to_string()
}

fn default_projects_title() -> String {
    "Projects".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub owner: String,
    #[serde(default)]
    pub tagline: String,
    pub avatar: ImageSource,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub affiliation: Option<Affiliation>,
    #[serde(default = "default_about_title")]
    pub about_title: String,
    #[serde(default = "default_projects_title")]
    pub projects_title: String,
    #[serde(default)]
    pub contacts: Vec<ContactEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

/// One content unit of the page: rendered as a card or an icon-button.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    Project(&'a ProjectEntry),
    Contact(&'a ContactEntry),
}

impl Profile {
    /// Read-only iteration over everything the page renders, in page order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.projects
            .iter()
            .map(Entry::Project)
            .chain(self.contacts.iter().map(Entry::Contact))
    }

    /// Every image the page may need: the avatar plus any project logos.
    pub fn image_sources(&self) -> impl Iterator<Item = &ImageSource> {
        std::iter::once(&self.avatar)
            .chain(self.projects.iter().filter_map(|p| p.logo.as_ref()))
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.owner.trim().is_empty() {
            return Err(ProfileError::EmptyOwner);
        }
        for (index, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(ProfileError::EmptyProjectField {
                    index,
                    field: "title",
                });
            }
            if project.description.trim().is_empty() {
                return Err(ProfileError::EmptyProjectField {
                    index,
                    field: "description",
                });
            }
        }
        for (index, contact) in self.contacts.iter().enumerate() {
            if contact.label.trim().is_empty() {
                return Err(ProfileError::EmptyContactLabel { index });
            }
        }
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ProfileError> {
        let data = std::fs::read_to_string(path)?;
        let profile: Profile = serde_json::from_str(&data)?;
        profile.validate()?;
        Ok(profile)
    }
}

fn embedded_profile() -> Profile {
    let profile: Profile =
        serde_json::from_str(EMBEDDED_PROFILE).expect("Failed to parse embedded profile.json");
    profile
        .validate()
        .expect("Embedded profile.json violates content invariants");
    profile
}

lazy_static! {
    pub static ref PROFILE: RwLock<Profile> = RwLock::new(embedded_profile());
}

fn profile_file_path() -> PathBuf {
    // Next to the executable's working directory, same as the log file
    PathBuf::from("profile.json")
}

/// Replace the embedded content with an on-disk override, if one exists
/// and passes validation. Invalid overrides are ignored with an error log.
pub fn load_profile_from_disk() {
    let path = profile_file_path();
    if !path.exists() {
        log::info!("Using embedded profile; no {} override", path.display());
        return;
    }
    match Profile::load_from_file(&path) {
        Ok(profile) => {
            *PROFILE.write().unwrap() = profile;
            log::info!("Loaded profile from {}", path.display());
        }
        Err(e) => {
            log::error!("Ignoring {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_profile_parses_and_validates() {
        let profile = embedded_profile();
        assert!(!profile.projects.is_empty());
        assert!(!profile.contacts.is_empty());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn entries_iterate_projects_then_contacts_in_order() {
        let profile = embedded_profile();
        let entries: Vec<Entry<'_>> = profile.entries().collect();
        assert_eq!(
            entries.len(),
            profile.projects.len() + profile.contacts.len()
        );
        match entries[0] {
            Entry::Project(p) => assert_eq!(p.title, profile.projects[0].title),
            Entry::Contact(_) => panic!("projects come first"),
        }
        match entries[entries.len() - 1] {
            Entry::Contact(c) => {
                assert_eq!(c.label, profile.contacts[profile.contacts.len() - 1].label)
            }
            Entry::Project(_) => panic!("contacts come last"),
        }
    }

    #[test]
    fn image_sources_start_with_avatar() {
        let profile = embedded_profile();
        let first = profile.image_sources().next().unwrap();
        assert_eq!(first, &profile.avatar);
    }

    #[test]
    fn image_source_routes_on_scheme() {
        match ImageSource::parse("https://example.com/a.png").unwrap() {
            ImageSource::Remote(url) => assert_eq!(url.as_str(), "https://example.com/a.png"),
            other => panic!("expected remote, got {other:?}"),
        }
        match ImageSource::parse("logos/biocon.png").unwrap() {
            ImageSource::Bundled(path) => assert_eq!(path, PathBuf::from("logos/biocon.png")),
            other => panic!("expected bundled, got {other:?}"),
        }
        assert!(ImageSource::parse("   ").is_err());
    }

    #[test]
    fn image_source_key_is_stable() {
        let a = ImageSource::parse("https://example.com/a.png").unwrap();
        assert_eq!(a.key(), a.key());
        let b = ImageSource::parse("logos/a.png").unwrap();
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut profile = embedded_profile();
        profile.projects[0].title = "  ".to_string();
        match profile.validate() {
            Err(ProfileError::EmptyProjectField { index: 0, field }) => {
                assert_eq!(field, "title")
            }
            other => panic!("expected empty-title error, got {other:?}"),
        }
    }

    #[test]
    fn empty_description_is_rejected() {
        let mut profile = embedded_profile();
        profile.projects[0].description = String::new();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn malformed_url_fails_to_deserialize() {
        let json = r#"{
            "owner": "X",
            "avatar": "https://example.com/a.png",
            "projects": [{
                "title": "T",
                "description": "D",
                "external_url": "definitely not a url"
            }]
        }"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }

    #[test]
    fn mailto_targets_are_valid_urls() {
        let json = r#"{
            "owner": "X",
            "avatar": "https://example.com/a.png",
            "contacts": [{
                "label": "Email",
                "target": "mailto:someone@example.com",
                "icon": "email"
            }]
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.contacts[0].target.scheme(), "mailto");
    }
}
