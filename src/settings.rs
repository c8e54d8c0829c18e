//! Site settings record and derived social links.

use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::ShellError;

const TWITTER_BASE: &str = "https://twitter.com/";
const FACEBOOK_BASE: &str = "https://www.facebook.com/";
const DEFAULT_LANG: &str = "en";

/// Site wide settings supplied once per build.
///
/// Field names follow the Ghost settings API so an exported settings
/// document can be loaded without translation. Optional text fields holding
/// an empty string are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteSettings {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default = "default_lang", deserialize_with = "lang_or_default")]
    pub lang: String,

    #[serde(default, deserialize_with = "non_blank")]
    pub logo: Option<String>,

    #[serde(default, deserialize_with = "non_blank")]
    pub cover_image: Option<String>,

    #[serde(default, deserialize_with = "non_blank")]
    pub twitter: Option<String>,

    #[serde(default, deserialize_with = "non_blank")]
    pub facebook: Option<String>,

    /// Custom CSS injected verbatim into the document head.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub codeinjection_styles: String,

    pub navigation: Vec<NavigationItem>,
}

/// Single navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    pub url: String,
}

impl NavigationItem {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

impl SiteSettings {
    /// Parses settings from a JSON document.
    ///
    /// Accepts either a bare settings object or the Ghost API envelope
    /// `{"settings": {...}}`. The result is not validated; call
    /// [`SiteSettings::validate`] or let the page shell do it.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Parse`] if the document is malformed or lacks
    /// the `navigation` list.
    pub fn from_json(json: &str) -> Result<Self, ShellError> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;

        if value.get("settings").is_some_and(serde_json::Value::is_object) {
            debug!("Unwrapping settings envelope");
            value = value["settings"].take();
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Reads, parses and validates a settings file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, cannot be parsed, or
    /// violates a required field precondition.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShellError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ShellError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_json(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::MissingField`] for a blank title or description
    /// and [`ShellError::InvalidNavigation`] for a navigation item with a
    /// blank label or URL.
    pub fn validate(&self) -> Result<(), ShellError> {
        if self.title.trim().is_empty() {
            return Err(ShellError::missing("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ShellError::missing("description"));
        }

        for (index, item) in self.navigation.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(ShellError::InvalidNavigation {
                    index,
                    reason: "label is empty",
                });
            }
            if item.url.trim().is_empty() {
                return Err(ShellError::InvalidNavigation {
                    index,
                    reason: "url is empty",
                });
            }
        }

        Ok(())
    }

    /// Twitter profile URL, with a single leading `@` removed from the handle.
    pub fn twitter_url(&self) -> Option<String> {
        self.twitter.as_deref().map(|handle| {
            let handle = handle.strip_prefix('@').unwrap_or(handle);
            format!("{}{}", TWITTER_BASE, handle)
        })
    }

    /// Facebook page URL, with a single leading `/` removed from the handle.
    pub fn facebook_url(&self) -> Option<String> {
        self.facebook.as_deref().map(|handle| {
            let handle = handle.strip_prefix('/').unwrap_or(handle);
            format!("{}{}", FACEBOOK_BASE, handle)
        })
    }
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn lang_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_blank(deserializer)?.unwrap_or_else(default_lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_handles(twitter: Option<&str>, facebook: Option<&str>) -> SiteSettings {
        SiteSettings {
            title: "Blog".to_string(),
            description: "A blog".to_string(),
            lang: "en".to_string(),
            logo: None,
            cover_image: None,
            twitter: twitter.map(String::from),
            facebook: facebook.map(String::from),
            codeinjection_styles: String::new(),
            navigation: vec![],
        }
    }

    #[test]
    fn test_twitter_url_strips_leading_at() {
        // Arrange
        let settings = settings_with_handles(Some("@foo"), None);

        // Act
        let url = settings.twitter_url();

        // Assert
        assert_eq!(url.as_deref(), Some("https://twitter.com/foo"));
    }

    #[test]
    fn test_twitter_url_strips_only_one_at() {
        // Arrange
        let settings = settings_with_handles(Some("@@foo"), None);

        // Act & Assert
        assert_eq!(
            settings.twitter_url().as_deref(),
            Some("https://twitter.com/@foo"),
            "Only the first @ should be removed"
        );
    }

    #[test]
    fn test_twitter_url_without_at() {
        // Arrange
        let settings = settings_with_handles(Some("foo"), None);

        // Act & Assert
        assert_eq!(
            settings.twitter_url().as_deref(),
            Some("https://twitter.com/foo")
        );
    }

    #[test]
    fn test_facebook_url_strips_leading_slash() {
        // Arrange
        let settings = settings_with_handles(None, Some("/bar"));

        // Act
        let url = settings.facebook_url();

        // Assert
        assert_eq!(url.as_deref(), Some("https://www.facebook.com/bar"));
    }

    #[test]
    fn test_facebook_url_strips_only_one_slash() {
        // Arrange
        let settings = settings_with_handles(None, Some("//bar"));

        // Act & Assert
        assert_eq!(
            settings.facebook_url().as_deref(),
            Some("https://www.facebook.com//bar"),
            "Only the first slash should be removed"
        );
    }

    #[test]
    fn test_absent_handles_produce_no_urls() {
        // Arrange
        let settings = settings_with_handles(None, None);

        // Act & Assert
        assert!(settings.twitter_url().is_none());
        assert!(settings.facebook_url().is_none());
    }

    #[test]
    fn test_from_json_ghost_field_names() {
        // Arrange
        let json = r#"{
            "title": "Blog",
            "description": "A blog",
            "lang": "fr",
            "logo": "https://cdn.example.com/logo.png",
            "twitter": "@me",
            "facebook": null,
            "codeinjection_styles": ".x { color: red; }",
            "navigation": [{"label": "About", "url": "/about"}]
        }"#;

        // Act
        let settings = SiteSettings::from_json(json).expect("Should parse settings");

        // Assert
        assert_eq!(settings.title, "Blog");
        assert_eq!(settings.lang, "fr");
        assert_eq!(
            settings.logo.as_deref(),
            Some("https://cdn.example.com/logo.png")
        );
        assert_eq!(settings.twitter.as_deref(), Some("@me"));
        assert!(settings.facebook.is_none());
        assert_eq!(settings.codeinjection_styles, ".x { color: red; }");
        assert_eq!(settings.navigation, vec![NavigationItem::new("About", "/about")]);
    }

    #[test]
    fn test_from_json_unwraps_envelope() {
        // Arrange
        let json = r#"{"settings": {"title": "Blog", "description": "A blog", "navigation": []}}"#;

        // Act
        let settings = SiteSettings::from_json(json).expect("Should parse envelope");

        // Assert
        assert_eq!(settings.title, "Blog");
        assert!(settings.navigation.is_empty());
    }

    #[test]
    fn test_from_json_defaults() {
        // Arrange
        let json = r#"{
            "title": "Blog",
            "description": "A blog",
            "lang": "",
            "logo": "",
            "codeinjection_styles": null,
            "navigation": []
        }"#;

        // Act
        let settings = SiteSettings::from_json(json).expect("Should parse settings");

        // Assert
        assert_eq!(settings.lang, "en", "Blank lang should fall back to en");
        assert!(settings.logo.is_none(), "Blank logo should be absent");
        assert!(settings.codeinjection_styles.is_empty());
    }

    #[test]
    fn test_from_json_requires_navigation() {
        // Arrange
        let json = r#"{"title": "Blog", "description": "A blog"}"#;

        // Act
        let result = SiteSettings::from_json(json);

        // Assert
        assert!(matches!(result, Err(ShellError::Parse(_))));
    }

    #[test]
    fn test_validate_missing_title() {
        // Arrange
        let mut settings = settings_with_handles(None, None);
        settings.title = "  ".to_string();

        // Act
        let result = settings.validate();

        // Assert
        assert!(matches!(
            result,
            Err(ShellError::MissingField { field: "title" })
        ));
    }

    #[test]
    fn test_validate_missing_description() {
        // Arrange
        let mut settings = settings_with_handles(None, None);
        settings.description = String::new();

        // Act & Assert
        assert!(matches!(
            settings.validate(),
            Err(ShellError::MissingField {
                field: "description"
            })
        ));
    }

    #[test]
    fn test_validate_navigation_item() {
        // Arrange
        let mut settings = settings_with_handles(None, None);
        settings.navigation = vec![
            NavigationItem::new("Home", "/"),
            NavigationItem::new("About", ""),
        ];

        // Act & Assert
        assert!(matches!(
            settings.validate(),
            Err(ShellError::InvalidNavigation { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_accepts_optional_absence() {
        // Arrange
        let settings = settings_with_handles(None, None);

        // Act & Assert
        assert!(settings.validate().is_ok());
    }
}
