// SPDX-License-Identifier: MPL-2.0
//! Typed rows of the editable site content.
//!
//! Field names match the column names of the hosted database. Optional
//! columns are `Option`s and serialize as `null` when empty.

use crate::i18n::Locale;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Reads a nullable column as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A stored row: the backend-assigned id plus the record's columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: String,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Entry<T> {
    #[must_use]
    pub fn new(id: impl Into<String>, fields: T) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// Landing section: name, tagline and portrait.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub projects_count: Option<u32>,
}

/// A portfolio project card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub demo_images: Option<Vec<String>>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_order: i32,
}

/// Public contact channels shown in the footer and contact section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
}

/// A blog article with optional Arabic variants.
///
/// Every column defaults, so partial projections (the public listing does
/// not fetch `content`) still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub title: String,
    pub title_ar: Option<String>,
    pub slug: String,
    pub content: String,
    pub content_ar: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_ar: Option<String>,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub read_time: Option<u32>,
    pub sort_order: Option<i32>,
}

/// Picks the Arabic variant under `ar` when it is non-empty.
fn localized<'a>(locale: Locale, english: Option<&'a str>, arabic: Option<&'a str>) -> Option<&'a str> {
    match (locale, arabic) {
        (Locale::Ar, Some(text)) if !text.is_empty() => Some(text),
        _ => english,
    }
}

impl BlogPost {
    #[must_use]
    pub fn title_for(&self, locale: Locale) -> &str {
        localized(locale, Some(&self.title), self.title_ar.as_deref()).unwrap_or_default()
    }

    #[must_use]
    pub fn excerpt_for(&self, locale: Locale) -> Option<&str> {
        localized(locale, self.excerpt.as_deref(), self.excerpt_ar.as_deref())
    }

    #[must_use]
    pub fn content_for(&self, locale: Locale) -> &str {
        localized(locale, Some(&self.content), self.content_ar.as_deref()).unwrap_or_default()
    }
}
