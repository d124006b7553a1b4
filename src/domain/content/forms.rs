// SPDX-License-Identifier: MPL-2.0
//! Editable admin forms and their conversion to records.
//!
//! Forms hold what the admin typed: plain strings, list columns as one
//! comma-separated string, counters as numbers. Converting a form back to
//! a record turns empty strings into `None` and enforces required fields.

use super::records::{
    AboutContent, BlogPost, ContactInfo, HeroContent, Project, Service, SiteSettings,
};
use crate::config::DEFAULT_READ_TIME_MINUTES;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

/// A form that cannot be turned into a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// The named field is required but empty.
    MissingRequired(&'static str),
}

impl FormError {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        "admin.notice.requiredFields"
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingRequired(field) => write!(f, "Missing required field: {field}"),
        }
    }
}

impl std::error::Error for FormError {}

// =============================================================================
// Field Helpers
// =============================================================================

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingRequired(field))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn shown(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Splits a comma-separated list, trimming items and dropping empty ones.
fn split_list(value: &str) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

fn join_list(items: Option<&Vec<String>>) -> String {
    items.map(|items| items.join(", ")).unwrap_or_default()
}

fn non_zero(value: u32) -> Option<u32> {
    (value != 0).then_some(value)
}

/// URL slug of a title: lowercased, whitespace runs replaced by `-`.
#[must_use]
pub fn slugify(title: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

// =============================================================================
// Single-Row Forms
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroForm {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub profile_image_url: String,
}

impl HeroForm {
    #[must_use]
    pub fn from_record(record: &HeroContent) -> Self {
        Self {
            title: record.title.clone(),
            subtitle: shown(record.subtitle.as_ref()),
            description: shown(record.description.as_ref()),
            profile_image_url: shown(record.profile_image_url.as_ref()),
        }
    }

    /// # Errors
    ///
    /// Fails when the title is empty.
    pub fn to_record(&self) -> Result<HeroContent, FormError> {
        Ok(HeroContent {
            title: required("title", &self.title)?,
            subtitle: optional(&self.subtitle),
            description: optional(&self.description),
            profile_image_url: optional(&self.profile_image_url),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutForm {
    pub title: String,
    pub description: String,
    pub skills: String,
    pub experience_years: u32,
    pub projects_count: u32,
}

impl AboutForm {
    #[must_use]
    pub fn from_record(record: &AboutContent) -> Self {
        Self {
            title: record.title.clone(),
            description: shown(record.description.as_ref()),
            skills: join_list(record.skills.as_ref()),
            experience_years: record.experience_years.unwrap_or_default(),
            projects_count: record.projects_count.unwrap_or_default(),
        }
    }

    /// Zero counters are stored as empty.
    ///
    /// # Errors
    ///
    /// Fails when the title is empty.
    pub fn to_record(&self) -> Result<AboutContent, FormError> {
        Ok(AboutContent {
            title: required("title", &self.title)?,
            description: optional(&self.description),
            skills: split_list(&self.skills),
            experience_years: non_zero(self.experience_years),
            projects_count: non_zero(self.projects_count),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfoForm {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub whatsapp: String,
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
}

impl ContactInfoForm {
    #[must_use]
    pub fn from_record(record: &ContactInfo) -> Self {
        Self {
            email: shown(record.email.as_ref()),
            phone: shown(record.phone.as_ref()),
            address: shown(record.address.as_ref()),
            whatsapp: shown(record.whatsapp.as_ref()),
            twitter: shown(record.twitter.as_ref()),
            linkedin: shown(record.linkedin.as_ref()),
            github: shown(record.github.as_ref()),
        }
    }

    #[must_use]
    pub fn to_record(&self) -> ContactInfo {
        ContactInfo {
            email: optional(&self.email),
            phone: optional(&self.phone),
            address: optional(&self.address),
            whatsapp: optional(&self.whatsapp),
            twitter: optional(&self.twitter),
            linkedin: optional(&self.linkedin),
            github: optional(&self.github),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSettingsForm {
    pub site_name: String,
    pub logo_url: String,
    pub favicon_url: String,
    pub primary_color: String,
    pub secondary_color: String,
}

impl SiteSettingsForm {
    #[must_use]
    pub fn from_record(record: &SiteSettings) -> Self {
        Self {
            site_name: shown(record.site_name.as_ref()),
            logo_url: shown(record.logo_url.as_ref()),
            favicon_url: shown(record.favicon_url.as_ref()),
            primary_color: shown(record.primary_color.as_ref()),
            secondary_color: shown(record.secondary_color.as_ref()),
        }
    }

    #[must_use]
    pub fn to_record(&self) -> SiteSettings {
        SiteSettings {
            site_name: optional(&self.site_name),
            logo_url: optional(&self.logo_url),
            favicon_url: optional(&self.favicon_url),
            primary_color: optional(&self.primary_color),
            secondary_color: optional(&self.secondary_color),
        }
    }
}

// =============================================================================
// Ordered List Forms
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub demo_images: String,
    pub technologies: String,
    pub project_url: String,
    pub sort_order: i32,
}

impl ProjectForm {
    #[must_use]
    pub fn from_record(record: &Project) -> Self {
        Self {
            title: record.title.clone(),
            description: shown(record.description.as_ref()),
            category: shown(record.category.as_ref()),
            image_url: shown(record.image_url.as_ref()),
            demo_images: join_list(record.demo_images.as_ref()),
            technologies: join_list(record.technologies.as_ref()),
            project_url: shown(record.project_url.as_ref()),
            sort_order: record.sort_order,
        }
    }

    /// # Errors
    ///
    /// Fails when the title is empty.
    pub fn to_record(&self) -> Result<Project, FormError> {
        Ok(Project {
            title: required("title", &self.title)?,
            description: optional(&self.description),
            category: optional(&self.category),
            image_url: optional(&self.image_url),
            demo_images: split_list(&self.demo_images),
            technologies: split_list(&self.technologies),
            project_url: optional(&self.project_url),
            sort_order: self.sort_order,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub sort_order: i32,
}

impl ServiceForm {
    #[must_use]
    pub fn from_record(record: &Service) -> Self {
        Self {
            title: record.title.clone(),
            description: shown(record.description.as_ref()),
            icon: shown(record.icon.as_ref()),
            sort_order: record.sort_order,
        }
    }

    /// # Errors
    ///
    /// Fails when the title is empty.
    pub fn to_record(&self) -> Result<Service, FormError> {
        Ok(Service {
            title: required("title", &self.title)?,
            description: optional(&self.description),
            icon: optional(&self.icon),
            sort_order: self.sort_order,
        })
    }
}

/// Blog editor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogForm {
    pub title: String,
    pub title_ar: String,
    pub slug: String,
    pub content: String,
    pub content_ar: String,
    pub excerpt: String,
    pub excerpt_ar: String,
    pub cover_image: String,
    pub category: String,
    pub tags: String,
    pub published: bool,
    pub read_time: u32,
}

impl Default for BlogForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_ar: String::new(),
            slug: String::new(),
            content: String::new(),
            content_ar: String::new(),
            excerpt: String::new(),
            excerpt_ar: String::new(),
            cover_image: String::new(),
            category: String::new(),
            tags: String::new(),
            published: false,
            read_time: DEFAULT_READ_TIME_MINUTES,
        }
    }
}

impl BlogForm {
    #[must_use]
    pub fn from_record(record: &BlogPost) -> Self {
        Self {
            title: record.title.clone(),
            title_ar: shown(record.title_ar.as_ref()),
            slug: record.slug.clone(),
            content: record.content.clone(),
            content_ar: shown(record.content_ar.as_ref()),
            excerpt: shown(record.excerpt.as_ref()),
            excerpt_ar: shown(record.excerpt_ar.as_ref()),
            cover_image: shown(record.cover_image.as_ref()),
            category: shown(record.category.as_ref()),
            tags: join_list(record.tags.as_ref()),
            published: record.published,
            read_time: record.read_time.unwrap_or(DEFAULT_READ_TIME_MINUTES),
        }
    }

    /// Builds the post as saved at `now`.
    ///
    /// An empty slug is derived from the title. A published post is stamped
    /// with `now`, an unpublished one loses its publication date.
    ///
    /// # Errors
    ///
    /// Fails when the title or the content is empty.
    pub fn to_record(&self, now: DateTime<Utc>) -> Result<BlogPost, FormError> {
        let title = required("title", &self.title)?;
        let content = required("content", &self.content)?;
        let slug = if self.slug.trim().is_empty() {
            slugify(&title)
        } else {
            self.slug.clone()
        };
        Ok(BlogPost {
            title,
            title_ar: optional(&self.title_ar),
            slug,
            content,
            content_ar: optional(&self.content_ar),
            excerpt: optional(&self.excerpt),
            excerpt_ar: optional(&self.excerpt_ar),
            cover_image: optional(&self.cover_image),
            category: optional(&self.category),
            tags: split_list(&self.tags),
            published: self.published,
            published_at: self.published.then_some(now),
            read_time: Some(self.read_time),
            sort_order: None,
        })
    }
}
