// SPDX-License-Identifier: MPL-2.0
//! Locale-aware presentation of blog posts.

use crate::config::DEFAULT_READ_TIME_MINUTES;
use crate::domain::content::{BlogPost, Entry};
use crate::i18n::{Locale, Translator};
use chrono::{DateTime, Datelike, Utc};

/// Long-form date: "January 15, 2024" in English, "١٥ يناير ٢٠٢٤" in Arabic.
///
/// Month names come from the `date.month.N` keys. No date gives an empty
/// string.
#[must_use]
pub fn format_date(tr: Translator<'_>, date: Option<DateTime<Utc>>) -> String {
    let Some(date) = date else {
        return String::new();
    };
    let month_key = format!("date.month.{}", date.month());
    let month = tr.tr(&month_key);
    match tr.locale() {
        Locale::En => format!("{month} {}, {}", date.day(), date.year()),
        Locale::Ar => arabic_indic_digits(&format!("{} {month} {}", date.day(), date.year())),
    }
}

/// Replaces ASCII digits with Arabic-Indic ones (U+0660..U+0669).
fn arabic_indic_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| char::from_u32(0x0660 + d))
                .unwrap_or(c)
        })
        .collect()
}

/// "8 min read", falling back to the default read time.
#[must_use]
pub fn read_time_label(tr: Translator<'_>, minutes: Option<u32>) -> String {
    let minutes = minutes.unwrap_or(DEFAULT_READ_TIME_MINUTES);
    format!("{minutes} {}", tr.tr("blog.minRead"))
}

/// A post as shown in the public listing, resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub date: String,
    pub read_time: String,
    pub cover_image: Option<String>,
}

impl PostCard {
    #[must_use]
    pub fn new(entry: &Entry<BlogPost>, tr: Translator<'_>) -> Self {
        let post = &entry.fields;
        let locale = tr.locale();
        Self {
            id: entry.id.clone(),
            slug: post.slug.clone(),
            title: post.title_for(locale).to_string(),
            excerpt: post.excerpt_for(locale).map(str::to_string),
            category: post.category.clone(),
            tags: post.tags.clone().unwrap_or_default(),
            date: format_date(tr, post.published_at),
            read_time: read_time_label(tr, post.read_time),
            cover_image: post.cover_image.clone(),
        }
    }
}
