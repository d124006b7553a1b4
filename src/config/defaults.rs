// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Locale**: Startup locale when nothing is persisted
//! - **Contact**: Chat handoff target
//! - **Content**: Blog listing and admin form defaults
//! - **Auth**: Login form rules

use crate::i18n::Locale;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when no valid choice is persisted.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// WhatsApp number (international format, digits only) receiving contact messages.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "967739266110";

/// Base of the WhatsApp click-to-chat link.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Subject used when the contact form leaves it blank.
pub const DEFAULT_CONTACT_SUBJECT: &str = "General Inquiry";

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Number of published posts shown on the public blog section.
pub const PUBLIC_BLOG_LIMIT: usize = 6;

/// Read time (minutes) pre-filled in a new blog post form.
pub const DEFAULT_READ_TIME_MINUTES: u32 = 5;

// ==========================================================================
// Auth Defaults
// ==========================================================================

/// Minimum admin password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Role name granting admin access.
pub const ADMIN_ROLE: &str = "admin";
