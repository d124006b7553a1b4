// SPDX-License-Identifier: MPL-2.0
//! Domain layer - content types, form rules and notices.
//!
//! Nothing here performs I/O. Types are plain data plus the validation
//! rules that apply to them.
//!
//! # Modules
//!
//! - [`auth`]: Admin login credentials ([`Credentials`](auth::Credentials))
//! - [`contact`]: Contact form and message body ([`ContactForm`](contact::ContactForm))
//! - [`content`]: Site records, admin forms and demo posts
//!   ([`Entry`](content::Entry), [`BlogPost`](content::BlogPost))
//! - [`notice`]: Translatable notifications ([`Notice`](notice::Notice))
//! - [`validation`]: Shared field checks

pub mod auth;
pub mod contact;
pub mod content;
pub mod notice;
pub mod validation;
