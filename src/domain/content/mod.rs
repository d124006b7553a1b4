// SPDX-License-Identifier: MPL-2.0
//! Editable site content: typed records, admin forms and demo posts.

pub mod demo;
pub mod forms;
pub mod records;

pub use demo::demo_posts;
pub use forms::{
    slugify, AboutForm, BlogForm, ContactInfoForm, FormError, HeroForm, ProjectForm,
    ServiceForm, SiteSettingsForm,
};
pub use records::{
    AboutContent, BlogPost, ContactInfo, Entry, HeroContent, Project, Service, SiteSettings,
};
