//! Common building blocks shared by the page sections

pub mod badge;
pub mod button;
pub mod section_title;

pub use badge::{Badge, BadgeVariant};
pub use button::{ExternalLink, LinkSize, LinkVariant};
pub use section_title::SectionTitle;
