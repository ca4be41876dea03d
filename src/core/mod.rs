//! Browser-independent page model: static content, navigation state and
//! the scroll/visibility logic behind the animations

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;

mod content;
mod navigation;
mod scroll;
pub mod seo;
#[cfg(test)]
mod tests;
mod visibility;

pub use content::*;
pub use navigation::*;
pub use scroll::*;
pub use visibility::*;

