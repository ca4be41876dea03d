pub mod common;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod scroll;
pub mod sections;
pub mod visibility;

pub use icon::Icon;
pub use navbar::Navbar;
pub use pages::{LandingPage, NotFoundPage};
