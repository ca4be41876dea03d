//! Landing page sections, in page order

mod about;
mod benefits;
mod footer;
mod hero;
mod recruitment;
mod what_we_do;

pub use about::About;
pub use benefits::Benefits;
pub use footer::Footer;
pub use hero::Hero;
pub use recruitment::Recruitment;
pub use what_we_do::WhatWeDo;
