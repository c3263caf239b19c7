//! # codewalk site
//!
//! Assembles segmented, rendered source files into `Example` records and
//! writes the static site: one page per example, an index page, and the
//! passthrough assets (stylesheet, icon, error page).

mod assemble;
mod error;
mod example;
mod render;

pub use assemble::Assembler;
pub use error::{Result, SiteError};
pub use example::{parse_example_list, slug, Example, ExampleRef};
pub use render::{copy_static_assets, ensure_dir, write_example_pages, write_index};
