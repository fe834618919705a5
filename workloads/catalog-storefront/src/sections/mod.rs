//! Section renderers for the catalog and details pages.

mod cards;
mod controls;
mod detail;
mod layout;

pub use cards::*;
pub use controls::*;
pub use detail::*;
pub use layout::*;
