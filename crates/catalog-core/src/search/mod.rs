//! Search module.
//!
//! Contains the view criteria and the pure engine that derives a view list
//! from a catalog snapshot.

mod categories;
mod criteria;
mod engine;

pub use categories::{category_label, distinct_categories};
pub use criteria::{SortOrder, ViewCriteria};
pub use engine::{compare_titles, derive};
