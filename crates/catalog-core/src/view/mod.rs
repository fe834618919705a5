//! Display-ready view models.
//!
//! These types hold already-formatted fields and carry no markup. Turning them
//! into HTML is the renderer's job, which must pass every string through a
//! text-only channel.

mod card;
mod detail;
mod sanitize;

pub use card::{truncate_title, CardView, TITLE_MAX_CHARS};
pub use detail::{
    DetailView, FALLBACK_CATEGORY, FALLBACK_DESCRIPTION, FALLBACK_ID, FALLBACK_TITLE,
};
pub use sanitize::{is_valid_image_url, sanitize_number};
