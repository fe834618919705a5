//! Category listing.

use anyhow::Result;

use catalog_core::{category_label, ViewCriteria};

use crate::context::Context;
use crate::output::terminal_text;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let store = ctx.load_catalog(ViewCriteria::new()).await?;
    let categories = store.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categorías");
    for category in &categories {
        ctx.output
            .list_item(&terminal_text(&format!("{} ({})", category_label(category), category)));
    }

    Ok(())
}
