//! View list printing.

use anyhow::Result;

use catalog_core::CardView;

use super::ListArgs;
use crate::context::Context;
use crate::output::terminal_text;

pub const NO_RESULTS_MESSAGE: &str = "No se encontraron productos";

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let criteria = args.filter.criteria(&ctx.config.defaults);
    let store = ctx.load_catalog(criteria).await?;

    if ctx.output.is_json() {
        ctx.output.json(&store.view());
        return Ok(());
    }

    ctx.output.header(&format!(
        "Catálogo ({} de {} productos)",
        store.view().len(),
        store.len()
    ));

    let criteria = store.criteria();
    if !criteria.search_term.is_empty() {
        ctx.output.kv("Búsqueda", &terminal_text(&criteria.search_term));
    }
    if !criteria.category.is_empty() {
        ctx.output.kv("Categoría", &terminal_text(&criteria.category));
    }
    ctx.output.kv("Orden", criteria.sort_order.display_name());
    println!();

    if store.view().is_empty() {
        ctx.output.info(NO_RESULTS_MESSAGE);
        return Ok(());
    }

    for card in CardView::from_view(store.view()) {
        ctx.output.card(&card);
    }

    Ok(())
}
