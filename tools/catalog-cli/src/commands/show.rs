//! Print the selected product.

use anyhow::Result;

use catalog_cache::Selection;

use crate::context::Context;

pub const NO_SELECTION_MESSAGE: &str = "No hay producto seleccionado";

/// Run the show command.
pub fn run(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let selection = ctx.selection(&store).read_selection()?;

    if let Selection::Corrupt = selection {
        ctx.output
            .debug("Selection slot held unreadable data and was cleared");
    }

    match selection.detail_view() {
        Some(view) if ctx.output.is_json() => ctx.output.json(&view),
        Some(view) => ctx.output.detail(&view),
        None if ctx.output.is_json() => ctx.output.json(&serde_json::Value::Null),
        None => ctx.output.info(NO_SELECTION_MESSAGE),
    }

    Ok(())
}
