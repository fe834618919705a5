//! Write a product to the selection slot.

use anyhow::{bail, Result};
use dialoguer::Select;

use catalog_core::{CardView, Product, ProductStore};

use super::SelectArgs;
use crate::context::Context;
use crate::output::terminal_text;

/// Run the select command.
pub async fn run(args: SelectArgs, ctx: &Context) -> Result<()> {
    let criteria = args.filter.criteria(&ctx.config.defaults);
    let catalog = ctx.load_catalog(criteria).await?;

    let product = match args.id {
        Some(id) => match catalog.find(id) {
            Some(product) => product,
            None => bail!("Producto no encontrado: {}", id),
        },
        None => {
            if ctx.output.is_json() {
                bail!("A product id is required with --json");
            }
            match pick(&catalog)? {
                Some(product) => product,
                None => {
                    ctx.output.warn("Selection cancelled");
                    return Ok(());
                }
            }
        }
    };

    let store = ctx.open_store()?;
    ctx.selection(&store).select(product)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
    } else {
        ctx.output
            .success(&format!("Selected #{} {}", product.id, terminal_text(&product.title)));
        ctx.output.info("Run `catalog show` to see the details.");
    }

    Ok(())
}

/// Interactive picker over the current view list.
fn pick(catalog: &ProductStore) -> Result<Option<&Product>> {
    let view = catalog.view();
    if view.is_empty() {
        bail!("No se encontraron productos");
    }

    let items: Vec<String> = CardView::from_view(view)
        .iter()
        .map(|card| terminal_text(&format!("{} - ${} ({})", card.title, card.price, card.category)))
        .collect();

    let choice = Select::new()
        .with_prompt("Select a product")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(choice.and_then(|index| view.get(index)))
}
