//! Text rendering of a [`ScreenState`].

use crate::screen::{Phase, ScreenState};
use rust_decimal::Decimal;
use std::fmt::Write;

/// Draws the whole screen. `currency` prefixes every amount (e.g. `R$`).
pub fn render(state: &ScreenState, currency: &str) -> String {
    let mut out = String::new();

    if state.phase == Phase::Loading {
        out.push_str("Loading...\n");
        return out;
    }

    // writeln! into a String cannot fail.
    let _ = write_screen(&mut out, state, currency);
    out
}

fn money(currency: &str, amount: Decimal) -> String {
    format!("{} {:.2}", currency, amount)
}

fn control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}]", label)
    } else {
        format!("[{} (disabled)]", label)
    }
}

fn write_screen(out: &mut String, state: &ScreenState, currency: &str) -> std::fmt::Result {
    if let Some(notice) = state.notice {
        let marker = if notice.is_error() { "!" } else { "*" };
        writeln!(out, "{} {}", marker, notice)?;
        writeln!(out)?;
    }

    writeln!(out, "== New Order ==")?;
    writeln!(out, "Products:")?;
    if state.products.is_empty() {
        writeln!(out, "  (none available)")?;
    }
    for product in &state.products {
        let marker = if state.draft.selected_product == Some(product.id) {
            ">"
        } else {
            " "
        };
        writeln!(
            out,
            " {} {:>4}  {} - {}",
            marker,
            product.id.to_string(),
            product.name,
            money(currency, product.price)
        )?;
    }
    writeln!(out, "Quantity: {}", state.draft.quantity)?;
    writeln!(out, "{}", control("Add Item", state.can_add()))?;
    writeln!(out)?;

    writeln!(out, "Order Items:")?;
    writeln!(
        out,
        "  {:<24} {:>5} {:>14} {:>14}",
        "Product", "Qty", "Unit Price", "Total"
    )?;
    for item in &state.draft.items {
        writeln!(
            out,
            "  {:<24} {:>5} {:>14} {:>14}",
            item.product_name,
            item.quantity,
            money(currency, item.unit_price),
            money(currency, item.total_price)
        )?;
    }
    writeln!(
        out,
        "  {:<45} {:>14}",
        "Order Total:",
        money(currency, state.draft.total())
    )?;
    let submit_label = if state.submitting {
        "Submitting..."
    } else {
        "Submit Order"
    };
    writeln!(out, "{}", control(submit_label, state.can_submit()))?;
    writeln!(out)?;

    writeln!(out, "== Orders ==")?;
    writeln!(
        out,
        "  {:<6} {:<12} {:>14} {:>12}",
        "ID", "Date", "Total", "Status"
    )?;
    for order in &state.orders {
        writeln!(
            out,
            "  {:<6} {:<12} {:>14} {:>12}",
            order.id.to_string(),
            order.order_date.format("%Y-%m-%d").to_string(),
            money(currency, order.total_amount),
            order.status.to_string()
        )?;
    }

    Ok(())
}
