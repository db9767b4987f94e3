use crate::domain::catalog::Catalog;
use crate::domain::order::{lines_total, CompletedOrder, LedgerSession, OrderLedger, OrderLine};
use crate::money::format_amount;

// ============================================================================
// Screen Rendering
// ============================================================================

#[derive(Debug, Clone)]
pub struct ScreenOptions {
    pub currency_symbol: String,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
        }
    }
}

/// Move cursor to top-left and clear the terminal
pub const CLEAR: &str = "\x1B[H\x1B[0J";

/// The whole till screen as text
pub fn render_screen(session: &LedgerSession, options: &ScreenOptions) -> String {
    let mut out = String::new();

    out.push_str(&render_menu(session.catalog(), options));
    out.push('\n');
    out.push_str(&render_order(session.ledger(), options));
    out.push('\n');
    out.push_str(&render_last_order(session.ledger().last_completed(), options));

    out
}

pub fn render_menu(catalog: &Catalog, options: &ScreenOptions) -> String {
    let mut out = String::from("Menu\n");
    out.push_str(" id | item                     |    price\n");
    out.push_str(" -- | ------------------------ | --------\n");

    for item in catalog.items() {
        out.push_str(&format!(
            " {:>2} | {:<24} | {:>8}\n",
            item.id,
            item.name,
            format_amount(item.unit_price, &options.currency_symbol)
        ));
    }

    out
}

pub fn render_order(ledger: &OrderLedger, options: &ScreenOptions) -> String {
    let symbol = &options.currency_symbol;
    let mut out = String::from("Order\n");
    out.push_str(&render_lines(ledger.lines(), symbol));

    out.push_str(&format!("Total:    {}\n", format_amount(ledger.total(), symbol)));

    let tendered = match ledger.payment().tendered {
        Some(amount) => format_amount(amount, symbol),
        None => "-".to_string(),
    };
    out.push_str(&format!("Tendered: {}\n", tendered));
    out.push_str(&format!("Change:   {}\n", format_amount(ledger.display_change(), symbol)));

    out
}

pub fn render_last_order(order: Option<&CompletedOrder>, options: &ScreenOptions) -> String {
    let symbol = &options.currency_symbol;
    let mut out = String::from("Last order\n");

    let lines = order.map(|o| o.lines.as_slice()).unwrap_or(&[]);
    out.push_str(&render_lines(lines, symbol));
    out.push_str(&format!("Total:    {}\n", format_amount(lines_total(lines), symbol)));

    out
}

fn render_lines(lines: &[OrderLine], symbol: &str) -> String {
    if lines.is_empty() {
        return "  (no items)\n".to_string();
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(&format!(
            "  {:<24} | {:>8} | x{}\n",
            line.name,
            format_amount(line.subtotal(), symbol),
            line.quantity
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::domain::catalog::ItemId;

    fn session() -> LedgerSession {
        LedgerSession::new(Arc::new(Catalog::default_menu()))
    }

    #[test]
    fn test_menu_lists_every_item() {
        let screen = render_menu(&Catalog::default_menu(), &ScreenOptions::default());

        assert!(screen.contains("PIVO 0,3L"));
        assert!(screen.contains("BOROVNIČKE 0,03L"));
        assert!(screen.contains("€10.00"));
        assert_eq!(screen.lines().count(), 3 + 12);
    }

    #[test]
    fn test_menu_ids_are_right_aligned() {
        let screen = render_menu(&Catalog::default_menu(), &ScreenOptions::default());

        assert!(screen.contains("\n  1 | PIVO 0,3L "));
        assert!(screen.contains("\n 12 | BOROVNIČKE 0,03L "));
    }

    #[test]
    fn test_empty_screen() {
        let screen = render_screen(&session(), &ScreenOptions::default());

        assert!(screen.contains("Order\n  (no items)"));
        assert!(screen.contains("Last order\n  (no items)"));
        assert!(screen.contains("Tendered: -"));
        assert!(screen.contains("Change:   €0.00"));
    }

    #[test]
    fn test_order_lines_and_change() {
        let mut session = session();
        session.add_item(ItemId(1)).unwrap();
        session.add_item(ItemId(1)).unwrap();
        session.add_item(ItemId(3)).unwrap();
        session.record_payment("10").unwrap();

        let screen = render_order(session.ledger(), &ScreenOptions::default());
        assert!(screen.contains("PIVO 0,3L"));
        assert!(screen.contains("€6.00 | x2"));
        assert!(screen.contains("Total:    €8.00"));
        assert!(screen.contains("Tendered: €10.00"));
        assert!(screen.contains("Change:   €2.00"));
    }

    #[test]
    fn test_short_payment_shows_zero_change() {
        let mut session = session();
        session.add_item(ItemId(4)).unwrap();
        session.record_payment("5").unwrap();

        let screen = render_order(session.ledger(), &ScreenOptions::default());
        assert!(screen.contains("Change:   €0.00"));
    }

    #[test]
    fn test_last_order_panel() {
        let mut session = session();
        session.add_item(ItemId(7)).unwrap();
        session.add_item(ItemId(7)).unwrap();
        session.complete_order().unwrap();

        let options = ScreenOptions {
            currency_symbol: "EUR ".to_string(),
        };
        let screen = render_screen(&session, &options);
        let last = screen.split("Last order").nth(1).unwrap();

        assert!(last.contains("GIN-TONIC"));
        assert!(last.contains("x2"));
        assert!(last.contains("Total:    EUR 8.00"));
        assert!(screen.contains("Order\n  (no items)"));
    }
}
