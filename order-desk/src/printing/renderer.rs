//! Order report renderer
//!
//! Renders orders into a fixed-width text table using desk-printer.

use desk_printer::{Align, TextBuilder, format_amount};
use shared::models::Order;

/// Report title for the pending listing
pub const REPORT_TITLE: &str = "訂單報表";

/// Report title for the fulfillment receipt
pub const RECEIPT_TITLE: &str = "出餐訂單";

/// `=` characters on each side of the banner title
const BANNER_RUN: usize = 20;

const PRICE_WIDTH: usize = 10;
const QUANTITY_WIDTH: usize = 8;
const SUBTOTAL_WIDTH: usize = 12;
const MIN_NAME_WIDTH: usize = 8;

/// Order report renderer
pub struct OrderReportRenderer {
    width: usize,
}

impl OrderReportRenderer {
    /// Create a new renderer with the report width in terminal columns
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    fn name_width(&self) -> usize {
        self.width
            .saturating_sub(PRICE_WIDTH + QUANTITY_WIDTH + SUBTOTAL_WIDTH)
            .max(MIN_NAME_WIDTH)
    }

    /// Render orders under `title`
    ///
    /// `single` drops the per-order `訂單 #n` numbering (receipt mode).
    /// Returns an empty string when there is nothing to render.
    pub fn render(&self, orders: &[Order], title: &str, single: bool) -> String {
        if orders.is_empty() {
            return String::new();
        }

        let mut b = TextBuilder::new(self.width);
        b.newline();
        b.banner(title, '=', BANNER_RUN);

        for (i, order) in orders.iter().enumerate() {
            if !single {
                b.write_line(&format!("訂單 #{}", i + 1));
            }
            self.render_order(&mut b, order);
        }

        b.finalize()
    }

    fn render_order(&self, b: &mut TextBuilder, order: &Order) {
        b.write_line(&format!("訂單編號: {}", order.order_id));
        b.write_line(&format!("客戶姓名: {}", order.customer));

        b.dash_sep();
        self.render_row(b, "商品名稱", "單價", "數量", "小計");
        b.dash_sep();

        for item in &order.items {
            self.render_row(
                b,
                &item.name,
                &item.price.to_string(),
                &item.quantity.to_string(),
                &item.subtotal().to_string(),
            );
        }

        b.dash_sep();
        b.write_line(&format!("訂單總額: {}", format_amount(order.total())));
        b.eq_sep();
    }

    fn render_row(
        &self,
        b: &mut TextBuilder,
        name: &str,
        price: &str,
        quantity: &str,
        subtotal: &str,
    ) {
        b.row(&[
            (name, self.name_width(), Align::Left),
            (price, PRICE_WIDTH, Align::Right),
            (quantity, QUANTITY_WIDTH, Align::Right),
            (subtotal, SUBTOTAL_WIDTH, Align::Right),
        ]);
    }
}

impl Default for OrderReportRenderer {
    fn default() -> Self {
        Self::new(50)
    }
}
