//! # desk-printer
//!
//! Plain-text report layout for terminal output.
//!
//! ## Scope
//!
//! This crate handles HOW a report is laid out:
//! - Column width measurement for mixed CJK / ASCII text
//! - Padding and truncation to fixed column widths
//! - Separators, banners and fixed-width table rows
//! - Thousands-separated amounts
//!
//! WHAT goes into a report (orders, totals) stays in order-desk.
//!
//! ## Example
//!
//! ```
//! use desk_printer::{Align, TextBuilder, format_amount};
//!
//! let mut b = TextBuilder::new(20);
//! b.banner("報表", '=', 4);
//! b.row(&[("咖啡", 10, Align::Left), ("1,000", 10, Align::Right)]);
//! b.eq_sep();
//! assert!(b.as_str().contains("==== 報表 ===="));
//! assert_eq!(format_amount(1234567), "1,234,567");
//! ```

mod amount;
mod encoding;
mod text;

// Re-exports
pub use amount::format_amount;
pub use encoding::{display_width, pad_display, truncate_display};
pub use text::{Align, TextBuilder};
