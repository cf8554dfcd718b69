//! Order report rendering
//!
//! Renders orders as the plain-text report shown on the console; the same
//! renderer produces the fulfillment receipt in single-order mode.

pub mod renderer;

pub use renderer::OrderReportRenderer;
