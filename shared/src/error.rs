//! Error types for the shared crate
//!
//! Validation errors raised while an operator types in a line item.
//! The `Display` text is shown to the operator as-is.

use thiserror::Error;

/// Line item field validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineItemError {
    /// Price is not a non-negative integer
    #[error("=> 錯誤：價格或數量必須為整數，請重新輸入")]
    InvalidPrice,

    /// Quantity is not a positive integer
    #[error("=> 錯誤：數量必須為正整數，請重新輸入")]
    InvalidQuantity,
}
