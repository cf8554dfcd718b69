//! Fulfillment: move one pending order to the completed collection
//!
//! The two documents are written one after the other (pending first). There
//! is no transaction around the pair; a failure on the second write leaves
//! the order in neither file.

use std::fmt;
use std::io::{BufRead, Write};

use shared::models::{Order, normalize_digits};

use super::storage::OrderStorage;
use crate::console::Console;
use crate::core::Result;

const PROMPT_SELECTION: &str = "請選擇要出餐的訂單編號 (輸入數字或按 Enter 取消): ";

/// Result of one fulfillment interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    NothingPending,
    Cancelled,
    InvalidChoice,
    /// The order now appended to the completed collection
    Completed(Order),
}

impl ProcessOutcome {
    /// The fulfilled order, for the receipt
    pub fn completed_order(&self) -> Option<&Order> {
        match self {
            Self::Completed(order) => Some(order),
            _ => None,
        }
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingPending => write!(f, "=> 沒有待處理的訂單。"),
            Self::Cancelled => write!(f, "=> 已取消出餐處理。"),
            Self::InvalidChoice => write!(f, "=> 錯誤：請輸入有效的數字"),
            Self::Completed(order) => write!(f, "=> 訂單 {} 已出餐完成", order.order_id),
        }
    }
}

/// Parse a 1-based position in `[1, count]` into an index
///
/// Full-width digits are accepted.
fn parse_selection(raw: &str, count: usize) -> Option<usize> {
    let raw = normalize_digits(raw);
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match raw.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// List `pending`, let the operator pick one and move it to completed
///
/// `pending` is the caller's freshly loaded collection; it is saved back to
/// `pending_store` only when an order was actually moved.
pub fn process_order<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    pending: &mut Vec<Order>,
    pending_store: &OrderStorage,
    completed_store: &OrderStorage,
) -> Result<ProcessOutcome> {
    if pending.is_empty() {
        return Ok(ProcessOutcome::NothingPending);
    }

    console.say("\n======== 待處理訂單列表 ========")?;
    for (idx, order) in pending.iter().enumerate() {
        console.say(&format!(
            "{}. 訂單編號: {} - 客戶: {}",
            idx + 1,
            order.order_id,
            order.customer
        ))?;
    }
    console.say(&"=".repeat(32))?;

    let choice = console.prompt(PROMPT_SELECTION)?;
    if choice.is_empty() {
        return Ok(ProcessOutcome::Cancelled);
    }
    let Some(index) = parse_selection(&choice, pending.len()) else {
        tracing::warn!(choice = %choice, count = pending.len(), "Invalid fulfillment selection");
        return Ok(ProcessOutcome::InvalidChoice);
    };

    let order = pending.remove(index);
    let mut completed = completed_store.load()?;
    completed.push(order.clone());

    pending_store.save(pending)?;
    completed_store.save(&completed)?;

    tracing::info!(
        order_id = %order.order_id,
        pending = pending.len(),
        completed = completed.len(),
        "Order fulfilled"
    );
    Ok(ProcessOutcome::Completed(order))
}
