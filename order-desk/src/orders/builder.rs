//! Interactive order construction
//!
//! Item entry is a small state machine: name → price → quantity. Any invalid
//! field throws the whole in-progress item away and goes back to asking for a
//! name; an empty name ends item entry.

use std::fmt;
use std::io::{BufRead, Write};

use shared::models::{
    LineItem, Order, contains_order_id, normalize_order_id, parse_price, parse_quantity,
};

use crate::console::Console;
use crate::core::Result;

const PROMPT_ORDER_ID: &str = "請輸入訂單編號：";
const PROMPT_CUSTOMER: &str = "請輸入顧客姓名：";
const PROMPT_ITEM_NAME: &str = "請輸入訂單項目名稱（輸入空白結束）：";
const PROMPT_PRICE: &str = "請輸入價格：";
const PROMPT_QUANTITY: &str = "請輸入數量：";

/// Result of one add-order interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Order appended under this id
    Added(String),
    /// Id already present in the pending collection
    DuplicateId(String),
    /// No valid item was entered, nothing appended
    NoItems,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(id) => write!(f, "=> 訂單 {} 已新增！", id),
            Self::DuplicateId(id) => write!(f, "=> 錯誤：訂單編號 {} 已存在！", id),
            Self::NoItems => write!(f, "=> 至少需要一個訂單項目"),
        }
    }
}

/// Item entry state
enum ItemEntry {
    AwaitingName,
    AwaitingPrice { name: String },
    AwaitingQuantity { name: String, price: u64 },
}

/// Ask the operator for a new order and append it to `orders`
///
/// `orders` is only mutated on [`AddOutcome::Added`]; persisting it is the
/// caller's job.
pub fn add_order<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    orders: &mut Vec<Order>,
) -> Result<AddOutcome> {
    let order_id = normalize_order_id(&console.prompt(PROMPT_ORDER_ID)?);
    if contains_order_id(orders, &order_id) {
        tracing::warn!(order_id = %order_id, "Duplicate order id rejected");
        return Ok(AddOutcome::DuplicateId(order_id));
    }

    let customer = console.prompt(PROMPT_CUSTOMER)?;
    let items = collect_items(console)?;
    if items.is_empty() {
        tracing::warn!(order_id = %order_id, "Order without items discarded");
        return Ok(AddOutcome::NoItems);
    }

    tracing::info!(order_id = %order_id, items = items.len(), "Order added");
    orders.push(Order::new(order_id.clone(), customer, items));
    Ok(AddOutcome::Added(order_id))
}

fn collect_items<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Vec<LineItem>> {
    let mut items = Vec::new();
    let mut state = ItemEntry::AwaitingName;

    loop {
        state = match state {
            ItemEntry::AwaitingName => {
                let name = console.prompt(PROMPT_ITEM_NAME)?;
                if name.is_empty() {
                    break;
                }
                ItemEntry::AwaitingPrice { name }
            }
            ItemEntry::AwaitingPrice { name } => match parse_price(&console.prompt(PROMPT_PRICE)?) {
                Ok(price) => ItemEntry::AwaitingQuantity { name, price },
                Err(e) => {
                    tracing::warn!(item = %name, "Invalid price, item discarded");
                    console.say(&e.to_string())?;
                    ItemEntry::AwaitingName
                }
            },
            ItemEntry::AwaitingQuantity { name, price } => {
                match parse_quantity(&console.prompt(PROMPT_QUANTITY)?) {
                    Ok(quantity) => {
                        items.push(LineItem::new(name, price, quantity));
                        ItemEntry::AwaitingName
                    }
                    Err(e) => {
                        tracing::warn!(item = %name, "Invalid quantity, item discarded");
                        console.say(&e.to_string())?;
                        ItemEntry::AwaitingName
                    }
                }
            }
        };
    }

    Ok(items)
}
