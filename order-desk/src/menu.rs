//! Interactive menu loop
//!
//! Every option reloads the pending collection from disk before acting on
//! it, so the files are the only state carried between iterations.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::core::{Config, Result};
use crate::orders::{OrderStorage, add_order, process_order};
use crate::printing::OrderReportRenderer;
use crate::printing::renderer::{RECEIPT_TITLE, REPORT_TITLE};

const MENU: &str = "
***************選單***************
1. 新增訂單
2. 顯示訂單報表
3. 出餐處理
4. 離開
**********************************
";

const PROMPT_CHOICE: &str = "請選擇操作項目(Enter 離開)：";

/// Operator menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddOrder,
    ShowReport,
    ProcessOrder,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Parse trimmed operator input; empty input exits
    pub fn parse(input: &str) -> Self {
        match input {
            "" | "4" => Self::Exit,
            "1" => Self::AddOrder,
            "2" => Self::ShowReport,
            "3" => Self::ProcessOrder,
            _ => Self::Invalid,
        }
    }
}

/// Order desk menu
pub struct Menu {
    pending: OrderStorage,
    completed: OrderStorage,
    renderer: OrderReportRenderer,
}

impl Menu {
    pub fn new(config: &Config) -> Self {
        Self {
            pending: config.pending_storage(),
            completed: config.completed_storage(),
            renderer: OrderReportRenderer::new(config.report_width),
        }
    }

    /// Run until the operator exits or storage fails
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            console.print(MENU)?;
            let choice = MenuChoice::parse(&console.prompt(PROMPT_CHOICE)?);
            tracing::debug!(?choice, "Menu choice");

            match choice {
                MenuChoice::Exit => break,
                MenuChoice::AddOrder => self.add(console)?,
                MenuChoice::ShowReport => self.report(console)?,
                MenuChoice::ProcessOrder => self.process(console)?,
                MenuChoice::Invalid => console.say("=> 請輸入有效的選項（1-4）")?,
            }
        }
        Ok(())
    }

    fn add<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let mut orders = self.pending.load()?;
        let outcome = add_order(console, &mut orders)?;
        // Written back even when nothing was added
        self.pending.save(&orders)?;
        console.say(&outcome.to_string())?;
        Ok(())
    }

    fn report<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let orders = self.pending.load()?;
        console.print(&self.renderer.render(&orders, REPORT_TITLE, false))?;
        Ok(())
    }

    fn process<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let mut orders = self.pending.load()?;
        let outcome = process_order(console, &mut orders, &self.pending, &self.completed)?;
        console.say(&outcome.to_string())?;

        if let Some(order) = outcome.completed_order() {
            console.say("出餐訂單詳細資料：")?;
            let receipt = self
                .renderer
                .render(std::slice::from_ref(order), RECEIPT_TITLE, true);
            console.print(&receipt)?;
        }
        Ok(())
    }
}
