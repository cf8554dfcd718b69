//! Drives the menu loop with scripted operator input over a temp directory.

use order_desk::{Config, Console, Menu, OrderStorage};
use shared::models::{LineItem, Order};
use std::io::Cursor;
use tempfile::TempDir;

fn run_script(config: &Config, script: &str) -> String {
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    Menu::new(config).run(&mut console).expect("menu loop failed");
    String::from_utf8(console.into_output()).expect("output is not UTF-8")
}

fn storages(config: &Config) -> (OrderStorage, OrderStorage) {
    (config.pending_storage(), config.completed_storage())
}

#[test]
fn test_add_then_fulfil() {
    let tmp = TempDir::new().unwrap();
    let config = Config::with_work_dir(tmp.path());
    let (pending, completed) = storages(&config);
    assert!(!pending.exists());
    assert!(!completed.exists());

    // Add A1 with one Coffee {50, 2}
    let output = run_script(&config, "1\na1\nBob\nCoffee\n50\n2\n\n4\n");
    assert!(output.contains("=> 訂單 A1 已新增！"));

    let orders = pending.load().unwrap();
    assert_eq!(
        orders,
        vec![Order::new("A1", "Bob", vec![LineItem::new("Coffee", 50, 2)])]
    );
    assert_eq!(orders[0].total(), 100);
    assert!(!completed.exists());

    // Fulfil the first pending order
    let output = run_script(&config, "3\n1\n");
    assert!(output.contains("1. 訂單編號: A1 - 客戶: Bob"));
    assert!(output.contains("=> 訂單 A1 已出餐完成"));
    assert!(output.contains("出餐訂單詳細資料："));
    assert!(output.contains("==================== 出餐訂單 ===================="));
    assert!(output.contains("訂單總額: 100"));
    assert!(!output.contains("訂單 #1"));

    assert!(pending.load().unwrap().is_empty());
    let done = completed.load().unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].order_id, "A1");
}

#[test]
fn test_report_lists_pending_orders() {
    let tmp = TempDir::new().unwrap();
    let config = Config::with_work_dir(tmp.path());

    run_script(
        &config,
        "1\nA1\nBob\nCoffee\n50\n2\n\n1\nb2\nAnn\nCake\n1200\n1\nTea\n30\n1\n\n",
    );

    let output = run_script(&config, "2\n\n");
    assert!(output.contains("==================== 訂單報表 ===================="));
    assert!(output.contains("訂單 #1\n訂單編號: A1\n客戶姓名: Bob"));
    assert!(output.contains("訂單 #2\n訂單編號: B2\n客戶姓名: Ann"));
    assert!(output.contains("訂單總額: 1,230"));
}

#[test]
fn test_report_on_empty_pending_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    let config = Config::with_work_dir(tmp.path());

    let output = run_script(&config, "2\n");
    assert!(!output.contains("==================== 訂單報表"));
    assert!(!output.contains("訂單總額"));
}

#[test]
fn test_duplicate_and_empty_orders_leave_pending_unchanged() {
    let tmp = TempDir::new().unwrap();
    let config = Config::with_work_dir(tmp.path());
    let (pending, _) = storages(&config);

    run_script(&config, "1\nA1\nBob\nCoffee\n50\n2\n\n");
    let before = pending.load().unwrap();

    let output = run_script(&config, "1\n a1 \n1\nB2\nAnn\nTea\n-1\n\n");
    assert!(output.contains("=> 錯誤：訂單編號 A1 已存在！"));
    assert!(output.contains("=> 錯誤：價格或數量必須為整數，請重新輸入"));
    assert!(output.contains("=> 至少需要一個訂單項目"));
    assert_eq!(pending.load().unwrap(), before);
}

#[test]
fn test_failed_add_still_creates_pending_file() {
    let tmp = TempDir::new().unwrap();
    let config = Config::with_work_dir(tmp.path());
    let (pending, _) = storages(&config);

    run_script(&config, "1\nA1\nBob\n\n");
    assert!(pending.exists());
    assert!(pending.load().unwrap().is_empty());
}

#[test]
fn test_fulfil_with_nothing_pending() {
    let tmp = TempDir::new().unwrap();
    let config = Config::with_work_dir(tmp.path());
    let (pending, completed) = storages(&config);

    let output = run_script(&config, "3\n4\n");
    assert!(output.contains("=> 沒有待處理的訂單。"));
    assert!(!pending.exists());
    assert!(!completed.exists());
}

#[test]
fn test_fulfil_cancel_and_invalid_selection() {
    let tmp = TempDir::new().unwrap();
    let config = Config::with_work_dir(tmp.path());
    let (pending, completed) = storages(&config);

    run_script(&config, "1\nA1\nBob\nCoffee\n50\n2\n\n");
    let output = run_script(&config, "3\n\n3\n2\n3\nx\n");
    assert!(output.contains("=> 已取消出餐處理。"));
    assert_eq!(output.matches("=> 錯誤：請輸入有效的數字").count(), 2);
    assert_eq!(pending.load().unwrap().len(), 1);
    assert!(!completed.exists());
}

#[test]
fn test_invalid_menu_choice_redisplays_menu() {
    let tmp = TempDir::new().unwrap();
    let config = Config::with_work_dir(tmp.path());

    let output = run_script(&config, "9\nabc\n4\n");
    assert_eq!(output.matches("=> 請輸入有效的選項（1-4）").count(), 2);
    assert_eq!(output.matches("1. 新增訂單").count(), 3);
}

#[test]
fn test_id_can_be_reused_after_fulfilment() {
    let tmp = TempDir::new().unwrap();
    let config = Config::with_work_dir(tmp.path());
    let (pending, completed) = storages(&config);

    run_script(&config, "1\nA1\nBob\nCoffee\n50\n2\n\n3\n1\n1\nA1\nAnn\nTea\n30\n1\n\n");
    assert_eq!(pending.load().unwrap()[0].customer, "Ann");
    assert_eq!(completed.load().unwrap()[0].customer, "Bob");
}

#[test]
fn test_malformed_pending_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let config = Config::with_work_dir(tmp.path());
    std::fs::write(config.pending_path(), "[oops").unwrap();

    let mut console = Console::new(Cursor::new("2\n"), Vec::new());
    let err = Menu::new(&config).run(&mut console).unwrap_err();
    assert!(matches!(
        err,
        order_desk::DeskError::Storage(order_desk::StorageError::Parse { .. })
    ));
}
