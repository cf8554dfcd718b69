use anyhow::Context;
use order_desk::{Config, Console, Menu, init_logger};

fn main() -> anyhow::Result<()> {
    // 1. 加载配置 (固定默认值)
    let config = Config::default();

    // 2. 日志
    init_logger(&config);
    tracing::info!(
        pending = %config.pending_path().display(),
        completed = %config.completed_path().display(),
        "Order desk starting"
    );

    // 3. 菜单循环
    let mut console = Console::stdio();
    Menu::new(&config)
        .run(&mut console)
        .context("order desk stopped")?;

    tracing::info!("Order desk exited");
    Ok(())
}
