//! 揀料模擬命令列程式

use anyhow::Context;
use clap::Parser;
use kit_calc::{BatchRunner, ConsoleSink};
use kit_core::{parse_unit_count, KitConfig};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kitting")]
#[command(about = "依倉庫優先順序逐台配齊 BOM 零件", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON 配置檔（倉庫與 BOM）；未指定時使用內建情境
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 要處理的單位數；未指定時從標準輸入讀取
    #[arg(short, long)]
    units: Option<String>,

    /// 輸出除錯日誌
    #[arg(short, long)]
    verbose: bool,
}

/// 初始化日誌（寫到 stderr，stdout 只保留揀料輸出）
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_units_from_stdin() -> anyhow::Result<String> {
    println!("Please enter a number of chairs: ");
    std::io::stdout().flush().context("無法寫入標準輸出")?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("無法讀取標準輸入")?;
    Ok(line)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => KitConfig::load(path)
            .with_context(|| format!("無法載入配置檔 {}", path.display()))?,
        None => KitConfig::default(),
    };

    let raw_units = match cli.units {
        Some(units) => units,
        None => read_units_from_stdin()?,
    };

    let units = match parse_unit_count(&raw_units) {
        Ok(units) => units,
        Err(err) => {
            tracing::debug!("{}", err);
            println!("Invalid input!");
            return Ok(());
        }
    };

    let mut inventories = config.build_inventories();
    let mut runner = BatchRunner::from_config(&config, ConsoleSink::default());
    let report = runner.run(&mut inventories, units);

    if !report.is_complete() {
        println!("Error! Component out of stock, boxing stopped.");
    }

    Ok(())
}
