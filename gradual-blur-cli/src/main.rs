//! # gradual-blur
//!
//! 渐进模糊 CSS 生成器命令行。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p gradual-blur-cli
//! cargo run -p gradual-blur-cli -- --preset hero --output blur.css
//! cargo run -p gradual-blur-cli -- --zones top,bottom --html
//! cargo run -p gradual-blur-cli -- --config blur.json --json
//! ```
//!
//! ## 退出码
//!
//! - `0`：成功
//! - `1`：配置错误或读写失败
//! - `2`：参数无法解析（由 clap 在管线运行前报告）

mod args;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use gradual_blur::{RawConfig, emit_css, emit_html, generate_layers, resolve_config};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::{Level, debug, info};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = real_main(&cli) {
        eprintln!("❌ 生成失败: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config_file(path: &Path) -> anyhow::Result<RawConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
    RawConfig::from_json(&text).with_context(|| format!("无法解析配置文件: {}", path.display()))
}

fn real_main(cli: &Cli) -> anyhow::Result<()> {
    let file = cli.config.as_deref().map(load_config_file).transpose()?;
    let raw = cli.raw_config(file);
    debug!(?raw, "原始配置");

    let config = resolve_config(raw)?;
    let zones = generate_layers(&config);
    info!(
        zones = zones.len(),
        layers = config.layer_count,
        "生成完成"
    );

    let output = if cli.json {
        serde_json::to_string_pretty(&zones)?
    } else if cli.html {
        emit_html(&config, &zones)
    } else {
        emit_css(&config, &zones)
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("无法写入输出文件: {}", path.display()))?;
            println!("{} written to {}", cli.output_kind(), path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}
