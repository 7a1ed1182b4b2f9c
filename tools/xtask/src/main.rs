//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `presets`: 将所有内置预设渲染为 CSS / HTML 文件

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use gradual_blur::{OutputFormat, PRESET_NAMES, RawConfig, render};

fn run(step: &str, cmd: &mut Command) -> anyhow::Result<()> {
    eprintln!("\n==> {step}");
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("{step} failed with {status}");
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let sub = args.next().unwrap_or_else(|| "help".to_string());

    match sub.as_str() {
        "check-all" => {
            let mut fmt = Command::new("cargo");
            fmt.args(["fmt", "--all", "--", "--check"]);
            run("cargo fmt --all -- --check", &mut fmt)?;

            let mut clippy = Command::new("cargo");
            clippy.args(["clippy", "--workspace", "--all-targets"]);
            run("cargo clippy --workspace --all-targets", &mut clippy)?;

            let mut test = Command::new("cargo");
            test.args(["test", "--workspace"]);
            run("cargo test --workspace", &mut test)?;
        }
        "presets" => {
            let dir = args
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("target/presets"));
            render_presets(&dir)?;
        }
        "help" | "-h" | "--help" => {
            print_help();
        }
        other => anyhow::bail!("unknown xtask subcommand: {other}"),
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        r#"xtask - 开发辅助工具

USAGE:
  cargo xtask <command>

COMMANDS:
  check-all       运行 fmt、clippy、test 门禁检查
  presets [dir]   渲染所有内置预设（默认输出到 target/presets/）

ALIASES (in .cargo/config.toml):
  cargo check-all -> cargo xtask check-all
"#
    );
}

//=============================================================================
// presets 命令实现
//=============================================================================

/// 每个预设输出 `<name>.css` 与 `<name>.html`，便于肉眼比对
fn render_presets(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;
    eprintln!("==> 渲染 {} 个预设到 {}\n", PRESET_NAMES.len(), dir.display());

    for name in PRESET_NAMES {
        for (format, ext) in [(OutputFormat::Css, "css"), (OutputFormat::Html, "html")] {
            let raw = RawConfig {
                preset: Some(name.to_string()),
                ..Default::default()
            };
            let text = render(raw, format)?;
            let path = dir.join(format!("{name}.{ext}"));
            fs::write(&path, text)?;
            eprintln!("  {}", path.display());
        }
    }

    eprintln!("\n✅ 完成");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_presets_writes_every_preset() {
        let dir = tempfile::tempdir().unwrap();
        render_presets(dir.path()).unwrap();

        for name in PRESET_NAMES {
            let css = fs::read_to_string(dir.path().join(format!("{name}.css"))).unwrap();
            let html = fs::read_to_string(dir.path().join(format!("{name}.html"))).unwrap();
            assert!(css.starts_with(".gradual-blur {"), "{name}");
            assert!(html.starts_with("<div class=\"gradual-blur"), "{name}");
        }
    }

    #[test]
    fn test_render_presets_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out/presets");
        render_presets(&nested).unwrap();
        assert!(nested.join("hero.css").is_file());
    }
}
