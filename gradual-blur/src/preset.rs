//! # Preset 模块
//!
//! 内置预设表与预设合并。
//!
//! 预设是一份部分填写的 [`RawConfig`]。合并时显式字段逐个覆盖预设字段，
//! 两者都缺失的字段留给规范化阶段填默认值。

use tracing::{debug, warn};

use crate::config::RawConfig;

/// 内置预设名
pub const PRESET_NAMES: [&str; 4] = ["hero", "navigation", "modal", "card"];

/// 按名称查找预设（不区分大小写）
pub fn lookup(name: &str) -> Option<RawConfig> {
    let preset = match name.trim().to_lowercase().as_str() {
        "hero" => RawConfig {
            position: Some("bottom".to_string()),
            strength: Some(2.5),
            height: Some("8rem".to_string()),
            layer_count: Some(6.0),
            animated: Some("fade".to_string()),
            ..Default::default()
        },
        "navigation" => RawConfig {
            position: Some("top".to_string()),
            strength: Some(1.5),
            height: Some("4rem".to_string()),
            layer_count: Some(4.0),
            tint: Some("rgba(255,255,255,0.1)".to_string()),
            ..Default::default()
        },
        "modal" => RawConfig {
            position: Some("bottom".to_string()),
            strength: Some(3.0),
            height: Some("100vh".to_string()),
            width: Some("100vw".to_string()),
            tint: Some("rgba(0,0,0,0.2)".to_string()),
            ..Default::default()
        },
        "card" => RawConfig {
            position: Some("bottom".to_string()),
            strength: Some(1.8),
            height: Some("3rem".to_string()),
            layer_count: Some(4.0),
            curve: Some("bezier".to_string()),
            ..Default::default()
        },
        _ => return None,
    };
    Some(preset)
}

/// 将 `raw.preset` 指向的预设合并到显式字段之下
///
/// 未知预设名视为未指定，不报错。
pub fn apply_preset(raw: RawConfig) -> RawConfig {
    let Some(name) = raw.preset.as_deref() else {
        return raw;
    };

    match lookup(name) {
        Some(preset) => {
            debug!(preset = name, "应用预设");
            raw.or(&preset)
        }
        None => {
            warn!(preset = name, "未知预设，已忽略");
            raw
        }
    }
}
