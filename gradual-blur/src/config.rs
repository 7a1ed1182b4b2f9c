//! # Config 模块
//!
//! 原始配置（[`RawConfig`]）与规范化后的配置（[`Config`]）。
//!
//! ## 配置优先级
//!
//! 1. 显式字段（最高）
//! 2. 预设字段（见 [`crate::preset`]）
//! 3. 默认值（最低）
//!
//! 规范化分两类处理：
//! - 数值非法（层数、强度、不透明度、悬停倍率）→ [`ConfigError`]
//! - 枚举取值未知（位置、曲线、动画触发方式）→ 记录警告并降级为默认值

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::direction::Position;
use crate::error::{ConfigError, InvalidArgument};
use crate::preset;
use crate::progression::{Curve, Progression};

/// 动画触发方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    /// 无动画
    #[default]
    None,
    /// 滚动进入视口时淡入
    Scroll,
    /// 悬停时增强模糊
    Hover,
    /// 挂载时淡入
    Fade,
}

impl Animation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Scroll => "scroll",
            Self::Hover => "hover",
            Self::Fade => "fade",
        }
    }

    /// 是否启用了任意动画
    pub fn is_animated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Animation {
    type Err = InvalidArgument;

    /// `true` 视为 `fade`，`false` 视为 `none`（兼容布尔写法）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "false" => Ok(Self::None),
            "scroll" => Ok(Self::Scroll),
            "hover" => Ok(Self::Hover),
            "fade" | "true" => Ok(Self::Fade),
            _ => Err(InvalidArgument::InvalidEnum {
                kind: "动画触发方式",
                value: s.to_string(),
                expected: "none, scroll, hover, fade",
            }),
        }
    }
}

/// 响应式断点高度
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoints {
    /// ≤ 768px
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// 769px - 1024px
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<String>,
    /// ≥ 1025px
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<String>,
}

/// 原始配置
///
/// 所有字段可选。枚举字段保留为字符串，以便未知取值在规范化时降级而非报错；
/// 数值字段保留宽类型，以便非法值能被规范化阶段识别为 [`ConfigError`]。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawConfig {
    /// 预设名
    pub preset: Option<String>,
    pub position: Option<String>,
    pub strength: Option<f64>,
    pub height: Option<String>,
    pub width: Option<String>,
    /// 层数
    #[serde(alias = "divCount")]
    pub layer_count: Option<f64>,
    pub exponential: Option<bool>,
    pub curve: Option<String>,
    pub z_index: Option<i64>,
    /// 动画触发方式
    pub animated: Option<String>,
    pub duration: Option<String>,
    pub easing: Option<String>,
    pub tint: Option<String>,
    pub opacity: Option<f64>,
    pub responsive: Option<bool>,
    pub mobile_height: Option<String>,
    pub tablet_height: Option<String>,
    pub desktop_height: Option<String>,
    pub zones: Option<Vec<String>>,
    pub gpu_optimized: Option<bool>,
    pub reduced_motion: Option<bool>,
    pub hover_intensity: Option<f64>,
}

impl RawConfig {
    /// 从 JSON 文本加载
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// 以 `self` 为准、`base` 兜底逐字段合并
    pub fn or(self, base: &RawConfig) -> RawConfig {
        RawConfig {
            preset: self.preset.or_else(|| base.preset.clone()),
            position: self.position.or_else(|| base.position.clone()),
            strength: self.strength.or(base.strength),
            height: self.height.or_else(|| base.height.clone()),
            width: self.width.or_else(|| base.width.clone()),
            layer_count: self.layer_count.or(base.layer_count),
            exponential: self.exponential.or(base.exponential),
            curve: self.curve.or_else(|| base.curve.clone()),
            z_index: self.z_index.or(base.z_index),
            animated: self.animated.or_else(|| base.animated.clone()),
            duration: self.duration.or_else(|| base.duration.clone()),
            easing: self.easing.or_else(|| base.easing.clone()),
            tint: self.tint.or_else(|| base.tint.clone()),
            opacity: self.opacity.or(base.opacity),
            responsive: self.responsive.or(base.responsive),
            mobile_height: self.mobile_height.or_else(|| base.mobile_height.clone()),
            tablet_height: self.tablet_height.or_else(|| base.tablet_height.clone()),
            desktop_height: self.desktop_height.or_else(|| base.desktop_height.clone()),
            zones: self.zones.or_else(|| base.zones.clone()),
            gpu_optimized: self.gpu_optimized.or(base.gpu_optimized),
            reduced_motion: self.reduced_motion.or(base.reduced_motion),
            hover_intensity: self.hover_intensity.or(base.hover_intensity),
        }
    }
}

/// 默认值
pub mod defaults {
    pub const STRENGTH: f64 = 2.0;
    pub const HEIGHT: &str = "7rem";
    pub const WIDTH: &str = "100%";
    pub const LAYER_COUNT: u32 = 5;
    /// 层数上限
    pub const MAX_LAYER_COUNT: u32 = 100;
    pub const Z_INDEX: i64 = 1000;
    pub const DURATION: &str = "0.3s";
    pub const EASING: &str = "ease-out";
    pub const OPACITY: f64 = 1.0;
}

/// 规范化后的配置
///
/// 不变量：`1 <= layer_count <= MAX_LAYER_COUNT`，`strength > 0`，`opacity ∈ [0, 1]`，
/// `zones` 中的位置互不重复。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub position: Position,
    pub strength: f64,
    pub height: String,
    pub width: String,
    pub layer_count: u32,
    pub exponential: bool,
    pub curve: Curve,
    pub z_index: i64,
    pub animation: Animation,
    pub duration: String,
    pub easing: String,
    pub tint: Option<String>,
    pub opacity: f64,
    pub responsive: bool,
    pub breakpoints: Breakpoints,
    /// 多区域；为空时只使用 `position`
    pub zones: Vec<Position>,
    pub gpu_optimized: bool,
    pub reduced_motion: bool,
    pub hover_intensity: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: Position::default(),
            strength: defaults::STRENGTH,
            height: defaults::HEIGHT.to_string(),
            width: defaults::WIDTH.to_string(),
            layer_count: defaults::LAYER_COUNT,
            exponential: false,
            curve: Curve::default(),
            z_index: defaults::Z_INDEX,
            animation: Animation::default(),
            duration: defaults::DURATION.to_string(),
            easing: defaults::EASING.to_string(),
            tint: None,
            opacity: defaults::OPACITY,
            responsive: false,
            breakpoints: Breakpoints::default(),
            zones: Vec::new(),
            gpu_optimized: false,
            reduced_motion: false,
            hover_intensity: None,
        }
    }
}

impl Config {
    /// 本配置的模糊增长参数
    pub fn progression(&self) -> Progression {
        Progression {
            layer_count: self.layer_count,
            curve: self.curve,
            exponential: self.exponential,
            strength: self.strength,
        }
    }

    /// 是否输出悬停规则
    pub fn hover_multiplier(&self) -> Option<f64> {
        match self.animation {
            Animation::Hover => self.hover_intensity,
            _ => None,
        }
    }
}

/// 解析原始配置：应用预设，再规范化
pub fn resolve_config(raw: RawConfig) -> Result<Config, ConfigError> {
    normalize(preset::apply_preset(raw))
}

/// 填充默认值并校验
pub fn normalize(raw: RawConfig) -> Result<Config, ConfigError> {
    let layer_count = normalize_layer_count(raw.layer_count)?;

    let strength = raw.strength.unwrap_or(defaults::STRENGTH);
    if !strength.is_finite() || strength <= 0.0 {
        return Err(ConfigError::InvalidStrength { value: strength });
    }

    let opacity = raw.opacity.unwrap_or(defaults::OPACITY);
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(ConfigError::InvalidOpacity { value: opacity });
    }

    if let Some(value) = raw.hover_intensity
        && (!value.is_finite() || value <= 0.0)
    {
        return Err(ConfigError::InvalidHoverIntensity { value });
    }

    let zones = normalize_zones(raw.zones.unwrap_or_default())?;

    Ok(Config {
        position: soft_parse("position", raw.position.as_deref()),
        strength,
        height: raw.height.unwrap_or_else(|| defaults::HEIGHT.to_string()),
        width: raw.width.unwrap_or_else(|| defaults::WIDTH.to_string()),
        layer_count,
        exponential: raw.exponential.unwrap_or(false),
        curve: soft_parse("curve", raw.curve.as_deref()),
        z_index: raw.z_index.unwrap_or(defaults::Z_INDEX),
        animation: soft_parse("animated", raw.animated.as_deref()),
        duration: raw
            .duration
            .unwrap_or_else(|| defaults::DURATION.to_string()),
        easing: raw.easing.unwrap_or_else(|| defaults::EASING.to_string()),
        tint: raw.tint,
        opacity,
        responsive: raw.responsive.unwrap_or(false),
        breakpoints: Breakpoints {
            mobile: raw.mobile_height,
            tablet: raw.tablet_height,
            desktop: raw.desktop_height,
        },
        zones,
        gpu_optimized: raw.gpu_optimized.unwrap_or(false),
        reduced_motion: raw.reduced_motion.unwrap_or(false),
        hover_intensity: raw.hover_intensity,
    })
}

fn normalize_layer_count(value: Option<f64>) -> Result<u32, ConfigError> {
    let Some(value) = value else {
        return Ok(defaults::LAYER_COUNT);
    };
    if value.is_finite()
        && value.fract() == 0.0
        && value >= 1.0
        && value <= f64::from(defaults::MAX_LAYER_COUNT)
    {
        Ok(value as u32)
    } else {
        Err(ConfigError::InvalidLayerCount { value })
    }
}

/// 解析枚举字段，未知取值降级为默认值
fn soft_parse<T>(field: &str, value: Option<&str>) -> T
where
    T: FromStr + Default,
{
    match value {
        None => T::default(),
        Some(s) => s.parse().unwrap_or_else(|_| {
            warn!(field, value = s, "未知取值，降级为默认值");
            T::default()
        }),
    }
}

/// 过滤无效位置并去重（保留首次出现的顺序）
fn normalize_zones(entries: Vec<String>) -> Result<Vec<Position>, ConfigError> {
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let mut zones = Vec::with_capacity(entries.len());
    for entry in &entries {
        match Position::parse(entry) {
            Some(position) if !zones.contains(&position) => zones.push(position),
            Some(position) => warn!(%position, "重复的 zone，已忽略"),
            None => warn!(zone = %entry, "未知的 zone 位置，已忽略"),
        }
    }

    if zones.is_empty() {
        return Err(ConfigError::NoValidZone { entries });
    }
    Ok(zones)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = normalize(RawConfig::default()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.position, Position::Bottom);
        assert_eq!(config.layer_count, 5);
        assert_eq!(config.height, "7rem");
        assert_eq!(config.z_index, 1000);
    }

    #[test]
    fn test_unknown_enums_fall_back() {
        let raw = RawConfig {
            position: Some("center".to_string()),
            curve: Some("cubic".to_string()),
            animated: Some("spin".to_string()),
            ..Default::default()
        };
        let config = normalize(raw).unwrap();
        assert_eq!(config.position, Position::Bottom);
        assert_eq!(config.curve, Curve::Linear);
        assert_eq!(config.animation, Animation::None);
    }

    #[test]
    fn test_layer_count_validation() {
        for bad in [0.0, -3.0, 2.5, 101.0, 4294967295.0, f64::NAN, f64::INFINITY] {
            let raw = RawConfig {
                layer_count: Some(bad),
                ..Default::default()
            };
            assert!(
                matches!(normalize(raw), Err(ConfigError::InvalidLayerCount { .. })),
                "{bad} 应被拒绝"
            );
        }

        let raw = RawConfig {
            layer_count: Some(12.0),
            ..Default::default()
        };
        assert_eq!(normalize(raw).unwrap().layer_count, 12);

        let raw = RawConfig {
            layer_count: Some(f64::from(defaults::MAX_LAYER_COUNT)),
            ..Default::default()
        };
        assert_eq!(normalize(raw).unwrap().layer_count, 100);
    }

    #[test]
    fn test_strength_validation() {
        for bad in [0.0, -1.0, f64::NAN] {
            let raw = RawConfig {
                strength: Some(bad),
                ..Default::default()
            };
            assert!(matches!(
                normalize(raw),
                Err(ConfigError::InvalidStrength { .. })
            ));
        }
    }

    #[test]
    fn test_opacity_validation() {
        for bad in [-0.1, 1.5, f64::INFINITY] {
            let raw = RawConfig {
                opacity: Some(bad),
                ..Default::default()
            };
            assert!(matches!(
                normalize(raw),
                Err(ConfigError::InvalidOpacity { .. })
            ));
        }

        let raw = RawConfig {
            opacity: Some(0.0),
            ..Default::default()
        };
        assert_eq!(normalize(raw).unwrap().opacity, 0.0);
    }

    #[test]
    fn test_hover_intensity_validation() {
        let raw = RawConfig {
            hover_intensity: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            normalize(raw),
            Err(ConfigError::InvalidHoverIntensity { .. })
        ));
    }

    #[test]
    fn test_zones_filter_and_dedup() {
        let raw = RawConfig {
            zones: Some(vec![
                "top".to_string(),
                "diagonal".to_string(),
                "Bottom".to_string(),
                "top".to_string(),
            ]),
            ..Default::default()
        };
        let config = normalize(raw).unwrap();
        assert_eq!(config.zones, vec![Position::Top, Position::Bottom]);
    }

    #[test]
    fn test_zones_without_valid_entry() {
        let raw = RawConfig {
            zones: Some(vec!["up".to_string(), "down".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            normalize(raw),
            Err(ConfigError::NoValidZone { .. })
        ));
    }

    #[test]
    fn test_animated_bool_spelling() {
        assert_eq!("true".parse::<Animation>(), Ok(Animation::Fade));
        assert_eq!("false".parse::<Animation>(), Ok(Animation::None));
    }

    #[test]
    fn test_hover_multiplier_requires_hover_trigger() {
        let mut config = Config {
            hover_intensity: Some(1.5),
            ..Default::default()
        };
        assert_eq!(config.hover_multiplier(), None);
        config.animation = Animation::Hover;
        assert_eq!(config.hover_multiplier(), Some(1.5));
    }

    #[test]
    fn test_raw_config_from_json() {
        let raw = RawConfig::from_json(
            r#"{ "position": "top", "divCount": 4, "zIndex": 20, "hoverIntensity": 2 }"#,
        )
        .unwrap();
        assert_eq!(raw.position.as_deref(), Some("top"));
        assert_eq!(raw.layer_count, Some(4.0));
        assert_eq!(raw.z_index, Some(20));
        assert_eq!(raw.hover_intensity, Some(2.0));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
