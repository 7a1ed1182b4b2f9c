//! # Attrs 模块
//!
//! 从标记属性（`data-gradual-blur-*`）读取配置。
//!
//! 属性名按固定表映射到 [`RawConfig`] 的字段，值按字段类型严格解析：
//! 未知属性、无法解析的数字/布尔值、不在取值范围内的枚举都返回 [`InvalidArgument`]，
//! 不做隐式类型猜测。
//!
//! 属性名可带或不带 `data-gradual-blur-` 前缀，支持 kebab-case 与 dataset 的
//! camelCase 写法（`gradualBlurDivCount`），不区分大小写。

use crate::config::{Animation, RawConfig};
use crate::direction::Position;
use crate::error::InvalidArgument;
use crate::progression::Curve;

const ATTR_PREFIX: &str = "data-gradual-blur-";
const DATASET_PREFIX: &str = "gradualblur";

/// 属性字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Preset,
    Position,
    Strength,
    Height,
    Width,
    LayerCount,
    Exponential,
    Curve,
    ZIndex,
    Animated,
    Duration,
    Easing,
    Tint,
    Opacity,
    Responsive,
    MobileHeight,
    TabletHeight,
    DesktopHeight,
    Zones,
    GpuOptimized,
    ReducedMotion,
    HoverIntensity,
}

impl Field {
    /// 按规范化后的属性名（去前缀、去分隔符、小写）查找
    fn lookup(key: &str) -> Option<Self> {
        let field = match key {
            "preset" => Self::Preset,
            "position" => Self::Position,
            "strength" => Self::Strength,
            "height" => Self::Height,
            "width" => Self::Width,
            "divs" | "divcount" | "layercount" => Self::LayerCount,
            "exponential" => Self::Exponential,
            "curve" => Self::Curve,
            "zindex" => Self::ZIndex,
            "animated" => Self::Animated,
            "duration" => Self::Duration,
            "easing" => Self::Easing,
            "tint" => Self::Tint,
            "opacity" => Self::Opacity,
            "responsive" => Self::Responsive,
            "mobileheight" => Self::MobileHeight,
            "tabletheight" => Self::TabletHeight,
            "desktopheight" => Self::DesktopHeight,
            "zones" => Self::Zones,
            "gpuoptimized" => Self::GpuOptimized,
            "reducedmotion" => Self::ReducedMotion,
            "hoverintensity" => Self::HoverIntensity,
            _ => return None,
        };
        Some(field)
    }
}

/// 规范化属性名：去掉前缀与 `-` / `_`，转小写
fn canonical_key(key: &str) -> String {
    let lower = key.trim().to_lowercase();
    let stripped = lower
        .strip_prefix(ATTR_PREFIX)
        .unwrap_or(lower.as_str())
        .replace(['-', '_'], "");
    if let Some(rest) = stripped
        .strip_prefix(DATASET_PREFIX)
        .filter(|rest| !rest.is_empty())
    {
        return rest.to_string();
    }
    stripped
}

fn parse_number(key: &str, value: &str) -> Result<f64, InvalidArgument> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| InvalidArgument::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn parse_integer(key: &str, value: &str) -> Result<i64, InvalidArgument> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| InvalidArgument::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// 空值视为 `true`（与 HTML 布尔属性一致）
fn parse_bool(key: &str, value: &str) -> Result<bool, InvalidArgument> {
    match value.trim().to_lowercase().as_str() {
        "" | "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(InvalidArgument::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// 校验枚举取值并保留原文本
fn checked_enum<T>(value: &str) -> Result<String, InvalidArgument>
where
    T: std::str::FromStr<Err = InvalidArgument>,
{
    value.parse::<T>()?;
    Ok(value.trim().to_string())
}

fn parse_zones(value: &str) -> Result<Vec<String>, InvalidArgument> {
    value
        .split(',')
        .map(checked_enum::<Position>)
        .collect()
}

/// 将属性键值对解析为原始配置
///
/// 同一字段出现多次时，后出现的值生效。
pub fn parse_attributes<I, K, V>(pairs: I) -> Result<RawConfig, InvalidArgument>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut raw = RawConfig::default();

    for (key, value) in pairs {
        let key = key.as_ref();
        let value = value.as_ref();
        let field = Field::lookup(&canonical_key(key)).ok_or_else(|| {
            InvalidArgument::UnknownKey {
                key: key.to_string(),
            }
        })?;

        match field {
            Field::Preset => raw.preset = Some(value.trim().to_string()),
            Field::Position => raw.position = Some(checked_enum::<Position>(value)?),
            Field::Strength => raw.strength = Some(parse_number(key, value)?),
            Field::Height => raw.height = Some(value.trim().to_string()),
            Field::Width => raw.width = Some(value.trim().to_string()),
            Field::LayerCount => raw.layer_count = Some(parse_number(key, value)?),
            Field::Exponential => raw.exponential = Some(parse_bool(key, value)?),
            Field::Curve => raw.curve = Some(checked_enum::<Curve>(value)?),
            Field::ZIndex => raw.z_index = Some(parse_integer(key, value)?),
            Field::Animated => raw.animated = Some(checked_enum::<Animation>(value)?),
            Field::Duration => raw.duration = Some(value.trim().to_string()),
            Field::Easing => raw.easing = Some(value.trim().to_string()),
            Field::Tint => raw.tint = Some(value.trim().to_string()),
            Field::Opacity => raw.opacity = Some(parse_number(key, value)?),
            Field::Responsive => raw.responsive = Some(parse_bool(key, value)?),
            Field::MobileHeight => raw.mobile_height = Some(value.trim().to_string()),
            Field::TabletHeight => raw.tablet_height = Some(value.trim().to_string()),
            Field::DesktopHeight => raw.desktop_height = Some(value.trim().to_string()),
            Field::Zones => raw.zones = Some(parse_zones(value)?),
            Field::GpuOptimized => raw.gpu_optimized = Some(parse_bool(key, value)?),
            Field::ReducedMotion => raw.reduced_motion = Some(parse_bool(key, value)?),
            Field::HoverIntensity => raw.hover_intensity = Some(parse_number(key, value)?),
        }
    }

    Ok(raw)
}
