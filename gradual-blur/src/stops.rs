//! # Stops 模块
//!
//! 计算每一层遮罩渐变的停靠点。
//!
//! 第 `i` 层（从 1 开始）在 `n` 层中占据的窗口：
//!
//! ```text
//! step = 100 / n
//! p1 = step*(i-1)   透明
//! p2 = step*i       不透明
//! p3 = step*(i+1)   不透明（仅当 p3 <= 100）
//! p4 = step*(i+2)   透明  （仅当 p3、p4 都 <= 100）
//! ```
//!
//! 中间层得到完整的四点"窗口"，最后两层在末端截断。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 停靠点颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopColor {
    /// 完全透明（遮罩隐藏）
    Transparent,
    /// 完全不透明（遮罩显示）
    Opaque,
}

impl StopColor {
    /// CSS 颜色值
    pub fn css(&self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::Opaque => "black",
        }
    }
}

/// 渐变停靠点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: StopColor,
    /// 百分比位置，保留一位小数
    pub percent: f64,
}

impl GradientStop {
    pub fn transparent(percent: f64) -> Self {
        Self {
            color: StopColor::Transparent,
            percent,
        }
    }

    pub fn opaque(percent: f64) -> Self {
        Self {
            color: StopColor::Opaque,
            percent,
        }
    }
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.color.css(), self.percent)
    }
}

/// 四舍五入到指定小数位（远离零方向）
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// 计算第 `index` 层（1..=layer_count）的停靠点，返回 2~4 个点
pub fn layer_stops(layer_count: u32, index: u32) -> Vec<GradientStop> {
    debug_assert!(layer_count >= 1 && (1..=layer_count).contains(&index));

    let step = 100.0 / f64::from(layer_count);
    let at = |k: u32| round_to(step * f64::from(k), 1);

    let p1 = at(index - 1);
    let p2 = at(index);
    let p3 = at(index + 1);
    let p4 = at(index + 2);

    let mut stops = vec![GradientStop::transparent(p1), GradientStop::opaque(p2)];
    if p3 <= 100.0 {
        stops.push(GradientStop::opaque(p3));
        if p4 <= 100.0 {
            stops.push(GradientStop::transparent(p4));
        }
    }
    stops
}

/// 拼接为 `linear-gradient` 的停靠点列表
pub fn gradient_stops_css(stops: &[GradientStop]) -> String {
    stops
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
