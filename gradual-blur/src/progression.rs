//! # Progression 模块
//!
//! 模糊强度递进计算。
//!
//! 第 `i` 层的归一化位置 `progress = i / n` 先经过曲线变换，再按增长模式换算为模糊半径（rem）：
//!
//! ```text
//! 指数模式: blur = 2^(progress' * 4) * 0.0625 * strength
//! 线性模式: blur = 0.0625 * (progress' * n + 1) * strength
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidArgument;
use crate::stops::round_to;

/// 模糊半径的基础单位（rem）
pub const BASE_BLUR_REM: f64 = 0.0625;

/// 指数模式下 progress 的放大倍数
const EXPONENT_SPAN: f64 = 4.0;

/// 递进曲线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Curve {
    /// 线性（不变换）
    #[default]
    Linear,
    /// 平滑阶跃（smoothstep）
    Bezier,
    /// 二次缓入缓出
    EaseInOut,
}

impl Curve {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Bezier => "bezier",
            Self::EaseInOut => "ease-in-out",
        }
    }

    /// 对进度应用曲线变换
    ///
    /// # 参数
    /// - `t`: 归一化进度 (0.0 - 1.0)
    ///
    /// # 返回
    /// - 变换后的进度 (0.0 - 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Bezier => t * t * (3.0 - 2.0 * t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Curve {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "bezier" => Ok(Self::Bezier),
            "ease-in-out" | "easeinout" | "ease_in_out" => Ok(Self::EaseInOut),
            _ => Err(InvalidArgument::InvalidEnum {
                kind: "曲线",
                value: s.to_string(),
                expected: "linear, bezier, ease-in-out",
            }),
        }
    }
}

/// 模糊增长参数
///
/// 同一配置下所有层共用，只有 `strength` 会随悬停状态变化。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    pub layer_count: u32,
    pub curve: Curve,
    pub exponential: bool,
    pub strength: f64,
}

impl Progression {
    /// 以倍率缩放强度（悬停效果）
    pub fn scaled(self, multiplier: f64) -> Self {
        Self {
            strength: self.strength * multiplier,
            ..self
        }
    }

    /// 第 `index` 层（1..=layer_count）的模糊半径（rem，未取整）
    pub fn magnitude(&self, index: u32) -> f64 {
        let n = f64::from(self.layer_count);
        let progress = self.curve.apply(f64::from(index) / n);

        if self.exponential {
            2f64.powf(progress * EXPONENT_SPAN) * BASE_BLUR_REM * self.strength
        } else {
            BASE_BLUR_REM * (progress * n + 1.0) * self.strength
        }
    }
}

/// 展示用取整：保留三位小数
pub fn display_magnitude(magnitude: f64) -> f64 {
    round_to(magnitude, 3)
}

/// 格式化为 CSS 长度，固定三位小数
pub fn format_rem(magnitude: f64) -> String {
    format!("{:.3}rem", display_magnitude(magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progression(exponential: bool, curve: Curve) -> Progression {
        Progression {
            layer_count: 5,
            curve,
            exponential,
            strength: 2.0,
        }
    }

    fn rounded(p: &Progression) -> Vec<f64> {
        (1..=p.layer_count)
            .map(|i| display_magnitude(p.magnitude(i)))
            .collect()
    }

    #[test]
    fn test_linear_growth() {
        let p = progression(false, Curve::Linear);
        assert_eq!(rounded(&p), vec![0.25, 0.375, 0.5, 0.625, 0.75]);
    }

    #[test]
    fn test_exponential_growth() {
        let p = progression(true, Curve::Linear);
        assert_eq!(rounded(&p), vec![0.218, 0.379, 0.66, 1.149, 2.0]);
    }

    #[test]
    fn test_hover_scaling() {
        let p = progression(false, Curve::Linear).scaled(1.5);
        assert_eq!(p.strength, 3.0);
        assert_eq!(display_magnitude(p.magnitude(1)), 0.375);
    }

    #[test]
    fn test_last_layer_independent_of_curve() {
        for curve in [Curve::Linear, Curve::Bezier, Curve::EaseInOut] {
            let p = progression(true, curve);
            assert_eq!(display_magnitude(p.magnitude(5)), 2.0);
        }
    }

    #[test]
    fn test_curves_stay_in_unit_interval() {
        for step in 0..=1000 {
            let t = f64::from(step) / 1000.0;
            for curve in [Curve::Linear, Curve::Bezier, Curve::EaseInOut] {
                let v = curve.apply(t);
                assert!((0.0..=1.0).contains(&v), "{curve} at {t} -> {v}");
            }
        }
    }

    #[test]
    fn test_curve_midpoints() {
        assert_eq!(Curve::Bezier.apply(0.5), 0.5);
        assert_eq!(Curve::EaseInOut.apply(0.5), 0.5);
        assert_eq!(Curve::EaseInOut.apply(0.25), 0.125);
    }

    #[test]
    fn test_format_rem() {
        assert_eq!(format_rem(0.25), "0.250rem");
        assert_eq!(format_rem(2.0), "2.000rem");
        // 恰好落在中点时远离零取整
        assert_eq!(format_rem(0.0625), "0.063rem");
    }

    #[test]
    fn test_curve_parse() {
        assert_eq!("Bezier".parse::<Curve>(), Ok(Curve::Bezier));
        assert_eq!("ease_in_out".parse::<Curve>(), Ok(Curve::EaseInOut));
        assert!("cubic".parse::<Curve>().is_err());
    }
}
