//! # Layer 模块
//!
//! 单个模糊层的描述：遮罩停靠点 + 模糊半径。
//! 每次生成都重新创建，不可变，输出后即丢弃。

use serde::{Deserialize, Serialize};

use crate::progression::{Progression, display_magnitude};
use crate::stops::{GradientStop, gradient_stops_css, layer_stops};

/// 模糊层描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// 层序号（从 1 开始）
    pub index: u32,
    /// 遮罩渐变停靠点（2~4 个）
    pub stops: Vec<GradientStop>,
    /// 模糊半径（rem，未取整）
    pub blur_magnitude: f64,
}

impl Layer {
    /// 按增长参数构建第 `index` 层
    pub fn build(progression: &Progression, index: u32) -> Self {
        Self {
            index,
            stops: layer_stops(progression.layer_count, index),
            blur_magnitude: progression.magnitude(index),
        }
    }

    /// 展示用模糊半径（三位小数）
    pub fn blur_rem(&self) -> f64 {
        display_magnitude(self.blur_magnitude)
    }

    /// `linear-gradient` 的停靠点部分
    pub fn gradient(&self) -> String {
        gradient_stops_css(&self.stops)
    }
}

/// 构建全部 `layer_count` 层
pub fn build_layers(progression: &Progression) -> Vec<Layer> {
    (1..=progression.layer_count)
        .map(|index| Layer::build(progression, index))
        .collect()
}
