//! # Zone 模块
//!
//! 多区域展开：同一份配置在多个边缘同时生成模糊效果。
//!
//! - `zones` 为空：只在 `position` 生成一个区域，类名不带后缀
//! - `zones` 非空：按顺序每个位置一个区域，z-index 偏移依次为 0, 1, 2, …，
//!   类名带 `-<position>` 后缀，后出现的区域绘制在上层

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::direction::Position;
use crate::layer::{Layer, build_layers};

/// 区域描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// 贴靠边缘
    pub position: Position,
    /// z-index 偏移
    pub z_offset: u32,
    /// 类名是否带位置后缀
    pub suffixed: bool,
    /// 该区域的模糊层
    pub layers: Vec<Layer>,
}

impl Zone {
    /// 类名后缀（如 `-top`），单区域时为空
    pub fn class_suffix(&self) -> String {
        if self.suffixed {
            format!("-{}", self.position)
        } else {
            String::new()
        }
    }

    /// 遮罩渐变方向
    pub fn direction(&self) -> &'static str {
        self.position.gradient_direction()
    }

    /// 实际 z-index（在 i64 边界处饱和）
    pub fn z_index(&self, base: i64) -> i64 {
        base.saturating_add(i64::from(self.z_offset))
    }
}

/// 展开区域列表：`(位置, 偏移, 是否带后缀)`
pub fn expand_zones(config: &Config) -> Vec<(Position, u32, bool)> {
    if config.zones.is_empty() {
        return vec![(config.position, 0, false)];
    }

    config
        .zones
        .iter()
        .zip(0u32..)
        .map(|(&position, offset)| (position, offset, true))
        .collect()
}

/// 生成所有区域及其模糊层
///
/// 各区域的层完全相同（停靠点与模糊半径与方向无关），方向只在输出时体现。
pub fn generate_layers(config: &Config) -> Vec<Zone> {
    let progression = config.progression();
    let layers = build_layers(&progression);

    let zones: Vec<Zone> = expand_zones(config)
        .into_iter()
        .map(|(position, z_offset, suffixed)| Zone {
            position,
            z_offset,
            suffixed,
            layers: layers.clone(),
        })
        .collect();

    debug!(
        zones = zones.len(),
        layers = config.layer_count,
        "生成模糊层"
    );
    zones
}
