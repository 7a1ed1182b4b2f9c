//! # View 模块
//!
//! 宿主组件的交互状态建模。
//!
//! 悬停、滚动可见性、当前视口档位这三项随时间变化的状态由宿主持有，
//! 核心只负责根据状态推导出"有效配置"，宿主再用它重新调用生成管线：
//!
//! ```text
//! Host                              Core
//!   │ ViewState + Config              │
//!   │──── effective_config() ───────►│
//!   │◄─── Config ─────────────────────│
//!   │──── generate_layers() ────────►│
//!   │◄─── Vec<Zone> ──────────────────│
//! ```
//!
//! 状态值不可变，`with_*` 方法返回新值。

use serde::{Deserialize, Serialize};

use crate::config::{Animation, Config};

/// 视口档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportTier {
    /// ≤ 768px
    Mobile,
    /// 769px - 1024px
    Tablet,
    /// ≥ 1025px
    #[default]
    Desktop,
}

impl ViewportTier {
    /// 按视口宽度（CSS 像素）判定档位
    pub fn from_width(width: u32) -> Self {
        match width {
            0..=768 => Self::Mobile,
            769..=1024 => Self::Tablet,
            _ => Self::Desktop,
        }
    }
}

/// 宿主组件的交互状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    /// 指针是否悬停在元素上
    pub hovered: bool,
    /// 元素是否可见（滚动触发时由视口交叉结果决定）
    pub visible: bool,
    /// 当前视口档位
    pub tier: ViewportTier,
}

impl ViewState {
    /// 挂载时的初始状态：滚动触发的效果初始不可见，其余始终可见
    pub fn initial(config: &Config) -> Self {
        Self {
            hovered: false,
            visible: config.animation != Animation::Scroll,
            tier: ViewportTier::default(),
        }
    }

    pub fn with_hovered(self, hovered: bool) -> Self {
        Self { hovered, ..self }
    }

    pub fn with_visible(self, visible: bool) -> Self {
        Self { visible, ..self }
    }

    /// 按视口宽度更新档位
    pub fn with_width(self, width: u32) -> Self {
        Self {
            tier: ViewportTier::from_width(width),
            ..self
        }
    }

    /// 当前状态下实际生效的强度
    ///
    /// 只要设置了悬停倍率，悬停时即放大；与 CSS 输出中的 `:hover` 规则不同，
    /// 这里不要求动画触发方式为 `hover`。
    pub fn effective_strength(&self, config: &Config) -> f64 {
        match (self.hovered, config.hover_intensity) {
            (true, Some(multiplier)) => config.strength * multiplier,
            _ => config.strength,
        }
    }

    /// 当前状态下实际生效的高度
    pub fn effective_height<'a>(&self, config: &'a Config) -> &'a str {
        if !config.responsive {
            return &config.height;
        }

        let breakpoint = match self.tier {
            ViewportTier::Mobile => &config.breakpoints.mobile,
            ViewportTier::Tablet => &config.breakpoints.tablet,
            ViewportTier::Desktop => &config.breakpoints.desktop,
        };
        breakpoint.as_deref().unwrap_or(config.height.as_str())
    }

    /// 容器不透明度（滚动触发时随可见性切换）
    pub fn container_opacity(&self, config: &Config) -> f64 {
        if config.animation == Animation::Scroll && !self.visible {
            0.0
        } else {
            1.0
        }
    }

    /// 推导有效配置，用于重新生成
    pub fn effective_config(&self, config: &Config) -> Config {
        Config {
            strength: self.effective_strength(config),
            height: self.effective_height(config).to_string(),
            ..config.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Breakpoints;
    use crate::zone::generate_layers;

    fn responsive_config() -> Config {
        Config {
            responsive: true,
            breakpoints: Breakpoints {
                mobile: Some("3rem".to_string()),
                tablet: Some("5rem".to_string()),
                desktop: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ViewportTier::from_width(320), ViewportTier::Mobile);
        assert_eq!(ViewportTier::from_width(768), ViewportTier::Mobile);
        assert_eq!(ViewportTier::from_width(769), ViewportTier::Tablet);
        assert_eq!(ViewportTier::from_width(1024), ViewportTier::Tablet);
        assert_eq!(ViewportTier::from_width(1025), ViewportTier::Desktop);
    }

    #[test]
    fn test_initial_visibility() {
        let scroll = Config {
            animation: Animation::Scroll,
            ..Default::default()
        };
        let state = ViewState::initial(&scroll);
        assert!(!state.visible);
        assert_eq!(state.container_opacity(&scroll), 0.0);
        assert_eq!(state.with_visible(true).container_opacity(&scroll), 1.0);

        assert!(ViewState::initial(&Config::default()).visible);
    }

    #[test]
    fn test_hover_scales_strength() {
        let config = Config {
            hover_intensity: Some(1.5),
            ..Default::default()
        };
        let state = ViewState::initial(&config);
        assert_eq!(state.effective_strength(&config), 2.0);
        assert_eq!(state.with_hovered(true).effective_strength(&config), 3.0);

        // 未设置倍率时悬停无效果
        let plain = Config::default();
        assert_eq!(state.with_hovered(true).effective_strength(&plain), 2.0);
    }

    #[test]
    fn test_responsive_height() {
        let config = responsive_config();
        let state = ViewState::initial(&config);

        assert_eq!(state.with_width(400).effective_height(&config), "3rem");
        assert_eq!(state.with_width(900).effective_height(&config), "5rem");
        // 桌面档未设置，回退到基础高度
        assert_eq!(state.with_width(1440).effective_height(&config), "7rem");

        let fixed = Config {
            responsive: false,
            ..responsive_config()
        };
        assert_eq!(state.with_width(400).effective_height(&fixed), "7rem");
    }

    #[test]
    fn test_regenerate_with_effective_config() {
        let config = Config {
            hover_intensity: Some(2.0),
            ..Default::default()
        };
        let hovered = ViewState::initial(&config).with_hovered(true);
        let zones = generate_layers(&hovered.effective_config(&config));

        let blurs: Vec<f64> = zones[0].layers.iter().map(|l| l.blur_rem()).collect();
        assert_eq!(blurs, vec![0.5, 0.75, 1.0, 1.25, 1.5]);
    }
}
