//! # Gradual Blur
//!
//! 渐进模糊遮罩生成器的核心库。
//!
//! ## 架构概述
//!
//! `gradual-blur` 是纯逻辑核心，不依赖任何 IO 或渲染环境。
//! 多层半透明模糊层叠加，每层使用不同的遮罩渐变窗口和递增的 `backdrop-filter` 半径，
//! 形成从清晰到模糊的平滑过渡（常用于吸顶/吸底栏）。
//!
//! ```text
//! RawConfig
//!   │ apply_preset()          预设合并（显式字段优先）
//!   │ normalize()             默认值填充与校验
//!   ▼
//! Config
//!   │ generate_layers()       区域展开 × (停靠点, 模糊半径, 方向)
//!   ▼
//! Vec<Zone>
//!   │ emit_css() / emit_html()
//!   ▼
//! String
//! ```
//!
//! UI 绑定与命令行都只是这条管线的调用方。
//!
//! ## 使用示例
//!
//! ```ignore
//! use gradual_blur::{RawConfig, emit_css, generate_layers, resolve_config};
//!
//! let config = resolve_config(RawConfig {
//!     preset: Some("hero".to_string()),
//!     ..Default::default()
//! })?;
//! let zones = generate_layers(&config);
//! let css = emit_css(&config, &zones);
//! ```
//!
//! ## 模块结构
//!
//! - [`config`]：原始配置与规范化
//! - [`preset`]：内置预设
//! - [`direction`]：边缘位置与渐变方向
//! - [`stops`]：遮罩停靠点
//! - [`progression`]：模糊半径递进曲线
//! - [`layer`] / [`zone`]：层与区域描述
//! - [`emit`]：CSS / HTML 输出
//! - [`attrs`]：标记属性解析
//! - [`view`]：宿主交互状态
//! - [`error`]：错误类型定义

pub mod attrs;
pub mod config;
pub mod direction;
pub mod emit;
pub mod error;
pub mod layer;
pub mod preset;
pub mod progression;
pub mod stops;
pub mod view;
pub mod zone;

// 重导出核心类型
pub use attrs::parse_attributes;
pub use config::{Animation, Breakpoints, Config, RawConfig, normalize, resolve_config};
pub use direction::{Position, gradient_direction};
pub use emit::{CssEmitter, Emitter, HtmlEmitter, OutputFormat, emit_css, emit_html};
pub use error::{BlurError, BlurResult, ConfigError, InvalidArgument};
pub use layer::Layer;
pub use preset::{PRESET_NAMES, apply_preset};
pub use progression::{Curve, Progression};
pub use stops::{GradientStop, StopColor};
pub use view::{ViewState, ViewportTier};
pub use zone::{Zone, generate_layers};

/// 执行完整管线：预设合并 → 规范化 → 生成 → 输出
pub fn render(raw: RawConfig, format: OutputFormat) -> BlurResult<String> {
    let config = resolve_config(raw)?;
    let zones = generate_layers(&config);
    Ok(format.emitter().emit(&config, &zones))
}
