//! 命令行参数定义与到 [`RawConfig`] 的映射。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件（`--config`，JSON）
//! 3. 预设（`--preset`）
//! 4. 默认值（最低）

use clap::{ArgAction, Parser};
use gradual_blur::{Animation, Curve, Position, RawConfig};
use std::path::PathBuf;

/// 命令行独有的默认值，仅在对应功能启用时生效
const DEFAULT_MOBILE_HEIGHT: &str = "4rem";
const DEFAULT_TABLET_HEIGHT: &str = "6rem";
const DEFAULT_HOVER_INTENSITY: f64 = 1.5;

#[derive(Parser, Debug)]
#[command(name = "gradual-blur")]
#[command(about = "生成渐进模糊效果的 CSS / HTML")]
#[command(version)]
#[command(after_help = "\
示例:
  gradual-blur                                    # 基本用法
  gradual-blur --preset hero                      # 使用 hero 预设
  gradual-blur --animated scroll                  # 滚动触发
  gradual-blur --tint \"rgba(0,0,0,0.3)\"           # 颜色叠加
  gradual-blur --responsive --mobile-height 3rem  # 响应式
  gradual-blur --curve bezier --zones top,bottom  # 多区域")]
pub struct Cli {
    /// 贴靠位置 (top|bottom|left|right)
    #[arg(short, long)]
    pub position: Option<Position>,

    /// 模糊强度倍率
    #[arg(short, long)]
    pub strength: Option<f64>,

    /// 效果高度
    #[arg(long)]
    pub height: Option<String>,

    /// 效果宽度
    #[arg(short, long)]
    pub width: Option<String>,

    /// 模糊层数
    #[arg(short, long, allow_negative_numbers = true)]
    pub divs: Option<i64>,

    /// 使用指数递进
    #[arg(short, long)]
    pub exponential: bool,

    /// 递进曲线 (linear|bezier|ease-in-out)
    #[arg(long)]
    pub curve: Option<Curve>,

    /// z-index
    #[arg(short, long, allow_negative_numbers = true)]
    pub zindex: Option<i64>,

    /// 动画触发方式 (scroll|hover|fade)，不带值时为 fade
    #[arg(long, num_args = 0..=1, default_missing_value = "fade")]
    pub animated: Option<Animation>,

    /// 动画时长
    #[arg(long)]
    pub duration: Option<String>,

    /// 动画缓动函数
    #[arg(long)]
    pub easing: Option<String>,

    /// 颜色叠加
    #[arg(long)]
    pub tint: Option<String>,

    /// 模糊层不透明度
    #[arg(long)]
    pub opacity: Option<f64>,

    /// 启用响应式断点
    #[arg(long)]
    pub responsive: bool,

    /// 移动端高度（默认 4rem）
    #[arg(long)]
    pub mobile_height: Option<String>,

    /// 平板高度（默认 6rem）
    #[arg(long)]
    pub tablet_height: Option<String>,

    /// 桌面端高度
    #[arg(long)]
    pub desktop_height: Option<String>,

    /// 预设 (hero|navigation|modal|card)
    #[arg(long)]
    pub preset: Option<String>,

    /// 多区域（逗号分隔）
    #[arg(long, value_delimiter = ',')]
    pub zones: Option<Vec<Position>>,

    /// 输出 GPU 优化提示
    #[arg(long)]
    pub gpu_optimized: bool,

    /// 输出 prefers-reduced-motion 规则
    #[arg(long)]
    pub reduced_motion: bool,

    /// 悬停时的强度倍率（默认 1.5）
    #[arg(long)]
    pub hover_intensity: Option<f64>,

    /// 从 JSON 文件读取配置（命令行参数优先）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 输出到文件
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出 HTML 骨架而非 CSS
    #[arg(long, conflicts_with = "json")]
    pub html: bool,

    /// 输出层描述 JSON
    #[arg(long)]
    pub json: bool,

    /// 日志详细程度（-v: info, -vv: debug）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// 命令行显式给出的字段
    pub fn explicit_fields(&self) -> RawConfig {
        RawConfig {
            preset: self.preset.clone(),
            position: self.position.map(|p| p.to_string()),
            strength: self.strength,
            height: self.height.clone(),
            width: self.width.clone(),
            layer_count: self.divs.map(|n| n as f64),
            exponential: self.exponential.then_some(true),
            curve: self.curve.map(|c| c.to_string()),
            z_index: self.zindex,
            animated: self.animated.map(|a| a.to_string()),
            duration: self.duration.clone(),
            easing: self.easing.clone(),
            tint: self.tint.clone(),
            opacity: self.opacity,
            responsive: self.responsive.then_some(true),
            mobile_height: self.mobile_height.clone(),
            tablet_height: self.tablet_height.clone(),
            desktop_height: self.desktop_height.clone(),
            zones: self
                .zones
                .as_ref()
                .map(|zones| zones.iter().map(ToString::to_string).collect()),
            gpu_optimized: self.gpu_optimized.then_some(true),
            reduced_motion: self.reduced_motion.then_some(true),
            hover_intensity: self.hover_intensity,
        }
    }

    /// 合并命令行、配置文件与命令行默认值
    pub fn raw_config(&self, file: Option<RawConfig>) -> RawConfig {
        let cli_defaults = RawConfig {
            mobile_height: Some(DEFAULT_MOBILE_HEIGHT.to_string()),
            tablet_height: Some(DEFAULT_TABLET_HEIGHT.to_string()),
            hover_intensity: Some(DEFAULT_HOVER_INTENSITY),
            ..Default::default()
        };

        let explicit = self.explicit_fields();
        match file {
            Some(file) => explicit.or(&file.or(&cli_defaults)),
            None => explicit.or(&cli_defaults),
        }
    }

    /// 输出内容的描述（用于提示信息）
    pub fn output_kind(&self) -> &'static str {
        if self.json {
            "JSON"
        } else if self.html {
            "HTML"
        } else {
            "CSS"
        }
    }
}
