//! # Emit 模块
//!
//! 将区域/层描述序列化为文本。
//!
//! 两种可互换的输出策略，均为纯函数，相同输入得到逐字节相同的输出：
//!
//! - [`CssEmitter`]：完整样式表，末尾附带结构注释
//! - [`HtmlEmitter`]：仅输出嵌套的 DOM 骨架

mod css;
mod html;

pub use css::CssEmitter;
pub use html::HtmlEmitter;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use crate::config::{Animation, Config};
use crate::zone::Zone;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Css,
    Html,
}

/// 输出策略
pub trait Emitter {
    /// 写入任意文本目标
    fn write(&self, out: &mut dyn Write, config: &Config, zones: &[Zone]) -> fmt::Result;

    /// 输出为字符串
    fn emit(&self, config: &Config, zones: &[Zone]) -> String {
        let mut out = String::new();
        let written = self.write(&mut out, config, zones);
        debug_assert!(written.is_ok(), "写入 String 不会失败");
        out
    }
}

impl OutputFormat {
    /// 对应的输出策略
    pub fn emitter(&self) -> &'static dyn Emitter {
        match self {
            Self::Css => &CssEmitter,
            Self::Html => &HtmlEmitter,
        }
    }
}

/// 输出样式表
pub fn emit_css(config: &Config, zones: &[Zone]) -> String {
    CssEmitter.emit(config, zones)
}

/// 输出 DOM 骨架
pub fn emit_html(config: &Config, zones: &[Zone]) -> String {
    HtmlEmitter.emit(config, zones)
}

/// 写入单个区域的 DOM 骨架（不含末尾换行）
pub(crate) fn write_zone_markup(out: &mut dyn Write, config: &Config, zone: &Zone) -> fmt::Result {
    let suffix = zone.class_suffix();
    let animated_class = if config.animation == Animation::Fade {
        " gradual-blur-animated"
    } else {
        ""
    };

    writeln!(out, "<div class=\"gradual-blur{suffix}{animated_class}\">")?;
    writeln!(out, "  <div class=\"gradual-blur-inner{suffix}\">")?;
    for layer in &zone.layers {
        writeln!(
            out,
            "    <div class=\"gradual-blur-layer-{}{suffix}\"></div>",
            layer.index
        )?;
    }
    writeln!(out, "  </div>")?;
    write!(out, "</div>")
}
