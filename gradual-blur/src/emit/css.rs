//! CSS 输出
//!
//! 输出顺序：
//!
//! ```text
//! 每个区域:
//!   容器规则 → 响应式断点 → 内层容器 → 每层规则 → 悬停规则
//! 全局:
//!   淡入关键帧 → 滚动可见类 → 减少动态效果 → 结构注释
//! ```

use std::fmt::{self, Write};

use super::{Emitter, write_zone_markup};
use crate::config::{Animation, Config};
use crate::progression::format_rem;
use crate::zone::Zone;

/// 三档断点的媒体查询
const MOBILE_QUERY: &str = "(max-width: 768px)";
const TABLET_QUERY: &str = "(min-width: 769px) and (max-width: 1024px)";
const DESKTOP_QUERY: &str = "(min-width: 1025px)";

/// 样式表输出策略
#[derive(Debug, Clone, Copy, Default)]
pub struct CssEmitter;

impl Emitter for CssEmitter {
    fn write(&self, out: &mut dyn Write, config: &Config, zones: &[Zone]) -> fmt::Result {
        for zone in zones {
            write_container(out, config, zone)?;
            write_breakpoints(out, config, zone)?;
            write_inner(out, zone)?;
            write_layers(out, config, zone)?;
            write_hover(out, config, zone)?;
        }
        write_animation_rules(out, config)?;
        write_reduced_motion(out, config)?;
        write_structure_comment(out, config, zones)
    }
}

fn write_container(out: &mut dyn Write, config: &Config, zone: &Zone) -> fmt::Result {
    let suffix = zone.class_suffix();

    writeln!(out, ".gradual-blur{suffix} {{")?;
    writeln!(out, "  height: {};", config.height)?;
    writeln!(out, "  width: {};", config.width)?;
    writeln!(out, "  position: fixed;")?;
    writeln!(out, "  {}: 0;", zone.position)?;
    writeln!(out, "  {}: 0;", zone.position.cross_axis_anchor())?;
    writeln!(out, "  z-index: {};", zone.z_index(config.z_index))?;
    writeln!(out, "  pointer-events: none;")?;

    if config.gpu_optimized {
        writeln!(out, "  will-change: transform, opacity;")?;
        writeln!(out, "  transform: translateZ(0);")?;
    }

    if config.animation.is_animated() {
        writeln!(
            out,
            "  transition: opacity {} {};",
            config.duration, config.easing
        )?;
        if config.animation == Animation::Scroll {
            writeln!(out, "  opacity: 0;")?;
        }
    }

    if let Some(tint) = &config.tint {
        writeln!(out, "  background: {tint};")?;
    }

    writeln!(out, "}}\n")
}

fn write_breakpoints(out: &mut dyn Write, config: &Config, zone: &Zone) -> fmt::Result {
    if !config.responsive {
        return Ok(());
    }

    let suffix = zone.class_suffix();
    let tiers = [
        (MOBILE_QUERY, &config.breakpoints.mobile),
        (TABLET_QUERY, &config.breakpoints.tablet),
        (DESKTOP_QUERY, &config.breakpoints.desktop),
    ];
    for (query, height) in tiers {
        if let Some(height) = height {
            writeln!(out, "@media {query} {{")?;
            writeln!(out, "  .gradual-blur{suffix} {{ height: {height}; }}")?;
            writeln!(out, "}}\n")?;
        }
    }
    Ok(())
}

fn write_inner(out: &mut dyn Write, zone: &Zone) -> fmt::Result {
    writeln!(out, ".gradual-blur-inner{} {{", zone.class_suffix())?;
    writeln!(out, "  position: relative;")?;
    writeln!(out, "  width: 100%;")?;
    writeln!(out, "  height: 100%;")?;
    writeln!(out, "}}\n")
}

fn write_layers(out: &mut dyn Write, config: &Config, zone: &Zone) -> fmt::Result {
    let suffix = zone.class_suffix();
    let direction = zone.direction();
    let layer_transition =
        config.animation.is_animated() && config.animation != Animation::Scroll;

    for layer in &zone.layers {
        let gradient = layer.gradient();

        writeln!(out, ".gradual-blur-layer-{}{suffix} {{", layer.index)?;
        writeln!(out, "  position: absolute;")?;
        writeln!(out, "  inset: 0;")?;
        writeln!(out, "  mask-image: linear-gradient({direction}, {gradient});")?;
        writeln!(
            out,
            "  -webkit-mask-image: linear-gradient({direction}, {gradient});"
        )?;
        writeln!(
            out,
            "  backdrop-filter: blur({});",
            format_rem(layer.blur_magnitude)
        )?;
        writeln!(out, "  opacity: {};", config.opacity)?;
        if layer_transition {
            writeln!(
                out,
                "  transition: backdrop-filter {} {};",
                config.duration, config.easing
            )?;
        }
        writeln!(out, "}}\n")?;
    }
    Ok(())
}

/// 悬停时按倍率重新计算每层模糊半径
fn write_hover(out: &mut dyn Write, config: &Config, zone: &Zone) -> fmt::Result {
    let Some(multiplier) = config.hover_multiplier() else {
        return Ok(());
    };

    let suffix = zone.class_suffix();
    let hovered = config.progression().scaled(multiplier);
    for layer in &zone.layers {
        writeln!(
            out,
            ".gradual-blur{suffix}:hover .gradual-blur-layer-{}{suffix} {{",
            layer.index
        )?;
        writeln!(
            out,
            "  backdrop-filter: blur({});",
            format_rem(hovered.magnitude(layer.index))
        )?;
        writeln!(out, "}}\n")?;
    }
    Ok(())
}

fn write_animation_rules(out: &mut dyn Write, config: &Config) -> fmt::Result {
    match config.animation {
        Animation::Fade => {
            writeln!(out, "@keyframes gradual-blur-fade-in {{")?;
            writeln!(out, "  from {{ opacity: 0; }}")?;
            writeln!(out, "  to {{ opacity: 1; }}")?;
            writeln!(out, "}}\n")?;

            writeln!(out, ".gradual-blur-animated {{")?;
            writeln!(
                out,
                "  animation: gradual-blur-fade-in {} {};",
                config.duration, config.easing
            )?;
            writeln!(out, "}}\n")
        }
        Animation::Scroll => {
            writeln!(out, ".gradual-blur-visible {{")?;
            writeln!(out, "  opacity: 1 !important;")?;
            writeln!(out, "}}\n")
        }
        Animation::None | Animation::Hover => Ok(()),
    }
}

fn write_reduced_motion(out: &mut dyn Write, config: &Config) -> fmt::Result {
    if !config.reduced_motion {
        return Ok(());
    }

    writeln!(out, "@media (prefers-reduced-motion: reduce) {{")?;
    writeln!(out, "  .gradual-blur, .gradual-blur * {{")?;
    writeln!(out, "    animation-duration: 0.01ms !important;")?;
    writeln!(out, "    animation-iteration-count: 1 !important;")?;
    writeln!(out, "    transition-duration: 0.01ms !important;")?;
    writeln!(out, "  }}")?;
    writeln!(out, "}}\n")
}

fn write_structure_comment(out: &mut dyn Write, config: &Config, zones: &[Zone]) -> fmt::Result {
    writeln!(out, "/*")?;
    writeln!(out, "HTML Structure:")?;
    for zone in zones {
        write_zone_markup(out, config, zone)?;
        out.write_str("\n\n")?;
    }

    if config.animation == Animation::Scroll {
        writeln!(out, "JavaScript for scroll trigger:")?;
        writeln!(
            out,
            "const observer = new IntersectionObserver(entries => {{"
        )?;
        writeln!(out, "  entries.forEach(entry => {{")?;
        writeln!(
            out,
            "    entry.target.classList.toggle('gradual-blur-visible', entry.isIntersecting);"
        )?;
        writeln!(out, "  }});")?;
        writeln!(out, "}});")?;
        writeln!(
            out,
            "document.querySelectorAll('.gradual-blur').forEach(el => observer.observe(el));"
        )?;
    }

    write!(out, "*/")
}
