//! HTML 骨架输出：每个区域一组嵌套容器，区域之间空一行。

use std::fmt::{self, Write};

use super::{Emitter, write_zone_markup};
use crate::config::Config;
use crate::zone::Zone;

/// DOM 骨架输出策略（不含样式）
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEmitter;

impl Emitter for HtmlEmitter {
    fn write(&self, out: &mut dyn Write, config: &Config, zones: &[Zone]) -> fmt::Result {
        for (i, zone) in zones.iter().enumerate() {
            if i > 0 {
                out.write_str("\n\n")?;
            }
            write_zone_markup(out, config, zone)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Animation;
    use crate::direction::Position;
    use crate::zone::generate_layers;

    #[test]
    fn test_single_zone_markup() {
        let config = Config {
            layer_count: 3,
            ..Default::default()
        };
        let html = HtmlEmitter.emit(&config, &generate_layers(&config));

        insta::assert_snapshot!(html, @r#"
<div class="gradual-blur">
  <div class="gradual-blur-inner">
    <div class="gradual-blur-layer-1"></div>
    <div class="gradual-blur-layer-2"></div>
    <div class="gradual-blur-layer-3"></div>
  </div>
</div>
"#);
    }

    #[test]
    fn test_multi_zone_markup() {
        let config = Config {
            layer_count: 2,
            animation: Animation::Fade,
            zones: vec![Position::Top, Position::Bottom],
            ..Default::default()
        };
        let html = HtmlEmitter.emit(&config, &generate_layers(&config));

        let expected = "\
<div class=\"gradual-blur-top gradual-blur-animated\">
  <div class=\"gradual-blur-inner-top\">
    <div class=\"gradual-blur-layer-1-top\"></div>
    <div class=\"gradual-blur-layer-2-top\"></div>
  </div>
</div>

<div class=\"gradual-blur-bottom gradual-blur-animated\">
  <div class=\"gradual-blur-inner-bottom\">
    <div class=\"gradual-blur-layer-1-bottom\"></div>
    <div class=\"gradual-blur-layer-2-bottom\"></div>
  </div>
</div>";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_no_trailing_newline() {
        let config = Config::default();
        let html = HtmlEmitter.emit(&config, &generate_layers(&config));
        assert!(html.ends_with("</div>"));
        assert_eq!(html.matches("gradual-blur-layer-").count(), 5);
    }
}
