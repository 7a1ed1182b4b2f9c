//! # Direction 模块
//!
//! 边缘位置与遮罩渐变方向的映射。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidArgument;

/// 模糊效果贴靠的边缘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// 顶部
    Top,
    /// 底部
    #[default]
    Bottom,
    /// 左侧
    Left,
    /// 右侧
    Right,
}

impl Position {
    /// 所有位置，按声明顺序
    pub const ALL: [Position; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// CSS 属性名 / 类名后缀使用的小写名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// 线性渐变方向（`linear-gradient` 的第一个参数）
    pub fn gradient_direction(&self) -> &'static str {
        match self {
            Self::Top => "to top",
            Self::Bottom => "to bottom",
            Self::Left => "to left",
            Self::Right => "to right",
        }
    }

    /// 容器在交叉轴上的锚定属性
    ///
    /// 左右贴边时容器从顶部开始排布，上下贴边时从左侧开始。
    pub fn cross_axis_anchor(&self) -> &'static str {
        match self {
            Self::Left | Self::Right => "top",
            Self::Top | Self::Bottom => "left",
        }
    }

    /// 从字符串解析位置（便捷方法）
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_str(s).ok()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = InvalidArgument;

    /// 从字符串解析位置（不区分大小写，忽略首尾空白）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(InvalidArgument::InvalidEnum {
                kind: "位置",
                value: s.to_string(),
                expected: "top, bottom, left, right",
            }),
        }
    }
}

/// 按名称查找渐变方向，未知名称降级为 `to bottom`
pub fn gradient_direction(position: &str) -> &'static str {
    Position::parse(position)
        .unwrap_or_default()
        .gradient_direction()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_directions() {
        assert_eq!(gradient_direction("top"), "to top");
        assert_eq!(gradient_direction("bottom"), "to bottom");
        assert_eq!(gradient_direction("left"), "to left");
        assert_eq!(gradient_direction("right"), "to right");
    }

    #[test]
    fn test_unknown_direction_falls_back_to_bottom() {
        assert_eq!(gradient_direction("center"), "to bottom");
        assert_eq!(gradient_direction(""), "to bottom");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Position::parse("TOP"), Some(Position::Top));
        assert_eq!(Position::parse(" Left "), Some(Position::Left));
        assert_eq!(Position::parse("middle"), None);
    }

    #[test]
    fn test_cross_axis_anchor() {
        assert_eq!(Position::Left.cross_axis_anchor(), "top");
        assert_eq!(Position::Right.cross_axis_anchor(), "top");
        assert_eq!(Position::Top.cross_axis_anchor(), "left");
        assert_eq!(Position::Bottom.cross_axis_anchor(), "left");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Position::Right).unwrap();
        assert_eq!(json, "\"right\"");
        let parsed: Position = serde_json::from_str("\"top\"").unwrap();
        assert_eq!(parsed, Position::Top);
    }
}
