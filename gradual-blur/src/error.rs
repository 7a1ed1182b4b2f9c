//! # Error 模块
//!
//! 定义 gradual-blur 中使用的错误类型。
//!
//! - [`ConfigError`]：配置校验失败，调用方必须拒绝渲染
//! - [`InvalidArgument`]：外部输入（命令行参数、标记属性）无法解析为期望的类型
//!
//! 未知的预设名、位置、曲线、动画触发方式**不是错误**，由规范化阶段降级为默认值。

use thiserror::Error;

/// 配置校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 层数不是 1..=100 内的整数
    #[error("层数必须是 1 到 100 之间的整数，实际为 {value}")]
    InvalidLayerCount { value: f64 },

    /// 模糊强度非有限值或不为正
    #[error("模糊强度必须是大于 0 的有限数，实际为 {value}")]
    InvalidStrength { value: f64 },

    /// 不透明度非有限值或超出 [0, 1]
    #[error("不透明度必须在 [0, 1] 范围内，实际为 {value}")]
    InvalidOpacity { value: f64 },

    /// 悬停倍率非有限值或不为正
    #[error("悬停倍率必须是大于 0 的有限数，实际为 {value}")]
    InvalidHoverIntensity { value: f64 },

    /// zones 非空但不含任何有效位置
    #[error("zones 中没有有效的位置: {entries:?}")]
    NoValidZone { entries: Vec<String> },
}

/// 参数解析错误
///
/// 只在外部输入边界（命令行、标记属性）产生，在生成管线运行之前报告。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// 未知的属性名
    #[error("未知的属性 '{key}'")]
    UnknownKey { key: String },

    /// 无法解析为数字
    #[error("参数 '{key}' 的值 '{value}' 不是有效的数字")]
    InvalidNumber { key: String, value: String },

    /// 无法解析为布尔值
    #[error("参数 '{key}' 的值 '{value}' 不是有效的布尔值（true / false）")]
    InvalidBool { key: String, value: String },

    /// 不在枚举取值范围内
    #[error("'{value}' 不是有效的{kind}，可选值：{expected}")]
    InvalidEnum {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// gradual-blur 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlurError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 参数错误
    #[error("参数错误: {0}")]
    Argument(#[from] InvalidArgument),
}

/// Result 类型别名
pub type BlurResult<T> = Result<T, BlurError>;
