//! 共用工具函数库
//!
//! 这个模块包含了整个workspace中可能用到的通用工具函数。
use human_bytes::human_bytes;
pub mod models;
pub mod render;
pub use models::*;
pub use render::{HttpTextRenderer, RenderedImage, TextRenderer};

pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024; // 10MB
pub const GENERAL_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 获取环境变量的值
pub fn get_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// 解析布尔型配置值，空字符串视为 `false`
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Some(false),
        "1" | "true" | "yes" | "on" => Some(true),
        _ => None,
    }
}

/// 将字节数转换为人类可读的格式
pub fn convert_bytes<T: Into<f64>>(bytes: T) -> String {
    human_bytes(bytes.into())
}
