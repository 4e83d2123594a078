//! 清晰度

use anyhow::{Result, anyhow};
use std::fmt;
use std::str::FromStr;

/// 请求的清晰度，对应解析接口的数字代码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    #[default]
    P1080,
    P720,
    P480,
    P360,
}

impl Quality {
    /// 接口支持的最高清晰度代码
    pub const HIGHEST_CODE: u32 = 80;

    pub fn code(self) -> u32 {
        match self {
            Self::P1080 => 80,
            Self::P720 => 64,
            Self::P480 => 32,
            Self::P360 => 16,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            80 => Some(Self::P1080),
            64 => Some(Self::P720),
            32 => Some(Self::P480),
            16 => Some(Self::P360),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::P1080 => "1080P",
            Self::P720 => "720P",
            Self::P480 => "480P",
            Self::P360 => "360P",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 接受 `1080`、`1080p`、`720P` 这类写法，也接受数字代码 `80`、`64` 等
impl FromStr for Quality {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let resolution = normalized.strip_suffix('p').unwrap_or(&normalized);

        match resolution {
            "1080" => Ok(Self::P1080),
            "720" => Ok(Self::P720),
            "480" => Ok(Self::P480),
            "360" => Ok(Self::P360),
            other => other
                .parse::<u32>()
                .ok()
                .and_then(Self::from_code)
                .ok_or_else(|| anyhow!("不支持的清晰度: {}", s)),
        }
    }
}
