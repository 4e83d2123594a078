//! 视频链接匹配

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// 形如 `https://www.bilibili.com/video/BV1xx411c7mD/` 或 `www.bilibili.com/video/av170001` 的视频链接
pub const BILI_VIDEO_PATTERN: &str = r"(https?://)?www\.bilibili\.com/video/(BV\w+|av\d+)/?";

static BILI_VIDEO_REGEX: OnceLock<Regex> = OnceLock::new();

pub fn video_regex() -> &'static Regex {
    BILI_VIDEO_REGEX
        .get_or_init(|| Regex::new(BILI_VIDEO_PATTERN).expect("Invalid BiliBili video regex pattern"))
}

/// 从链接中提取出的视频编号（BV 号或 av 号）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    pub identifier: String,
}

impl VideoReference {
    pub fn from_captures(captures: &Captures<'_>) -> Option<Self> {
        captures.get(2).map(|id| Self {
            identifier: id.as_str().to_string(),
        })
    }
}

/// 只取文本中第一个视频链接
pub fn find_video_reference(text: &str) -> Option<VideoReference> {
    video_regex()
        .captures(text)
        .and_then(|captures| VideoReference::from_captures(&captures))
}
