//! BiliBili 视频链接处理模块
//!
//! 识别消息中的 `www.bilibili.com/video/...` 链接，调用第三方解析接口获取
//! 视频直链等信息，并格式化为回复文本。
//!
//! # 模块结构
//!
//! - [`matcher`] - 链接匹配，提取 BV 号 / av 号
//! - [`api`] - 解析接口客户端
//! - [`models`] - 接口响应与解析结果
//! - [`quality`] - 清晰度与接口代码
//! - [`format`] - 回复文本格式化

use common::{ErrorKind, LinkProcessor, ProcessorError, ProcessorResultType};
use regex::Regex;

pub mod api;
pub mod format;
pub mod matcher;
pub mod models;
pub mod quality;

pub use api::{DEFAULT_PARSE_API, ParseApiClient};
pub use format::format_video_info;
pub use matcher::{BILI_VIDEO_PATTERN, VideoReference, find_video_reference};
pub use models::{ParseResult, VideoInfo};
pub use quality::Quality;

/// BiliBili 视频链接处理器
pub struct BiliVideoProcessor {
    client: ParseApiClient,
    quality: Quality,
}

impl BiliVideoProcessor {
    pub fn new(client: ParseApiClient, quality: Quality) -> Self {
        Self { client, quality }
    }

    /// 获取视频信息
    pub async fn parse(&self, reference: &VideoReference) -> ParseResult {
        self.client.fetch(reference, self.quality).await
    }
}

#[async_trait::async_trait]
impl LinkProcessor for BiliVideoProcessor {
    fn regex(&self) -> &Regex {
        matcher::video_regex()
    }

    async fn process_captures(&self, captures: &regex::Captures<'_>) -> ProcessorResultType {
        let Some(reference) = VideoReference::from_captures(captures) else {
            return Err(ProcessorError::new(
                ErrorKind::Parse,
                "无法从链接中提取视频编号",
            ));
        };

        log::debug!(
            "BiliBili video: {}, quality: {}",
            reference.identifier,
            self.quality
        );

        self.parse(&reference)
            .await
            .map(|info| format_video_info(&info))
    }

    fn name(&self) -> &'static str {
        "BiliBili"
    }
}
