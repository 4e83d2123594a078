use common::{ProcessorError, convert_bytes};
use serde::Deserialize;

/// 解析接口响应
#[derive(Debug, Deserialize)]
pub struct ParseApiResponse {
    pub code: i64,
    pub title: String,
    pub imgurl: String,
    pub data: Vec<ParseApiStream>,
}

/// 单条视频流信息
#[derive(Debug, Deserialize)]
pub struct ParseApiStream {
    pub video_url: String,
    pub video_size: VideoSize,
    pub accept_format: String,
    pub comment: String,
}

/// 接口返回的视频大小：字符串原样使用，JSON 数字视为字节数
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum VideoSize {
    Bytes(u64),
    Label(String),
}

impl VideoSize {
    pub fn label(&self) -> String {
        match self {
            Self::Bytes(bytes) => convert_bytes(*bytes as f64),
            Self::Label(label) => label.clone(),
        }
    }
}

impl ParseApiResponse {
    /// 只使用 `data` 中的第一条，`data` 为空时返回 `None`
    pub fn into_video_info(self) -> Option<VideoInfo> {
        let stream = self.data.into_iter().next()?;

        Some(VideoInfo {
            title: self.title,
            video_url: stream.video_url,
            thumbnail_url: self.imgurl,
            size_label: stream.video_size.label(),
            quality_label: stream.accept_format,
            comment_url: stream.comment,
        })
    }
}

/// 解析成功后的视频信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    pub title: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub size_label: String,
    pub quality_label: String,
    /// 弹幕链接
    pub comment_url: String,
}

/// 一次解析的结果，失败时错误信息即为回复内容
pub type ParseResult = Result<VideoInfo, ProcessorError>;
