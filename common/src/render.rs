//! 文字转图片
//!
//! 回复模式为图片时，格式化好的文本交给 [`TextRenderer`] 渲染。
//! [`HttpTextRenderer`] 把文本 POST 给外部渲染服务，服务直接返回图片数据。

use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{GENERAL_UA, MAX_FILE_SIZE, ProcessorError, convert_bytes};

/// 渲染得到的图片
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

/// 文字转图片能力
#[async_trait::async_trait]
pub trait TextRenderer: Send + Sync {
    async fn render(&self, text: &str) -> Result<RenderedImage, ProcessorError>;
}

/// 基于 HTTP 渲染服务的实现
pub struct HttpTextRenderer {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTextRenderer {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?.to_string();
        let client = reqwest::Client::builder().user_agent(GENERAL_UA).build()?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait::async_trait]
impl TextRenderer for HttpTextRenderer {
    async fn render(&self, text: &str) -> Result<RenderedImage, ProcessorError> {
        log::debug!("Rendering {} chars via {}", text.chars().count(), self.endpoint);

        let body = serde_json::json!({ "text": text }).to_string();
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ProcessorError::rendering(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProcessorError::rendering(format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProcessorError::rendering(e.to_string()))?;

        if bytes.len() > MAX_FILE_SIZE {
            return Err(ProcessorError::rendering(format!(
                "图片过大: {} (max: {})",
                convert_bytes(bytes.len() as f64),
                convert_bytes(MAX_FILE_SIZE as f64)
            )));
        }

        let size = imagesize::blob_size(&bytes)
            .map_err(|e| ProcessorError::rendering(format!("无法识别的图片数据: {}", e)))?;

        log::debug!(
            "Rendered image {}x{}, {}",
            size.width,
            size.height,
            convert_bytes(bytes.len() as f64)
        );

        Ok(RenderedImage {
            bytes: bytes.to_vec(),
            width: size.width,
            height: size.height,
        })
    }
}
