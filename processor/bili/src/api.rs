use anyhow::Result;
use common::{GENERAL_UA, ProcessorError};
use serde_json::Value;
use url::Url;

use crate::matcher::VideoReference;
use crate::models::{ParseApiResponse, ParseResult};
use crate::quality::Quality;

/// 默认的第三方解析接口
pub const DEFAULT_PARSE_API: &str = "http://114.134.188.188:3003/api";

/// 第三方解析接口客户端
///
/// 每次解析只发一次请求，不重试、不设超时。
pub struct ParseApiClient {
    endpoint: Url,
    client: reqwest::Client,
    honor_quality: bool,
}

impl ParseApiClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = reqwest::Client::builder().user_agent(GENERAL_UA).build()?;

        Ok(Self {
            endpoint,
            client,
            honor_quality: false,
        })
    }

    /// 是否把请求的清晰度转发给接口；默认不转发，始终请求最高清晰度
    pub fn honor_quality(mut self, honor: bool) -> Self {
        self.honor_quality = honor;
        self
    }

    pub fn request_url(&self, reference: &VideoReference, quality: Quality) -> Url {
        let accept = if self.honor_quality {
            quality.code()
        } else {
            Quality::HIGHEST_CODE
        };

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("bvid", &reference.identifier)
            .append_pair("accept", &accept.to_string());
        url
    }

    /// 获取视频信息，所有失败都转换为 [`ProcessorError`] 返回
    pub async fn fetch(&self, reference: &VideoReference, quality: Quality) -> ParseResult {
        let url = self.request_url(reference, quality);
        log::debug!("Parse API URL: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProcessorError::transport(format!("HTTP {}", status)));
        }

        let text = response.text().await?;
        log::trace!("Parse API response: {}", text);

        parse_response(&text)
    }
}

/// 把接口返回的文本映射为 [`ParseResult`]
pub(crate) fn parse_response(text: &str) -> ParseResult {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ProcessorError::parse(e.to_string()))?;

    let code = value.get("code").and_then(Value::as_i64);
    if code != Some(0) {
        log::warn!("Parse API returned code {:?}", code);
        return Err(ProcessorError::upstream_protocol());
    }

    let response: ParseApiResponse = serde_json::from_value(value).map_err(|e| {
        log::warn!("Unexpected parse API payload: {}", e);
        ProcessorError::upstream_protocol()
    })?;

    response
        .into_video_info()
        .ok_or_else(ProcessorError::upstream_protocol)
}
