//! 消息处理：匹配链接、解析视频、生成唯一一条回复

use anyhow::Result;
use common::{HttpTextRenderer, LinkProcessor, RenderedImage, TextRenderer};
use processor_bili::{BiliVideoProcessor, ParseApiClient};

use crate::config::{Config, ReplyMode};

pub const INVALID_LINK_REPLY: &str = "无效的 Bilibili 视频链接";

#[derive(Debug)]
pub enum BotResponse {
    Text(String),
    Photo(RenderedImage),
}

pub struct MessageHandler {
    processor: Box<dyn LinkProcessor>,
    renderer: Option<Box<dyn TextRenderer>>,
    silent_on_invalid: bool,
}

impl MessageHandler {
    pub fn new(processor: Box<dyn LinkProcessor>) -> Self {
        Self {
            processor,
            renderer: None,
            silent_on_invalid: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ParseApiClient::new(&config.parse_api)?.honor_quality(config.honor_quality);
        let processor = BiliVideoProcessor::new(client, config.quality);
        let mut handler = Self::new(Box::new(processor)).silent_on_invalid(config.silent_on_invalid);

        if config.reply_mode == ReplyMode::Image
            && let Some(render_api) = &config.render_api
        {
            handler = handler.renderer(Box::new(HttpTextRenderer::new(render_api)?));
        }

        Ok(handler)
    }

    /// 设置后以图片形式回复
    pub fn renderer(mut self, renderer: Box<dyn TextRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn silent_on_invalid(mut self, silent: bool) -> Self {
        self.silent_on_invalid = silent;
        self
    }

    /// 消息是否需要交给 [`MessageHandler::handle`] 处理
    pub fn is_triggered(&self, text: &str) -> bool {
        self.processor.regex().is_match(text)
    }

    /// 处理一条消息，最多产生一条回复；只处理第一个链接
    pub async fn handle(&self, text: &str) -> Option<BotResponse> {
        log::info!("Received message: {}", text);

        let Some(captures) = self.processor.regex().captures(text) else {
            if self.silent_on_invalid {
                return None;
            }
            return Some(self.reply(INVALID_LINK_REPLY.to_string()).await);
        };

        let matched = captures.get(0).map_or("", |m| m.as_str());
        log::info!("Processing link with {}: {}", self.processor.name(), matched);

        let content = match self.processor.process_captures(&captures).await {
            Ok(content) => content,
            Err(e) => {
                log::warn!(
                    "Failed to process link with {}\n{}\n{}",
                    self.processor.name(),
                    matched,
                    e
                );
                e.to_string()
            }
        };

        Some(self.reply(content).await)
    }

    async fn reply(&self, content: String) -> BotResponse {
        let Some(renderer) = &self.renderer else {
            return BotResponse::Text(content);
        };

        match renderer.render(&content).await {
            Ok(image) => BotResponse::Photo(image),
            Err(e) => {
                log::warn!("Failed to render reply: {}", e);
                BotResponse::Text(format!("{}\n\n{}", e, content))
            }
        }
    }
}
