//! 运行配置，全部来自环境变量（支持 `.env`）

use anyhow::{Context, Result, anyhow, bail};
use common::parse_flag;
use processor_bili::{DEFAULT_PARSE_API, Quality};
use std::str::FromStr;
use url::Url;

/// 回复方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyMode {
    /// 直接回复文本
    #[default]
    Text,
    /// 把文本渲染成图片后回复
    Image,
}

impl FromStr for ReplyMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            _ => Err(anyhow!("不支持的回复方式: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub parse_api: String,
    pub quality: Quality,
    /// 是否把 `quality` 转发给解析接口
    pub honor_quality: bool,
    pub reply_mode: ReplyMode,
    pub render_api: Option<String>,
    /// 链接无效时不回复
    pub silent_on_invalid: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(common::get_env_var)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // 设置为空与未设置等价
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let parse_api = match lookup("BILI_PARSE_API") {
            Some(v) => parse_url("BILI_PARSE_API", &v)?,
            None => DEFAULT_PARSE_API.to_string(),
        };

        let quality = match lookup("BILI_QUALITY") {
            Some(v) => v
                .parse::<Quality>()
                .with_context(|| format!("BILI_QUALITY 的值无效: {}", v))?,
            None => Quality::default(),
        };

        let reply_mode = match lookup("BILI_REPLY_MODE") {
            Some(v) => v
                .parse::<ReplyMode>()
                .with_context(|| format!("BILI_REPLY_MODE 的值无效: {}", v))?,
            None => ReplyMode::default(),
        };

        let render_api = lookup("BILI_RENDER_API")
            .map(|v| parse_url("BILI_RENDER_API", &v))
            .transpose()?;
        if reply_mode == ReplyMode::Image && render_api.is_none() {
            bail!("BILI_REPLY_MODE=image 需要设置 BILI_RENDER_API");
        }

        Ok(Self {
            parse_api,
            quality,
            honor_quality: flag(&lookup, "BILI_HONOR_QUALITY")?,
            reply_mode,
            render_api,
            silent_on_invalid: flag(&lookup, "BILI_SILENT_ON_INVALID")?,
        })
    }
}

fn parse_url(name: &str, value: &str) -> Result<String> {
    let url = Url::parse(value.trim()).with_context(|| format!("{} 的值无效: {}", name, value))?;
    Ok(url.to_string())
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<bool> {
    match lookup(name) {
        Some(v) => parse_flag(&v).ok_or_else(|| anyhow!("{} 的值无效: {}", name, v)),
        None => Ok(false),
    }
}
