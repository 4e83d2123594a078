/// 错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 网络请求失败（连接错误、非 2xx 状态码）
    Transport,
    /// 上游返回了 JSON，但状态码非 0 或字段缺失/类型不符
    UpstreamProtocol,
    /// 响应体无法读取或不是合法 JSON
    Parse,
    /// 文字转图片失败
    Rendering,
}

/// 统一的处理器错误类型
#[derive(Debug, Clone)]
pub struct ProcessorError {
    pub kind: ErrorKind,
    pub message: String,
    pub source: Option<String>,
}

impl std::fmt::Display for ProcessorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", self.message, source),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ProcessorError {}

impl ProcessorError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn transport(source: impl Into<String>) -> Self {
        Self::with_source(ErrorKind::Transport, "请求错误", source)
    }

    pub fn upstream_protocol() -> Self {
        Self::new(ErrorKind::UpstreamProtocol, "解析失败，参数可能不正确")
    }

    pub fn parse(source: impl Into<String>) -> Self {
        Self::with_source(ErrorKind::Parse, "解析失败", source)
    }

    pub fn rendering(source: impl Into<String>) -> Self {
        Self::with_source(ErrorKind::Rendering, "图片渲染失败", source)
    }
}

impl From<reqwest::Error> for ProcessorError {
    fn from(error: reqwest::Error) -> Self {
        ProcessorError::transport(error.to_string())
    }
}

/// 统一的处理器结果类型别名，成功时为回复文本
pub type ProcessorResultType = Result<String, ProcessorError>;

/// 统一的处理器trait
#[async_trait::async_trait]
pub trait LinkProcessor: Send + Sync {
    /// 获取匹配的正则表达式（用于详细匹配）
    fn regex(&self) -> &regex::Regex;

    /// 处理匹配的链接并返回结果
    /// captures: 正则表达式的捕获组
    async fn process_captures(&self, captures: &regex::Captures<'_>) -> ProcessorResultType;

    /// 获取处理器名称
    fn name(&self) -> &'static str;
}
