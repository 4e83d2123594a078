#[cfg(test)]
mod main_tests {
    use crate::handler::{BotResponse, INVALID_LINK_REPLY, MessageHandler};
    use common::{ProcessorError, RenderedImage, TextRenderer};
    use processor_bili::{BiliVideoProcessor, ParseApiClient, Quality};
    use std::sync::{Arc, Mutex};
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SUCCESS_BODY: &str = r#"{"code":0,"title":"测试视频","imgurl":"https://i0.hdslb.com/cover.jpg","data":[{"video_url":"https://upos.example.com/v.mp4","video_size":"8.00 MB","accept_format":"高清 1080P","comment":"https://comment.bilibili.com/1.xml"}]}"#;

    const EXPECTED_REPLY: &str = "🎬 标题: 测试视频\n🔗 视频链接: https://upos.example.com/v.mp4\n🖼 视频封面: https://i0.hdslb.com/cover.jpg\n📖 视频大小: 8.00 MB\n👓 清晰度: 高清 1080P\n💬 弹幕链接: https://comment.bilibili.com/1.xml";

    struct StubRenderer {
        result: Result<RenderedImage, ProcessorError>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl TextRenderer for StubRenderer {
        async fn render(&self, text: &str) -> Result<RenderedImage, ProcessorError> {
            self.seen.lock().unwrap().push(text.to_string());
            self.result.clone()
        }
    }

    fn stub_image() -> RenderedImage {
        RenderedImage {
            bytes: vec![1, 2, 3],
            width: 800,
            height: 600,
        }
    }

    fn handler_for(api: &str) -> MessageHandler {
        let client = ParseApiClient::new(api).unwrap();
        MessageHandler::new(Box::new(BiliVideoProcessor::new(client, Quality::default())))
    }

    async fn mock_api(body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("bvid", "BV1xyz"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn test_is_triggered() {
        let handler = handler_for("http://127.0.0.1:1/api");

        assert!(handler.is_triggered("https://www.bilibili.com/video/BV1xyz/"));
        assert!(handler.is_triggered("看 www.bilibili.com/video/av12345"));
        assert!(!handler.is_triggered("https://b23.tv/abc123"));
        assert!(!handler.is_triggered("https://x.com/user/status/123456789"));
    }

    #[tokio::test]
    async fn test_invalid_link_reply() {
        let handler = handler_for("http://127.0.0.1:1/api");

        match handler.handle("没有链接的消息").await {
            Some(BotResponse::Text(text)) => assert_eq!(text, INVALID_LINK_REPLY),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_link_silent() {
        let handler = handler_for("http://127.0.0.1:1/api").silent_on_invalid(true);
        assert!(handler.handle("没有链接的消息").await.is_none());
    }

    #[tokio::test]
    async fn test_text_reply() {
        let server = mock_api(SUCCESS_BODY).await;
        let handler = handler_for(&format!("{}/api", server.uri()));

        let response = handler
            .handle("https://www.bilibili.com/video/BV1xyz/ 和 https://www.bilibili.com/video/BV1other/")
            .await;

        match response {
            Some(BotResponse::Text(text)) => assert_eq!(text, EXPECTED_REPLY),
            other => panic!("unexpected response: {:?}", other),
        }

        // 只解析第一个链接
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure_reply() {
        let server = mock_api(r#"{"code":-1}"#).await;
        let handler = handler_for(&format!("{}/api", server.uri()));

        match handler.handle("https://www.bilibili.com/video/BV1xyz").await {
            Some(BotResponse::Text(text)) => assert_eq!(text, "解析失败，参数可能不正确"),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_reply() {
        let handler = handler_for("http://127.0.0.1:1/api");

        match handler.handle("https://www.bilibili.com/video/BV1xyz/").await {
            Some(BotResponse::Text(text)) => {
                assert!(text.starts_with("请求错误: "), "{}", text);
                assert!(text.len() > "请求错误: ".len());
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_image_reply() {
        let server = mock_api(SUCCESS_BODY).await;
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handler = handler_for(&format!("{}/api", server.uri())).renderer(Box::new(
            StubRenderer {
                result: Ok(stub_image()),
                seen: Arc::clone(&seen),
            },
        ));

        match handler.handle("https://www.bilibili.com/video/BV1xyz/").await {
            Some(BotResponse::Photo(image)) => {
                assert_eq!(image.bytes, vec![1, 2, 3]);
                assert_eq!((image.width, image.height), (800, 600));
            }
            other => panic!("unexpected response: {:?}", other),
        }

        assert_eq!(*seen.lock().unwrap(), vec![EXPECTED_REPLY.to_string()]);
    }

    #[tokio::test]
    async fn test_render_failure_falls_back_to_text() {
        let server = mock_api(SUCCESS_BODY).await;
        let handler = handler_for(&format!("{}/api", server.uri())).renderer(Box::new(
            StubRenderer {
                result: Err(ProcessorError::rendering("HTTP 500")),
                seen: Arc::new(Mutex::new(Vec::new())),
            },
        ));

        match handler.handle("https://www.bilibili.com/video/BV1xyz/").await {
            Some(BotResponse::Text(text)) => {
                assert!(text.starts_with("图片渲染失败: HTTP 500"));
                assert!(text.ends_with(EXPECTED_REPLY));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_long_message_before_link() {
        let server = mock_api(SUCCESS_BODY).await;
        let handler = handler_for(&format!("{}/api", server.uri()));

        // 链接前有大量中文，字节数超过 4000 但字符数在 Telegram 限制内
        let text = format!("{}https://www.bilibili.com/video/BV1xyz/", "哔".repeat(1400));
        assert!(text.len() > 4000);
        assert!(handler.is_triggered(&text));

        match handler.handle(&text).await {
            Some(BotResponse::Text(reply)) => assert_eq!(reply, EXPECTED_REPLY),
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
