use common::{RenderedImage, convert_bytes};
use teloxide::prelude::*;
use teloxide::types::{InputFile, Message, MessageId, ParseMode, ReplyParameters};
use teloxide::utils::html;

use crate::handler::BotResponse;

const RENDERED_FILE_NAME: &str = "bilibili.png";

/// 发送处理结果，发送失败时尝试用文本回复错误信息
pub async fn send_bot_response(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    response: BotResponse,
) {
    let send_result = match response {
        BotResponse::Text(text) => send_reply_text(bot, chat_id, message_id, text).await,
        BotResponse::Photo(image) => send_reply_photo(bot, chat_id, message_id, image).await,
    };

    // 记录发送失败的错误，但不中断处理流程
    if let Err(e) = send_result {
        log::error!("Failed to send message to chat {}: {}", chat_id, e);
        if let Err(fallback_err) = send_reply_text(bot, chat_id, message_id, e.to_string()).await
        {
            log::error!("Failed to send fallback error message: {}", fallback_err);
        }
    }
}

// 简单的发送文本回复
pub async fn send_reply_text(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: String,
) -> ResponseResult<Message> {
    log::debug!("send_reply_text: {}\n\t{}", chat_id, text);
    bot.send_message(chat_id, html::escape(&text))
        .reply_parameters(ReplyParameters::new(message_id))
        .parse_mode(ParseMode::Html)
        .await
}

/// 上传渲染好的图片
pub async fn send_reply_photo(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    image: RenderedImage,
) -> ResponseResult<Message> {
    log::info!(
        "Sending rendered image {}x{} with size: {}",
        image.width,
        image.height,
        convert_bytes(image.bytes.len() as f64)
    );

    let input_file = InputFile::memory(image.bytes).file_name(RENDERED_FILE_NAME);
    bot.send_photo(chat_id, input_file)
        .reply_parameters(ReplyParameters::new(message_id))
        .await
}
