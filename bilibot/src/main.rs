use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;
use teloxide::Bot;
use teloxide::types::Message;

use config::Config;
use handler::MessageHandler;

mod bot;
mod config;
mod handler;
mod tests;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    log::info!(
        "Parse API: {}, quality: {}, honor quality: {}, reply mode: {:?}",
        config.parse_api,
        config.quality,
        config.honor_quality,
        config.reply_mode
    );

    let handler = Arc::new(MessageHandler::from_config(&config)?);
    let bot = Bot::from_env();

    log::info!("Bot started. Listening for messages...");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let handler = Arc::clone(&handler);
        async move {
            // 文本消息和带说明文字的媒体消息都处理
            let Some(text) = msg.text().or_else(|| msg.caption()) else {
                return teloxide::respond(());
            };

            if !handler.is_triggered(text) {
                return teloxide::respond(());
            }

            if let Some(response) = handler.handle(text).await {
                bot::send_bot_response(&bot, msg.chat.id, msg.id, response).await;
            }
            teloxide::respond(())
        }
    })
    .await;

    Ok(())
}
