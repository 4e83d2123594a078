use crate::models::VideoInfo;

pub fn format_video_info(info: &VideoInfo) -> String {
    format!(
        "🎬 标题: {}\n🔗 视频链接: {}\n🖼 视频封面: {}\n📖 视频大小: {}\n👓 清晰度: {}\n💬 弹幕链接: {}",
        info.title,
        info.video_url,
        info.thumbnail_url,
        info.size_label,
        info.quality_label,
        info.comment_url
    )
}
