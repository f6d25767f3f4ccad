use crate::core::catalog::{MediaDescriptor, MediaKind};

/// How a descriptor's source locator should be turned into a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceClass {
    /// Plain image URL: decode and draw.
    Image(String),
    /// Direct video URL: capture the first frame.
    VideoFrame(String),
    /// Social-video link with a public thumbnail to decode instead.
    Thumbnail(String),
    /// Media that cannot be read back; placeholder immediately.
    External,
}

pub fn classify_source(descriptor: &MediaDescriptor) -> SourceClass {
    let src = descriptor.source.as_str();
    match descriptor.kind {
        MediaKind::Image => SourceClass::Image(src.to_string()),
        MediaKind::Video => {
            if is_youtube(src) {
                match youtube_video_id(src) {
                    Some(id) => SourceClass::Thumbnail(youtube_thumbnail_url(&id)),
                    None => SourceClass::External,
                }
            } else if is_instagram(src) {
                SourceClass::External
            } else {
                SourceClass::VideoFrame(src.to_string())
            }
        }
    }
}

#[inline]
pub fn is_youtube(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

#[inline]
pub fn is_instagram(url: &str) -> bool {
    url.contains("instagram.com")
}

/// Extract the 11-character video id from a watch, embed or short link.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let tail = if let Some((_, rest)) = url.split_once("youtu.be/") {
        rest
    } else if let Some((_, rest)) = url.split_once("?v=") {
        rest
    } else if let Some((_, rest)) = url.split_once("&v=") {
        rest
    } else if let Some((_, rest)) = url.split_once("/embed/") {
        rest
    } else {
        return None;
    };
    let id: String = tail
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    (id.len() == 11).then_some(id)
}

#[inline]
pub fn youtube_thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
}
