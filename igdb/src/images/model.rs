/// Image-size tags to rewrite in IGDB URLs, and the tag they become.
///
/// IGDB encodes the rendered size of an image as a `t_<size>` path segment.
/// The API hands back small variants by default; swapping the tag is the
/// documented way to request a bigger rendition of the same asset.
#[derive(Debug, Clone)]
pub struct UpgradePolicy {
    pub source_tags: Vec<String>,
    pub target_tag: String,
}

impl Default for UpgradePolicy {
    fn default() -> Self {
        Self {
            source_tags: vec![
                "t_thumb".to_string(),
                "t_cover_small".to_string(),
                "t_cover_big".to_string(),
                "t_screenshot_med".to_string(),
            ],
            target_tag: "t_720p".to_string(),
        }
    }
}
