use serde_json::Value;

use super::model::UpgradePolicy;

/// Replaces every occurrence of each source tag with the target tag.
/// URLs without a source tag come back unchanged.
pub fn upgrade_image_url(url: &str, policy: &UpgradePolicy) -> String {
    policy
        .source_tags
        .iter()
        .fold(url.to_string(), |url, tag| url.replace(tag, &policy.target_tag))
}

/// Walks an IGDB response and upgrades every image URL in place.
///
/// A value counts as an image URL when its object key is exactly `url` or
/// ends in `.url` and the value is a string. Non-string values under such
/// keys pass through untouched; everything else recurses structurally.
pub fn upgrade_image_urls(value: Value, policy: &UpgradePolicy) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| upgrade_image_urls(item, policy))
                .collect(),
        ),
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| {
                    let value = match value {
                        Value::String(url) if is_url_key(&key) => {
                            Value::String(upgrade_image_url(&url, policy))
                        }
                        other if is_url_key(&key) => other,
                        other => upgrade_image_urls(other, policy),
                    };
                    (key, value)
                })
                .collect(),
        ),
        other => other,
    }
}

fn is_url_key(key: &str) -> bool {
    key == "url" || key.ends_with(".url")
}
