//! Markdown-link resolution from the clipboard: a copied URL becomes the link target,
//! and an image URL upgrades the link to an embed.

use regex::Regex;
use smartmark_markup::MarkupPair;
use std::sync::LazyLock;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?|ftp)://\S+$").expect("literal pattern"));

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "svg", "webp", "tiff"];

/// Resolve a `[`/`]()`-style pair against the clipboard text.
///
/// A URL on the clipboard becomes the link target, so toggling produces a finished
/// `[text](url)` instead of an empty one. A URL ending in an image extension also
/// upgrades the opening delimiter to an embed (`![`). Anything else leaves the pair
/// unchanged.
pub(crate) fn resolve_link_pair(pair: &MarkupPair, clipboard_text: &str) -> MarkupPair {
    let url = clipboard_text.trim();
    if !URL.is_match(url) {
        return pair.clone();
    }

    let mut resolved = MarkupPair::new(pair.opening.clone(), format!("]({url})"));
    let extension = url.rsplit('.').next().unwrap_or("").to_lowercase();
    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        resolved.opening = "![".to_string();
    }
    resolved
}
