//! Inlines `cid:` image references as base64 data URIs.

use regex::{Captures, Regex};
use tracing::{debug, warn};

use ms_core::ports::SignatureNormalizerPort;
use ms_core::{RawImage, RawSignature, Signature};

/// MIME type written into every inlined image URI.
const INLINE_IMAGE_MIME: &str = "image/png";

/// Rewrites `<img ... src="cid:NAME" ...>` tags so the image data travels with the HTML.
///
/// Matching is scoped to the `src` attribute of `img` tags: a `cid:` string in
/// text content or in any other attribute is left alone. The attribute value
/// must be exactly `cid:NAME`, unquoted or wrapped in single or double quotes.
/// Everything else inside the tag is preserved verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct CidImageNormalizer;

impl CidImageNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Tag pattern for one image. Group 1 is everything between `<img` and
    /// ` src=`; exactly one of groups 2 to 4 holds the rest of the tag,
    /// depending on how the value was quoted.
    fn tag_pattern(image_name: &str) -> Result<Regex, regex::Error> {
        let name = regex::escape(image_name);
        Regex::new(&format!(
            r#"<img([^>]*\s)src=(?:"cid:{name}"([^>]*)|'cid:{name}'([^>]*)|cid:{name}((?:[\s/][^>]*)?))>"#
        ))
    }

    fn inline_image(html: &str, image: &RawImage) -> String {
        let pattern = match Self::tag_pattern(&image.name) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!(image = %image.name, error = %e, "Skipping image with unusable name");
                return html.to_string();
            }
        };

        pattern
            .replace_all(html, |caps: &Captures| {
                let before = caps.get(1).map_or("", |m| m.as_str());
                let after = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .or_else(|| caps.get(4))
                    .map_or("", |m| m.as_str());
                format!(
                    r#"<img{before}src="data:{INLINE_IMAGE_MIME};base64,{}"{after}>"#,
                    image.base64
                )
            })
            .into_owned()
    }
}

impl SignatureNormalizerPort for CidImageNormalizer {
    fn normalize(&self, raw: &RawSignature) -> Option<Signature> {
        if !raw.has_html() {
            return None;
        }
        let html = raw.html.as_deref()?;

        let html = raw
            .images
            .iter()
            .fold(html.to_string(), |html, image| Self::inline_image(&html, image));

        debug!(
            signature = %raw.name,
            images = raw.images.len(),
            "Normalized signature"
        );
        Some(Signature::new(raw.name.clone(), html))
    }
}
