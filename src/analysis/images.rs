//! Image alt-text analysis.

use crate::models::{ImageAnalysis, ImageInfo};
use crate::parse::ImageElement;

/// Summarizes alt-text coverage of the page's images.
///
/// An image has alt text only when the attribute is present and non-empty;
/// `alt=""` counts as missing.
pub fn analyze_images(images: &[ImageElement]) -> ImageAnalysis {
    let infos: Vec<ImageInfo> = images
        .iter()
        .map(|image| ImageInfo {
            src: image.src.clone().unwrap_or_default(),
            alt: image.alt.clone(),
            has_alt: image.alt.as_deref().is_some_and(|alt| !alt.is_empty()),
        })
        .collect();

    let with_alt = infos.iter().filter(|info| info.has_alt).count();

    ImageAnalysis {
        total: infos.len(),
        with_alt,
        without_alt: infos.len() - with_alt,
        images: infos,
    }
}
