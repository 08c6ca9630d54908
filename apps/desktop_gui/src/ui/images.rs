//! Remote images: decoding on the backend worker and texture upload on the UI thread.

use std::collections::HashMap;

use eframe::egui;
use egui::TextureHandle;

const MAX_PREVIEW_EDGE: u32 = 640;

#[derive(Clone)]
pub(crate) struct PreviewImage {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl PreviewImage {
    pub(crate) fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }
}

pub(crate) fn decode_preview_image(bytes: &[u8]) -> Result<PreviewImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let dynamic = if dynamic.width() > MAX_PREVIEW_EDGE || dynamic.height() > MAX_PREVIEW_EDGE {
        dynamic.thumbnail(MAX_PREVIEW_EDGE, MAX_PREVIEW_EDGE)
    } else {
        dynamic
    };
    let resized = dynamic.to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(PreviewImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

enum ImageState {
    Loading,
    Ready {
        image: PreviewImage,
        texture: Option<TextureHandle>,
    },
    Failed,
}

/// Per-url image state. A url is fetched at most once per session; failures
/// stay failed and draw a placeholder.
#[derive(Default)]
pub(crate) struct ImageCache {
    entries: HashMap<String, ImageState>,
}

impl ImageCache {
    /// Marks `url` as loading. Returns false when it was already requested.
    pub(crate) fn begin_request(&mut self, url: &str) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), ImageState::Loading);
        true
    }

    /// Drops a request that never reached the backend so a later frame asks again.
    pub(crate) fn forget(&mut self, url: &str) {
        if matches!(self.entries.get(url), Some(ImageState::Loading)) {
            self.entries.remove(url);
        }
    }

    pub(crate) fn store_loaded(&mut self, url: String, image: PreviewImage) {
        self.entries.insert(
            url,
            ImageState::Ready {
                image,
                texture: None,
            },
        );
    }

    pub(crate) fn store_failed(&mut self, url: String) {
        self.entries.insert(url, ImageState::Failed);
    }

    pub(crate) fn has_pending(&self) -> bool {
        self.entries
            .values()
            .any(|state| matches!(state, ImageState::Loading))
    }

    pub(crate) fn is_failed(&self, url: &str) -> bool {
        matches!(self.entries.get(url), Some(ImageState::Failed))
    }

    /// Texture for `url`, uploading decoded pixels on first use.
    pub(crate) fn texture(&mut self, ctx: &egui::Context, url: &str) -> Option<TextureHandle> {
        let Some(ImageState::Ready { image, texture }) = self.entries.get_mut(url) else {
            return None;
        };
        if texture.is_none() {
            let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.rgba);
            *texture = Some(ctx.load_texture(
                format!("showcase_image_{url}"),
                color_image,
                egui::TextureOptions::LINEAR,
            ));
        }
        texture.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([0x32, 0x8a, 0xf2, 0xff]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).expect("encode png");
        out.into_inner()
    }

    #[test]
    fn decodes_png_into_rgba() {
        let image = decode_preview_image(&png_bytes(4, 2)).expect("decode");
        assert_eq!(image.size(), [4, 2]);
        assert_eq!(image.rgba.len(), 4 * 2 * 4);
        assert_eq!(&image.rgba[..4], &[0x32u8, 0x8a, 0xf2, 0xff]);
    }

    #[test]
    fn large_images_are_scaled_down() {
        let image = decode_preview_image(&png_bytes(1280, 640)).expect("decode");
        let [width, height] = image.size();
        assert!(width <= MAX_PREVIEW_EDGE as usize);
        assert!(height <= MAX_PREVIEW_EDGE as usize);
        assert_eq!(width, 2 * height);
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(decode_preview_image(b"<html>not an image</html>").is_err());
    }

    #[test]
    fn requests_each_url_once() {
        let mut cache = ImageCache::default();
        assert!(cache.begin_request("http://x/a.png"));
        assert!(!cache.begin_request("http://x/a.png"));
        assert!(cache.has_pending());

        cache.store_failed("http://x/a.png".to_string());
        assert!(!cache.has_pending());
        assert!(cache.is_failed("http://x/a.png"));
        assert!(!cache.begin_request("http://x/a.png"));
    }

    #[test]
    fn forgotten_request_can_be_issued_again() {
        let mut cache = ImageCache::default();
        assert!(cache.begin_request("http://x/b.png"));
        cache.forget("http://x/b.png");
        assert!(!cache.has_pending());
        assert!(cache.begin_request("http://x/b.png"));
    }

    #[test]
    fn loaded_image_clears_pending() {
        let mut cache = ImageCache::default();
        cache.begin_request("http://x/c.png");
        let image = decode_preview_image(&png_bytes(1, 1)).expect("decode");
        cache.store_loaded("http://x/c.png".to_string(), image);
        assert!(!cache.has_pending());
        assert!(!cache.is_failed("http://x/c.png"));
    }
}
