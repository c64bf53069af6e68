//! PNG snapshots of report cards.
//!
//! The card is drawn as SVG markup, decoded into an image, painted on a canvas at twice
//! its size and downloaded as `image/png`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url,
};

use super::export::download_url;

const SVG_MIME: &str = "image/svg+xml;charset=utf-8";
const PNG_MIME: &str = "image/png";
const PIXEL_RATIO: f64 = 2.0;

const FONT_FAMILY: &str = "Montserrat, sans-serif";
const BACKGROUND: &str = "#30454C";
const FOREGROUND: &str = "#F7FBFE";
const MUTED: &str = "#9FA9AC";

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// SVG document built element by element.
#[derive(Debug, Clone)]
pub struct SvgCard {
    width: u32,
    height: u32,
    body: String,
}

impl SvgCard {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn text(&mut self, x: f64, y: f64, size: u32, bold: bool, content: &str) {
        self.body.push_str(&format!(
            r#"<text x="{x}" y="{y}" font-size="{size}" font-weight="{}" fill="{FOREGROUND}">{}</text>"#,
            if bold { 600 } else { 400 },
            escape_xml(content)
        ));
    }

    pub fn caption(&mut self, x: f64, y: f64, content: &str) {
        self.body.push_str(&format!(
            r#"<text x="{x}" y="{y}" font-size="11" font-weight="600" fill="{MUTED}">{}</text>"#,
            escape_xml(content)
        ));
    }

    pub fn rule(&mut self, y: f64) {
        self.body.push_str(&format!(
            r#"<line x1="24" y1="{y}" x2="{}" y2="{y}" stroke="{MUTED}" stroke-width="1"/>"#,
            self.width.saturating_sub(24)
        ));
    }

    pub fn to_markup(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}"><rect width="{w}" height="{h}" rx="8" fill="{BACKGROUND}"/>{body}</svg>"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

/// Rasterizes `card` and downloads it as `filename`.
pub async fn download_card_png(card: &SvgCard, filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&card.to_markup()));
    let properties = BlobPropertyBag::new();
    properties.set_type(SVG_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create SVG blob: {:?}", e))?;
    let svg_url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create SVG URL: {:?}", e))?;

    let rendered = render_png(card, &svg_url).await;
    Url::revoke_object_url(&svg_url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    download_url(&rendered?, filename)?;
    log::info!("Saved snapshot {}", filename);
    Ok(())
}

async fn render_png(card: &SvgCard, svg_url: &str) -> Result<String, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document object")?;

    let canvas = document
        .create_element("canvas")
        .map_err(|e| format!("Failed to create canvas: {:?}", e))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|e| format!("Failed to cast to canvas: {:?}", e))?;
    canvas.set_width((card.width() as f64 * PIXEL_RATIO) as u32);
    canvas.set_height((card.height() as f64 * PIXEL_RATIO) as u32);

    let context = canvas
        .get_context("2d")
        .map_err(|e| format!("Canvas context unavailable: {:?}", e))?
        .ok_or("Canvas context missing")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|e| format!("Failed to cast canvas context: {:?}", e))?;
    context
        .scale(PIXEL_RATIO, PIXEL_RATIO)
        .map_err(|e| format!("Failed to scale canvas: {:?}", e))?;

    let image = HtmlImageElement::new().map_err(|e| format!("Failed to create image: {:?}", e))?;
    image.set_src(svg_url);
    JsFuture::from(image.decode())
        .await
        .map_err(|e| format!("Failed to decode snapshot: {:?}", e))?;

    context
        .draw_image_with_html_image_element(&image, 0.0, 0.0)
        .map_err(|e| format!("Failed to draw snapshot: {:?}", e))?;

    canvas
        .to_data_url_with_type(PNG_MIME)
        .map_err(|e| format!("Failed to encode PNG: {:?}", e))
}
