//! SVG overlay assembly: the preview canvas with detection boxes drawn on
//! top of the source image.
use ewscan_detect::Detection;

use crate::image_source::SelectedImage;

const STROKE_COLOR: &str = "#00FF00";
const STROKE_WIDTH: u32 = 2;
const LABEL_FONT_SIZE: u32 = 16;
/// Label baseline offset above the box's top-left corner.
const LABEL_OFFSET: f32 = 5.0;

/// Display size of the overlay canvas.
///
/// Bounding boxes arrive in intrinsic-image pixels; rendering scales them
/// by `canvas / original` per axis, so a canvas at the intrinsic size draws
/// boxes 1:1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
  pub width: u32,
  pub height: u32,
}

impl CanvasSize {
  /// Parse a size string like "1280x960" into a CanvasSize
  pub fn parse(s: &str) -> Result<Self, String> {
    let (w, h) = s
      .split_once('x')
      .ok_or_else(|| format!("invalid size format '{}'; expected WIDTHxHEIGHT", s))?;
    let width = w
      .parse::<u32>()
      .map_err(|_| format!("invalid width in '{}'", s))?;
    let height = h
      .parse::<u32>()
      .map_err(|_| format!("invalid height in '{}'", s))?;
    if width == 0 || height == 0 {
      return Err(format!("width and height must be > 0 in '{}'", s));
    }
    Ok(Self { width, height })
  }

  /// Canvas matching the image's intrinsic dimensions.
  pub fn intrinsic(image: &SelectedImage) -> Self {
    Self {
      width: image.width,
      height: image.height,
    }
  }
}

/// Renders the overlay document: the image embedded as a data URI with one
/// outlined, labeled rectangle per detection.
pub fn render_overlay(
  image: &SelectedImage,
  detections: &[Detection],
  canvas: CanvasSize,
) -> String {
  let scale_x = canvas.width as f32 / image.width as f32;
  let scale_y = canvas.height as f32 / image.height as f32;

  let mut svg = format!(
    "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
    w = canvas.width,
    h = canvas.height
  );
  svg.push_str(&format!(
    "  <image href=\"data:{};base64,{}\" x=\"0\" y=\"0\" width=\"{}\" height=\"{}\"/>\n",
    image.mime_type(),
    image.to_base64(),
    canvas.width,
    canvas.height
  ));

  for detection in detections {
    let b = detection.bbox.scaled(scale_x, scale_y);
    svg.push_str(&format!(
      "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
      b.x1,
      b.y1,
      b.width(),
      b.height(),
      STROKE_COLOR,
      STROKE_WIDTH
    ));

    let label = format!(
      "{} ({:.1}%)",
      detection.class_name,
      detection.confidence * 100.0
    );
    svg.push_str(&format!(
      "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-family=\"Arial\" font-size=\"{}\">{}</text>\n",
      b.x1,
      b.y1 - LABEL_OFFSET,
      STROKE_COLOR,
      LABEL_FONT_SIZE,
      escape_xml(&label)
    ));
  }

  svg.push_str("</svg>\n");
  svg
}

fn escape_xml(text: &str) -> String {
  text
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
}
