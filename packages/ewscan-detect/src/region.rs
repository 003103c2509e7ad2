use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in source-image pixel coordinates.
///
/// The wire format is a four element array `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Returns the box scaled by `displayed / original` ratios per axis.
    /// Coordinates stay intrinsic-pixel-based until display time.
    pub fn scaled(&self, scale_x: f32, scale_y: f32) -> Self {
        Self {
            x1: self.x1 * scale_x,
            y1: self.y1 * scale_y,
            x2: self.x2 * scale_x,
            y2: self.y2 * scale_y,
        }
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<BoundingBox> for [f32; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x1, b.y1, b.x2, b.y2]
    }
}

/// One classified object instance returned by the detection backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub class_name: String,
    pub confidence: f32,
    pub bbox: BoundingBox,
}

impl Detection {
    /// Confidence rounded to a whole percent, as shown in detection listings.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_wire_format() {
        let det: Detection = serde_json::from_str(
            r#"{"class_name":"battery","confidence":0.87,"bbox":[10.0,10.0,50.0,50.0]}"#,
        )
        .unwrap();
        assert_eq!(det.class_name, "battery");
        assert_eq!(det.bbox, BoundingBox::new(10.0, 10.0, 50.0, 50.0));

        let json = serde_json::to_value(&det).unwrap();
        assert_eq!(json["bbox"], serde_json::json!([10.0, 10.0, 50.0, 50.0]));
    }

    #[test]
    fn test_bbox_scaling() {
        // canvas twice the size of the original image
        let scaled = BoundingBox::new(10.0, 10.0, 50.0, 50.0).scaled(2.0, 2.0);
        assert_eq!(scaled, BoundingBox::new(20.0, 20.0, 100.0, 100.0));
        assert_eq!(scaled.width(), 80.0);
        assert_eq!(scaled.height(), 80.0);
    }

    #[test]
    fn test_confidence_percent_rounds() {
        let det = Detection {
            class_name: "battery".to_string(),
            confidence: 0.87,
            bbox: BoundingBox::new(0.0, 0.0, 1.0, 1.0),
        };
        assert_eq!(det.confidence_percent(), 87);
    }
}
