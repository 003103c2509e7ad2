//! # ewscan-rs
//!
//! A library for detecting e-waste in images through a remote classification
//! service, rendering the results as markdown reports and bounding-box
//! overlays.
//!
//! ## Features
//!
//! - **Image Capture**: Load and validate an image file, probing the intrinsic dimensions the overlay scales against
//! - **Remote Analysis**: Submit the image as base64 JSON to a detection backend and parse the structured response
//! - **Hazard Lookup**: Fetch disposal-hazard information for the detected e-waste type, degrading gracefully on failure
//! - **Report Generation**: Render the primary type, hazards, detections, and recycling-store listings as markdown
//! - **Bounding-Box Overlays**: Draw detection boxes scaled to a display canvas as an SVG document
//!
//! ## Quick Start
//!
//! ```ignore
//! use ewscan_rs::prelude::*;
//!
//! // Point the engine at a running classification backend
//! let engine = RemoteEngine::new(DEFAULT_API_BASE)?;
//!
//! // Analyze one image and write report.md
//! let options = ReportGeneratorOptions {
//!     image_path: "ewaste.jpg".into(),
//!     ..Default::default()
//! };
//! let mut generator = ReportGenerator::new(options);
//! let result = generator.create_report_document(&engine).await?;
//! println!("detections: {:?}", result.detection_count);
//! ```

pub mod image_source;
pub mod overlay_generator;
pub mod report_generator;
pub mod stores;

// Re-export commonly used types at the root level
pub use image_source::{ImageSourceError, SelectedImage};
pub use overlay_generator::{render_overlay, CanvasSize};
pub use report_generator::{ReportGenerator, ReportGeneratorOptions, ReportResult};
pub use stores::{render_stores_section, MOCK_STORES};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```ignore
/// use ewscan_rs::prelude::*;
/// ```
pub mod prelude {
  pub use crate::{
    render_overlay, render_stores_section, CanvasSize, ImageSourceError, ReportGenerator,
    ReportGeneratorOptions, ReportResult, SelectedImage, MOCK_STORES,
  };
  pub use ewscan_detect::{
    AnalysisInput, AnalysisResponse, BoundingBox, DetectError, Detection, DetectionEngine,
    HazardInfo, RemoteEngine, DEFAULT_API_BASE, NO_EWASTE_LOOKUP_KEY, NO_EWASTE_SENTINEL,
  };
}
