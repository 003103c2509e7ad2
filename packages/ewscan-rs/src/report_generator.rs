//! Turns one analysis pass into a human readable markdown report, writing
//! the optional bounding-box overlay next to it.
use anyhow::Result;
use chrono::Utc;
use ewscan_detect::{
  AnalysisInput, AnalysisResponse, DetectError, DetectionEngine, HazardInfo, NO_EWASTE_LOOKUP_KEY,
};
use std::path::PathBuf;
use tokio::fs;

use crate::image_source::SelectedImage;
use crate::overlay_generator::{render_overlay, CanvasSize};
use crate::stores::render_stores_section;

/// Configuration that controls how a report is generated.
pub struct ReportGeneratorOptions {
  pub image_path: PathBuf,
  pub output_file_path: PathBuf,
  pub overlay_file_path: Option<PathBuf>,
  pub canvas_size: Option<CanvasSize>,
  pub verbose: bool,
}

impl Default for ReportGeneratorOptions {
  fn default() -> Self {
    Self {
      image_path: PathBuf::from("image.png"),
      output_file_path: PathBuf::from("report.md"),
      overlay_file_path: None,
      canvas_size: None,
      verbose: true,
    }
  }
}

/// Result returned after a report generation run.
#[derive(Debug, Clone)]
pub struct ReportResult {
  pub success: bool,
  pub detection_count: Option<usize>,
  pub error: Option<String>,
}

/// Drives one analysis pass: load the image, submit it to the engine, fetch
/// hazard text, and assemble the report document.
///
/// Every failure is rendered into the report instead of aborting the pass;
/// nothing is retried. The engine is injected, so the same flow runs
/// against the remote backend or a stub.
pub struct ReportGenerator {
  options: ReportGeneratorOptions,
}

impl ReportGenerator {
  pub fn new(options: ReportGeneratorOptions) -> Self {
    Self { options }
  }

  /// Creates the complete report document for one analysis pass.
  pub async fn create_report_document(
    &mut self,
    engine: &dyn DetectionEngine,
  ) -> Result<ReportResult> {
    let image = match SelectedImage::load(&self.options.image_path).await {
      Ok(image) => image,
      // an unusable selection never produces a network request
      Err(e) => {
        let message = format!("Please select or drop an image first to analyze. ({})", e);
        return self.finish_failure(message).await;
      }
    };

    if self.options.verbose {
      println!(
        "Analyzing {} ({}x{})...",
        image.path.display(),
        image.width,
        image.height
      );
    }

    let input = AnalysisInput::Bytes(image.bytes.clone());
    let response = match engine.analyze(&input).await {
      Ok(response) => response,
      Err(e) => return self.finish_failure(analyze_error_message(&e)).await,
    };

    if !response.is_success() {
      let message = response
        .message
        .clone()
        .unwrap_or_else(|| "Unknown error during analysis.".to_string());
      return self.finish_failure(message).await;
    }

    let markdown = self.render_success(engine, &image, &response).await;
    self.write_overlay(&image, &response).await?;
    self.write_report(&markdown).await?;

    if self.options.verbose {
      println!("{{ \"detections\": {} }}", response.detections.len());
    }

    Ok(ReportResult {
      success: true,
      detection_count: Some(response.detections.len()),
      error: None,
    })
  }

  async fn render_success(
    &self,
    engine: &dyn DetectionEngine,
    image: &SelectedImage,
    response: &AnalysisResponse,
  ) -> String {
    let mut markdown = String::from("# Analysis Result\n\n");
    markdown.push_str(&format!(
      "Generated: {}\n\n",
      Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    markdown.push_str(&format!(
      "Image: {} ({}x{})\n\n",
      image.path.display(),
      image.width,
      image.height
    ));

    match response.identified_type() {
      Some(primary) => {
        markdown.push_str(&format!("**Primary E-waste Type Detected:** {}\n\n", primary));
        markdown.push_str(
          &self
            .hazard_section(engine, primary, response.primary_ewaste_info.as_ref(), true)
            .await,
        );
      }
      None => {
        markdown.push_str("No specific e-waste detected in the image.\n\n");
        markdown.push_str(
          &self
            .hazard_section(engine, NO_EWASTE_LOOKUP_KEY, None, false)
            .await,
        );
      }
    }

    if !response.detections.is_empty() {
      markdown.push_str("## All Detections\n\n");
      for detection in &response.detections {
        markdown.push_str(&format!(
          "- {} (Confidence: {}%)\n",
          detection.class_name,
          detection.confidence_percent()
        ));
      }
      markdown.push('\n');
    } else {
      markdown.push_str("No specific e-waste detected.\n\n");
    }

    markdown.push_str(&render_stores_section());
    markdown
  }

  /// Hazard lookup degrades to the info the analysis response already
  /// carried, then to a fallback sentence; it never aborts the report.
  async fn hazard_section(
    &self,
    engine: &dyn DetectionEngine,
    ewaste_type: &str,
    prefetched: Option<&HazardInfo>,
    named: bool,
  ) -> String {
    match engine.hazards(ewaste_type).await {
      Ok(info) => {
        let mut section = String::new();
        match info.summary() {
          Some(summary) if named => {
            section.push_str(&format!("**Hazards:** {}\n\n", summary));
          }
          Some(summary) => {
            section.push_str(&format!("{}\n\n", summary));
          }
          None => {
            section.push_str(&format!(
              "*Hazard information is unavailable for {}.*\n\n",
              ewaste_type
            ));
          }
        }
        if let Some(materials) = &info.materials {
          section.push_str(&format!("**Materials:** {}\n\n", materials));
        }
        if let Some(level) = info.hazard_level {
          section.push_str(&format!("**Hazard level:** {}/5\n\n", level));
        }
        section
      }
      Err(e) => {
        if self.options.verbose {
          eprintln!("Hazard lookup failed for {}: {}", ewaste_type, e);
        }
        match prefetched.and_then(|info| info.summary()) {
          Some(summary) if named => format!("**Hazards:** {}\n\n", summary),
          Some(summary) => format!("{}\n\n", summary),
          None => format!(
            "*Could not fetch hazard information for {}.*\n\n",
            ewaste_type
          ),
        }
      }
    }
  }

  async fn write_overlay(&self, image: &SelectedImage, response: &AnalysisResponse) -> Result<()> {
    let Some(overlay_path) = &self.options.overlay_file_path else {
      return Ok(());
    };

    if response.detections.is_empty() {
      if self.options.verbose {
        println!("No detections; skipping overlay");
      }
      return Ok(());
    }

    let canvas = self
      .options
      .canvas_size
      .unwrap_or_else(|| CanvasSize::intrinsic(image));
    let svg = render_overlay(image, &response.detections, canvas);
    fs::write(overlay_path, svg).await?;

    if self.options.verbose {
      println!("Overlay written to {}", overlay_path.display());
    }
    Ok(())
  }

  async fn write_report(&self, markdown: &str) -> Result<()> {
    fs::write(&self.options.output_file_path, markdown).await?;
    if self.options.verbose {
      println!(
        "Report written to {}",
        self.options.output_file_path.display()
      );
    }
    Ok(())
  }

  /// Renders a terminal failure into the report document and the result.
  async fn finish_failure(&self, message: String) -> Result<ReportResult> {
    let markdown = format!("# Analysis Result\n\n**Error:** {}\n", message);
    self.write_report(&markdown).await?;
    Ok(ReportResult {
      success: false,
      detection_count: None,
      error: Some(message),
    })
  }
}

/// Message rendered when the analysis request itself fails.
fn analyze_error_message(error: &DetectError) -> String {
  match error {
    DetectError::Connection(detail) => format!(
      "Failed to connect to the analysis server. Please ensure the backend is running. Error: {}",
      detail
    ),
    DetectError::Api { detail, .. } => detail.clone(),
    other => other.to_string(),
  }
}
