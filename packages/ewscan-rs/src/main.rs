mod cli;

use clap::Parser;
use cli::{Args, Commands};
use ewscan_detect::{DetectionEngine, RemoteEngine};
use ewscan_rs::overlay_generator::CanvasSize;
use ewscan_rs::report_generator::{ReportGenerator, ReportGeneratorOptions};

fn remote_engine(api_base: &str) -> RemoteEngine {
  match RemoteEngine::new(api_base) {
    Ok(engine) => engine,
    Err(e) => {
      eprintln!("Error: {}", e);
      std::process::exit(1);
    }
  }
}

#[tokio::main]
async fn main() {
  let args = Args::parse();

  match args.command {
    Commands::Version => {
      println!("ewscan {}", env!("CARGO_PKG_VERSION"));
    }

    Commands::Analyze {
      image,
      output_file_path,
      overlay,
      canvas_size,
      api_base,
      quiet,
    } => {
      let canvas_size = match canvas_size.as_deref().map(CanvasSize::parse).transpose() {
        Ok(size) => size,
        Err(e) => {
          eprintln!("Error: {}", e);
          std::process::exit(1);
        }
      };

      let engine = remote_engine(&api_base);
      let options = ReportGeneratorOptions {
        image_path: image,
        output_file_path,
        overlay_file_path: overlay,
        canvas_size,
        verbose: !quiet,
      };

      let mut generator = ReportGenerator::new(options);
      match generator.create_report_document(&engine).await {
        Ok(result) => {
          if !result.success {
            if let Some(error) = result.error {
              eprintln!("Error: {}", error);
            }
            std::process::exit(1);
          }
        }
        Err(e) => {
          eprintln!("Error: {}", e);
          std::process::exit(1);
        }
      }
    }

    Commands::Hazards {
      ewaste_type,
      api_base,
    } => {
      let engine = remote_engine(&api_base);
      match engine.hazards(&ewaste_type).await {
        Ok(info) => {
          match info.summary() {
            Some(summary) => println!("{}", summary),
            None => println!("No hazard information available for {}.", ewaste_type),
          }
          if let Some(materials) = info.materials {
            println!("Materials: {}", materials);
          }
          if let Some(level) = info.hazard_level {
            println!("Hazard level: {}/5", level);
          }
        }
        Err(e) => {
          eprintln!("Error: {}", e);
          std::process::exit(1);
        }
      }
    }

    Commands::Health { api_base } => {
      let engine = remote_engine(&api_base);
      if engine.health_check().await {
        println!("Backend at {} is reachable", api_base);
      } else {
        eprintln!("Backend at {} is not reachable", api_base);
        std::process::exit(1);
      }
    }
  }
}
