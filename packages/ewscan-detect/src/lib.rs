pub mod engine;
pub mod region;
pub mod remote;

pub use engine::{
    AnalysisInput, AnalysisResponse, DetectError, DetectionEngine, HazardInfo,
    NO_EWASTE_LOOKUP_KEY, NO_EWASTE_SENTINEL,
};
pub use region::{BoundingBox, Detection};
pub use remote::{RemoteEngine, DEFAULT_API_BASE};
