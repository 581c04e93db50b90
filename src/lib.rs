//! SubAuto - subdomain discovery, live host filtering and screenshots
//! driven by subfinder, amass, httpx and eyewitness.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod menu;
pub mod pipeline;
pub mod runner;
pub mod screenshot;
pub mod subdomains;
pub mod tools;

pub use config::{ReconConfig, ToolBinaries};
pub use error::{PipelineError, ToolError};
pub use pipeline::ReconPipeline;
pub use subdomains::SubdomainSet;
