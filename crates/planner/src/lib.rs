//! # Rehearsal Planner
//!
//! The session layer between the tables on disk and the availability engine.
//!
//! ## Architecture
//!
//! - **Session**: owns the editable tables and rebuilds the availability index
//!   after every edit
//! - **Report**: turns resolutions into text or JSON for display
//! - **Config**: environment configuration

/// Configuration module for planner settings
pub mod config;
/// Rendering of resolutions for the presentation layer
pub mod report;
/// Mutable planning session over immutable snapshots
pub mod session;

pub use config::{PlannerConfig, ResolveOptions};
pub use report::PieceWindows;
pub use session::Planner;

use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs the global tracing subscriber at `level`.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
