//! Feature modules - blob logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod config;
pub mod driver;
pub mod gradient;
pub mod mesh;
pub mod outline;
pub mod palette;
pub mod presets;
pub mod settings;
pub mod stage;
pub mod svg;

pub use config::BlobConfig;
pub use driver::BlobFrame;
pub use gradient::{GradientDirection, GradientKind, GradientType};
pub use palette::{ColorScheme, CustomPalette};
pub use presets::{MotionPreset, ShowcasePreset};
pub use settings::Settings;
pub use stage::{BlobSlot, Stage};
