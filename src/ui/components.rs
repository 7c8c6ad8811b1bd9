//! UI Components module - business-specific composite components
//!
//! Components combine widgets and primitives with application logic.
//! They are the only layer besides pages that imports from `crate::app`.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Canvas programs for blobs and the mesh
//! - **Widgets** (`crate::ui::widgets`): Composable UI patterns (no business logic)
//! - **Components** (this module): Showcase cards, dialogs and the nav bar

pub mod blob_controls;
pub mod code_output;
pub mod color_dialog;
pub mod color_editor;
pub mod gradient_panel;
pub mod nav_bar;
pub mod preset_gallery;
