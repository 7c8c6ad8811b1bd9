//! UI module for the blob studio
//! Indigo accent over a dark or light surface
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Primitives** (`primitives`): Canvas programs drawing blobs and the mesh scene
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//!
//! Pages assemble components into the four nav bar tabs.

pub mod animation;
pub mod components;
pub mod pages;
pub mod primitives;
pub mod theme;
pub mod widgets;
