//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI pieces, each implementing
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Interactions are reported through callbacks
//!
//! # Contents
//!
//! - [`blob_canvas`] - One morphing blob frame with gradient, glow and shadow
//! - [`mesh_canvas`] - Projected 3D mesh scene with orbit input
//! - [`gradient_dial`] - Gradient direction indicator and picker

pub mod blob_canvas;
pub mod gradient_dial;
pub mod mesh_canvas;
