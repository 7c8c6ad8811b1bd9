//! UI animations built on `iced_anim`
//!
//! Hover fades for the preset cards and the open/close transition of the
//! color dialog. Blob motion is driven separately by `features::driver`.

mod hover;

pub use hover::{HoverAnimations, SingleHoverAnimation};
