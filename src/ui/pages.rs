//! Pages module
//! Full-page views, one per nav bar tab

pub mod examples;
pub mod scene;
pub mod settings;
pub mod showcase;
