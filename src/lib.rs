//! Window restore animation for compositors.

pub mod config;
pub mod effect;
pub mod gfx;
pub mod host;

pub use config::Config;
pub use effect::{UnminimizeEffect, WindowPaintData};
pub use host::EffectsHost;
