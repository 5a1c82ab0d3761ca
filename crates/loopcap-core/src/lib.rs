//! Loopcap Core - Shared types for capture, comparison and encoding
//!
//! This crate provides the data model used across the Loopcap
//! components: packed pixels and channel masks, raster access, frame
//! descriptors, duplicate-removal configuration and its persistence.

pub mod config;
pub mod error;
pub mod frame;
pub mod pixel;
pub mod raster;
pub mod region;
pub mod settings;

pub use config::{DedupConfig, DedupPolicy, DelayAdjust, KeepMode};
pub use error::{Error, Result};
pub use frame::Frame;
pub use pixel::{ChannelMask, Pixel};
pub use raster::{PixelBuffer, Raster};
pub use region::Region;
pub use settings::{DedupSettings, SettingsStore};
