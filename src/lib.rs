//! Time-of-day sky color engine.
//!
//! Maps any fractional hour of the local day onto an interpolated sky
//! palette: a five-stop zenith-to-horizon gradient and a star tint, both
//! driven by fixed keyframe tables spanning one 24-hour cycle. Renderers
//! either query a palette for an arbitrary hour or subscribe to a
//! [`live::LiveFeed`] that tracks the wall clock on a fixed refresh interval.

pub mod clock;
pub mod color;
pub mod config;
pub mod interpolate;
pub mod keyframes;
pub mod live;
