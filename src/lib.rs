// THEORY:
// This file is the main entry point for the `tintwork` library crate. It follows
// the standard Rust convention of using `lib.rs` to define the public API that is
// exposed to external consumers.
//
// The heart of the crate is the clamped color toolkit: a generic `clamp`, a
// literal round-half-up, a three-channel `Color` whose arithmetic always passes
// through a single clamping gate, quantization to a reduced palette, and the
// pixel-buffer accessor that copies an image's colors out as a column-major grid
// or a row-major list. Around it sit a few small, independent helpers for
// resizing, strings and enum names, sequences, and timing.
//
// Every module lives under `core_modules` and is re-exported here, so callers can
// write `tintwork::Color` instead of spelling out the module path.

pub mod core_modules;
pub mod error;

pub use crate::core_modules::color::{add, div, mul, quantize, sub, Channel, Color, Operand};
pub use crate::core_modules::math::{clamp, round_half_up, ClampExt};
pub use crate::core_modules::pixel_buffer::{extract_flat, extract_grid, pixel_at, PixelBuffer, PixelSource};
pub use crate::core_modules::resize::{resize, target_dimensions, ResizeConfig, Resized};
pub use crate::core_modules::sequence::{
    aggregate, aggregate_stream, select_where, select_where_stream, SelectWhere, SequenceExt,
};
pub use crate::core_modules::text::{enum_to_name, parse_enum, parse_enum_ignore_case, substring_until, NamedEnum};
pub use crate::core_modules::timing::{measure, time_action, time_future, Stopwatch};
pub use crate::error::{Error, Result};

// Callers need the filter type to build a `ResizeConfig`.
pub use image::imageops::FilterType;
