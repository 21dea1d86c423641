pub mod color;
pub mod math;
pub mod pixel_buffer;
pub mod resize;
pub mod sequence;
pub mod text;
pub mod timing;
