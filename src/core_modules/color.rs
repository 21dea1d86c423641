// THEORY:
// The `Color` module is the fundamental value of the crate: three 8-bit
// channels (red, green, blue) that always move in lock-step. Like a pixel, it is
// a "dumb" data container. It does not know where it came from or where it is
// going, only how to combine itself with another value.
//
// Key architectural principles:
// 1.  **One gate for out-of-range values**: channel arithmetic is done in a wide
//     integer type, so intermediate results may be negative or far above 255.
//     Every operation hands its raw per-channel results to
//     `Color::from_channels_clamped`, and that is the only place where a value
//     is silently corrected. Nothing upstream of it clamps.
// 2.  **Three right-hand shapes**: a color (channel with matching channel), a
//     byte (same integer for every channel) and a float scalar (same scalar for
//     every channel, each result rounded half up before the gate). These are
//     modelled as `Operand` so every operation has a single implementation.
// 3.  **Saturating, except division**: add, sub and mul can never fail, so they
//     are plain methods and `std::ops` impls. Division can meet a zero divisor,
//     which is a domain error and not something to clamp away, so it returns a
//     `Result`.
// 4.  **Quantization is integer-stepped**: a quantized channel is always
//     `k * (255 / factor)` with `k` in `[0, factor]`, where `255 / factor` is
//     truncating integer division.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::core_modules::math::{clamp, round_half_up};
use crate::error::{Error, Result};

pub type Channel = u8;
/// Intermediate type for per-channel arithmetic before clamping.
pub type WideChannel = i32;
pub type Scalar = f64;

const CHANNEL_MIN: WideChannel = Channel::MIN as WideChannel;
const CHANNEL_MAX: WideChannel = Channel::MAX as WideChannel;

/// An opaque RGB color with one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// The red channel value (0-255).
    pub red: Channel,
    /// The green channel value (0-255).
    pub green: Channel,
    /// The blue channel value (0-255).
    pub blue: Channel,
}

/// The right-hand side of a channel-wise color operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Combine channel with matching channel.
    Color(Color),
    /// Apply the same byte to every channel with integer arithmetic.
    Byte(Channel),
    /// Apply the same scalar to every channel, rounding each result half up.
    Scalar(Scalar),
}

impl From<Color> for Operand {
    fn from(color: Color) -> Self {
        Operand::Color(color)
    }
}

impl From<Channel> for Operand {
    fn from(byte: Channel) -> Self {
        Operand::Byte(byte)
    }
}

impl From<Scalar> for Operand {
    fn from(scalar: Scalar) -> Self {
        Operand::Scalar(scalar)
    }
}

impl Operand {
    fn has_zero(&self) -> bool {
        match *self {
            Operand::Color(c) => c.red == 0 || c.green == 0 || c.blue == 0,
            Operand::Byte(b) => b == 0,
            Operand::Scalar(s) => s == 0.0,
        }
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
        Color { red, green, blue }
    }

    /// Builds a color from wide integers, clamping each into `[0, 255]`.
    ///
    /// This is the only constructor that accepts out-of-range input, and every
    /// arithmetic operation on `Color` funnels its results through it.
    pub fn from_channels_clamped(red: WideChannel, green: WideChannel, blue: WideChannel) -> Self {
        let narrow = |v: WideChannel| clamp(v, CHANNEL_MIN, CHANNEL_MAX) as Channel;
        Color::new(narrow(red), narrow(green), narrow(blue))
    }

    /// The channels as `[red, green, blue]`.
    pub const fn channels(self) -> [Channel; 3] {
        [self.red, self.green, self.blue]
    }

    /// Clamps each channel between the matching channels of `min` and `max`.
    pub fn clamp_to(self, min: Color, max: Color) -> Self {
        Color::new(
            clamp(self.red, min.red, max.red),
            clamp(self.green, min.green, max.green),
            clamp(self.blue, min.blue, max.blue),
        )
    }

    /// Clamps every channel into `[min, max]`.
    pub fn clamp_channels(self, min: Channel, max: Channel) -> Self {
        Color::new(
            clamp(self.red, min, max),
            clamp(self.green, min, max),
            clamp(self.blue, min, max),
        )
    }

    pub fn saturating_add(self, rhs: impl Into<Operand>) -> Self {
        self.combine(rhs.into(), |a, b| a + b, |a, b| a + b)
    }

    pub fn saturating_sub(self, rhs: impl Into<Operand>) -> Self {
        self.combine(rhs.into(), |a, b| a - b, |a, b| a - b)
    }

    pub fn saturating_mul(self, rhs: impl Into<Operand>) -> Self {
        self.combine(rhs.into(), |a, b| a * b, |a, b| a * b)
    }

    /// Divides channel-wise, truncating for integer shapes.
    ///
    /// # Errors
    ///
    /// [`Error::DivideByZero`] if the divisor byte or scalar is zero, or if any
    /// channel of a divisor color is zero.
    pub fn checked_div(self, rhs: impl Into<Operand>) -> Result<Self> {
        let rhs = rhs.into();
        if rhs.has_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self.combine(rhs, |a, b| a / b, |a, b| a / b))
    }

    /// Snaps every channel to one of `factor + 1` evenly stepped levels.
    ///
    /// Each channel `c` becomes `round_half_up(factor * c / 255) * (255 / factor)`
    /// where the second division truncates.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `factor` is zero or negative.
    pub fn quantize(self, factor: WideChannel) -> Result<Self> {
        if factor <= 0 {
            return Err(Error::invalid_argument(
                "factor",
                format!("quantization factor must be positive, got {factor}"),
            ));
        }
        let step = CHANNEL_MAX / factor;
        let level = |c: Channel| {
            let k = round_half_up(Scalar::from(factor) * Scalar::from(c) / Scalar::from(CHANNEL_MAX));
            k.saturating_mul(step)
        };
        Ok(Color::from_channels_clamped(
            level(self.red),
            level(self.green),
            level(self.blue),
        ))
    }

    fn combine(
        self,
        rhs: Operand,
        int_op: impl Fn(WideChannel, WideChannel) -> WideChannel,
        float_op: impl Fn(Scalar, Scalar) -> Scalar,
    ) -> Self {
        let [r, g, b] = self.channels().map(WideChannel::from);
        match rhs {
            Operand::Color(other) => {
                let [or, og, ob] = other.channels().map(WideChannel::from);
                Color::from_channels_clamped(int_op(r, or), int_op(g, og), int_op(b, ob))
            }
            Operand::Byte(byte) => {
                let byte = WideChannel::from(byte);
                Color::from_channels_clamped(int_op(r, byte), int_op(g, byte), int_op(b, byte))
            }
            Operand::Scalar(s) => {
                let apply = |c: WideChannel| round_half_up(float_op(Scalar::from(c), s));
                Color::from_channels_clamped(apply(r), apply(g), apply(b))
            }
        }
    }
}

/// Channel-wise saturating addition.
pub fn add(color: Color, rhs: impl Into<Operand>) -> Color {
    color.saturating_add(rhs)
}

/// Channel-wise saturating subtraction.
pub fn sub(color: Color, rhs: impl Into<Operand>) -> Color {
    color.saturating_sub(rhs)
}

/// Channel-wise saturating multiplication.
pub fn mul(color: Color, rhs: impl Into<Operand>) -> Color {
    color.saturating_mul(rhs)
}

/// Channel-wise division. See [`Color::checked_div`].
pub fn div(color: Color, rhs: impl Into<Operand>) -> Result<Color> {
    color.checked_div(rhs)
}

/// Quantizes a color. See [`Color::quantize`].
pub fn quantize(color: Color, factor: WideChannel) -> Result<Color> {
    color.quantize(factor)
}

macro_rules! impl_saturating_op {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl $trait<Color> for Color {
            type Output = Color;
            fn $method(self, rhs: Color) -> Color {
                self.$inherent(rhs)
            }
        }

        impl $trait<Channel> for Color {
            type Output = Color;
            fn $method(self, rhs: Channel) -> Color {
                self.$inherent(rhs)
            }
        }

        impl $trait<Scalar> for Color {
            type Output = Color;
            fn $method(self, rhs: Scalar) -> Color {
                self.$inherent(rhs)
            }
        }
    };
}

impl_saturating_op!(Add, add, saturating_add);
impl_saturating_op!(Sub, sub, saturating_sub);
impl_saturating_op!(Mul, mul, saturating_mul);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl From<(Channel, Channel, Channel)> for Color {
    fn from((red, green, blue): (Channel, Channel, Channel)) -> Self {
        Color::new(red, green, blue)
    }
}

impl From<Color> for (Channel, Channel, Channel) {
    fn from(color: Color) -> Self {
        (color.red, color.green, color.blue)
    }
}

impl From<image::Rgb<Channel>> for Color {
    fn from(pixel: image::Rgb<Channel>) -> Self {
        let [red, green, blue] = pixel.0;
        Color::new(red, green, blue)
    }
}

impl From<Color> for image::Rgb<Channel> {
    fn from(color: Color) -> Self {
        image::Rgb(color.channels())
    }
}

/// Alpha is discarded.
impl From<image::Rgba<Channel>> for Color {
    fn from(pixel: image::Rgba<Channel>) -> Self {
        let [red, green, blue, _] = pixel.0;
        Color::new(red, green, blue)
    }
}

/// The result is fully opaque.
impl From<Color> for image::Rgba<Channel> {
    fn from(color: Color) -> Self {
        image::Rgba([color.red, color.green, color.blue, Channel::MAX])
    }
}
