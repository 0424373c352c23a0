//! Colour arithmetic.
//!
//! All operations are piecewise over the red, green, and blue channels;
//! alpha is never touched. Operands are read through the normalised RGB
//! getters, so an HSL-native colour converts before the first operation.
//! Results are stored raw and only normalised on the next channel read.

use crate::colour::Colour;
use crate::error::{Result, TintError};

/// The right-hand side of a colour operation: another colour (applied
/// componentwise) or a whole number (applied to all three channels).
#[derive(Debug, Clone)]
pub enum Operand {
    Colour(Colour),
    Number(f64),
}

impl From<Colour> for Operand {
    fn from(colour: Colour) -> Self {
        Operand::Colour(colour)
    }
}

impl From<&Colour> for Operand {
    fn from(colour: &Colour) -> Self {
        Operand::Colour(colour.clone())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Number(value as f64)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Number(f64::from(value))
    }
}

impl Operand {
    /// Resolve to one value per channel. Numbers must be whole.
    fn channels(&self, operation: &'static str) -> Result<(i64, i64, i64)> {
        match self {
            Operand::Colour(c) => Ok((
                i64::from(c.red()),
                i64::from(c.green()),
                i64::from(c.blue()),
            )),
            Operand::Number(n) => {
                let n = Self::whole(*n, operation)?;
                Ok((n, n, n))
            }
        }
    }

    /// Resolve to a whole number; colours are rejected.
    fn number(&self, operation: &'static str) -> Result<i64> {
        match self {
            Operand::Colour(_) => Err(TintError::InvalidOperand { operation }),
            Operand::Number(n) => Self::whole(*n, operation),
        }
    }

    fn whole(n: f64, operation: &'static str) -> Result<i64> {
        if n.fract() != 0.0 {
            return Err(TintError::InvalidOperand { operation });
        }
        Ok(n as i64)
    }
}

impl Colour {
    /// Colour addition.
    pub fn add(&self, other: impl Into<Operand>) -> Result<Colour> {
        let (r, g, b) = other.into().channels("add")?;
        Ok(self.derive_rgb(
            (i64::from(self.red()) + r) as f64,
            (i64::from(self.green()) + g) as f64,
            (i64::from(self.blue()) + b) as f64,
        ))
    }

    /// Colour subtraction.
    pub fn subtract(&self, other: impl Into<Operand>) -> Result<Colour> {
        let (r, g, b) = other.into().channels("subtract")?;
        Ok(self.derive_rgb(
            (i64::from(self.red()) - r) as f64,
            (i64::from(self.green()) - g) as f64,
            (i64::from(self.blue()) - b) as f64,
        ))
    }

    /// Colour multiplication.
    pub fn multiply(&self, other: impl Into<Operand>) -> Result<Colour> {
        let (r, g, b) = other.into().channels("multiply")?;
        Ok(self.derive_rgb(
            (i64::from(self.red()) * r) as f64,
            (i64::from(self.green()) * g) as f64,
            (i64::from(self.blue()) * b) as f64,
        ))
    }

    /// Colour division. Division is real-valued; the fractional result is
    /// kept until the next channel read normalises it.
    pub fn divide(&self, other: impl Into<Operand>) -> Result<Colour> {
        let (r, g, b) = other.into().channels("divide")?;
        if r == 0 || g == 0 || b == 0 {
            return Err(TintError::InvalidOperand {
                operation: "divide",
            });
        }
        Ok(self.derive_rgb(
            f64::from(self.red()) / r as f64,
            f64::from(self.green()) / g as f64,
            f64::from(self.blue()) / b as f64,
        ))
    }

    /// Colour modulus.
    pub fn modulus(&self, other: impl Into<Operand>) -> Result<Colour> {
        let (r, g, b) = other.into().channels("modulus")?;
        if r == 0 || g == 0 || b == 0 {
            return Err(TintError::InvalidOperand {
                operation: "modulus",
            });
        }
        Ok(self.derive_rgb(
            (i64::from(self.red()) % r) as f64,
            (i64::from(self.green()) % g) as f64,
            (i64::from(self.blue()) % b) as f64,
        ))
    }

    /// Colour bitwise AND.
    pub fn bitwise_and(&self, other: impl Into<Operand>) -> Result<Colour> {
        let (r, g, b) = other.into().channels("bitwise AND")?;
        Ok(self.derive_rgb(
            (i64::from(self.red()) & r) as f64,
            (i64::from(self.green()) & g) as f64,
            (i64::from(self.blue()) & b) as f64,
        ))
    }

    /// Colour bitwise OR.
    pub fn bitwise_or(&self, other: impl Into<Operand>) -> Result<Colour> {
        let (r, g, b) = other.into().channels("bitwise OR")?;
        Ok(self.derive_rgb(
            (i64::from(self.red()) | r) as f64,
            (i64::from(self.green()) | g) as f64,
            (i64::from(self.blue()) | b) as f64,
        ))
    }

    /// Colour bitwise XOR.
    pub fn bitwise_xor(&self, other: impl Into<Operand>) -> Result<Colour> {
        let (r, g, b) = other.into().channels("bitwise XOR")?;
        Ok(self.derive_rgb(
            (i64::from(self.red()) ^ r) as f64,
            (i64::from(self.green()) ^ g) as f64,
            (i64::from(self.blue()) ^ b) as f64,
        ))
    }

    /// Colour bitwise NOT.
    pub fn bitwise_not(&self) -> Colour {
        self.derive_rgb(
            (!i64::from(self.red())) as f64,
            (!i64::from(self.green())) as f64,
            (!i64::from(self.blue())) as f64,
        )
    }

    /// Colour bitwise shift left. The operand must be a whole number of
    /// bits in 0..=63; shifts wrap in 64-bit space.
    pub fn shift_left(&self, bits: impl Into<Operand>) -> Result<Colour> {
        let bits = Self::shift_bits(bits.into(), "shift left")?;
        Ok(self.derive_rgb(
            i64::from(self.red()).wrapping_shl(bits) as f64,
            i64::from(self.green()).wrapping_shl(bits) as f64,
            i64::from(self.blue()).wrapping_shl(bits) as f64,
        ))
    }

    /// Colour bitwise shift right.
    pub fn shift_right(&self, bits: impl Into<Operand>) -> Result<Colour> {
        let bits = Self::shift_bits(bits.into(), "shift right")?;
        Ok(self.derive_rgb(
            i64::from(self.red()).wrapping_shr(bits) as f64,
            i64::from(self.green()).wrapping_shr(bits) as f64,
            i64::from(self.blue()).wrapping_shr(bits) as f64,
        ))
    }

    fn shift_bits(operand: Operand, operation: &'static str) -> Result<u32> {
        let bits = operand.number(operation)?;
        if !(0..=63).contains(&bits) {
            return Err(TintError::InvalidOperand { operation });
        }
        Ok(bits as u32)
    }
}
