use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tint operations
#[derive(Error, Diagnostic, Debug)]
pub enum TintError {
    #[error("invalid colour: {input:?}")]
    #[diagnostic(
        code(tint::parse),
        help("use a CSS colour name, \"transparent\", #rgb, or #rrggbb")
    )]
    InvalidColour { input: String },

    #[error("colour cannot have both RGB and HSL channels")]
    #[diagnostic(code(tint::channels))]
    MixedColourSpace,

    #[error("colour must have all {space} channels")]
    #[diagnostic(code(tint::channels))]
    IncompleteColourSpace { space: &'static str },

    #[error("colour needs at least 3 components, got {count}")]
    #[diagnostic(code(tint::channels))]
    TooFewComponents { count: usize },

    #[error("invalid operand for colour {operation}")]
    #[diagnostic(
        code(tint::arithmetic),
        help("operands are colours or whole numbers; divisors must be non-zero")
    )]
    InvalidOperand { operation: &'static str },

    #[error("unsupported format {format:?}")]
    #[diagnostic(
        code(tint::format),
        help("formats are rgb, rgba, hsl, hsla, hex, and named")
    )]
    UnsupportedFormat { format: String },

    #[error("amount must be a whole number, got {amount}")]
    #[diagnostic(code(tint::adjust))]
    InvalidAmount { amount: f64 },

    #[error("amount must be between {min} and {max}, got {amount}")]
    #[diagnostic(code(tint::adjust))]
    AmountOutOfRange { amount: f64, min: f64, max: f64 },

    #[error("invalid palette mode {mode:?}")]
    #[diagnostic(
        code(tint::palette),
        help("modes are mono, analogous, complements, split-complements, triads, tetrads, wheel, or a factor of 360")
    )]
    InvalidMode { mode: String },

    #[error("maximum number of colours for {mode} mode is {max}, {requested} requested")]
    #[diagnostic(code(tint::palette))]
    TooManyColours {
        mode: String,
        max: usize,
        requested: usize,
    },
}

pub type Result<T> = std::result::Result<T, TintError>;
