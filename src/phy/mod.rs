// Physical layer: binary input validation and line coding

pub mod bits;
pub mod encoder;
pub mod error;
pub mod line_coding;
pub mod signal;

pub use bits::{Bit, BitString, InitialLevel};
pub use encoder::LineEncoder;
pub use error::{EncodeError, Result};
pub use line_coding::LineCode;
pub use signal::{
    EncodedSignal, LevelSignal, Scheme, Signal, SignalShape, TransitionPoint,
    TransitionSignal,
};
