// Line coding transforms: NRZ-L, NRZ-I, Bipolar AMI, Pseudoternary,
// Manchester and Differential Manchester.
//
// Every transform is a pure function of (bits, initial level). Running state
// lives in locals and never escapes the call.

use tracing::debug;

use super::bits::{Bit, BitString, InitialLevel};
use super::signal::{LevelSignal, Scheme, Signal, TransitionSignal};

/// NRZ-L: 1 -> high (1), 0 -> low (0)
pub fn nrz_l(bits: &BitString) -> LevelSignal {
    let samples = bits
        .iter()
        .map(|bit| if bit.is_one() { 1 } else { 0 })
        .collect();
    LevelSignal::from_bit_samples(samples)
}

/// NRZ-I: 1 -> transition at the start of the interval, 0 -> no transition
pub fn nrz_i(bits: &BitString, initial: InitialLevel) -> LevelSignal {
    let mut level = initial.level();
    let samples = bits
        .iter()
        .map(|bit| {
            if bit.is_one() {
                level ^= 1;
            }
            level as i8
        })
        .collect();
    LevelSignal::from_bit_samples(samples)
}

/// Emit alternating +1/-1 for every `mark` bit and 0 for the other symbol.
/// The first mark takes the polarity opposite to the initial level.
fn alternate_marks(
    bits: &BitString,
    initial: InitialLevel,
    mark: Bit,
) -> LevelSignal {
    let mut polarity = -initial.sign();
    let samples = bits
        .iter()
        .map(|bit| {
            if bit == mark {
                let sample = polarity;
                polarity = -polarity;
                sample
            } else {
                0
            }
        })
        .collect();
    LevelSignal::from_bit_samples(samples)
}

/// Bipolar AMI: 0 -> no line signal, 1 -> alternating +1/-1
pub fn bipolar_ami(bits: &BitString, initial: InitialLevel) -> LevelSignal {
    alternate_marks(bits, initial, Bit::One)
}

/// Pseudoternary: 0 -> alternating +1/-1, 1 -> no line signal
pub fn pseudoternary(bits: &BitString, initial: InitialLevel) -> LevelSignal {
    alternate_marks(bits, initial, Bit::Zero)
}

/// Manchester: 0 -> high to low, 1 -> low to high at the bit center
pub fn manchester(bits: &BitString) -> TransitionSignal {
    let mut signal = TransitionSignal::with_bits(bits.len());
    for (i, bit) in bits.iter().enumerate() {
        match bit {
            Bit::One => signal.push_bit(i, 0, 1),
            Bit::Zero => signal.push_bit(i, 1, 0),
        }
    }
    signal
}

/// Differential Manchester: always a transition at the center,
/// 0 -> extra transition at the start, 1 -> none at the start
pub fn differential_manchester(
    bits: &BitString,
    initial: InitialLevel,
) -> TransitionSignal {
    let mut signal = TransitionSignal::with_bits(bits.len());
    let mut level = initial.level();
    for (i, bit) in bits.iter().enumerate() {
        if bit == Bit::Zero {
            level ^= 1;
        }
        let first_half = level;
        level ^= 1;
        signal.push_bit(i, first_half, level);
    }
    signal
}

/// A line code producing one signal trace from validated bits.
pub trait LineCode: Send + Sync {
    fn scheme(&self) -> Scheme;

    fn encode(&self, bits: &BitString, initial: InitialLevel) -> Signal;

    fn name(&self) -> &'static str {
        self.scheme().name()
    }
}

pub struct NrzL;
pub struct NrzI;
pub struct BipolarAmi;
pub struct Pseudoternary;
pub struct Manchester;
pub struct DifferentialManchester;

impl LineCode for NrzL {
    fn scheme(&self) -> Scheme {
        Scheme::NrzL
    }

    fn encode(&self, bits: &BitString, _initial: InitialLevel) -> Signal {
        Signal::Level(nrz_l(bits))
    }
}

impl LineCode for NrzI {
    fn scheme(&self) -> Scheme {
        Scheme::NrzI
    }

    fn encode(&self, bits: &BitString, initial: InitialLevel) -> Signal {
        Signal::Level(nrz_i(bits, initial))
    }
}

impl LineCode for BipolarAmi {
    fn scheme(&self) -> Scheme {
        Scheme::BipolarAmi
    }

    fn encode(&self, bits: &BitString, initial: InitialLevel) -> Signal {
        Signal::Level(bipolar_ami(bits, initial))
    }
}

impl LineCode for Pseudoternary {
    fn scheme(&self) -> Scheme {
        Scheme::Pseudoternary
    }

    fn encode(&self, bits: &BitString, initial: InitialLevel) -> Signal {
        Signal::Level(pseudoternary(bits, initial))
    }
}

impl LineCode for Manchester {
    fn scheme(&self) -> Scheme {
        Scheme::Manchester
    }

    fn encode(&self, bits: &BitString, _initial: InitialLevel) -> Signal {
        Signal::Transition(manchester(bits))
    }
}

impl LineCode for DifferentialManchester {
    fn scheme(&self) -> Scheme {
        Scheme::DifferentialManchester
    }

    fn encode(&self, bits: &BitString, initial: InitialLevel) -> Signal {
        Signal::Transition(differential_manchester(bits, initial))
    }
}

impl Scheme {
    /// Line coder implementing this scheme
    pub fn line_code(self) -> &'static dyn LineCode {
        match self {
            Scheme::NrzL => &NrzL,
            Scheme::NrzI => &NrzI,
            Scheme::BipolarAmi => &BipolarAmi,
            Scheme::Pseudoternary => &Pseudoternary,
            Scheme::Manchester => &Manchester,
            Scheme::DifferentialManchester => &DifferentialManchester,
        }
    }

    pub fn encode(self, bits: &BitString, initial: InitialLevel) -> Signal {
        let signal = self.line_code().encode(bits, initial);
        debug!(
            "{}: {} bits -> {} samples",
            self.name(),
            bits.len(),
            match &signal {
                Signal::Level(s) => s.len(),
                Signal::Transition(s) => s.len(),
            }
        );
        signal
    }
}
