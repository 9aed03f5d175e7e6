// Signal traces produced by the line coders

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The six supported line codes, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    NrzL,
    NrzI,
    BipolarAmi,
    Pseudoternary,
    Manchester,
    DifferentialManchester,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalShape {
    /// One held level per bit
    Level,
    /// Two segments per bit, split at the bit center
    Transition,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::BipolarAmi,
        Scheme::Pseudoternary,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scheme::NrzL => "NRZ-L",
            Scheme::NrzI => "NRZ-I",
            Scheme::BipolarAmi => "Bipolar AMI",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Differential Manchester",
        }
    }

    /// Display title for plots
    pub fn title(self) -> &'static str {
        match self {
            Scheme::NrzL => "NRZ-L (Non-Return to Zero Level)",
            Scheme::NrzI => "NRZ-I (Non-Return to Zero Inverted)",
            Scheme::BipolarAmi => "Bipolar AMI (Alternate Mark Inversion)",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Differential Manchester",
        }
    }

    pub fn shape(self) -> SignalShape {
        match self {
            Scheme::NrzL
            | Scheme::NrzI
            | Scheme::BipolarAmi
            | Scheme::Pseudoternary => SignalShape::Level,
            Scheme::Manchester | Scheme::DifferentialManchester => {
                SignalShape::Transition
            }
        }
    }

    /// Levels this scheme may emit
    pub fn alphabet(self) -> &'static [i8] {
        match self {
            Scheme::BipolarAmi | Scheme::Pseudoternary => &[-1, 0, 1],
            _ => &[0, 1],
        }
    }
}

/// Piecewise-constant trace: one sample per bit plus a trailing copy of the
/// last sample so a step plot holds the final level to the end of the last
/// bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSignal {
    pub samples: Vec<i8>,
}

impl LevelSignal {
    /// Close a per-bit sample list by repeating its last value.
    pub(crate) fn from_bit_samples(mut samples: Vec<i8>) -> Self {
        if let Some(&last) = samples.last() {
            samples.push(last);
        }
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples without the trailing hold sample
    pub fn per_bit(&self) -> &[i8] {
        match self.samples.split_last() {
            Some((_, body)) => body,
            None => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionPoint {
    pub time: f64,
    pub level: u8,
}

/// Trace with a sub-bit transition: four `(time, level)` points per bit at
/// `[i, i+0.5, i+0.5, i+1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionSignal {
    pub points: Vec<TransitionPoint>,
}

impl TransitionSignal {
    pub const POINTS_PER_BIT: usize = 4;

    pub(crate) fn with_bits(num_bits: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_bits * Self::POINTS_PER_BIT),
        }
    }

    /// Append bit `index` as two constant segments.
    pub(crate) fn push_bit(
        &mut self,
        index: usize,
        first_half: u8,
        second_half: u8,
    ) {
        let t = index as f64;
        self.points.extend([
            TransitionPoint { time: t, level: first_half },
            TransitionPoint { time: t + 0.5, level: first_half },
            TransitionPoint { time: t + 0.5, level: second_half },
            TransitionPoint { time: t + 1.0, level: second_half },
        ]);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn levels(&self) -> Vec<u8> {
        self.points.iter().map(|p| p.level).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    /// `(first half, second half)` levels of each bit
    pub fn halves(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.points
            .chunks_exact(Self::POINTS_PER_BIT)
            .map(|c| (c[0].level, c[2].level))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum Signal {
    Level(LevelSignal),
    Transition(TransitionSignal),
}

impl Signal {
    pub fn shape(&self) -> SignalShape {
        match self {
            Signal::Level(_) => SignalShape::Level,
            Signal::Transition(_) => SignalShape::Transition,
        }
    }
}

/// Output of one line coder, tagged with its scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedSignal {
    pub scheme: Scheme,
    pub title: String,
    pub signal: Signal,
}

impl EncodedSignal {
    pub fn new(scheme: Scheme, signal: Signal) -> Self {
        Self {
            scheme,
            title: scheme.title().to_string(),
            signal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_signal_trailing_sample() {
        let signal = LevelSignal::from_bit_samples(vec![1, 0, -1]);
        assert_eq!(signal.samples, vec![1, 0, -1, -1]);
        assert_eq!(signal.per_bit(), &[1, 0, -1]);
    }

    #[test]
    fn test_transition_push_bit_times() {
        let mut signal = TransitionSignal::with_bits(2);
        signal.push_bit(0, 1, 0);
        signal.push_bit(1, 0, 1);
        assert_eq!(
            signal.times(),
            vec![0.0, 0.5, 0.5, 1.0, 1.0, 1.5, 1.5, 2.0]
        );
        assert_eq!(signal.levels(), vec![1, 1, 0, 0, 0, 0, 1, 1]);
        assert_eq!(signal.halves().collect::<Vec<_>>(), vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_scheme_shapes() {
        let level: Vec<_> = Scheme::ALL
            .iter()
            .filter(|s| s.shape() == SignalShape::Level)
            .collect();
        assert_eq!(level.len(), 4);
        assert_eq!(Scheme::Manchester.shape(), SignalShape::Transition);
        assert_eq!(Scheme::BipolarAmi.alphabet(), &[-1, 0, 1]);
    }

    #[test]
    fn test_encoded_signal_json_tag() {
        let encoded = EncodedSignal::new(
            Scheme::NrzL,
            Signal::Level(LevelSignal::from_bit_samples(vec![1])),
        );
        let json = serde_json::to_value(&encoded).unwrap();
        assert_eq!(json["scheme"], "nrz-l");
        assert_eq!(json["signal"]["shape"], "level");
        assert_eq!(json["title"], "NRZ-L (Non-Return to Zero Level)");
    }
}
