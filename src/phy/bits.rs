// Binary input model and the validator guarding the line coders

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{EncodeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    pub fn is_one(self) -> bool {
        self == Bit::One
    }

    /// The other symbol
    pub fn flipped(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

/// Non-empty sequence of validated bits.
///
/// Only [`BitString::parse`] builds one from user text, so every transform
/// can rely on it being non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<Bit>,
}

impl BitString {
    /// Validate raw user input.
    ///
    /// Surrounding whitespace is trimmed first. The whole input is rejected
    /// on the first symbol outside `0`/`1`; `position` counts characters of
    /// the trimmed input.
    pub fn parse(raw: &str) -> Result<Self> {
        let data = raw.trim();
        if data.is_empty() {
            return Err(EncodeError::EmptyInput);
        }

        let mut bits = Vec::with_capacity(data.len());
        for (position, symbol) in data.chars().enumerate() {
            match Bit::from_char(symbol) {
                Some(bit) => bits.push(bit),
                None => {
                    return Err(EncodeError::InvalidSymbol {
                        symbol,
                        position,
                    });
                }
            }
        }

        debug!("Validated {} bits", bits.len());
        Ok(Self { bits })
    }

    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }

    /// Every bit inverted
    pub fn complement(&self) -> Self {
        Self {
            bits: self.iter().map(Bit::flipped).collect(),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", bit.to_char())?;
        }
        Ok(())
    }
}

/// Assumed line state immediately before the first bit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum InitialLevel {
    High,
    Low,
}

impl InitialLevel {
    /// Binary level: High -> 1, Low -> 0
    pub fn level(self) -> u8 {
        match self {
            InitialLevel::High => 1,
            InitialLevel::Low => 0,
        }
    }

    /// Polarity sign: High -> +1, Low -> -1
    pub fn sign(self) -> i8 {
        match self {
            InitialLevel::High => 1,
            InitialLevel::Low => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InitialLevel::High => "High",
            InitialLevel::Low => "Low",
        }
    }
}
