use std::thread;

use tracing::{debug, info};

use super::bits::{BitString, InitialLevel};
use super::error::Result;
use super::signal::{EncodedSignal, Scheme};

/// Runs a set of line coders over one validated input.
pub struct LineEncoder {
    schemes: Vec<Scheme>,
    initial_level: InitialLevel,
}

impl LineEncoder {
    /// Create an encoder for the given schemes
    ///
    /// Schemes are deduplicated and kept in display order, so results always
    /// come back as NRZ-L, NRZ-I, Bipolar AMI, Pseudoternary, Manchester,
    /// Differential Manchester (restricted to the selection). An empty
    /// selection means all six.
    pub fn new(schemes: &[Scheme], initial_level: InitialLevel) -> Self {
        let mut schemes = if schemes.is_empty() {
            Scheme::ALL.to_vec()
        } else {
            schemes.to_vec()
        };
        schemes.sort();
        schemes.dedup();

        info!("LineEncoder initialized:");
        info!(
            "  - schemes: {}",
            schemes
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        info!("  - initial level: {}", initial_level.name());

        Self {
            schemes,
            initial_level,
        }
    }

    /// Encoder for all six schemes
    pub fn all(initial_level: InitialLevel) -> Self {
        Self::new(&Scheme::ALL, initial_level)
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn initial_level(&self) -> InitialLevel {
        self.initial_level
    }

    /// Encode validated bits with every selected scheme
    pub fn encode(&self, bits: &BitString) -> Vec<EncodedSignal> {
        self.schemes
            .iter()
            .map(|&scheme| {
                let signal = scheme.encode(bits, self.initial_level);
                EncodedSignal::new(scheme, signal)
            })
            .collect()
    }

    /// Validate raw input, then encode it. Nothing is encoded on failure.
    pub fn encode_str(
        &self,
        raw: &str,
    ) -> Result<(BitString, Vec<EncodedSignal>)> {
        let bits = BitString::parse(raw)?;
        info!("Input Digital Data: {}", bits);
        let signals = self.encode(&bits);
        Ok((bits, signals))
    }

    /// Same as [`encode`](Self::encode), one worker thread per scheme.
    ///
    /// Workers only read the shared input; results are collected over a
    /// channel and put back in display order.
    pub fn encode_parallel(&self, bits: &BitString) -> Vec<EncodedSignal> {
        let (tx, rx) =
            crossbeam_channel::unbounded::<(usize, EncodedSignal)>();
        let initial_level = self.initial_level;

        thread::scope(|scope| {
            for (index, &scheme) in self.schemes.iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    let signal = scheme.encode(bits, initial_level);
                    let encoded = EncodedSignal::new(scheme, signal);
                    tx.send((index, encoded))
                        .unwrap_or_else(|e| {
                            debug!(
                                "Result channel closed for {}: {}",
                                scheme.name(),
                                e
                            );
                        });
                });
            }
        });
        drop(tx); // Close the channel

        let mut results: Vec<(usize, EncodedSignal)> = rx.iter().collect();
        results.sort_by_key(|(index, _)| *index);

        debug!("Encoded {} schemes in parallel", results.len());
        results
            .into_iter()
            .map(|(_, encoded)| encoded)
            .collect()
    }
}
