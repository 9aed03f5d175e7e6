use line_coder_rs::phy::line_coding::{
    bipolar_ami, differential_manchester, manchester, nrz_i, nrz_l,
    pseudoternary,
};
use line_coder_rs::phy::{
    BitString, EncodeError, InitialLevel, LineEncoder, Scheme, Signal,
    SignalShape,
};

const LEVELS: [InitialLevel; 2] = [InitialLevel::High, InitialLevel::Low];

/// Every bit string of length 1..=max_len
fn all_bit_strings(max_len: usize) -> Vec<BitString> {
    let mut out = Vec::new();
    for len in 1..=max_len {
        for n in 0..(1u32 << len) {
            let text: String = (0..len)
                .map(|i| if (n >> i) & 1 == 1 { '1' } else { '0' })
                .collect();
            out.push(BitString::parse(&text).unwrap());
        }
    }
    out
}

#[test]
fn level_signals_have_one_sample_per_bit_plus_trailing() {
    for bits in all_bit_strings(8) {
        for initial in LEVELS {
            for signal in [
                nrz_l(&bits),
                nrz_i(&bits, initial),
                bipolar_ami(&bits, initial),
                pseudoternary(&bits, initial),
            ] {
                assert_eq!(signal.len(), bits.len() + 1);
                let last = bits.len();
                assert_eq!(signal.samples[last], signal.samples[last - 1]);
            }
            assert!(nrz_l(&bits).samples.iter().all(|s| *s == 0 || *s == 1));
            assert!(
                nrz_i(&bits, initial)
                    .samples
                    .iter()
                    .all(|s| *s == 0 || *s == 1)
            );
        }
    }
}

#[test]
fn known_encodings() {
    let parse = |s: &str| BitString::parse(s).unwrap();
    assert_eq!(nrz_l(&parse("1")).samples, vec![1, 1]);
    assert_eq!(nrz_l(&parse("0")).samples, vec![0, 0]);
    assert_eq!(
        nrz_i(&parse("101"), InitialLevel::High).samples,
        vec![0, 0, 1, 1]
    );
    assert_eq!(
        bipolar_ami(&parse("11011"), InitialLevel::High).samples,
        vec![-1, 1, 0, -1, 1, 1]
    );
}

#[test]
fn marks_strictly_alternate() {
    for bits in all_bit_strings(8) {
        for initial in LEVELS {
            for signal in
                [bipolar_ami(&bits, initial), pseudoternary(&bits, initial)]
            {
                let marks: Vec<i8> = signal
                    .per_bit()
                    .iter()
                    .copied()
                    .filter(|s| *s != 0)
                    .collect();
                if let Some(first) = marks.first() {
                    assert_eq!(*first, -initial.sign());
                }
                for pair in marks.windows(2) {
                    assert_eq!(pair[0], -pair[1]);
                }
            }
        }
    }
}

#[test]
fn pseudoternary_mirrors_bipolar_ami_on_complement() {
    for bits in all_bit_strings(7) {
        for initial in LEVELS {
            assert_eq!(
                pseudoternary(&bits.complement(), initial),
                bipolar_ami(&bits, initial)
            );
        }
    }
}

#[test]
fn manchester_groups_depend_only_on_their_bit() {
    for bits in all_bit_strings(6) {
        let signal = manchester(&bits);
        assert_eq!(signal.len(), 4 * bits.len());
        let groups = signal.points.chunks(4);
        for (i, (bit, group)) in bits.iter().zip(groups).enumerate() {
            let expected: [u8; 4] = if bit.is_one() {
                [0, 0, 1, 1]
            } else {
                [1, 1, 0, 0]
            };
            let levels: Vec<u8> = group.iter().map(|p| p.level).collect();
            assert_eq!(levels, expected);

            let times: Vec<f64> = group.iter().map(|p| p.time).collect();
            let t = i as f64;
            assert_eq!(times, vec![t, t + 0.5, t + 0.5, t + 1.0]);
        }
    }
}

#[test]
fn differential_manchester_always_transitions_at_center() {
    for bits in all_bit_strings(8) {
        for initial in LEVELS {
            let levels = differential_manchester(&bits, initial).levels();
            assert_eq!(levels.len(), 4 * bits.len());
            for i in 0..bits.len() {
                assert_eq!(levels[4 * i], levels[4 * i + 1]);
                assert_ne!(levels[4 * i + 1], levels[4 * i + 2]);
                assert_eq!(levels[4 * i + 2], levels[4 * i + 3]);
            }
        }
    }
}

#[test]
fn validator_cases() {
    assert_eq!(BitString::parse(""), Err(EncodeError::EmptyInput));
    assert_eq!(BitString::parse("   "), Err(EncodeError::EmptyInput));
    assert!(matches!(
        BitString::parse("10a1"),
        Err(EncodeError::InvalidSymbol { .. })
    ));
    assert_eq!(BitString::parse("1010").unwrap().to_string(), "1010");
}

#[test]
fn encoding_is_deterministic_and_shape_fixed_per_scheme() {
    let bits = BitString::parse("0100110111").unwrap();
    for initial in LEVELS {
        let encoder = LineEncoder::all(initial);
        let first = encoder.encode(&bits);
        assert_eq!(first, encoder.encode(&bits));
        assert_eq!(first, encoder.encode_parallel(&bits));

        for encoded in &first {
            assert_eq!(encoded.title, encoded.scheme.title());
            match (&encoded.signal, encoded.scheme.shape()) {
                (Signal::Level(_), SignalShape::Level) => {}
                (Signal::Transition(_), SignalShape::Transition) => {}
                _ => panic!(
                    "{} produced the wrong shape",
                    encoded.scheme.name()
                ),
            }
        }
    }
}

#[test]
fn initial_level_ignored_by_history_free_schemes() {
    let bits = BitString::parse("1100101").unwrap();
    for scheme in [Scheme::NrzL, Scheme::Manchester] {
        assert_eq!(
            scheme.encode(&bits, InitialLevel::High),
            scheme.encode(&bits, InitialLevel::Low)
        );
    }
}
