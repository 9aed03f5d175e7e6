// Text rendering of line-coded signals.
// Level traces are drawn as step plots, transition traces as two segments per
// bit. Only the levels in a scheme's alphabet get a row.

use crate::phy::{BitString, EncodedSignal, Signal};
use crate::utils::consts::{
    MAX_COLS_PER_BIT, MIN_COLS_PER_BIT, PLOT_LEVELS, PLOT_Y_MAX, PLOT_Y_MIN,
};

const HORIZONTAL: char = '-';
const VERTICAL: char = '|';

/// Plot rows, top to bottom, for a scheme alphabet
fn plot_rows(alphabet: &[i8]) -> Vec<i8> {
    PLOT_LEVELS
        .iter()
        .copied()
        .filter(|level| alphabet.contains(level))
        .collect()
}

/// Draw constant segments of `width` columns each, joined by vertical edges
/// where consecutive levels differ. `rows` lists the level of each output
/// row, top to bottom.
fn trace_rows(segments: &[i8], width: usize, rows: &[i8]) -> Vec<String> {
    let row_of = |level: i8| rows.iter().position(|&l| l == level);
    let columns = segments.len() * width + 1;
    let mut grid = vec![vec![' '; columns]; rows.len()];

    for (i, &level) in segments.iter().enumerate() {
        if let Some(row) = row_of(level) {
            for col in i * width..=(i + 1) * width {
                grid[row][col] = HORIZONTAL;
            }
        }
    }

    for pair in 1..segments.len() {
        let (before, after) = (segments[pair - 1], segments[pair]);
        if before == after {
            continue;
        }
        let (Some(a), Some(b)) = (row_of(before), row_of(after)) else {
            continue;
        };
        let col = pair * width;
        for row in grid
            .iter_mut()
            .take(a.max(b) + 1)
            .skip(a.min(b))
        {
            row[col] = VERTICAL;
        }
    }

    grid.into_iter()
        .map(|row| {
            row.into_iter()
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Per-segment levels and segment width for a signal
fn segments(signal: &Signal, cols_per_bit: usize) -> (Vec<i8>, usize) {
    match signal {
        Signal::Level(s) => (s.per_bit().to_vec(), cols_per_bit),
        Signal::Transition(s) => {
            let halves = s
                .halves()
                .flat_map(|(first, second)| [first as i8, second as i8])
                .collect();
            (halves, cols_per_bit / 2)
        }
    }
}

/// Clamp to [`MIN_COLS_PER_BIT`, `MAX_COLS_PER_BIT`] and round up to even so
/// the bit center falls on a column.
fn normalize_cols(cols_per_bit: usize) -> usize {
    let cols = cols_per_bit.clamp(MIN_COLS_PER_BIT, MAX_COLS_PER_BIT);
    cols + cols % 2
}

/// Render one encoded signal as a titled text chart with bit labels.
pub fn render_signal(
    encoded: &EncodedSignal,
    bits: &BitString,
    cols_per_bit: usize,
) -> String {
    let cols = normalize_cols(cols_per_bit);
    let levels = plot_rows(encoded.scheme.alphabet());
    let (trace, width) = segments(&encoded.signal, cols);
    let rows = trace_rows(&trace, width, &levels);

    let mut out = String::new();
    out.push_str(&encoded.title);
    out.push('\n');

    for (level, row) in levels.iter().zip(rows) {
        out.push_str(&format!("{:>2} |{}\n", level, row));
    }

    let axis_len = bits.len() * cols + 1;
    out.push_str(&format!("   +{}\n", "-".repeat(axis_len)));

    let mut labels = vec![' '; axis_len];
    for (i, bit) in bits.iter().enumerate() {
        labels[i * cols + cols / 2] = bit.to_char();
    }
    out.push_str("    ");
    out.push_str(labels.into_iter().collect::<String>().trim_end());
    out.push('\n');

    out
}

/// Render every signal under a single input header.
pub fn render_all(
    bits: &BitString,
    signals: &[EncodedSignal],
    cols_per_bit: usize,
) -> String {
    let mut out = format!(
        "Input Digital Data: {}\n(y range [{}, {}])\n",
        bits, PLOT_Y_MIN, PLOT_Y_MAX
    );
    for encoded in signals {
        out.push('\n');
        out.push_str(&render_signal(encoded, bits, cols_per_bit));
    }
    out
}
