use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::phy::{BitString, EncodedSignal, InitialLevel};
use crate::utils::consts::{PLOT_Y_MAX, PLOT_Y_MIN};

/// Everything produced for one input, ready for an external plotter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub input: String,
    pub initial_level: InitialLevel,
    pub y_range: [f64; 2],
    pub signals: Vec<EncodedSignal>,
}

impl Report {
    pub fn new(
        bits: &BitString,
        initial_level: InitialLevel,
        signals: Vec<EncodedSignal>,
    ) -> Self {
        Self {
            input: bits.to_string(),
            initial_level,
            y_range: [PLOT_Y_MIN, PLOT_Y_MAX],
            signals,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write `text` to `path`, creating parent directories, or to stdout when
/// `None`.
pub fn write_output(text: &str, path: Option<&Path>) -> io::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, text)?;
            info!("Output saved to: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text)?;
        }
    }
    Ok(())
}

/// Write the report as pretty JSON to `path`, or to stdout when `None`.
pub fn write_report(report: &Report, path: Option<&Path>) -> io::Result<()> {
    let json = report.to_json().map_err(io::Error::other)?;
    write_output(&json, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phy::LineEncoder;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("line-coder-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_report_json_shape() {
        let bits = BitString::parse("10").unwrap();
        let signals = LineEncoder::all(InitialLevel::Low).encode(&bits);
        let report = Report::new(&bits, InitialLevel::Low, signals);

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"], "10");
        assert_eq!(value["initial_level"], "low");
        assert_eq!(value["signals"].as_array().unwrap().len(), 6);
        assert_eq!(value["signals"][4]["signal"]["shape"], "transition");
        assert_eq!(
            value["signals"][0]["signal"]["samples"],
            serde_json::json!([1, 0, 0])
        );
    }

    #[test]
    fn test_report_json_round_trip() {
        let bits = BitString::parse("0011").unwrap();
        let signals = LineEncoder::all(InitialLevel::High).encode(&bits);
        let report = Report::new(&bits, InitialLevel::High, signals);

        let json = report.to_json().unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_write_report_to_file() {
        let bits = BitString::parse("1").unwrap();
        let report = Report::new(
            &bits,
            InitialLevel::High,
            LineEncoder::all(InitialLevel::High).encode(&bits),
        );
        let path = temp_path("report.json");

        write_report(&report, Some(&path)).unwrap();
        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("\"input\": \"1\""));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_output_plain_text_to_file() {
        let path = temp_path("nested").join("chart.txt");

        write_output("Manchester\n", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Manchester\n");
        let _ = fs::remove_file(&path);
    }
}
