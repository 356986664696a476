//! File input and output helpers for curve data.

use std::fs::File;
use std::io::{self, Read, Write};

use crate::curve::ProfileSample;

pub mod project;
pub use project::{read_curve_json, read_settings_json, write_curve_json};

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing any existing contents.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}

/// Writes profile samples as `station,elevation` lines.
pub fn write_profile_csv(path: &str, samples: &[ProfileSample]) -> io::Result<()> {
    let mut file = File::create(path)?;
    for s in samples {
        writeln!(file, "{},{}", s.station, s.elevation)?;
    }
    Ok(())
}

/// Reads `station,elevation` lines written by [`write_profile_csv`].
pub fn read_profile_csv(path: &str) -> io::Result<Vec<ProfileSample>> {
    let contents = read_to_string(path)?;
    let mut samples = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 2 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: expected station,elevation", idx + 1),
            ));
        }
        let parse = |s: &str| {
            s.trim().parse::<f64>().map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {}", idx + 1, e))
            })
        };
        samples.push(ProfileSample {
            station: parse(parts[0])?,
            elevation: parse(parts[1])?,
        });
    }
    Ok(samples)
}
