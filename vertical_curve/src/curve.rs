//! Symmetric parabolic vertical curves described about their PVI.

use log::{debug, warn};

use crate::error::CurveError;

/// Number of samples used for a profile when none is requested.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Parameters of a parabolic vertical curve.
///
/// Offsets are measured from the point of vertical intersection, so the
/// elevation at `pvi_station` is always `pvi_elevation`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveParameters {
    pub pvi_station: f64,
    pub pvi_elevation: f64,
    /// Grade before the PVI as a decimal ratio (0.03 for 3%).
    pub initial_grade: f64,
    /// Grade after the PVI as a decimal ratio.
    pub final_grade: f64,
    pub length: f64,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            pvi_station: 1000.0,
            pvi_elevation: 500.0,
            initial_grade: 0.03,
            final_grade: -0.02,
            length: 200.0,
        }
    }
}

/// Elevation computed for a single station.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EvaluationResult {
    pub station: f64,
    pub elevation: f64,
}

/// One `(station, elevation)` pair of a sampled profile.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProfileSample {
    pub station: f64,
    pub elevation: f64,
}

/// Shape of the curve determined by the sign of the grade change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Grade decreases through the curve.
    Crest,
    /// Grade increases through the curve.
    Sag,
    /// Both grades are equal.
    Straight,
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CurveKind::Crest => "crest",
            CurveKind::Sag => "sag",
            CurveKind::Straight => "straight",
        };
        f.write_str(name)
    }
}

impl CurveParameters {
    pub fn new(
        pvi_station: f64,
        pvi_elevation: f64,
        initial_grade: f64,
        final_grade: f64,
        length: f64,
    ) -> Self {
        Self {
            pvi_station,
            pvi_elevation,
            initial_grade,
            final_grade,
            length,
        }
    }

    /// Rejects a zero curve length, which would divide by zero.
    ///
    /// Negative lengths are left to the caller and evaluated as given.
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.length == 0.0 {
            warn!("rejecting vertical curve with zero length");
            return Err(CurveError::invalid("length", "curve length must not be zero"));
        }
        Ok(())
    }

    /// Total grade change `A` across the curve.
    pub fn grade_change(&self) -> f64 {
        self.final_grade - self.initial_grade
    }

    /// Shape of the curve.
    pub fn curve_kind(&self) -> CurveKind {
        let a = self.grade_change();
        if a < 0.0 {
            CurveKind::Crest
        } else if a > 0.0 {
            CurveKind::Sag
        } else {
            CurveKind::Straight
        }
    }

    /// Elevation at `station`.
    ///
    /// The station is not required to lie on the curve; the parabola is
    /// extended in both directions.
    pub fn elevation_at(&self, station: f64) -> Result<f64, CurveError> {
        self.validate()?;
        let a = self.grade_change();
        let dx = station - self.pvi_station;
        let elevation =
            self.pvi_elevation + self.initial_grade * dx + (a * dx * dx) / (2.0 * self.length);
        debug!("elevation at station {station} is {elevation}");
        Ok(elevation)
    }

    /// Elevation at `station` paired with the station.
    pub fn evaluate(&self, station: f64) -> Result<EvaluationResult, CurveError> {
        Ok(EvaluationResult {
            station,
            elevation: self.elevation_at(station)?,
        })
    }

    /// Grade (first derivative of elevation) at `station`.
    pub fn grade_at(&self, station: f64) -> Result<f64, CurveError> {
        self.validate()?;
        let dx = station - self.pvi_station;
        Ok(self.initial_grade + self.grade_change() * dx / self.length)
    }

    /// Rate of change of grade per unit station, `A / L`.
    pub fn rate_of_change(&self) -> Result<f64, CurveError> {
        self.validate()?;
        Ok(self.grade_change() / self.length)
    }

    /// Horizontal distance for a 1% change in grade.
    ///
    /// `None` when the grades are equal.
    pub fn k_value(&self) -> Option<f64> {
        let a = self.grade_change();
        if a == 0.0 {
            None
        } else {
            Some(self.length / (100.0 * a.abs()))
        }
    }

    /// Station and elevation where the grade is zero on the extended
    /// parabola. The point may lie outside the curve; see
    /// [`CurveParameters::extreme_point`] for the high or low point between
    /// BVC and EVC.
    pub fn turning_point(&self) -> Result<Option<EvaluationResult>, CurveError> {
        self.validate()?;
        let a = self.grade_change();
        if a == 0.0 {
            return Ok(None);
        }
        let dx = -self.initial_grade * self.length / a;
        self.evaluate(self.pvi_station + dx).map(Some)
    }

    /// Highest point of a crest or lowest point of a sag between BVC and EVC.
    ///
    /// This is the turning point when it falls on the curve, otherwise the
    /// higher (crest) or lower (sag) curve end. `None` for a straight grade.
    pub fn extreme_point(&self) -> Result<Option<EvaluationResult>, CurveError> {
        let kind = self.curve_kind();
        let Some(tp) = self.turning_point()? else {
            return Ok(None);
        };
        let (bvc, evc) = self.default_profile_range();
        let (lo, hi) = if bvc <= evc { (bvc, evc) } else { (evc, bvc) };
        if tp.station >= lo && tp.station <= hi {
            return Ok(Some(tp));
        }
        let start = self.evaluate(bvc)?;
        let end = self.evaluate(evc)?;
        let pick_end = match kind {
            CurveKind::Crest => end.elevation > start.elevation,
            _ => end.elevation < start.elevation,
        };
        Ok(Some(if pick_end { end } else { start }))
    }

    /// Beginning and end stations of the curve, `length / 2` either side of
    /// the PVI. Also the default plotting interval.
    pub fn default_profile_range(&self) -> (f64, f64) {
        let half = self.length / 2.0;
        (self.pvi_station - half, self.pvi_station + half)
    }

    /// Samples `sample_count` evenly spaced stations over
    /// `[range_start, range_end]`, both endpoints included.
    pub fn sample_profile(
        &self,
        range_start: f64,
        range_end: f64,
        sample_count: usize,
    ) -> Result<Vec<ProfileSample>, CurveError> {
        if sample_count < 2 {
            warn!("rejecting profile with {sample_count} samples");
            return Err(CurveError::invalid(
                "sample_count",
                format!("at least 2 samples are required, got {sample_count}"),
            ));
        }
        self.validate()?;

        let half_a = self.grade_change() / 2.0;
        let step = (range_end - range_start) / (sample_count - 1) as f64;
        let mut samples = Vec::new();
        if let Err(e) = samples.try_reserve_exact(sample_count) {
            warn!("cannot allocate profile with {sample_count} samples");
            return Err(CurveError::invalid(
                "sample_count",
                format!("cannot allocate {sample_count} samples: {e}"),
            ));
        }
        for i in 0..sample_count {
            let station = if i + 1 == sample_count {
                range_end
            } else {
                range_start + i as f64 * step
            };
            let dx = station - self.pvi_station;
            let elevation =
                self.pvi_elevation + self.initial_grade * dx + half_a * (dx * dx) / self.length;
            samples.push(ProfileSample { station, elevation });
        }
        debug!(
            "sampled {} stations from {range_start} to {range_end}",
            samples.len()
        );
        Ok(samples)
    }
}

/// Computes the elevation of `station` on the curve described by `params`.
pub fn evaluate_elevation(params: &CurveParameters, station: f64) -> Result<f64, CurveError> {
    params.elevation_at(station)
}

/// Samples the curve described by `params` over a closed station interval.
pub fn sample_profile(
    params: &CurveParameters,
    range_start: f64,
    range_end: f64,
    sample_count: usize,
) -> Result<Vec<ProfileSample>, CurveError> {
    params.sample_profile(range_start, range_end, sample_count)
}
