//! Core library for the vertical curve calculator.

pub mod curve;
pub mod error;
pub mod io;
pub mod settings;
pub mod sheet;
pub mod theme;

pub use curve::{
    evaluate_elevation, sample_profile, CurveKind, CurveParameters, EvaluationResult,
    ProfileSample, DEFAULT_SAMPLE_COUNT,
};
pub use error::CurveError;
pub use settings::PlotSettings;
pub use theme::{Theme, ThemeColors};
