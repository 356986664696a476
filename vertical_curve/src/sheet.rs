//! Profile sheet generation.
//!
//! Writes a single SVG drawing of a vertical curve with the evaluated
//! station marked on it. The drawing is not to scale; stations and
//! elevations are stretched independently to fill the sheet.

use std::io;

use log::info;

use crate::curve::{CurveParameters, EvaluationResult, ProfileSample};
use crate::error::CurveError;
use crate::settings::PlotSettings;
use crate::theme::MARKER_COLOR;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;

fn bbox(samples: &[ProfileSample], marker: EvaluationResult) -> (f64, f64, f64, f64) {
    let mut min_x = marker.station;
    let mut max_x = marker.station;
    let mut min_y = marker.elevation;
    let mut max_y = marker.elevation;
    for s in samples {
        if s.station < min_x { min_x = s.station; }
        if s.station > max_x { max_x = s.station; }
        if s.elevation < min_y { min_y = s.elevation; }
        if s.elevation > max_y { max_y = s.elevation; }
    }
    (min_x, min_y, max_x, max_y)
}

/// Maps station/elevation pairs onto the drawing area.
struct Frame {
    min_x: f64,
    max_y: f64,
    sx: f64,
    sy: f64,
}

impl Frame {
    fn new(bounds: (f64, f64, f64, f64), settings: &PlotSettings) -> Self {
        let (min_x, min_y, max_x, max_y) = bounds;
        let span_x = if max_x - min_x > f64::EPSILON { max_x - min_x } else { 1.0 };
        let span_y = if max_y - min_y > f64::EPSILON { max_y - min_y } else { 1.0 };
        let plot_w = (settings.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_h = (settings.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        Self {
            min_x,
            max_y,
            sx: plot_w / span_x,
            sy: plot_h / span_y,
        }
    }

    fn x(&self, station: f64) -> f64 {
        MARGIN_LEFT + (station - self.min_x) * self.sx
    }

    fn y(&self, elevation: f64) -> f64 {
        MARGIN_TOP + (self.max_y - elevation) * self.sy
    }
}

/// Tick values at a 1, 2 or 5 step covering `[min, max]` with about five
/// ticks, and the number of decimals needed to label them.
fn ticks(min: f64, max: f64) -> (Vec<f64>, usize) {
    let span = max - min;
    if !span.is_finite() {
        return (Vec::new(), 0);
    }
    if span <= f64::EPSILON {
        return (vec![min], 0);
    }
    let raw = span / 4.0;
    let mag = 10f64.powi(raw.log10().floor() as i32);
    let norm = raw / mag;
    let base = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = base * mag;
    let decimals = if step >= 1.0 { 0 } else { (-step.log10()).ceil() as usize };
    let first = (min / step).ceil() * step;
    let mut values = Vec::new();
    for i in 0..=10 {
        let v = first + i as f64 * step;
        if v > max + step * 1e-9 {
            break;
        }
        values.push(v);
    }
    (values, decimals)
}

fn polyline(frame: &Frame, samples: &[ProfileSample], stroke: &str) -> String {
    let mut out = String::from("<polyline points='");
    for s in samples {
        out.push_str(&format!("{:.2},{:.2} ", frame.x(s.station), frame.y(s.elevation)));
    }
    out.push_str(&format!(
        "' fill='none' stroke='{stroke}' stroke-width='2' />\n"
    ));
    out
}

fn grid_line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) -> String {
    format!(
        "<line x1='{x1:.2}' y1='{y1:.2}' x2='{x2:.2}' y2='{y2:.2}' stroke='{stroke}' stroke-opacity='0.3' stroke-dasharray='4,4' />\n"
    )
}

fn text(x: f64, y: f64, fill: &str, extra: &str, content: &str) -> String {
    format!("<text x='{x:.2}' y='{y:.2}' fill='{fill}' font-size='12'{extra}>{content}</text>\n")
}

/// Builds the SVG profile of `params` with `station` marked.
///
/// The curve is sampled over its default range with
/// `settings.sample_count` samples. The evaluated station is always kept
/// inside the drawing, even when it lies off the curve.
pub fn profile_svg(
    params: &CurveParameters,
    station: f64,
    settings: &PlotSettings,
) -> Result<String, CurveError> {
    let (start, end) = params.default_profile_range();
    let samples = params.sample_profile(start, end, settings.sample_count)?;
    let marker = params.evaluate(station)?;
    let colors = settings.theme.colors();
    let bounds = bbox(&samples, marker);
    let frame = Frame::new(bounds, settings);

    let (w, h) = (settings.width, settings.height);
    let bottom = h - MARGIN_BOTTOM;
    let mut svg = format!("<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}'>\n");
    svg.push_str(&format!(
        "<rect x='0' y='0' width='{w}' height='{h}' fill='{}' />\n",
        colors.background
    ));

    // grid and tick labels
    let right = w - MARGIN_RIGHT;
    let (station_ticks, station_decimals) = ticks(bounds.0, bounds.2);
    for v in station_ticks {
        let x = frame.x(v);
        svg.push_str(&grid_line(x, MARGIN_TOP, x, bottom, colors.text));
        svg.push_str(&text(
            x,
            bottom + 15.0,
            colors.text,
            " text-anchor='middle'",
            &format!("{:.*}", station_decimals, v),
        ));
    }
    let (elevation_ticks, elevation_decimals) = ticks(bounds.1, bounds.3);
    for v in elevation_ticks {
        let y = frame.y(v);
        svg.push_str(&grid_line(MARGIN_LEFT, y, right, y, colors.text));
        svg.push_str(&text(
            MARGIN_LEFT - 5.0,
            y + 4.0,
            colors.text,
            " text-anchor='end'",
            &format!("{:.*}", elevation_decimals, v),
        ));
    }

    // axes
    svg.push_str(&format!(
        "<polyline points='{MARGIN_LEFT},{MARGIN_TOP} {MARGIN_LEFT},{bottom:.2} {:.2},{bottom:.2}' fill='none' stroke='{}' stroke-width='1' />\n",
        w - MARGIN_RIGHT,
        colors.text
    ));
    svg.push_str(&polyline(&frame, &samples, colors.line));

    let mx = frame.x(marker.station);
    let my = frame.y(marker.elevation);
    svg.push_str(&format!(
        "<line x1='{mx:.2}' y1='{MARGIN_TOP}' x2='{mx:.2}' y2='{bottom:.2}' stroke='{MARKER_COLOR}' stroke-dasharray='6,4' />\n"
    ));
    svg.push_str(&format!(
        "<circle cx='{mx:.2}' cy='{my:.2}' r='4' fill='{MARKER_COLOR}' />\n"
    ));

    svg.push_str(&text(
        MARGIN_LEFT + (w - MARGIN_LEFT - MARGIN_RIGHT) / 2.0,
        h - 15.0,
        colors.text,
        " text-anchor='middle'",
        "Station",
    ));
    svg.push_str(&text(
        15.0,
        MARGIN_TOP + (bottom - MARGIN_TOP) / 2.0,
        colors.text,
        &format!(
            " text-anchor='middle' transform='rotate(-90 15 {:.2})'",
            MARGIN_TOP + (bottom - MARGIN_TOP) / 2.0
        ),
        "Elevation",
    ));

    // legend
    let lx = w - MARGIN_RIGHT - 150.0;
    svg.push_str(&text(lx, MARGIN_TOP + 15.0, colors.line, "", "Vertical Curve"));
    svg.push_str(&text(
        lx,
        MARGIN_TOP + 30.0,
        MARKER_COLOR,
        "",
        &format!("Station {:?}", marker.station),
    ));

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Writes the profile drawing produced by [`profile_svg`] to `path`.
pub fn write_profile_svg(
    path: &str,
    params: &CurveParameters,
    station: f64,
    settings: &PlotSettings,
) -> io::Result<()> {
    let svg = profile_svg(params, station, settings)?;
    crate::io::write_string(path, &svg)?;
    info!("wrote profile sheet {path} using theme {}", settings.theme);
    Ok(())
}
