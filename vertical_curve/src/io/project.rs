use crate::curve::CurveParameters;
use crate::settings::PlotSettings;

pub fn read_curve_json(path: &str) -> std::io::Result<CurveParameters> {
    let contents = crate::io::read_to_string(path)?;
    let params: CurveParameters = serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(params)
}

pub fn write_curve_json(path: &str, params: &CurveParameters) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(params)
        .map_err(std::io::Error::other)?;
    crate::io::write_string(path, &json)
}

pub fn read_settings_json(path: &str) -> std::io::Result<PlotSettings> {
    let contents = crate::io::read_to_string(path)?;
    let settings: PlotSettings = serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(settings)
}
