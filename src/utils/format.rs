//! Figures are shown exactly as the source reported them: `Display` of the
//! number, no rounding, no unit conversion.

pub fn figure(value: f64) -> String {
    value.to_string()
}

pub fn format_kwh(kwh: f64) -> String {
    format!("{} kWh", figure(kwh))
}
