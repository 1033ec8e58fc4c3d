//! Orientation angles and the compass field names they are written to.

use std::fmt;

use crate::error::PatchError;

/// Compass keys that always carry the same angle, as `(primary, synonym)`.
pub const SYNONYM_PAIRS: [(&str, &str); 3] = [
    ("azimuth", "heading"),
    ("elevation", "pitch"),
    ("bank", "roll"),
];

/// A platform orientation in degrees.
///
/// Values are not range checked or wrapped; any finite number is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub azimuth: f64,
    pub elevation: f64,
    pub bank: f64,
}

impl Orientation {
    /// Build an orientation, rejecting NaN and infinities.
    pub fn new(azimuth: f64, elevation: f64, bank: f64) -> Result<Self, PatchError> {
        let orientation = Self {
            azimuth,
            elevation,
            bank,
        };
        for (name, _, value) in orientation.fields() {
            if !value.is_finite() {
                return Err(PatchError::NonFiniteAngle { name, value });
            }
        }
        Ok(orientation)
    }

    /// Parse the three angles from their textual command-line form.
    pub fn parse(azimuth: &str, elevation: &str, bank: &str) -> Result<Self, PatchError> {
        Self::new(
            parse_angle("azimuth", azimuth)?,
            parse_angle("elevation", elevation)?,
            parse_angle("bank", bank)?,
        )
    }

    /// Each angle paired with the two compass keys it is written to.
    pub fn fields(&self) -> [(&'static str, &'static str, f64); 3] {
        let [(az, heading), (el, pitch), (bank, roll)] = SYNONYM_PAIRS;
        [
            (az, heading, self.azimuth),
            (el, pitch, self.elevation),
            (bank, roll, self.bank),
        ]
    }
}

fn parse_angle(name: &'static str, value: &str) -> Result<f64, PatchError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| PatchError::InvalidAngle {
            name,
            value: value.to_string(),
        })
}

/// Render an angle the way the confirmation line shows it.
///
/// Integral values keep their decimal point (`90.0`) and exponents are signed
/// and at least two digits wide (`1e+16`, `1.5e-05`).
pub fn format_angle(value: f64) -> String {
    // Debug switches to exponent form below 1e-4 and from 1e16 upward
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "az={}°, el={}°, bank={}°",
            format_angle(self.azimuth),
            format_angle(self.elevation),
            format_angle(self.bank)
        )
    }
}
