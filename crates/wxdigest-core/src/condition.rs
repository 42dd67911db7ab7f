//! Condition normalization.
//!
//! The upstream API reports weather as a numeric code grouped by hundreds
//! (2xx storm, 3xx drizzle, 5xx rain, 6xx snow, 7xx atmosphere, 80x clouds).
//! This module folds those codes into a small set of display categories and
//! derives labels and icon paths from them.

use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, WxDigestError};
use crate::models::DayNight;

/// Default icon file extension.
pub const DEFAULT_ICON_EXT: &str = "webm";

/// Coarse weather category used for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Storm,
    Rain,
    Drizzle,
    Wind,
    Fog,
    Cloudy,
    PartlyCloudy,
    #[default]
    Clear,
}

impl Condition {
    /// All categories, highest priority first.
    pub const ALL: [Condition; 8] = [
        Condition::Storm,
        Condition::Rain,
        Condition::Drizzle,
        Condition::Wind,
        Condition::Fog,
        Condition::Cloudy,
        Condition::PartlyCloudy,
        Condition::Clear,
    ];

    /// Map an upstream condition code to a category.
    ///
    /// Snow (6xx) is folded into [`Condition::Rain`]. Codes outside the
    /// documented set map to [`Condition::Clear`].
    ///
    /// ```
    /// use wxdigest_core::condition::Condition;
    ///
    /// assert_eq!(Condition::from_code(502), Condition::Rain);
    /// assert_eq!(Condition::from_code(601), Condition::Rain);
    /// assert_eq!(Condition::from_code(999), Condition::Clear);
    /// ```
    pub fn from_code(code: i64) -> Self {
        match code {
            200 | 201 | 202 | 210 | 211 | 212 | 221 | 230 | 231 | 232 => Condition::Storm,
            300 | 301 | 302 | 310 | 311 | 312 | 313 | 314 | 321 => Condition::Drizzle,
            500 | 501 | 502 | 503 | 504 | 511 | 520 | 521 | 522 | 531 => Condition::Rain,
            600 | 601 | 602 | 611 | 612 | 613 | 615 | 616 | 620 | 621 | 622 => Condition::Rain,
            701 | 711 | 721 | 731 | 741 | 751 | 761 | 762 => Condition::Fog,
            771 | 781 => Condition::Wind,
            800 => Condition::Clear,
            801 => Condition::PartlyCloudy,
            802..=804 => Condition::Cloudy,
            _ => {
                debug!(code, "unmapped condition code, using clear");
                Condition::Clear
            }
        }
    }

    /// Severity used for tie-breaking, storm = 8 down to clear = 1.
    pub fn priority(self) -> u8 {
        match self {
            Condition::Storm => 8,
            Condition::Rain => 7,
            Condition::Drizzle => 6,
            Condition::Wind => 5,
            Condition::Fog => 4,
            Condition::Cloudy => 3,
            Condition::PartlyCloudy => 2,
            Condition::Clear => 1,
        }
    }

    /// Snake-case name, also the icon file stem.
    pub fn name(self) -> &'static str {
        match self {
            Condition::Storm => "storm",
            Condition::Rain => "rain",
            Condition::Drizzle => "drizzle",
            Condition::Wind => "wind",
            Condition::Fog => "fog",
            Condition::Cloudy => "cloudy",
            Condition::PartlyCloudy => "partly_cloudy",
            Condition::Clear => "clear",
        }
    }

    /// Spanish display label.
    pub fn label(self) -> &'static str {
        match self {
            Condition::Storm => "Tormenta",
            Condition::Rain => "Lluvia",
            Condition::Drizzle => "Llovizna",
            Condition::Wind => "Viento",
            Condition::Fog => "Niebla",
            Condition::Cloudy => "Mayormente nublado",
            Condition::PartlyCloudy => "Parcialmente nublado",
            Condition::Clear => "Despejado",
        }
    }

    /// Whether the icon differs between day and night.
    pub fn has_day_night_variant(self) -> bool {
        matches!(self, Condition::Clear | Condition::PartlyCloudy)
    }

    /// Icon file stem, e.g. `clear_night` or `rain`.
    pub fn icon_stem(self, day_night: DayNight) -> String {
        if self.has_day_night_variant() {
            format!("{}_{}", self.name(), day_night)
        } else {
            self.name().to_string()
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Condition {
    type Err = WxDigestError;

    fn from_str(s: &str) -> Result<Self> {
        Condition::ALL
            .into_iter()
            .find(|c| c.name() == s.to_lowercase())
            .ok_or_else(|| WxDigestError::ParseError(format!("Unknown condition: '{}'", s)))
    }
}

/// Label lookup by category name, falling back to the name itself.
pub fn label_for_name(name: &str) -> String {
    name.parse::<Condition>()
        .map(|c| c.label().to_string())
        .unwrap_or_else(|_| name.to_string())
}

/// Full icon reference: `{day|night}/{stem}.{ext}`.
///
/// ```
/// use wxdigest_core::condition::{icon_path, Condition};
/// use wxdigest_core::models::DayNight;
///
/// assert_eq!(icon_path(Condition::Rain, DayNight::Night, "webm"), "night/rain.webm");
/// assert_eq!(icon_path(Condition::Clear, DayNight::Day, "webm"), "day/clear_day.webm");
/// ```
pub fn icon_path(condition: Condition, day_night: DayNight, ext: &str) -> String {
    format!("{}/{}.{}", day_night, condition.icon_stem(day_night), ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENTED_CODES: &[i64] = &[
        200, 201, 202, 210, 211, 212, 221, 230, 231, 232, 300, 301, 302, 310, 311, 312, 313, 314,
        321, 500, 501, 502, 503, 504, 511, 520, 521, 522, 531, 600, 601, 602, 611, 612, 613, 615,
        616, 620, 621, 622, 701, 711, 721, 731, 741, 751, 761, 762, 771, 781, 800, 801, 802, 803,
        804,
    ];

    #[test]
    fn code_groups() {
        assert_eq!(Condition::from_code(211), Condition::Storm);
        assert_eq!(Condition::from_code(313), Condition::Drizzle);
        assert_eq!(Condition::from_code(520), Condition::Rain);
        assert_eq!(Condition::from_code(741), Condition::Fog);
        assert_eq!(Condition::from_code(781), Condition::Wind);
        assert_eq!(Condition::from_code(800), Condition::Clear);
        assert_eq!(Condition::from_code(801), Condition::PartlyCloudy);
        assert_eq!(Condition::from_code(804), Condition::Cloudy);
    }

    #[test]
    fn snow_folds_into_rain() {
        for code in [600, 601, 602, 611, 612, 613, 615, 616, 620, 621, 622] {
            assert_eq!(Condition::from_code(code), Condition::Rain, "code {code}");
        }
    }

    #[test]
    fn documented_codes_never_hit_the_default_by_accident() {
        for &code in DOCUMENTED_CODES {
            let condition = Condition::from_code(code);
            assert!(Condition::ALL.contains(&condition));
            if code != 800 {
                assert_ne!(condition, Condition::Clear, "code {code}");
            }
        }
    }

    #[test]
    fn unmapped_codes_default_to_clear() {
        for code in [0, -1, 199, 233, 400, 623, 700, 799, 805, 900, i64::MAX] {
            assert_eq!(Condition::from_code(code), Condition::Clear, "code {code}");
        }
    }

    #[test]
    fn priorities_are_strictly_ordered() {
        let priorities: Vec<u8> = Condition::ALL.iter().map(|c| c.priority()).collect();
        assert_eq!(priorities, vec![8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn icon_suffix_only_for_clear_and_partly_cloudy() {
        for condition in Condition::ALL {
            for dn in [DayNight::Day, DayNight::Night] {
                let path = icon_path(condition, dn, "webm");
                let suffixed = path.ends_with(&format!("_{dn}.webm"));
                assert_eq!(suffixed, condition.has_day_night_variant(), "{path}");
                assert!(path.starts_with(&format!("{dn}/")));
            }
        }
        assert_eq!(
            icon_path(Condition::PartlyCloudy, DayNight::Night, "webm"),
            "night/partly_cloudy_night.webm"
        );
        assert_eq!(icon_path(Condition::Fog, DayNight::Day, "png"), "day/fog.png");
    }

    #[test]
    fn labels() {
        assert_eq!(Condition::Cloudy.label(), "Mayormente nublado");
        assert_eq!(label_for_name("storm"), "Tormenta");
        assert_eq!(label_for_name("hail"), "hail");
    }

    #[test]
    fn condition_from_str_round_trips_names() {
        for condition in Condition::ALL {
            assert_eq!(condition.name().parse::<Condition>().unwrap(), condition);
        }
        assert!("sunny".parse::<Condition>().is_err());
    }

    #[test]
    fn condition_serialization() {
        assert_eq!(
            serde_json::to_string(&Condition::PartlyCloudy).unwrap(),
            "\"partly_cloudy\""
        );
    }
}
