use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::calendarerror::CalendarError;

/// German federal state. Decides which regional holidays apply.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Serialize)]
pub enum Bundesland {
    #[serde(rename = "BW")]
    BadenWuerttemberg,
    #[default]
    #[serde(rename = "BY")]
    Bayern,
    #[serde(rename = "BE")]
    Berlin,
    #[serde(rename = "BB")]
    Brandenburg,
    #[serde(rename = "HB")]
    Bremen,
    #[serde(rename = "HH")]
    Hamburg,
    #[serde(rename = "HE")]
    Hessen,
    #[serde(rename = "MV")]
    MecklenburgVorpommern,
    #[serde(rename = "NI")]
    Niedersachsen,
    #[serde(rename = "NW")]
    NordrheinWestfalen,
    #[serde(rename = "RP")]
    RheinlandPfalz,
    #[serde(rename = "SL")]
    Saarland,
    #[serde(rename = "SN")]
    Sachsen,
    #[serde(rename = "ST")]
    SachsenAnhalt,
    #[serde(rename = "SH")]
    SchleswigHolstein,
    #[serde(rename = "TH")]
    Thueringen,
}

impl Bundesland {
    pub const ALL: [Bundesland; 16] = [
        Bundesland::BadenWuerttemberg,
        Bundesland::Bayern,
        Bundesland::Berlin,
        Bundesland::Brandenburg,
        Bundesland::Bremen,
        Bundesland::Hamburg,
        Bundesland::Hessen,
        Bundesland::MecklenburgVorpommern,
        Bundesland::Niedersachsen,
        Bundesland::NordrheinWestfalen,
        Bundesland::RheinlandPfalz,
        Bundesland::Saarland,
        Bundesland::Sachsen,
        Bundesland::SachsenAnhalt,
        Bundesland::SchleswigHolstein,
        Bundesland::Thueringen,
    ];

    /// Two-letter state code, e.g. `"BY"`.
    pub const fn code(&self) -> &'static str {
        match self {
            Bundesland::BadenWuerttemberg => "BW",
            Bundesland::Bayern => "BY",
            Bundesland::Berlin => "BE",
            Bundesland::Brandenburg => "BB",
            Bundesland::Bremen => "HB",
            Bundesland::Hamburg => "HH",
            Bundesland::Hessen => "HE",
            Bundesland::MecklenburgVorpommern => "MV",
            Bundesland::Niedersachsen => "NI",
            Bundesland::NordrheinWestfalen => "NW",
            Bundesland::RheinlandPfalz => "RP",
            Bundesland::Saarland => "SL",
            Bundesland::Sachsen => "SN",
            Bundesland::SachsenAnhalt => "ST",
            Bundesland::SchleswigHolstein => "SH",
            Bundesland::Thueringen => "TH",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Bundesland::BadenWuerttemberg => "Baden-Württemberg",
            Bundesland::Bayern => "Bayern",
            Bundesland::Berlin => "Berlin",
            Bundesland::Brandenburg => "Brandenburg",
            Bundesland::Bremen => "Bremen",
            Bundesland::Hamburg => "Hamburg",
            Bundesland::Hessen => "Hessen",
            Bundesland::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            Bundesland::Niedersachsen => "Niedersachsen",
            Bundesland::NordrheinWestfalen => "Nordrhein-Westfalen",
            Bundesland::RheinlandPfalz => "Rheinland-Pfalz",
            Bundesland::Saarland => "Saarland",
            Bundesland::Sachsen => "Sachsen",
            Bundesland::SachsenAnhalt => "Sachsen-Anhalt",
            Bundesland::SchleswigHolstein => "Schleswig-Holstein",
            Bundesland::Thueringen => "Thüringen",
        }
    }

    /// Lenient parsing used for configuration input: an absent or
    /// unrecognized code falls back to `BY`.
    pub fn parse_or_default(code: Option<&str>) -> Bundesland {
        match code {
            None => Bundesland::default(),
            Some(code) => code.parse().unwrap_or_else(|_| {
                tracing::warn!(code, fallback = %Bundesland::default(), "Unknown region code");
                Bundesland::default()
            }),
        }
    }
}

impl FromStr for Bundesland {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Bundesland::ALL
            .iter()
            .find(|b| b.code().eq_ignore_ascii_case(code))
            .copied()
            .ok_or_else(|| CalendarError::UnknownRegion(s.to_owned()))
    }
}

impl fmt::Display for Bundesland {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Bundesland {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code: Option<String> = Option::deserialize(deserializer)?;
        Ok(Bundesland::parse_or_default(code.as_deref()))
    }
}
