use serde::{Deserialize, Serialize};

use super::bundesland::Bundesland;
use super::bundesland::Bundesland::*;

/// Holidays that are only observed in some federal states.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum RegionalHoliday {
    HeiligeDreiKoenige,
    Frauentag,
    MariaeHimmelfahrt,
    Weltkindertag,
    Reformationstag,
    Allerheiligen,
    Fronleichnam,
    BussUndBettag,
}

const HEILIGE_DREI_KOENIGE: &[Bundesland] = &[BadenWuerttemberg, Bayern, SachsenAnhalt];
const FRAUENTAG: &[Bundesland] = &[Berlin, MecklenburgVorpommern];
const MARIAE_HIMMELFAHRT: &[Bundesland] = &[Bayern, Saarland];
const WELTKINDERTAG: &[Bundesland] = &[Thueringen];
const REFORMATIONSTAG: &[Bundesland] = &[
    Brandenburg,
    Bremen,
    Hamburg,
    MecklenburgVorpommern,
    Niedersachsen,
    Sachsen,
    SachsenAnhalt,
    SchleswigHolstein,
    Thueringen,
];
const ALLERHEILIGEN: &[Bundesland] = &[
    BadenWuerttemberg,
    Bayern,
    NordrheinWestfalen,
    RheinlandPfalz,
    Saarland,
];
const FRONLEICHNAM: &[Bundesland] = &[
    BadenWuerttemberg,
    Bayern,
    Hessen,
    NordrheinWestfalen,
    RheinlandPfalz,
    Saarland,
];
const BUSS_UND_BETTAG: &[Bundesland] = &[Sachsen];

impl RegionalHoliday {
    pub const ALL: [RegionalHoliday; 8] = [
        RegionalHoliday::HeiligeDreiKoenige,
        RegionalHoliday::Frauentag,
        RegionalHoliday::MariaeHimmelfahrt,
        RegionalHoliday::Weltkindertag,
        RegionalHoliday::Reformationstag,
        RegionalHoliday::Allerheiligen,
        RegionalHoliday::Fronleichnam,
        RegionalHoliday::BussUndBettag,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            RegionalHoliday::HeiligeDreiKoenige => "Heilige Drei Könige",
            RegionalHoliday::Frauentag => "Internationaler Frauentag",
            RegionalHoliday::MariaeHimmelfahrt => "Mariä Himmelfahrt",
            RegionalHoliday::Weltkindertag => "Weltkindertag",
            RegionalHoliday::Reformationstag => "Reformationstag",
            RegionalHoliday::Allerheiligen => "Allerheiligen",
            RegionalHoliday::Fronleichnam => "Fronleichnam",
            RegionalHoliday::BussUndBettag => "Buß- und Bettag",
        }
    }

    /// The federal states observing this holiday.
    pub const fn observed_in(&self) -> &'static [Bundesland] {
        match self {
            RegionalHoliday::HeiligeDreiKoenige => HEILIGE_DREI_KOENIGE,
            RegionalHoliday::Frauentag => FRAUENTAG,
            RegionalHoliday::MariaeHimmelfahrt => MARIAE_HIMMELFAHRT,
            RegionalHoliday::Weltkindertag => WELTKINDERTAG,
            RegionalHoliday::Reformationstag => REFORMATIONSTAG,
            RegionalHoliday::Allerheiligen => ALLERHEILIGEN,
            RegionalHoliday::Fronleichnam => FRONLEICHNAM,
            RegionalHoliday::BussUndBettag => BUSS_UND_BETTAG,
        }
    }

    #[inline]
    pub fn is_observed_in(&self, region: Bundesland) -> bool {
        self.observed_in().contains(&region)
    }

    /// All regional holidays observed by `region`, in table order.
    pub fn observed_by(region: Bundesland) -> impl Iterator<Item = RegionalHoliday> {
        RegionalHoliday::ALL
            .into_iter()
            .filter(move |holiday| holiday.is_observed_in(region))
    }
}
