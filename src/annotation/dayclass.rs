use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification of a single date for calendar views.
/// Serialized as `"holiday"`, `"vacation"` or `""`.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum DayClass {
    #[serde(rename = "holiday")]
    Holiday,
    #[serde(rename = "vacation")]
    Vacation,
    #[default]
    #[serde(rename = "")]
    None,
}

impl DayClass {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DayClass::Holiday => "holiday",
            DayClass::Vacation => "vacation",
            DayClass::None => "",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == DayClass::None
    }
}

impl fmt::Display for DayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification plus tooltip text for one date.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct DateAnnotation {
    date: NaiveDate,
    class: DayClass,
    label: Option<String>,
}

impl DateAnnotation {
    pub fn holiday(date: NaiveDate, name: impl Into<String>) -> DateAnnotation {
        DateAnnotation { date, class: DayClass::Holiday, label: Some(name.into()) }
    }

    pub fn vacation(date: NaiveDate, name: impl Into<String>) -> DateAnnotation {
        DateAnnotation { date, class: DayClass::Vacation, label: Some(name.into()) }
    }

    pub fn plain(date: NaiveDate) -> DateAnnotation {
        DateAnnotation { date, class: DayClass::None, label: None }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn class(&self) -> DayClass {
        self.class
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn into_label(self) -> Option<String> {
        self.label
    }
}
