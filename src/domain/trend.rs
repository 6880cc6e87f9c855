//! City disease-case trends (mock surveillance data).
//!
//! Trend data is display-only; it never feeds disease or risk scoring.

use serde::{Deserialize, Serialize};

use super::disease::Disease;

/// Weekly case counts, weeks 1 through 4.
pub type WeeklyCases = [u32; 4];

/// Cities with surveillance data, in listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Ahmedabad,
    Mumbai,
    Delhi,
    Bangalore,
    Chennai,
    Kolkata,
    Hyderabad,
    Pune,
}

impl City {
    pub const ALL: [City; 8] = [
        Self::Ahmedabad,
        Self::Mumbai,
        Self::Delhi,
        Self::Bangalore,
        Self::Chennai,
        Self::Kolkata,
        Self::Hyderabad,
        Self::Pune,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ahmedabad => "Ahmedabad",
            Self::Mumbai => "Mumbai",
            Self::Delhi => "Delhi",
            Self::Bangalore => "Bangalore",
            Self::Chennai => "Chennai",
            Self::Kolkata => "Kolkata",
            Self::Hyderabad => "Hyderabad",
            Self::Pune => "Pune",
        }
    }

    /// Exact, case-sensitive lookup by name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mock four-week case series per city, diseases in listing order.
pub const CITY_TRENDS: [(City, [(Disease, WeeklyCases); 4]); 8] = [
    (
        City::Ahmedabad,
        [
            (Disease::Dengue, [120, 135, 150, 168]),
            (Disease::Tb, [45, 44, 46, 45]),
            (Disease::Flu, [80, 85, 90, 88]),
            (Disease::Typhoid, [30, 32, 35, 33]),
        ],
    ),
    (
        City::Mumbai,
        [
            (Disease::Typhoid, [95, 110, 125, 140]),
            (Disease::Flu, [200, 220, 240, 260]),
            (Disease::Dengue, [60, 65, 70, 68]),
            (Disease::Tb, [55, 56, 57, 56]),
        ],
    ),
    (
        City::Delhi,
        [
            (Disease::Flu, [150, 145, 140, 135]),
            (Disease::Dengue, [100, 105, 110, 108]),
            (Disease::Tb, [70, 72, 71, 70]),
            (Disease::Typhoid, [50, 52, 54, 53]),
        ],
    ),
    (
        City::Bangalore,
        [
            (Disease::Dengue, [85, 90, 95, 92]),
            (Disease::Flu, [120, 125, 130, 128]),
            (Disease::Tb, [40, 41, 42, 41]),
            (Disease::Typhoid, [35, 36, 37, 36]),
        ],
    ),
    (
        City::Chennai,
        [
            (Disease::Typhoid, [70, 75, 80, 78]),
            (Disease::Dengue, [95, 100, 105, 103]),
            (Disease::Flu, [110, 115, 120, 118]),
            (Disease::Tb, [50, 51, 52, 51]),
        ],
    ),
    (
        City::Kolkata,
        [
            (Disease::Tb, [60, 62, 64, 63]),
            (Disease::Dengue, [75, 78, 80, 79]),
            (Disease::Flu, [90, 92, 94, 93]),
            (Disease::Typhoid, [40, 42, 44, 43]),
        ],
    ),
    (
        City::Hyderabad,
        [
            (Disease::Dengue, [110, 115, 120, 118]),
            (Disease::Flu, [130, 135, 140, 138]),
            (Disease::Typhoid, [45, 47, 49, 48]),
            (Disease::Tb, [35, 36, 37, 36]),
        ],
    ),
    (
        City::Pune,
        [
            (Disease::Flu, [100, 105, 110, 108]),
            (Disease::Dengue, [70, 72, 74, 73]),
            (Disease::Tb, [30, 31, 32, 31]),
            (Disease::Typhoid, [55, 57, 59, 58]),
        ],
    ),
];

/// One disease's case series in a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseTrend {
    pub disease: Disease,
    pub weekly_cases: WeeklyCases,
}

impl DiseaseTrend {
    #[must_use]
    pub fn direction(&self) -> TrendDirection {
        TrendDirection::from_cases(&self.weekly_cases)
    }

    /// Whole-percent change from the first to the last week.
    #[must_use]
    pub fn change_percent(&self) -> i64 {
        change_percent(&self.weekly_cases)
    }

    /// e.g. `Dengue rising (+40%)`
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} {} ({:+}%)",
            self.disease,
            self.direction().status(),
            self.change_percent()
        )
    }
}

/// Direction of a case series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Rising,
    Falling,
    Steady,
}

impl TrendDirection {
    /// Compare the second half of the series against the first.
    ///
    /// More than 10% up is rising, more than 10% down is falling. Series
    /// shorter than two points are steady.
    #[must_use]
    pub fn from_cases(cases: &[u32]) -> Self {
        if cases.len() < 2 {
            return Self::Steady;
        }

        let mid = cases.len() / 2;
        let first_half: f64 = cases[..mid].iter().map(|&c| f64::from(c)).sum();
        let second_half: f64 = cases[mid..].iter().map(|&c| f64::from(c)).sum();

        if second_half > first_half * 1.1 {
            Self::Rising
        } else if second_half < first_half * 0.9 {
            Self::Falling
        } else {
            Self::Steady
        }
    }

    #[must_use]
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Rising => "↑",
            Self::Falling => "↓",
            Self::Steady => "→",
        }
    }

    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Steady => "steady",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.arrow())
    }
}

/// Truncated percent change from first to last entry; 0 when the first is 0.
#[must_use]
pub fn change_percent(cases: &[u32]) -> i64 {
    match (cases.first(), cases.last()) {
        (Some(&first), Some(&last)) if first > 0 => {
            let delta = f64::from(last) - f64::from(first);
            (delta / f64::from(first) * 100.0).trunc() as i64
        }
        _ => 0,
    }
}
