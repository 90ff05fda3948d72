//! Weather phenomenon and modifier code tables
//!
//! The METAR weather group is a concatenation of 1-2 letter modifier codes
//! and 2-letter phenomenon codes. Both tables are closed enumerations:
//! lookups are exhaustive matches, lexically disjoint, and safe for
//! unsynchronized concurrent reads.

use serde::{Deserialize, Serialize};

// =============================================================================
// Weather Phenomena
// =============================================================================

/// 2-letter METAR weather phenomenon codes
///
/// Each code carries a human-readable display name and a severity flag
/// marking phenomena hazardous to aviation in any intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phenomenon {
    Mist,
    DustStorm,
    WidespreadDust,
    Drizzle,
    Fog,
    Tornado,
    Smoke,
    Hail,
    SmallHail,
    Haze,
    IceCrystals,
    IcePellets,
    DustDevils,
    Rain,
    Sand,
    SnowGrains,
    Shower,
    Snow,
    Squall,
    Sandstorm,
    Thunderstorm,
    VolcanicAsh,
    UnidentifiedPrecip,
}

impl Phenomenon {
    /// Resolve a 2-letter code to its table entry
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BR" => Some(Phenomenon::Mist),
            "DS" => Some(Phenomenon::DustStorm),
            "DU" => Some(Phenomenon::WidespreadDust),
            "DZ" => Some(Phenomenon::Drizzle),
            "FG" => Some(Phenomenon::Fog),
            "FC" => Some(Phenomenon::Tornado),
            "FU" => Some(Phenomenon::Smoke),
            "GR" => Some(Phenomenon::Hail),
            "GS" => Some(Phenomenon::SmallHail),
            "HZ" => Some(Phenomenon::Haze),
            "IC" => Some(Phenomenon::IceCrystals),
            "PL" => Some(Phenomenon::IcePellets),
            "PO" => Some(Phenomenon::DustDevils),
            "RA" => Some(Phenomenon::Rain),
            "SA" => Some(Phenomenon::Sand),
            "SG" => Some(Phenomenon::SnowGrains),
            "SH" => Some(Phenomenon::Shower),
            "SN" => Some(Phenomenon::Snow),
            "SQ" => Some(Phenomenon::Squall),
            "SS" => Some(Phenomenon::Sandstorm),
            "TS" => Some(Phenomenon::Thunderstorm),
            "VA" => Some(Phenomenon::VolcanicAsh),
            "UP" => Some(Phenomenon::UnidentifiedPrecip),
            _ => None,
        }
    }

    /// The METAR code for this phenomenon
    pub fn code(&self) -> &'static str {
        match self {
            Phenomenon::Mist => "BR",
            Phenomenon::DustStorm => "DS",
            Phenomenon::WidespreadDust => "DU",
            Phenomenon::Drizzle => "DZ",
            Phenomenon::Fog => "FG",
            Phenomenon::Tornado => "FC",
            Phenomenon::Smoke => "FU",
            Phenomenon::Hail => "GR",
            Phenomenon::SmallHail => "GS",
            Phenomenon::Haze => "HZ",
            Phenomenon::IceCrystals => "IC",
            Phenomenon::IcePellets => "PL",
            Phenomenon::DustDevils => "PO",
            Phenomenon::Rain => "RA",
            Phenomenon::Sand => "SA",
            Phenomenon::SnowGrains => "SG",
            Phenomenon::Shower => "SH",
            Phenomenon::Snow => "SN",
            Phenomenon::Squall => "SQ",
            Phenomenon::Sandstorm => "SS",
            Phenomenon::Thunderstorm => "TS",
            Phenomenon::VolcanicAsh => "VA",
            Phenomenon::UnidentifiedPrecip => "UP",
        }
    }

    /// Human-readable display name
    pub fn name(&self) -> &'static str {
        match self {
            Phenomenon::Mist => "mist",
            Phenomenon::DustStorm => "dust storm",
            Phenomenon::WidespreadDust => "widespread dust",
            Phenomenon::Drizzle => "drizzle",
            Phenomenon::Fog => "fog",
            Phenomenon::Tornado => "tornado",
            Phenomenon::Smoke => "smoke",
            Phenomenon::Hail => "hail",
            Phenomenon::SmallHail => "small hail",
            Phenomenon::Haze => "haze",
            Phenomenon::IceCrystals => "ice crystals",
            Phenomenon::IcePellets => "ice pellets",
            Phenomenon::DustDevils => "dust devils",
            Phenomenon::Rain => "rain",
            Phenomenon::Sand => "sand",
            Phenomenon::SnowGrains => "snow grains",
            Phenomenon::Shower => "shower",
            Phenomenon::Snow => "snow",
            Phenomenon::Squall => "squall",
            Phenomenon::Sandstorm => "sandstorm",
            Phenomenon::Thunderstorm => "thunderstorm",
            Phenomenon::VolcanicAsh => "volcanic ash",
            Phenomenon::UnidentifiedPrecip => "unidentified precip",
        }
    }

    /// Whether this phenomenon is hazardous in any intensity
    pub fn is_severe(&self) -> bool {
        matches!(
            self,
            Phenomenon::DustStorm
                | Phenomenon::Tornado
                | Phenomenon::Hail
                | Phenomenon::DustDevils
                | Phenomenon::Squall
                | Phenomenon::Sandstorm
                | Phenomenon::Thunderstorm
                | Phenomenon::VolcanicAsh
        )
    }
}

// =============================================================================
// Weather Modifiers
// =============================================================================

/// Rendering position of a modifier relative to the phenomenon names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Rendered before the phenomenon names
    Prefix,

    /// Rendered after the phenomenon names
    Suffix,
}

/// 1-2 letter METAR weather modifier codes
///
/// Each modifier carries a display name, a sort priority, and an explicit
/// placement. Priority orders modifiers among themselves (intensity markers
/// outermost); placement decides which side of the phenomenon names the
/// modifier renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    /// `+` intensity marker
    Heavy,

    /// `-` intensity marker
    Light,

    /// BC
    Patches,

    /// BL
    Blowing,

    /// DR
    LowDrifting,

    /// FZ
    Freezing,

    /// MI
    Shallow,

    /// VC
    InVicinity,

    /// RE
    Recent,
}

impl Modifier {
    /// Resolve a modifier code to its table entry
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "+" => Some(Modifier::Heavy),
            "-" => Some(Modifier::Light),
            "BC" => Some(Modifier::Patches),
            "BL" => Some(Modifier::Blowing),
            "DR" => Some(Modifier::LowDrifting),
            "FZ" => Some(Modifier::Freezing),
            "MI" => Some(Modifier::Shallow),
            "VC" => Some(Modifier::InVicinity),
            "RE" => Some(Modifier::Recent),
            _ => None,
        }
    }

    /// The METAR code for this modifier
    pub fn code(&self) -> &'static str {
        match self {
            Modifier::Heavy => "+",
            Modifier::Light => "-",
            Modifier::Patches => "BC",
            Modifier::Blowing => "BL",
            Modifier::LowDrifting => "DR",
            Modifier::Freezing => "FZ",
            Modifier::Shallow => "MI",
            Modifier::InVicinity => "VC",
            Modifier::Recent => "RE",
        }
    }

    /// Human-readable display name
    pub fn name(&self) -> &'static str {
        match self {
            Modifier::Heavy => "heavy",
            Modifier::Light => "slight",
            Modifier::Patches => "patches",
            Modifier::Blowing => "blowing",
            Modifier::LowDrifting => "low drifting",
            Modifier::Freezing => "freezing",
            Modifier::Shallow => "shallow",
            Modifier::InVicinity => "in vicinity",
            Modifier::Recent => "recent",
        }
    }

    /// Sort priority; higher values render further from the phenomenon names
    pub fn priority(&self) -> i8 {
        match self {
            Modifier::Heavy | Modifier::Light => 100,
            Modifier::Patches => -5,
            Modifier::Blowing => 5,
            Modifier::LowDrifting => 4,
            Modifier::Freezing => 6,
            Modifier::Shallow => 3,
            Modifier::InVicinity => -6,
            Modifier::Recent => 2,
        }
    }

    /// Which side of the phenomenon names this modifier renders on
    pub fn placement(&self) -> Placement {
        if self.priority() > 0 {
            Placement::Prefix
        } else {
            Placement::Suffix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phenomenon_lookup() {
        assert_eq!(Phenomenon::from_code("RA"), Some(Phenomenon::Rain));
        assert_eq!(Phenomenon::from_code("TS"), Some(Phenomenon::Thunderstorm));
        assert_eq!(Phenomenon::from_code("UP"), Some(Phenomenon::UnidentifiedPrecip));
        assert_eq!(Phenomenon::from_code("ZZ"), None);
        assert_eq!(Phenomenon::from_code("R"), None);
    }

    #[test]
    fn test_phenomenon_code_round_trip() {
        for code in [
            "BR", "DS", "DU", "DZ", "FG", "FC", "FU", "GR", "GS", "HZ", "IC", "PL", "PO", "RA",
            "SA", "SG", "SH", "SN", "SQ", "SS", "TS", "VA", "UP",
        ] {
            let phenomenon = Phenomenon::from_code(code).unwrap();
            assert_eq!(phenomenon.code(), code);
        }
    }

    #[test]
    fn test_phenomenon_severity() {
        assert!(Phenomenon::Tornado.is_severe());
        assert!(Phenomenon::Thunderstorm.is_severe());
        assert!(Phenomenon::Hail.is_severe());
        assert!(!Phenomenon::Rain.is_severe());
        assert!(!Phenomenon::SmallHail.is_severe());
        assert!(!Phenomenon::Mist.is_severe());
    }

    #[test]
    fn test_modifier_lookup() {
        assert_eq!(Modifier::from_code("+"), Some(Modifier::Heavy));
        assert_eq!(Modifier::from_code("-"), Some(Modifier::Light));
        assert_eq!(Modifier::from_code("VC"), Some(Modifier::InVicinity));
        assert_eq!(Modifier::from_code("RA"), None);
    }

    #[test]
    fn test_modifier_tables_are_disjoint() {
        for code in ["BC", "BL", "DR", "FZ", "MI", "VC", "RE"] {
            assert!(Modifier::from_code(code).is_some());
            assert!(Phenomenon::from_code(code).is_none());
        }
    }

    #[test]
    fn test_intensity_sorts_outermost() {
        let mut others: Vec<i8> = [
            Modifier::Patches,
            Modifier::Blowing,
            Modifier::LowDrifting,
            Modifier::Freezing,
            Modifier::Shallow,
            Modifier::InVicinity,
            Modifier::Recent,
        ]
        .iter()
        .map(|m| m.priority())
        .collect();
        others.sort();

        assert!(Modifier::Heavy.priority() > *others.last().unwrap());
        assert_eq!(Modifier::Heavy.priority(), Modifier::Light.priority());
    }

    #[test]
    fn test_placement_follows_priority_sign() {
        assert_eq!(Modifier::Heavy.placement(), Placement::Prefix);
        assert_eq!(Modifier::Freezing.placement(), Placement::Prefix);
        assert_eq!(Modifier::Recent.placement(), Placement::Prefix);
        assert_eq!(Modifier::Patches.placement(), Placement::Suffix);
        assert_eq!(Modifier::InVicinity.placement(), Placement::Suffix);
    }
}
