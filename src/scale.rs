//! The closed set of difficulty scales
//!
//! Every conversion pivots through the canonical **Punter** scale. Grassy
//! shares Punter's numeric domain and only differs in how values are
//! labelled; MichaelChan and Scheep have their own numbers and need a
//! calibration table to reach Punter.

use crate::convert::{CalibrationTable, MICHAEL_CHAN_TABLE, SCHEEP_TABLE};
use crate::error::ScaleError;
use crate::visual::{Tier, GRASSY_TIERS, PUNTER_TIERS, SCHEEP_TIERS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Canonical scale
    Punter,
    MichaelChan,
    Scheep,
    Grassy,
}

impl Scale {
    pub const ALL: [Scale; 4] = [Scale::Punter, Scale::MichaelChan, Scale::Scheep, Scale::Grassy];

    /// Identifier used on the command line and in reports
    pub fn id(self) -> &'static str {
        match self {
            Scale::Punter => "punter",
            Scale::MichaelChan => "michaelchan",
            Scale::Scheep => "scheep",
            Scale::Grassy => "grassy",
        }
    }

    /// Calibration against Punter, or `None` when the scale already
    /// speaks Punter numbers.
    pub fn calibration(self) -> Option<&'static CalibrationTable> {
        match self {
            Scale::Punter | Scale::Grassy => None,
            Scale::MichaelChan => Some(&MICHAEL_CHAN_TABLE),
            Scale::Scheep => Some(&SCHEEP_TABLE),
        }
    }

    /// Named tiers, lowest threshold first. MichaelChan has none; its
    /// labels are unit glyphs.
    pub fn visual_table(self) -> &'static [Tier] {
        match self {
            Scale::Punter => PUNTER_TIERS,
            Scale::MichaelChan => &[],
            Scale::Scheep => SCHEEP_TIERS,
            Scale::Grassy => GRASSY_TIERS,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Scale {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "punter" => Ok(Scale::Punter),
            "michaelchan" | "michael-chan" | "michael_chan" | "mc" => Ok(Scale::MichaelChan),
            "scheep" => Ok(Scale::Scheep),
            "grassy" => Ok(Scale::Grassy),
            _ => Err(ScaleError::UnknownScale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("punter".parse::<Scale>(), Ok(Scale::Punter));
        assert_eq!("MichaelChan".parse::<Scale>(), Ok(Scale::MichaelChan));
        assert_eq!("mc".parse::<Scale>(), Ok(Scale::MichaelChan));
        assert_eq!(" Scheep ".parse::<Scale>(), Ok(Scale::Scheep));
        assert_eq!("GRASSY".parse::<Scale>(), Ok(Scale::Grassy));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "gddl".parse::<Scale>(),
            Err(ScaleError::UnknownScale("gddl".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for scale in Scale::ALL {
            assert_eq!(scale.to_string().parse::<Scale>(), Ok(scale));
        }
    }

    #[test]
    fn test_only_own_domain_scales_have_tables() {
        assert!(Scale::Punter.calibration().is_none());
        assert!(Scale::Grassy.calibration().is_none());
        assert!(Scale::MichaelChan.calibration().is_some());
        assert!(Scale::Scheep.calibration().is_some());
    }

    #[test]
    fn test_visual_tables() {
        assert_eq!(Scale::Punter.visual_table().len(), 15);
        assert_eq!(Scale::Scheep.visual_table().len(), 18);
        assert_eq!(Scale::Grassy.visual_table().len(), 20);
        assert!(Scale::MichaelChan.visual_table().is_empty());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Scale::MichaelChan).unwrap();
        assert_eq!(json, "\"michaelchan\"");
        let back: Scale = serde_json::from_str("\"grassy\"").unwrap();
        assert_eq!(back, Scale::Grassy);
    }
}
