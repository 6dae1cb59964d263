//! Medal tallies

use serde::Serialize;

use crate::{constants::MEDAL_TIERS, models::Medal};

/// Medal counts as `[gold, silver, bronze]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MedalTally([u32; MEDAL_TIERS]);

impl MedalTally {
    /// Count one award's medal code. Returns `false` when the code carries
    /// no medal (0) or is not a known tier.
    pub fn record(&mut self, code: i32) -> bool {
        match Medal::from_code(code) {
            Some(medal) => {
                self.0[medal.slot()] += 1;
                true
            }
            None => false,
        }
    }

    pub fn as_array(&self) -> [u32; MEDAL_TIERS] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut tally = MedalTally::default();
        assert!(tally.record(1));
        assert!(tally.record(3));
        assert!(tally.record(3));
        assert!(!tally.record(0));
        assert_eq!(tally.as_array(), [1, 0, 2]);
    }

    #[test]
    fn test_unknown_codes_ignored() {
        let mut tally = MedalTally::default();
        assert!(!tally.record(4));
        assert!(!tally.record(-1));
        assert_eq!(tally, MedalTally::default());
    }

    #[test]
    fn test_serializes_as_array() {
        let mut tally = MedalTally::default();
        tally.record(2);
        assert_eq!(serde_json::to_string(&tally).unwrap(), "[0,1,0]");
    }
}
