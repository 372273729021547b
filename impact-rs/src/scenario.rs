/// Underreporting multiplier taking reported cases to the estimated
/// currently-infected count in the normal scenario.
pub const NORMAL_CASE_MULTIPLIER: u64 = 10;
/// Underreporting multiplier for the severe scenario.
pub const SEVERE_CASE_MULTIPLIER: u64 = 50;

/// One of the two parallel projections computed per estimation.
///
/// Both scenarios share every input parameter and differ only in the
/// multiplier applied to the reported case count.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Scenario {
    Normal,
    Severe,
}

impl Scenario {
    /// Multiplier applied to reported cases under this scenario.
    pub fn multiplier(self) -> u64 {
        self.select(NORMAL_CASE_MULTIPLIER, SEVERE_CASE_MULTIPLIER)
    }

    /// Key under which this scenario's impact appears in the result record.
    pub fn label(self) -> &'static str {
        self.select("impact", "severeImpact")
    }

    pub fn is_severe(self) -> bool {
        return self == Scenario::Severe;
    }

    pub fn select<T>(self, normal: T, severe: T) -> T {
        match self {
            Scenario::Normal => normal,
            Scenario::Severe => severe,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario::Normal
    }
}

impl From<bool> for Scenario {
    fn from(is_severe: bool) -> Self {
        if is_severe {
            Scenario::Severe
        } else {
            Scenario::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers() {
        assert_eq!(Scenario::Normal.multiplier(), 10);
        assert_eq!(Scenario::Severe.multiplier(), 50);
        assert_eq!(
            Scenario::Severe.multiplier(),
            5 * Scenario::Normal.multiplier()
        );
    }

    #[test]
    fn select_picks_by_scenario() {
        assert_eq!(Scenario::Normal.select("a", "b"), "a");
        assert_eq!(Scenario::Severe.select("a", "b"), "b");
        assert_eq!(Scenario::from(true), Scenario::Severe);
        assert_eq!(Scenario::from(false), Scenario::Normal);
    }
}
