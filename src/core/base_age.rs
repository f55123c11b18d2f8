//! Age-derived base XP.
//!
//! A square-root band covers the first century, then four linear bands take
//! over. Every band starts on the value the previous one ends on.

/// Last age (inclusive) of the square-root band.
pub const ROOT_BAND_END: i32 = 100;

/// Multiplier of the square-root band: `5 * sqrt(age)`.
pub const ROOT_BAND_SCALE: f64 = 5.0;

/// A linear stretch of the age curve, active for ages above `from_age`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBand {
    pub from_age: i32,
    pub base_xp: f64,
    pub xp_per_year: f64,
}

impl LinearBand {
    fn eval(&self, age: i32) -> f64 {
        self.base_xp + f64::from(age - self.from_age) * self.xp_per_year
    }
}

/// Linear bands in ascending order of `from_age`.
pub const LINEAR_BANDS: [LinearBand; 4] = [
    LinearBand {
        from_age: 100,
        base_xp: 50.0,
        xp_per_year: 1.0,
    },
    LinearBand {
        from_age: 200,
        base_xp: 150.0,
        xp_per_year: 0.75,
    },
    LinearBand {
        from_age: 500,
        base_xp: 375.0,
        xp_per_year: 0.5,
    },
    LinearBand {
        from_age: 1500,
        base_xp: 875.0,
        xp_per_year: 0.25,
    },
];

/// Base XP for a character of the given age. Negative ages count as 0.
pub fn compute_base_xp(age: i32) -> f64 {
    let age = age.max(0);

    if age <= ROOT_BAND_END {
        return ROOT_BAND_SCALE * f64::from(age).sqrt();
    }

    LINEAR_BANDS
        .iter()
        .rev()
        .find(|band| age > band.from_age)
        .map(|band| band.eval(age))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(compute_base_xp(0), 0.0);
        assert_eq!(compute_base_xp(100), 50.0);
        assert_eq!(compute_base_xp(200), 150.0);
        assert_eq!(compute_base_xp(500), 375.0);
        assert_eq!(compute_base_xp(1500), 875.0);
    }

    #[test]
    fn test_values_inside_bands() {
        assert_eq!(compute_base_xp(25), 25.0);
        assert_eq!(compute_base_xp(150), 100.0);
        assert_eq!(compute_base_xp(250), 187.5);
        assert_eq!(compute_base_xp(1000), 625.0);
        assert_eq!(compute_base_xp(2500), 1125.0);
    }

    #[test]
    fn test_negative_age_counts_as_zero() {
        assert_eq!(compute_base_xp(-1), 0.0);
        assert_eq!(compute_base_xp(i32::MIN), 0.0);
    }

    #[test]
    fn test_bands_join_without_gaps() {
        let root_end = ROOT_BAND_SCALE * f64::from(ROOT_BAND_END).sqrt();
        assert_eq!(LINEAR_BANDS[0].from_age, ROOT_BAND_END);
        assert_eq!(LINEAR_BANDS[0].base_xp, root_end);

        for pair in LINEAR_BANDS.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            assert!(current.from_age < next.from_age);
            assert_eq!(current.eval(next.from_age), next.base_xp);
        }
    }

    #[test]
    fn test_one_year_past_each_boundary() {
        assert_eq!(compute_base_xp(101), 51.0);
        assert_eq!(compute_base_xp(201), 150.75);
        assert_eq!(compute_base_xp(501), 375.5);
        assert_eq!(compute_base_xp(1501), 875.25);
    }

    #[test]
    fn test_extreme_age_does_not_overflow() {
        let xp = compute_base_xp(i32::MAX);
        assert!(xp.is_finite());
        assert!(xp > 875.0);
    }
}
