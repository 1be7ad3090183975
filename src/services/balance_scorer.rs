//! Work-life balance scoring engine.
//!
//! Maps a student's routine (daily study, daily sleep, weekly
//! extracurriculars) to a 0-5 star rating using age-banded ideal profiles
//! and a Gaussian closeness curve per dimension. Pure and deterministic:
//! identical inputs always yield the identical rating, with no clock or
//! state involved.

use crate::models::balance::{AgeProfile, BalanceCheckRequest};

pub const MIN_SUPPORTED_AGE: i32 = 10;
pub const MAX_SUPPORTED_AGE: i32 = 18;
pub const MAX_STAR_RATING: u8 = 5;

/// Tolerance per dimension: how quickly the closeness score decays as the
/// observed value moves away from the ideal.
const STUDY_WIDTH: f64 = 2.0;
const SLEEP_WIDTH: f64 = 1.8;
const EXTRA_WIDTH: f64 = 1.0;

const SLEEP_WEIGHT: f64 = 0.45;
const STUDY_WEIGHT: f64 = 0.35;
const EXTRA_WEIGHT: f64 = 0.20;

/// Penalty multipliers compound when both apply.
const SHORT_SLEEP_HOURS: f64 = 6.0;
const SHORT_SLEEP_PENALTY: f64 = 0.7;
const OVERSTUDY_HOURS: f64 = 6.0;
const OVERSTUDY_PENALTY: f64 = 0.75;

/// Ideal-values profile for an age band. Ages outside the three bands fall
/// back to a neutral profile; the extracurricular ideal is a daily figure.
pub fn lookup_profile(age: i32) -> AgeProfile {
    match age {
        10..=12 => AgeProfile {
            ideal_study_hours: 1.5,
            ideal_sleep_hours: 9.5,
            ideal_extracurricular_hours: 1.0,
        },
        13..=15 => AgeProfile {
            ideal_study_hours: 2.5,
            ideal_sleep_hours: 9.0,
            ideal_extracurricular_hours: 1.0,
        },
        16..=18 => AgeProfile {
            ideal_study_hours: 3.5,
            ideal_sleep_hours: 8.5,
            ideal_extracurricular_hours: 1.0,
        },
        _ => AgeProfile {
            ideal_study_hours: 2.0,
            ideal_sleep_hours: 9.0,
            ideal_extracurricular_hours: 1.0,
        },
    }
}

/// Gaussian closeness score in (0, 1]: exactly 1 at the ideal, decaying
/// symmetrically with distance.
pub fn closeness(value: f64, ideal: f64, width: f64) -> f64 {
    (-(value - ideal).powi(2) / (2.0 * width.powi(2))).exp()
}

/// Star rating for one balance check. An unparseable age fails closed to a
/// zero rating; range validation of the age is the caller's concern.
pub fn star_rating(request: &BalanceCheckRequest) -> u8 {
    let Ok(age) = request.age.trim().parse::<i32>() else {
        return 0;
    };

    let extra_daily = request.weekly_extracurricular_hours / 7.0;
    let profile = lookup_profile(age);

    let study_score = closeness(request.daily_study_hours, profile.ideal_study_hours, STUDY_WIDTH);
    let sleep_score = closeness(request.daily_sleep_hours, profile.ideal_sleep_hours, SLEEP_WIDTH);
    let extra_score = closeness(extra_daily, profile.ideal_extracurricular_hours, EXTRA_WIDTH);

    let mut total =
        sleep_score * SLEEP_WEIGHT + study_score * STUDY_WEIGHT + extra_score * EXTRA_WEIGHT;

    if request.daily_sleep_hours < SHORT_SLEEP_HOURS {
        total *= SHORT_SLEEP_PENALTY;
    }
    if request.daily_study_hours > OVERSTUDY_HOURS {
        total *= OVERSTUDY_PENALTY;
    }

    (total.clamp(0.0, 1.0) * f64::from(MAX_STAR_RATING)).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::balance::Gender;

    fn request(age: &str, study: f64, extra_weekly: f64, sleep: f64) -> BalanceCheckRequest {
        BalanceCheckRequest {
            age: age.to_string(),
            gender: Gender::Other,
            daily_study_hours: study,
            weekly_extracurricular_hours: extra_weekly,
            daily_sleep_hours: sleep,
        }
    }

    #[test]
    fn profile_bands_cover_supported_ages() {
        let band_one = lookup_profile(10);
        assert_eq!(band_one, lookup_profile(12));
        assert_eq!(band_one.ideal_study_hours, 1.5);
        assert_eq!(band_one.ideal_sleep_hours, 9.5);

        let band_two = lookup_profile(13);
        assert_eq!(band_two, lookup_profile(15));
        assert_eq!(band_two.ideal_study_hours, 2.5);
        assert_eq!(band_two.ideal_sleep_hours, 9.0);

        let band_three = lookup_profile(16);
        assert_eq!(band_three, lookup_profile(18));
        assert_eq!(band_three.ideal_study_hours, 3.5);
        assert_eq!(band_three.ideal_sleep_hours, 8.5);

        for age in MIN_SUPPORTED_AGE..=MAX_SUPPORTED_AGE {
            let profile = lookup_profile(age);
            assert!(
                profile == band_one || profile == band_two || profile == band_three,
                "age {age} fell outside the three bands"
            );
        }
    }

    #[test]
    fn out_of_band_ages_get_the_fallback_profile() {
        let fallback = lookup_profile(9);
        assert_eq!(fallback, lookup_profile(19));
        assert_eq!(fallback.ideal_study_hours, 2.0);
        assert_eq!(fallback.ideal_sleep_hours, 9.0);
        assert_eq!(fallback.ideal_extracurricular_hours, 1.0);
    }

    #[test]
    fn closeness_peaks_at_the_ideal() {
        assert_eq!(closeness(9.0, 9.0, 1.8), 1.0);
        assert_eq!(closeness(3.5, 3.5, 2.0), 1.0);
        assert_eq!(closeness(0.0, 0.0, 0.5), 1.0);
    }

    #[test]
    fn closeness_is_symmetric_around_the_ideal() {
        for delta in [0.25, 1.0, 2.5, 4.0] {
            let above = closeness(9.0 + delta, 9.0, 1.8);
            let below = closeness(9.0 - delta, 9.0, 1.8);
            assert!((above - below).abs() < 1e-12);
        }
    }

    #[test]
    fn closeness_strictly_decreases_with_distance() {
        let mut previous = closeness(8.5, 8.5, 1.8);
        for step in 1..=8 {
            let value = 8.5 + f64::from(step) * 0.5;
            let score = closeness(value, 8.5, 1.8);
            assert!(score < previous, "closeness did not decrease at {value}");
            previous = score;
        }
    }

    #[test]
    fn identical_inputs_give_identical_ratings() {
        let req = request("14", 3.0, 6.0, 7.5);
        assert_eq!(star_rating(&req), star_rating(&req));
    }

    #[test]
    fn rating_stays_within_five_stars_across_the_input_grid() {
        for age in ["8", "10", "13", "16", "18", "30"] {
            for study in [0.0, 3.0, 6.0, 9.0, 12.0] {
                for sleep in [0.0, 4.0, 8.0, 12.0] {
                    for extra in [0.0, 7.0, 21.0, 84.0] {
                        let rating = star_rating(&request(age, study, extra, sleep));
                        assert!(rating <= MAX_STAR_RATING);
                    }
                }
            }
        }
    }

    #[test]
    fn short_sleep_and_overstudy_penalties_compound() {
        let req = request("16", 7.0, 7.0, 5.0);
        let profile = lookup_profile(16);

        let study_score = closeness(7.0, profile.ideal_study_hours, 2.0);
        let sleep_score = closeness(5.0, profile.ideal_sleep_hours, 1.8);
        let extra_score = closeness(1.0, profile.ideal_extracurricular_hours, 1.0);
        let unpenalized = sleep_score * 0.45 + study_score * 0.35 + extra_score * 0.20;
        let expected = (unpenalized * 0.7 * 0.75).clamp(0.0, 1.0) * 5.0;

        assert_eq!(star_rating(&req), expected.round() as u8);
    }

    #[test]
    fn ideal_routine_earns_five_stars() {
        // Age 16 band: study 3.5, sleep 8.5, extracurricular 1.0/day.
        assert_eq!(star_rating(&request("16", 3.5, 7.0, 8.5)), 5);
    }

    #[test]
    fn near_ideal_routine_rounds_up_to_five_stars() {
        // total = 0.45 + 0.35 * exp(-1.5^2 / 8) + 0.20, about 0.914; x5
        // lands just past the 4/5 rounding boundary.
        assert_eq!(star_rating(&request("14", 1.0, 7.0, 9.0)), 5);
    }

    #[test]
    fn unparseable_age_fails_closed_to_zero() {
        assert_eq!(star_rating(&request("", 3.5, 7.0, 8.5)), 0);
        assert_eq!(star_rating(&request("fourteen", 3.5, 7.0, 8.5)), 0);
        assert_eq!(star_rating(&request("14.5", 3.5, 7.0, 8.5)), 0);
    }

    #[test]
    fn surrounding_whitespace_in_the_age_field_is_tolerated() {
        assert_eq!(star_rating(&request(" 16 ", 3.5, 7.0, 8.5)), 5);
    }
}
