use super::{AmsWeeklyResult, HpsResult, MesResult};

/// Energy density of adipose tissue.
pub const KCAL_PER_KG_FAT: f64 = 7700.0;
/// Muscle-equivalent tissue, including associated water and glycogen.
pub const KCAL_PER_KG_MUSCLE: f64 = 5000.0;

const MAX_SURPLUS_RATIO: f64 = 0.85;
const MIN_DEFICIT_RATIO: f64 = 0.1;

/// Share of the weekly energy balance attributed to muscle tissue.
pub fn partition_ratio(weekly_balance: f64, total_anabolic: f64) -> f64 {
    if weekly_balance < 0.0 {
        // Capped at 1 so muscle and fat always move in the direction of the balance.
        (1.0 - (0.5 - total_anabolic * 0.04)).clamp(MIN_DEFICIT_RATIO, 1.0)
    } else {
        (0.3 + total_anabolic * 0.025).min(MAX_SURPLUS_RATIO)
    }
}

/// Splits one week of calorie balance into muscle and fat changes.
pub fn compute_weekly_body_composition_change(mes: &MesResult, hps: &HpsResult) -> AmsWeeklyResult {
    let weekly_balance = mes.calorie_balance * 7.0;
    let ratio = partition_ratio(weekly_balance, hps.total_anabolic);

    AmsWeeklyResult {
        muscle_change_kg: signed_zero_to_zero(weekly_balance * ratio / KCAL_PER_KG_MUSCLE),
        fat_change_kg: signed_zero_to_zero(weekly_balance * (1.0 - ratio) / KCAL_PER_KG_FAT),
    }
}

/// A full-share partition leaves `-0.0` on the other tissue.
fn signed_zero_to_zero(kg: f64) -> f64 {
    if kg == 0.0 {
        0.0
    } else {
        kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mes(calorie_balance: f64) -> MesResult {
        MesResult {
            tdee: 3000.0,
            calorie_balance,
        }
    }

    fn hps(total_anabolic: f64) -> HpsResult {
        HpsResult {
            total_anabolic,
            ..HpsResult::default()
        }
    }

    #[test]
    fn test_surplus_partition() {
        let result = compute_weekly_body_composition_change(&mes(500.0), &hps(8.0));
        let ratio = 0.3 + 8.0 * 0.025;

        assert_relative_eq!(result.muscle_change_kg, 3500.0 * ratio / 5000.0);
        assert_relative_eq!(result.fat_change_kg, 3500.0 * (1.0 - ratio) / 7700.0);
    }

    #[test]
    fn test_surplus_ratio_capped() {
        assert_relative_eq!(partition_ratio(1000.0, 40.0), 0.85);
    }

    #[test]
    fn test_deficit_partition() {
        let result = compute_weekly_body_composition_change(&mes(-500.0), &hps(5.0));
        let ratio = 1.0 - (0.5 - 5.0 * 0.04);

        assert_relative_eq!(result.muscle_change_kg, -3500.0 * ratio / 5000.0);
        assert_relative_eq!(result.fat_change_kg, -3500.0 * (1.0 - ratio) / 7700.0);
    }

    #[test]
    fn test_deficit_ratio_bounds() {
        assert_relative_eq!(partition_ratio(-1.0, -20.0), 0.1);
        assert_relative_eq!(partition_ratio(-1.0, 30.0), 1.0);
    }

    #[test]
    fn test_high_anabolic_deficit_takes_all_from_muscle() {
        // Uncapped, 0.5 + 20 * 0.04 = 1.3 would put fat on during a deficit.
        let result = compute_weekly_body_composition_change(&mes(-500.0), &hps(20.0));

        assert_relative_eq!(result.muscle_change_kg, -0.7);
        assert_eq!(result.fat_change_kg, 0.0);
        assert!(result.fat_change_kg.is_sign_positive());
    }

    #[test]
    fn test_changes_share_sign_of_balance() {
        for anabolic in [0.0, 5.0, 12.0, 20.0, 60.0] {
            let gain = compute_weekly_body_composition_change(&mes(400.0), &hps(anabolic));
            assert!(gain.muscle_change_kg > 0.0 && gain.fat_change_kg >= 0.0);

            let loss = compute_weekly_body_composition_change(&mes(-400.0), &hps(anabolic));
            assert!(loss.muscle_change_kg < 0.0 && loss.fat_change_kg <= 0.0);
        }
    }

    #[test]
    fn test_zero_balance_changes_nothing() {
        let result = compute_weekly_body_composition_change(&mes(0.0), &hps(10.0));
        assert_eq!(result.muscle_change_kg, 0.0);
        assert_eq!(result.fat_change_kg, 0.0);
    }
}
