use super::ConcentrationMap;
use crate::compounds::CompoundLookup;
use crate::dosing::Regimen;

/// Concentrations at or below this are treated as eliminated.
pub const ELIMINATION_THRESHOLD: f64 = 0.05;

const DAYS_PER_WEEK: f64 = 7.0;

/// Fraction of a compound left after one week of first-order decay.
pub fn weekly_decay_factor(half_life_days: f64) -> f64 {
    0.5f64.powf(DAYS_PER_WEEK / half_life_days)
}

/// Carries last week's concentrations forward one week. Compounds without a
/// positive half-life, or missing from the knowledge base, are dropped.
pub fn decay_concentrations(
    previous: &ConcentrationMap,
    compounds: &dyn CompoundLookup,
) -> ConcentrationMap {
    previous
        .iter()
        .filter_map(|(name, &concentration)| {
            let spec = compounds.get(name)?;
            if spec.half_life_days <= 0.0 {
                return None;
            }
            let decayed = concentration * weekly_decay_factor(spec.half_life_days);
            (decayed > ELIMINATION_THRESHOLD).then(|| (name.clone(), decayed))
        })
        .collect()
}

/// Active concentration map for `week`: decayed carry-over plus this week's doses.
pub fn compute_weekly_concentrations(
    week: u32,
    regimen: &Regimen,
    previous: &ConcentrationMap,
    compounds: &dyn CompoundLookup,
) -> ConcentrationMap {
    let mut concentrations = decay_concentrations(previous, compounds);

    for dose in regimen.active_doses(week) {
        if dose.is_placeholder() || dose.dosage <= 0.0 {
            continue;
        }

        let Some(spec) = compounds.get(&dose.compound) else {
            continue;
        };

        let weekly_dosage = dose.dosage * dose.frequency.doses_per_week();
        let added = weekly_dosage / spec.category.reference_weekly_dosage();

        *concentrations.entry(dose.compound.clone()).or_insert(0.0) += added;
    }

    concentrations
}
