use crate::config::{DoseEntry, Phase, SimulationInput};

/// Week-indexed view over a bundle's phases, support list and post-cycle list.
#[derive(Debug, Clone, Copy)]
pub struct Regimen<'a> {
    pub phases: &'a [Phase],
    pub support: &'a [DoseEntry],
    pub pct: &'a [DoseEntry],
}

impl<'a> Regimen<'a> {
    pub fn new(phases: &'a [Phase], support: &'a [DoseEntry], pct: &'a [DoseEntry]) -> Self {
        Self {
            phases,
            support,
            pct,
        }
    }

    pub fn from_input(input: &'a SimulationInput) -> Self {
        Self::new(&input.protocol_phases, &input.support, &input.pct)
    }

    /// Sum of phase durations.
    pub fn cycle_weeks(&self) -> u32 {
        self.phases.iter().map(|phase| phase.duration_weeks).sum()
    }

    /// Longest declared post-cycle entry.
    pub fn pct_weeks(&self) -> u32 {
        self.pct
            .iter()
            .filter_map(|dose| dose.duration_weeks)
            .max()
            .unwrap_or(0)
    }

    pub fn total_weeks(&self) -> u32 {
        self.cycle_weeks() + self.pct_weeks()
    }

    pub fn is_post_cycle(&self, week: u32) -> bool {
        week > self.cycle_weeks()
    }

    /// Phase covering `week` (1-based), if the week lies inside the main timeline.
    pub fn phase_for_week(&self, week: u32) -> Option<&'a Phase> {
        let mut cumulative = 0;
        for phase in self.phases {
            cumulative += phase.duration_weeks;
            if week <= cumulative {
                return Some(phase);
            }
        }
        None
    }

    /// Doses administered during `week`. Support compounds only run alongside the
    /// main phases; once the timeline ends only the post-cycle list applies.
    pub fn active_doses(&self, week: u32) -> Vec<&'a DoseEntry> {
        if self.is_post_cycle(week) {
            return self.pct.iter().collect();
        }

        match self.phase_for_week(week) {
            Some(phase) => phase.compounds.iter().chain(self.support.iter()).collect(),
            None => Vec::new(),
        }
    }

    /// True when the post-cycle list holds at least one real compound.
    pub fn has_pct_protocol(&self) -> bool {
        self.pct.iter().any(|dose| !dose.is_placeholder())
    }
}
