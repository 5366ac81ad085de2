use crate::error::EngineResult;
use crate::simulation::{validate_simulation, ComparisonSummary, SimulationResult};
use crate::text::render_en;
use log::info;
use std::fs::File;
use std::path::Path;

pub fn save_results<P: AsRef<Path>>(results: &[SimulationResult], output_dir: P) -> EngineResult<()> {
    let output_path = output_dir.as_ref();

    save_physique_data(results, output_path.join("physique.csv"))?;
    save_blood_marker_data(results, output_path.join("blood_markers.csv"))?;
    save_json(results, output_path.join("results.json"))?;

    let summary = ComparisonSummary::from_results(results);
    save_json(&summary, output_path.join("comparison.json"))?;

    info!("All results saved to {:?}", output_path);
    Ok(())
}

fn save_physique_data<P: AsRef<Path>>(results: &[SimulationResult], path: P) -> EngineResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["SIMULATION_ID", "WEEK", "MUSCLE_MASS_KG", "FAT_MASS_KG", "WEIGHT_KG"])?;

    for result in results {
        for point in &result.physique_projection {
            writer.write_record(&[
                result.id.clone(),
                point.week.to_string(),
                point.muscle_mass_kg.to_string(),
                point.fat_mass_kg.to_string(),
                (point.muscle_mass_kg + point.fat_mass_kg).to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Long format: one row per simulation, week and marker.
fn save_blood_marker_data<P: AsRef<Path>>(results: &[SimulationResult], path: P) -> EngineResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["SIMULATION_ID", "WEEK", "MARKER", "VALUE", "STATUS", "NOTES"])?;

    for result in results {
        for week in &result.blood_marker_history {
            for marker in &week.markers.markers {
                writer.write_record(&[
                    result.id.clone(),
                    week.week.to_string(),
                    marker.marker.label().to_string(),
                    marker.value.to_string(),
                    marker.status.to_string(),
                    marker.notes.clone(),
                ])?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn save_json<T: serde::Serialize + ?Sized, P: AsRef<Path>>(value: &T, path: P) -> EngineResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}

/// Writes `simulation_report.md` with every descriptor rendered in English.
pub fn generate_report<P: AsRef<Path>>(results: &[SimulationResult], output_dir: P) -> EngineResult<()> {
    let report_path = output_dir.as_ref().join("simulation_report.md");
    std::fs::write(report_path, render_report(results))?;
    Ok(())
}

pub fn render_report(results: &[SimulationResult]) -> String {
    let summary = ComparisonSummary::from_results(results);

    let best = match summary.lowest_cardiovascular_risk() {
        Some(best) if summary.n_simulations > 1 => format!(
            "- **Lowest cardiovascular risk**: `{}` ({})\n",
            best.id, best.cardiovascular_risk
        ),
        _ => String::new(),
    };

    let mut report = format!(
        r#"# Physique Simulation Report

## Overview
- **Simulations**: {}
- **Muscle gain**: {:.2} kg (SD {:.2})
- **Fat loss**: {:.2} kg (SD {:.2})
{}"#,
        summary.n_simulations,
        summary.physique.muscle_gain_mean,
        summary.physique.muscle_gain_sd,
        summary.physique.fat_loss_mean,
        summary.physique.fat_loss_sd,
        best,
    );

    for result in results {
        report.push_str(&simulation_section(result));
    }

    report.push_str(
        r#"
## Files Generated
- `physique.csv`: weekly muscle and fat mass per simulation
- `blood_markers.csv`: weekly blood panel per simulation
- `results.json`: complete simulation results
- `comparison.json`: side-by-side summary
"#,
    );

    report
}

fn bullet_list<I: IntoIterator<Item = String>>(items: I) -> String {
    items.into_iter().map(|item| format!("- {}\n", item)).collect()
}

fn simulation_section(result: &SimulationResult) -> String {
    let risks = &result.risk_scores;

    let risk_rows: String = [
        ("Cardiovascular", &risks.cardiovascular),
        ("Hepatic", &risks.hepatic),
        ("Renal", &risks.renal),
        ("Endocrine", &risks.endocrine),
    ]
    .iter()
    .map(|(label, risk)| format!("| {} | {} | {} |\n", label, risk.score, risk.notes))
    .collect();

    let panel = match result.blood_marker_history.last() {
        Some(last) => {
            let rows: String = last
                .markers
                .markers
                .iter()
                .map(|marker| format!("| {} | {} | {} |\n", marker.marker, marker.value, marker.status))
                .collect();
            format!(
                "\n### Final blood panel (week {})\n\n| Marker | Value | Status |\n|---|---|---|\n{}",
                last.week, rows
            )
        }
        None => String::new(),
    };

    let analysis = match &result.ai_analysis {
        Some(analysis) => format!("\n### Analysis\n\n{}\n", render_en(analysis)),
        None => String::new(),
    };

    let validation = validate_simulation(result);
    let validation_notes = if validation.is_valid && validation.warnings.is_empty() && validation.suggestions.is_empty() {
        String::new()
    } else {
        let messages = validation
            .errors
            .iter()
            .chain(&validation.warnings)
            .chain(&validation.suggestions)
            .cloned();
        format!("\n### Validation\n\n{}", bullet_list(messages))
    };

    format!(
        r#"
## Simulation `{}`

{}

- **Weeks simulated**: {}
- **Muscle change**: {:+.2} kg
- **Fat change**: {:+.2} kg

### Peak risk scores

| Organ system | Score | Notes |
|---|---|---|
{}{}
### Warnings

{}
### Recommendations

{}
### Long-term outlook

{}
{}{}"#,
        result.id,
        render_en(&result.summary),
        result.expected_weeks(),
        result.muscle_gain_kg(),
        -result.fat_loss_kg(),
        risk_rows,
        panel,
        bullet_list(result.warnings.iter().map(render_en)),
        bullet_list(result.recommendations.iter().map(render_en)),
        render_en(&result.long_term_outlook),
        analysis,
        validation_notes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compounds::KnowledgeBase;
    use crate::config::{AthleteProfile, DoseEntry, Frequency, NutritionPlan, Phase, SimulationInput};
    use crate::simulation::Simulator;
    use crate::text::TranslatableText;

    fn result() -> SimulationResult {
        let input = SimulationInput {
            profile: AthleteProfile::default(),
            nutrition: NutritionPlan::default(),
            protocol_phases: vec![Phase {
                name: "Main".to_string(),
                duration_weeks: 4,
                compounds: vec![DoseEntry::new("Testosterone Enanthate", 500.0, Frequency::Weekly)],
            }],
            support: Vec::new(),
            pct: Vec::new(),
        };
        let kb = KnowledgeBase::standard();
        Simulator::new(&kb).run_with_id(&input, "sim-report".to_string())
    }

    #[test]
    fn test_report_renders_english_text() {
        let mut result = result();
        result.attach_analysis(TranslatableText::from("Looks reasonable."));
        let report = render_report(&[result]);

        assert!(report.contains("# Physique Simulation Report"));
        assert!(report.contains("## Simulation `sim-report`"));
        assert!(report.contains("| Hematocrit |"));
        assert!(report.contains("Looks reasonable."));
        assert!(!report.contains("synthesis.summary"));
    }

    #[test]
    fn test_report_sections_for_several_runs() {
        let mut second = result();
        second.id = "legacy-7".to_string();
        let report = render_report(&[result(), second]);

        assert!(report.contains("- **Simulations**: 2\n"));
        assert!(report.contains("- **Lowest cardiovascular risk**: `sim-report`"));
        assert!(report.contains("### Warnings\n\n- "));
        assert!(report.contains("### Recommendations\n\n- "));

        // Only the run with a foreign id gets a validation section.
        assert_eq!(report.matches("### Validation").count(), 1);
        let validation = report.split("## Simulation `legacy-7`").nth(1).unwrap();
        assert!(validation.contains("### Validation\n\n- Simulation ID format invalid."));
        assert!(report.trim_end().ends_with("- `comparison.json`: side-by-side summary"));
    }

    #[test]
    fn test_save_results_writes_all_files() {
        let dir = std::env::temp_dir().join(format!("physique_sim_output_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let results = vec![result()];
        save_results(&results, &dir).unwrap();
        generate_report(&results, &dir).unwrap();

        for name in ["physique.csv", "blood_markers.csv", "results.json", "comparison.json", "simulation_report.md"] {
            assert!(dir.join(name).exists(), "missing {}", name);
        }

        let physique = std::fs::read_to_string(dir.join("physique.csv")).unwrap();
        // header + weeks 0..=4
        assert_eq!(physique.lines().count(), 6);

        let json = std::fs::read_to_string(dir.join("results.json")).unwrap();
        let parsed: Vec<SimulationResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, results);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
