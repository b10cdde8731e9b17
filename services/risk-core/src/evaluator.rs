//! Scenario risk evaluator
//!
//! Converts a scenario plus a (possibly partial) set of questionnaire
//! answers into inherent and residual risk ratings. Total for every input:
//! unanswered questions are skipped, an empty assessment falls back to the
//! neutral protection average, and unmapped typical labels fall back to the
//! neutral weight.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use types::errors::CoreError;
use types::levels::RiskLevel;

use crate::catalog::{catalog, Scenario};
use crate::matrix::{self, RiskRating};

/// Neutral protection score: an average of 3 leaves the scenario's base
/// probability unchanged.
const NEUTRAL_PROTECTION: u8 = 3;

/// Fixed reduction applied to the adjusted probability when the scenario's
/// listed controls are implemented. An assumption, not a measured outcome.
const CONTROL_PROBABILITY_REDUCTION: u8 = 2;

/// Answers collected for one scenario questionnaire
///
/// Maps question id → index of the selected option. Ephemeral: used only to
/// compute a result, never persisted. Not all questions need an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioAssessment {
    answers: HashMap<String, usize>,
}

impl ScenarioAssessment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected option for a question
    pub fn answer(&mut self, question_id: impl Into<String>, option_index: usize) {
        self.answers.insert(question_id.into(), option_index);
    }

    /// Selected option index for a question, if answered
    pub fn selected(&self, question_id: &str) -> Option<usize> {
        self.answers.get(question_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Result of evaluating one scenario against an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEvaluation {
    pub scenario_id: String,
    /// Average protection score over the answered questions (3 = neutral)
    pub average_protection: Decimal,
    /// Base probability scaled by the protection average, clamped to [1, 5]
    pub adjusted_probability: u8,
    pub inherent: RiskRating,
    pub residual_probability: u8,
    pub residual: RiskRating,
    /// The scenario's suggested controls, passed through unchanged
    pub controls: Vec<String>,
}

/// Impact weight for a scenario's typical impact label.
///
/// Non-uniform by design (the category thresholds were calibrated against
/// exactly these values): Low=1, Medium=3, High=4, Critical=5. Labels
/// outside the map fall back to the neutral weight.
fn impact_weight(level: RiskLevel) -> u8 {
    match level {
        RiskLevel::Low => 1,
        RiskLevel::Medium => 3,
        RiskLevel::High => 4,
        RiskLevel::Critical => 5,
        _ => NEUTRAL_PROTECTION,
    }
}

/// Base probability weight for a scenario's typical probability label.
///
/// Low=2, Medium=3, High=4; labels outside the map fall back to neutral.
fn base_probability(level: RiskLevel) -> u8 {
    match level {
        RiskLevel::Low => 2,
        RiskLevel::Medium => 3,
        RiskLevel::High => 4,
        _ => NEUTRAL_PROTECTION,
    }
}

/// Average protection score over the answered questions.
///
/// Questions without an answer are skipped, not defaulted; an answer whose
/// option index is out of range counts as unanswered. With no usable
/// answers the average is the neutral 3, so the evaluation reports the
/// scenario's baseline risk instead of failing.
fn average_protection(scenario: &Scenario, assessment: &ScenarioAssessment) -> Decimal {
    let mut total: u32 = 0;
    let mut count: u32 = 0;

    for question in &scenario.questions {
        let Some(index) = assessment.selected(&question.id) else {
            continue;
        };
        let Some(option) = question.options.get(index) else {
            continue;
        };
        total += u32::from(option.protection_score);
        count += 1;
    }

    if count == 0 {
        return Decimal::from(NEUTRAL_PROTECTION);
    }
    Decimal::from(total) / Decimal::from(count)
}

/// Scale the base probability by the protection average and clamp to [1, 5].
///
/// `round(base * avg / 3)`, half rounded away from zero: a neutral average
/// leaves the base unchanged, better protection scales it down, worse
/// protection scales it up.
fn adjust_probability(base: u8, average: Decimal) -> u8 {
    let scaled = Decimal::from(base) * average / Decimal::from(NEUTRAL_PROTECTION);
    let rounded = scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(5);
    rounded.clamp(1, 5)
}

/// Evaluate a scenario against a set of answers.
///
/// Never fails: partial and empty assessments produce the scenario's
/// baseline, and unmapped typical labels use the neutral weight.
pub fn evaluate(scenario: &Scenario, assessment: &ScenarioAssessment) -> ScenarioEvaluation {
    let average = average_protection(scenario, assessment);
    let base = base_probability(scenario.typical_probability);
    let impact = impact_weight(scenario.typical_impact);

    let adjusted = adjust_probability(base, average);
    let inherent_score = adjusted * impact;

    let residual_probability = adjusted
        .saturating_sub(CONTROL_PROBABILITY_REDUCTION)
        .max(1);
    let residual_score = residual_probability * impact;

    ScenarioEvaluation {
        scenario_id: scenario.id.clone(),
        average_protection: average,
        adjusted_probability: adjusted,
        inherent: RiskRating {
            score: inherent_score,
            category: matrix::category_of(inherent_score),
        },
        residual_probability,
        residual: RiskRating {
            score: residual_score,
            category: matrix::category_of(residual_score),
        },
        controls: scenario.controls.clone(),
    }
}

/// Evaluate a builtin scenario by id.
///
/// The one failure mode is the id disappearing between catalog versions;
/// callers should show a "scenario unavailable" state, not crash.
pub fn evaluate_by_id(
    id: &str,
    assessment: &ScenarioAssessment,
) -> Result<ScenarioEvaluation, CoreError> {
    let scenario = catalog().scenario_by_id(id)?;
    Ok(evaluate(scenario, assessment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Scenario, ScenarioOption, ScenarioQuestion};
    use proptest::prelude::*;
    use types::levels::RiskCategory;
    use types::threat::ThreatCategory;

    fn make_scenario(probability: RiskLevel, impact: RiskLevel) -> Scenario {
        Scenario {
            id: "test".to_string(),
            name: "Test scenario".to_string(),
            category: ThreatCategory::Technological,
            typical_probability: probability,
            typical_impact: impact,
            controls: vec!["Control A".to_string(), "Control B".to_string()],
            questions: vec![
                ScenarioQuestion {
                    id: "q1".to_string(),
                    prompt: "First?".to_string(),
                    options: vec![
                        ScenarioOption { label: "good".to_string(), protection_score: 1 },
                        ScenarioOption { label: "bad".to_string(), protection_score: 5 },
                    ],
                },
                ScenarioQuestion {
                    id: "q2".to_string(),
                    prompt: "Second?".to_string(),
                    options: vec![
                        ScenarioOption { label: "good".to_string(), protection_score: 1 },
                        ScenarioOption { label: "mid".to_string(), protection_score: 3 },
                        ScenarioOption { label: "bad".to_string(), protection_score: 5 },
                    ],
                },
            ],
        }
    }

    // ── empty assessment baseline ──

    #[test]
    fn test_empty_assessment_uses_neutral_average() {
        let scenario = make_scenario(RiskLevel::Medium, RiskLevel::High);
        let result = evaluate(&scenario, &ScenarioAssessment::new());

        assert_eq!(result.average_protection, Decimal::from(3));
        // Neutral average leaves base probability unchanged: 3 × 4 = 12
        assert_eq!(result.adjusted_probability, 3);
        assert_eq!(result.inherent.score, 12);
        assert_eq!(result.inherent.category, RiskCategory::High);
    }

    #[test]
    fn test_empty_assessment_baseline_for_all_builtin_scenarios() {
        let catalog = Catalog::builtin();
        let empty = ScenarioAssessment::new();
        for scenario in catalog.all_scenarios() {
            let result = evaluate(scenario, &empty);
            let expected = base_probability(scenario.typical_probability)
                * impact_weight(scenario.typical_impact);
            assert_eq!(
                result.inherent.score, expected,
                "baseline mismatch for {}",
                scenario.id
            );
        }
    }

    // ── protection average ──

    #[test]
    fn test_partial_assessment_skips_unanswered() {
        let scenario = make_scenario(RiskLevel::Medium, RiskLevel::High);
        let mut assessment = ScenarioAssessment::new();
        assessment.answer("q1", 1); // score 5; q2 unanswered

        let result = evaluate(&scenario, &assessment);
        assert_eq!(result.average_protection, Decimal::from(5));
    }

    #[test]
    fn test_out_of_range_option_counts_as_unanswered() {
        let scenario = make_scenario(RiskLevel::Medium, RiskLevel::High);
        let mut assessment = ScenarioAssessment::new();
        assessment.answer("q1", 99);

        let result = evaluate(&scenario, &assessment);
        assert_eq!(result.average_protection, Decimal::from(3));
    }

    #[test]
    fn test_unknown_question_id_ignored() {
        let scenario = make_scenario(RiskLevel::Medium, RiskLevel::High);
        let mut assessment = ScenarioAssessment::new();
        assessment.answer("q_deleted", 0);

        let result = evaluate(&scenario, &assessment);
        assert_eq!(result.average_protection, Decimal::from(3));
    }

    // ── probability adjustment ──

    #[test]
    fn test_strong_protection_scales_probability_down() {
        let scenario = make_scenario(RiskLevel::High, RiskLevel::High);
        let mut assessment = ScenarioAssessment::new();
        assessment.answer("q1", 0); // 1
        assessment.answer("q2", 0); // 1

        let result = evaluate(&scenario, &assessment);
        // round(4 × 1/3) = round(1.33) = 1
        assert_eq!(result.adjusted_probability, 1);
    }

    #[test]
    fn test_weak_protection_scales_probability_up() {
        let scenario = make_scenario(RiskLevel::Medium, RiskLevel::Medium);
        let mut assessment = ScenarioAssessment::new();
        assessment.answer("q1", 1); // 5
        assessment.answer("q2", 2); // 5

        let result = evaluate(&scenario, &assessment);
        // round(3 × 5/3) = 5
        assert_eq!(result.adjusted_probability, 5);
    }

    #[test]
    fn test_adjusted_probability_clamped_to_five() {
        // Base 4 with worst protection: round(4 × 5/3) = round(6.67) = 7 → clamp 5
        assert_eq!(adjust_probability(4, Decimal::from(5)), 5);
    }

    #[test]
    fn test_adjusted_probability_floor_one() {
        // Base 2 with best protection: round(2 × 1/3) = round(0.67) = 1
        assert_eq!(adjust_probability(2, Decimal::from(1)), 1);
        // Even below rounding, never 0
        assert_eq!(adjust_probability(1, Decimal::from(1)), 1);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 3 × 2.5/3 = 2.5 → rounds to 3, not banker's 2
        let avg = Decimal::from_str_exact("2.5").unwrap();
        assert_eq!(adjust_probability(3, avg), 3);
    }

    // ── label fallbacks ──

    #[test]
    fn test_unmapped_probability_label_falls_back_to_neutral() {
        let scenario = make_scenario(RiskLevel::VeryLow, RiskLevel::High);
        let result = evaluate(&scenario, &ScenarioAssessment::new());
        // base falls back to 3: 3 × 4 = 12
        assert_eq!(result.inherent.score, 12);
    }

    #[test]
    fn test_unmapped_impact_label_falls_back_to_neutral() {
        let scenario = make_scenario(RiskLevel::Medium, RiskLevel::VeryLow);
        let result = evaluate(&scenario, &ScenarioAssessment::new());
        // impact falls back to 3: 3 × 3 = 9
        assert_eq!(result.inherent.score, 9);
        assert_eq!(result.inherent.category, RiskCategory::Medium);
    }

    #[test]
    fn test_critical_probability_label_not_in_base_map() {
        let scenario = make_scenario(RiskLevel::Critical, RiskLevel::Critical);
        let result = evaluate(&scenario, &ScenarioAssessment::new());
        // Critical probability is outside the base map → neutral 3
        assert_eq!(result.adjusted_probability, 3);
        assert_eq!(result.inherent.score, 15);
    }

    // ── residual heuristic ──

    #[test]
    fn test_residual_probability_reduced_by_two_floored_at_one() {
        let scenario = make_scenario(RiskLevel::High, RiskLevel::High);
        let result = evaluate(&scenario, &ScenarioAssessment::new());
        assert_eq!(result.adjusted_probability, 4);
        assert_eq!(result.residual_probability, 2);

        let low = make_scenario(RiskLevel::Low, RiskLevel::High);
        let result = evaluate(&low, &ScenarioAssessment::new());
        assert_eq!(result.adjusted_probability, 2);
        assert_eq!(result.residual_probability, 1);
    }

    #[test]
    fn test_controls_passed_through() {
        let scenario = make_scenario(RiskLevel::Medium, RiskLevel::High);
        let result = evaluate(&scenario, &ScenarioAssessment::new());
        assert_eq!(result.controls, scenario.controls);
    }

    // ── acceptance scenario: fire with no mitigations ──

    #[test]
    fn test_fire_no_mitigations() {
        let catalog = Catalog::builtin();
        let fire = catalog.scenario_by_id("fire").unwrap();

        // Answer the three questions whose worst option scores 5, skip the
        // rest: average protection = 5
        let mut assessment = ScenarioAssessment::new();
        assessment.answer("fire_detection", 3); // "No automatic detection" → 5
        assessment.answer("fire_suppression", 2); // "No suppression system" → 5
        assessment.answer("fire_drills", 2); // "Never" → 5

        let result = evaluate(fire, &assessment);
        assert_eq!(result.average_protection, Decimal::from(5));
        // base Low=2: round(2 × 5/3) = round(3.33) = 3
        assert_eq!(result.adjusted_probability, 3);
        // impact Critical=5: 3 × 5 = 15
        assert_eq!(result.inherent.score, 15);
        assert_eq!(result.inherent.category, RiskCategory::Critical);
        // residual: max(1, 3-2) = 1 → 1 × 5 = 5
        assert_eq!(result.residual_probability, 1);
        assert_eq!(result.residual.score, 5);
        assert_eq!(result.residual.category, RiskCategory::Medium);
    }

    // ── lookup entry point ──

    #[test]
    fn test_evaluate_by_id_known_scenario() {
        let result = evaluate_by_id("fire", &ScenarioAssessment::new()).unwrap();
        assert_eq!(result.scenario_id, "fire");
        // baseline: Low base 2 × Critical impact 5
        assert_eq!(result.inherent.score, 10);
    }

    #[test]
    fn test_evaluate_by_id_missing_scenario() {
        let err = evaluate_by_id("meteor_strike", &ScenarioAssessment::new()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Scenario(types::errors::ScenarioError::NotFound { .. })
        ));
    }

    // ── property tests ──

    proptest! {
        #[test]
        fn prop_residual_never_exceeds_inherent(
            scenario_index in 0..32usize,
            answers in proptest::collection::vec(0..5usize, 0..6),
        ) {
            let catalog = Catalog::builtin();
            let scenarios = catalog.all_scenarios();
            let scenario = scenarios[scenario_index % scenarios.len()];

            let mut assessment = ScenarioAssessment::new();
            for (question, index) in scenario.questions.iter().zip(answers) {
                assessment.answer(question.id.clone(), index);
            }

            let result = evaluate(scenario, &assessment);
            prop_assert!(result.residual.score <= result.inherent.score);
            prop_assert!((1..=5).contains(&result.adjusted_probability));
            prop_assert!(result.residual_probability >= 1);
        }
    }
}
