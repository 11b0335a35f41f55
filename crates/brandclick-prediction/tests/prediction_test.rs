use brandclick_core::params::{
    CoefficientSet, ModelParameters, ModelVariant, RoundingPolicy, SeasonalityTable,
    SecondaryMetric,
};
use brandclick_core::traits::IPredictor;
use brandclick_core::types::{FeatureVector, Month, PredictionRequest};
use brandclick_core::BrandclickError;
use brandclick_prediction::{predict, PredictionEngine};

fn scenario_features() -> FeatureVector {
    FeatureVector::new(Month::January, 1_000_000.0, 500_000.0, 10.0)
}

// ── Extended variant: per-stage rounding + GA ────────────────────────────

#[test]
fn extended_scenario_matches_hand_computed_values() {
    let engine = PredictionEngine::for_variant(ModelVariant::Extended);
    let outcome = engine.predict(&scenario_features());

    assert_eq!(outcome.seasonality_index, 109);
    assert_eq!(outcome.rounding, RoundingPolicy::PerStage);

    let p = outcome.primary;
    assert_eq!(p.seasonality, 332946.0);
    assert_eq!(p.awareness, 122.9);
    assert_eq!(p.branded_search, 1220.0);
    assert_eq!(p.publications, 338.5);
    assert_eq!(p.predicted_value, 334627.4);

    // round(334627.4 × 0.0221, 1)
    assert_eq!(outcome.predicted_secondary(), Some(7395.3));
}

#[test]
fn extended_scenario_ga_breakdown() {
    let engine = PredictionEngine::for_variant(ModelVariant::Extended);
    let ga = engine.predict(&scenario_features()).secondary.unwrap();

    assert_eq!(ga.seasonality, 7358.1);
    assert_eq!(ga.awareness, 2.7);
    assert_eq!(ga.branded_search, 27.0);
    assert_eq!(ga.publications, 7.5);
    assert_eq!(ga.predicted_value, 7395.3);
}

#[test]
fn free_function_matches_engine() {
    let params = ModelVariant::Extended.parameters();
    let direct = predict(
        &scenario_features(),
        &params.coefficients,
        &params.seasonality,
        params.rounding,
    );
    let engine = PredictionEngine::new(params);
    assert_eq!(engine.predict(&scenario_features()).primary, direct);
}

// ── Baseline variant: full precision, no GA ──────────────────────────────

#[test]
fn baseline_scenario_is_unrounded() {
    let engine = PredictionEngine::for_variant(ModelVariant::Baseline);
    let outcome = engine.predict(&scenario_features());
    let p = outcome.primary;

    assert_eq!(p.seasonality, 3336.0 * 109.0 - 104174.0);
    assert_eq!(p.awareness, 0.000451762526 * 1_000_000.0);
    assert_eq!(p.branded_search, 0.00359574998 * 500_000.0);
    assert_eq!(p.publications, 52.1965121 * 10.0);
    assert_eq!(
        p.predicted_value,
        p.seasonality + p.awareness + p.branded_search + p.publications
    );
    assert!((p.predicted_value - 262221.602637).abs() < 1e-6);
    assert!(outcome.secondary.is_none());
}

#[test]
fn zero_inputs_leave_only_seasonality_and_intercept() {
    let engine = PredictionEngine::for_variant(ModelVariant::Baseline);
    let outcome = engine.predict(&FeatureVector::new(Month::June, 0.0, 0.0, 0.0));
    assert_eq!(outcome.primary.predicted_value, 3336.0 * 69.0 - 104174.0);
    assert_eq!(outcome.primary.awareness, 0.0);
}

// ── Rounding and GA ordering ─────────────────────────────────────────────

fn unit_params(rounding: RoundingPolicy, factor: f64) -> ModelParameters {
    ModelParameters {
        coefficients: CoefficientSet::new(0.0, 1.0, 1.0, 1.0, 0.0),
        seasonality: SeasonalityTable::uq2019(),
        rounding,
        secondary: Some(SecondaryMetric::new(factor)),
    }
}

#[test]
fn ga_terms_scale_unrounded_contributions() {
    let engine = PredictionEngine::new(unit_params(RoundingPolicy::PerStage, 10.0));
    let outcome = engine.predict(&FeatureVector::new(Month::May, 0.04, 0.0, 0.0));

    // Primary rounds 0.04 down to 0.0; GA scales the raw 0.04.
    assert_eq!(outcome.primary.awareness, 0.0);
    assert_eq!(outcome.secondary.unwrap().awareness, 0.4);
}

#[test]
fn ga_total_scales_rounded_primary_total() {
    let engine = PredictionEngine::new(unit_params(RoundingPolicy::PerStage, 10.0));
    let outcome = engine.predict(&FeatureVector::new(Month::May, 0.04, 0.04, 0.04));

    assert_eq!(outcome.primary.predicted_value, 0.0);
    assert_eq!(outcome.secondary.unwrap().predicted_value, 0.0);
    assert!((outcome.secondary.unwrap().sum_of_terms() - 1.2).abs() < 1e-9);
}

#[test]
fn per_stage_total_rounds_sum_of_rounded_terms() {
    let engine = PredictionEngine::new(unit_params(RoundingPolicy::PerStage, 1.0));
    // 0.26 + 0.26 + 0.26: unrounded 0.78 → 0.8, but the detail shows 0.3 × 3 = 0.9.
    let outcome = engine.predict(&FeatureVector::new(Month::May, 0.26, 0.26, 0.26));
    assert_eq!(outcome.primary.awareness, 0.3);
    assert_eq!(outcome.primary.predicted_value, 0.9);
}

#[test]
fn unrounded_policy_keeps_full_precision() {
    let engine = PredictionEngine::new(unit_params(RoundingPolicy::Unrounded, 10.0));
    let outcome = engine.predict(&FeatureVector::new(Month::May, 0.04, 0.0, 0.0));
    assert_eq!(outcome.primary.awareness, 0.04);
    assert_eq!(outcome.secondary.unwrap().awareness, 0.4);
}

#[test]
fn negative_inputs_are_well_defined() {
    let engine = PredictionEngine::for_variant(ModelVariant::Extended);
    let outcome = engine.predict(&FeatureVector::new(Month::March, -1_000_000.0, 0.0, -1.0));
    assert_eq!(outcome.primary.awareness, -122.9);
    assert_eq!(outcome.primary.publications, -33.9);
}

#[test]
fn prediction_is_deterministic() {
    let engine = PredictionEngine::for_variant(ModelVariant::Extended);
    let a = engine.predict(&scenario_features());
    let b = engine.predict(&scenario_features());
    assert_eq!(a, b);
}

// ── compute_on_demand ────────────────────────────────────────────────────

#[test]
fn compute_on_demand_parses_month_name() {
    let engine = PredictionEngine::for_variant(ModelVariant::Extended);
    let request = PredictionRequest {
        month: "January".to_string(),
        awareness_spend: 1_000_000.0,
        branded_search_spend: 500_000.0,
        publication_count: 10.0,
    };
    let outcome = engine.compute_on_demand(&request).unwrap();
    assert_eq!(outcome, engine.predict(&scenario_features()));
}

#[test]
fn compute_on_demand_rejects_unknown_month() {
    let engine = PredictionEngine::default();
    let request = PredictionRequest {
        month: "Foo".to_string(),
        awareness_spend: 0.0,
        branded_search_spend: 0.0,
        publication_count: 0.0,
    };
    let err = engine.compute_on_demand(&request).unwrap_err();
    assert!(matches!(err, BrandclickError::Prediction(_)));
    assert!(err.to_string().contains("Foo"));
}

#[test]
fn compute_on_demand_rejects_nan() {
    let engine = PredictionEngine::default();
    let request = PredictionRequest {
        month: "April".to_string(),
        awareness_spend: f64::NAN,
        branded_search_spend: 0.0,
        publication_count: 0.0,
    };
    assert!(engine.compute_on_demand(&request).is_err());
}

#[test]
fn request_deserializes_with_default_zero_inputs() {
    let request: PredictionRequest = serde_json::from_str(r#"{"month":"July"}"#).unwrap();
    assert_eq!(request.awareness_spend, 0.0);
    let outcome = PredictionEngine::default().compute_on_demand(&request).unwrap();
    assert_eq!(outcome.seasonality_index, 72);
}
