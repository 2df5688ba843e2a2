use utrack_core::{
    ActivityCandidate, ActivityRecord, ActivityValidationError, HealthMetric, HealthMetrics,
};

#[test]
fn typed_constructors_enforce_rules() {
    assert_eq!(
        HealthMetrics::new(3, 0, 3).unwrap_err(),
        ActivityValidationError::MetricOutOfRange {
            metric: HealthMetric::Stress,
            value: 0,
        }
    );
    let metrics = HealthMetrics::new(1, 2, 3).unwrap();
    assert_eq!(
        ActivityRecord::new("", metrics, 10).unwrap_err(),
        ActivityValidationError::EmptyActivityType
    );
    assert_eq!(metrics.get(HealthMetric::Happiness), 3);
}

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let record = ActivityRecord::new("Run", HealthMetrics::new(5, 1, 4).unwrap(), 30).unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["activity_type"], "Run");
    assert_eq!(json["metrics"]["energy_level"], 5);
    assert_eq!(json["metrics"]["stress_level"], 1);
    assert_eq!(json["metrics"]["happiness_level"], 4);
    assert_eq!(json["duration_minutes"], 30);

    let decoded: ActivityRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn deserialize_rejects_out_of_range_metric() {
    let value = serde_json::json!({
        "activity_type": "Run",
        "metrics": {"energy_level": 5, "stress_level": 8, "happiness_level": 4},
        "duration_minutes": 30
    });

    let err = serde_json::from_value::<ActivityRecord>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("stress level must be between 1 and 5, got 8"),
        "unexpected error: {err}"
    );
}

#[test]
fn record_converts_back_into_equivalent_candidate() {
    let record = ActivityRecord::new("Yoga", HealthMetrics::new(4, 1, 5).unwrap(), 20).unwrap();
    let candidate = ActivityCandidate::from(&record);

    assert_eq!(candidate.activity_type.as_deref(), Some("Yoga"));
    assert_eq!(ActivityRecord::try_from(candidate).unwrap(), record);
}
