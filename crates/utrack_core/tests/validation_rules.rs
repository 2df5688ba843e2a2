use utrack_core::{
    validate_candidate, ActivityCandidate, ActivityStore, ActivityValidationError, HealthMetric,
    MetricsCandidate, RawValue,
};

fn candidate_from_json(json: &str) -> ActivityCandidate {
    ActivityCandidate::from_json_str(json).expect("candidate JSON should parse")
}

#[test]
fn rules_short_circuit_in_documented_order() {
    // Every field is wrong; the first rule decides.
    let all_wrong = ActivityCandidate::new("", MetricsCandidate::new(0, 0, 0), -1);
    assert_eq!(
        validate_candidate(&all_wrong).unwrap_err(),
        ActivityValidationError::EmptyActivityType
    );

    let stress_and_duration_wrong =
        ActivityCandidate::new("Walk", MetricsCandidate::new(3, 9, 3), -1);
    assert_eq!(
        validate_candidate(&stress_and_duration_wrong).unwrap_err(),
        ActivityValidationError::MetricOutOfRange {
            metric: HealthMetric::Stress,
            value: 9,
        }
    );

    let energy_missing = ActivityCandidate {
        activity_type: Some("Walk".to_string()),
        metrics: Some(MetricsCandidate {
            energy_level: None,
            stress_level: Some(RawValue::from("x")),
            happiness_level: None,
        }),
        duration_minutes: None,
    };
    assert_eq!(
        validate_candidate(&energy_missing).unwrap_err(),
        ActivityValidationError::MetricNotInteger(HealthMetric::Energy)
    );
}

#[test]
fn range_bounds_are_inclusive() {
    for level in [1, 5] {
        let candidate =
            ActivityCandidate::new("Nap", MetricsCandidate::new(level, level, level), 0);
        let record = validate_candidate(&candidate).expect("boundary levels are valid");
        assert_eq!(i64::from(record.metrics().energy_level()), level);
        assert_eq!(record.duration_minutes(), 0);
    }

    for level in [0, 6] {
        let candidate = ActivityCandidate::new("Nap", MetricsCandidate::new(3, 3, level), 0);
        assert_eq!(
            validate_candidate(&candidate).unwrap_err(),
            ActivityValidationError::MetricOutOfRange {
                metric: HealthMetric::Happiness,
                value: level,
            }
        );
    }
}

#[test]
fn form_text_values_are_parsed_like_browser_input() {
    let candidate = ActivityCandidate::new(
        "Cook",
        MetricsCandidate::new("4", " 2", "5 (great)"),
        "25 min",
    );
    let record = validate_candidate(&candidate).expect("numeric text should be accepted");
    assert_eq!(record.metrics().energy_level(), 4);
    assert_eq!(record.metrics().stress_level(), 2);
    assert_eq!(record.metrics().happiness_level(), 5);
    assert_eq!(record.duration_minutes(), 25);
}

#[test]
fn fractional_values_truncate() {
    let candidate = ActivityCandidate::new("Cook", MetricsCandidate::new(4.8, 1.2, 5.0), 12.9);
    let record = validate_candidate(&candidate).expect("fractions truncate into range");
    assert_eq!(record.metrics().energy_level(), 4);
    assert_eq!(record.duration_minutes(), 12);

    let candidate = ActivityCandidate::new("Cook", MetricsCandidate::new(5.9, 0.9, 3), 1);
    assert_eq!(
        validate_candidate(&candidate).unwrap_err(),
        ActivityValidationError::MetricOutOfRange {
            metric: HealthMetric::Stress,
            value: 0,
        }
    );
}

#[test]
fn camel_case_form_payload_is_accepted() {
    let candidate = candidate_from_json(
        r#"{
            "activityType": "Programming",
            "activityDataDict": {"energyLevel": 5, "stressLevel": "4", "happinessLevel": 3},
            "activityDurationInMinutes": 60
        }"#,
    );
    let store = ActivityStore::new();
    let record = store
        .add_activity_data_point(candidate)
        .expect("form payload should validate");
    assert_eq!(record.activity_type(), "Programming");
    assert_eq!(record.metrics().stress_level(), 4);
    assert_eq!(record.duration_minutes(), 60);
}

#[test]
fn json_payload_missing_metrics_is_rejected_by_store() {
    let candidate = candidate_from_json(
        r#"{"activity_type": "Studying", "duration_minutes": 60}"#,
    );
    let store = ActivityStore::new();
    assert_eq!(
        store.add_activity_data_point(candidate).unwrap_err(),
        ActivityValidationError::MissingMetrics
    );
    assert!(store.is_empty());
}

#[test]
fn null_duration_is_not_an_integer() {
    let candidate = candidate_from_json(
        r#"{
            "activity_type": "Studying",
            "metrics": {"energy_level": 3, "stress_level": 3, "happiness_level": 3},
            "duration_minutes": null
        }"#,
    );
    assert_eq!(
        validate_candidate(&candidate).unwrap_err(),
        ActivityValidationError::DurationNotInteger
    );
}

#[test]
fn diagnostics_name_the_failing_field() {
    let cases = [
        (
            ActivityValidationError::MetricNotInteger(HealthMetric::Stress),
            "stress level must be an integer",
        ),
        (
            ActivityValidationError::MetricOutOfRange {
                metric: HealthMetric::Stress,
                value: 7,
            },
            "stress level must be between 1 and 5, got 7",
        ),
        (
            ActivityValidationError::NegativeDuration(-3),
            "duration must be >= 0, got -3",
        ),
    ];
    for (err, message) in cases {
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn oversized_digit_text_saturates_instead_of_failing_to_parse() {
    let huge_metric = ActivityCandidate::new(
        "Walk",
        MetricsCandidate::new("99999999999999999999", 3, 3),
        10,
    );
    assert_eq!(
        validate_candidate(&huge_metric).unwrap_err(),
        ActivityValidationError::MetricOutOfRange {
            metric: HealthMetric::Energy,
            value: i64::MAX,
        }
    );

    let huge_duration =
        ActivityCandidate::new("Walk", MetricsCandidate::new(3, 3, 3), "99999999999999999999");
    let record = validate_candidate(&huge_duration).expect("huge duration is still >= 0");
    assert_eq!(record.duration_minutes(), i64::MAX.unsigned_abs());

    let huge_negative =
        ActivityCandidate::new("Walk", MetricsCandidate::new(3, 3, 3), "-99999999999999999999");
    assert_eq!(
        validate_candidate(&huge_negative).unwrap_err(),
        ActivityValidationError::NegativeDuration(i64::MIN)
    );
}
