//! Tests for colmatch-model types.

use colmatch_model::{
    Dataset, DatasetName, FuzzyThreshold, MatchGroup, MatchOptions, MatchRecord, ModelError,
    RowNumber,
};

fn rows(values: &[&[&str]]) -> Vec<Vec<String>> {
    values
        .iter()
        .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
        .collect()
}

#[test]
fn row_number_offsets_past_header() {
    assert_eq!(RowNumber::from_index(0).get(), 2);
    assert_eq!(RowNumber::from_index(7).get(), 9);
    assert_eq!(RowNumber::from_index(7).index(), Some(7));
    assert_eq!(RowNumber::from_index(0).to_string(), "2");
}

#[test]
fn dataset_name_is_trimmed_and_required() {
    assert_eq!(DatasetName::new("  Sheet1 ").unwrap().as_str(), "Sheet1");
    assert!(matches!(
        DatasetName::new("   "),
        Err(ModelError::InvalidDatasetName(_))
    ));
}

#[test]
fn dataset_name_deserialization_is_validated() {
    let name: DatasetName = serde_json::from_str("\"  Staff \"").expect("deserialize name");
    assert_eq!(name.as_str(), "Staff");
    assert_eq!(serde_json::to_string(&name).unwrap(), "\"Staff\"");
    assert!(serde_json::from_str::<DatasetName>("\"\"").is_err());
    assert!(serde_json::from_str::<DatasetName>("\"   \"").is_err());
}

#[test]
fn ragged_cells_are_absent() {
    let dataset = Dataset::new(
        DatasetName::new("A").unwrap(),
        vec!["One".to_string(), "Two".to_string()],
    )
    .with_rows(rows(&[&["x", "y"], &["z"], &[]]));

    assert_eq!(dataset.column_count(), 2);
    assert_eq!(dataset.row_count(), 3);
    assert_eq!(dataset.cell(0, 1), Some("y"));
    assert_eq!(dataset.cell(1, 1), None);
    assert_eq!(dataset.cell(2, 0), None);
    assert_eq!(dataset.cell(9, 0), None);
    let second: Vec<Option<&str>> = dataset.column(1).collect();
    assert_eq!(second, vec![Some("y"), None, None]);
}

#[test]
fn empty_cell_is_present_not_absent() {
    let dataset = Dataset::new(DatasetName::new("A").unwrap(), vec!["One".to_string()])
        .with_rows(rows(&[&[""]]));
    assert_eq!(dataset.cell(0, 0), Some(""));
}

#[test]
fn threshold_checked_and_clamped() {
    assert_eq!(FuzzyThreshold::new(0).unwrap().percent(), 0);
    assert_eq!(FuzzyThreshold::new(100).unwrap().percent(), 100);
    assert_eq!(
        FuzzyThreshold::new(101),
        Err(ModelError::ThresholdOutOfRange(101))
    );
    assert_eq!(
        FuzzyThreshold::new(-1),
        Err(ModelError::ThresholdOutOfRange(-1))
    );
    assert_eq!(FuzzyThreshold::clamped(250).percent(), 100);
    assert_eq!(FuzzyThreshold::clamped(-5).percent(), 0);
}

#[test]
fn options_presets() {
    let exact = MatchOptions::exact_only();
    assert!(!exact.fuzzy);
    let fuzzy = MatchOptions::fuzzy(FuzzyThreshold::new(35).unwrap());
    assert!(fuzzy.fuzzy);
    assert_eq!(fuzzy.threshold.percent(), 35);
    assert_eq!(MatchOptions::default().threshold.percent(), 20);
}

#[test]
fn options_use_request_field_names() {
    let json = r#"{"useFuzzy":true,"fuzzyThreshold":40}"#;
    let options: MatchOptions = serde_json::from_str(json).expect("deserialize options");
    assert!(options.fuzzy);
    assert_eq!(options.threshold.percent(), 40);

    let bad = r#"{"useFuzzy":true,"fuzzyThreshold":400}"#;
    assert!(serde_json::from_str::<MatchOptions>(bad).is_err());
}

#[test]
fn group_serializes_with_wire_field_names() {
    let group = MatchGroup {
        dataset_a: DatasetName::new("Sheet1").unwrap(),
        dataset_b: DatasetName::new("Sheet2").unwrap(),
        header1: "Name".to_string(),
        header2: "Full Name".to_string(),
        column_a: 0,
        column_b: 0,
        matches: vec![MatchRecord::fuzzy(
            RowNumber::from_index(0),
            RowNumber::from_index(0),
            "Jon Smith",
            "John Smith",
        )],
    };
    let value = serde_json::to_value(&group).expect("serialize group");
    assert_eq!(value["tab1"], "Sheet1");
    assert_eq!(value["tab2"], "Sheet2");
    assert_eq!(value["header1"], "Name");
    assert_eq!(value["header2"], "Full Name");
    let record = &value["matches"][0];
    assert_eq!(record["originalRow1"], 2);
    assert_eq!(record["originalRow2"], 2);
    assert_eq!(record["val1"], "Jon Smith");
    assert_eq!(record["val2"], "John Smith");
    assert_eq!(record["isFuzzy"], true);

    let round: MatchGroup = serde_json::from_value(value).expect("deserialize group");
    assert_eq!(round, group);
}
