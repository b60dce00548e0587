use colmatch_map::{MatchEngine, match_datasets};
use colmatch_model::{Dataset, DatasetName, FuzzyThreshold, MatchOptions};

fn dataset(name: &str, headers: &[&str], rows: &[&[&str]]) -> Dataset {
    Dataset::new(
        DatasetName::new(name).unwrap(),
        headers.iter().map(|h| (*h).to_string()).collect(),
    )
    .with_rows(
        rows.iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect(),
    )
}

fn fuzzy(threshold: i64) -> MatchOptions {
    MatchOptions::fuzzy(FuzzyThreshold::new(threshold).unwrap())
}

/// (row_a, row_b, fuzzy) triples of a group, for compact assertions.
fn triples(group: &colmatch_model::MatchGroup) -> Vec<(usize, usize, bool)> {
    group
        .matches
        .iter()
        .map(|m| (m.row_a.get(), m.row_b.get(), m.fuzzy))
        .collect()
}

#[test]
fn many_to_many_exact_matches_are_all_reported() {
    let left = dataset("A", &["Name"], &[&["Alice"]]);
    let right = dataset("B", &["Name"], &[&["alice"], &["alice"]]);

    let groups = match_datasets(&left, &right, &MatchOptions::exact_only());

    assert_eq!(groups.len(), 1);
    assert_eq!(triples(&groups[0]), vec![(2, 2, false), (2, 3, false)]);
    assert_eq!(groups[0].matches[0].value_a, "Alice");
    assert_eq!(groups[0].matches[0].value_b, "alice");
}

#[test]
fn exact_match_suppresses_fuzzy_rediscovery() {
    let left = dataset("A", &["Col"], &[&["foo"]]);
    let right = dataset("B", &["Col"], &[&["foo"]]);

    let groups = match_datasets(&left, &right, &fuzzy(50));

    assert_eq!(groups.len(), 1);
    assert_eq!(triples(&groups[0]), vec![(2, 2, false)]);
}

#[test]
fn blank_cells_never_match() {
    let left = dataset("A", &["Col"], &[&[""], &["   "]]);
    let right = dataset("B", &["Col"], &[&[""], &[" "], &["x"]]);

    assert!(match_datasets(&left, &right, &MatchOptions::exact_only()).is_empty());
    assert!(match_datasets(&left, &right, &fuzzy(0)).is_empty());
    assert!(match_datasets(&left, &right, &fuzzy(100)).is_empty());
}

#[test]
fn ragged_rows_contribute_nothing() {
    let left = dataset("A", &["First", "Second"], &[&["a"], &["b", "shared"], &[]]);
    let right = dataset("B", &["Only", "Other"], &[&["shared"], &["z", "shared"]]);

    let groups = match_datasets(&left, &right, &fuzzy(0));

    assert_eq!(groups.len(), 2);
    assert_eq!((groups[0].header1.as_str(), groups[0].header2.as_str()), ("Second", "Only"));
    assert_eq!(triples(&groups[0]), vec![(3, 2, false)]);
    assert_eq!((groups[1].header1.as_str(), groups[1].header2.as_str()), ("Second", "Other"));
    assert_eq!(triples(&groups[1]), vec![(3, 3, false)]);
}

#[test]
fn end_to_end_fuzzy_name_match() {
    let left = dataset("People", &["Name"], &[&["Jon Smith"]]);
    let right = dataset("Staff", &["Full Name"], &[&["John Smith"]]);

    let groups = match_datasets(&left, &right, &fuzzy(20));

    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.dataset_a.as_str(), "People");
    assert_eq!(group.dataset_b.as_str(), "Staff");
    assert_eq!(group.header1, "Name");
    assert_eq!(group.header2, "Full Name");
    assert_eq!(group.matches.len(), 1);
    let record = &group.matches[0];
    assert_eq!(record.row_a.get(), 2);
    assert_eq!(record.row_b.get(), 2);
    assert_eq!(record.value_a, "Jon Smith");
    assert_eq!(record.value_b, "John Smith");
    assert!(record.fuzzy);
}

#[test]
fn fuzzy_disabled_reports_only_exact() {
    let left = dataset("People", &["Name"], &[&["Jon Smith"]]);
    let right = dataset("Staff", &["Full Name"], &[&["John Smith"]]);

    assert!(match_datasets(&left, &right, &MatchOptions::exact_only()).is_empty());
}

#[test]
fn groups_follow_column_pair_order() {
    let left = dataset("A", &["a0", "a1"], &[&["k", "k"]]);
    let right = dataset("B", &["b0", "b1"], &[&["k", "k"]]);

    let groups = match_datasets(&left, &right, &MatchOptions::exact_only());

    let order: Vec<(usize, usize)> = groups.iter().map(|g| (g.column_a, g.column_b)).collect();
    assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn deduplication_is_scoped_to_each_column_pair() {
    let left = dataset("A", &["a0", "a1"], &[&["same", "same"]]);
    let right = dataset("B", &["b0"], &[&["same"]]);

    let groups = match_datasets(&left, &right, &fuzzy(30));

    assert_eq!(groups.len(), 2);
    assert_eq!(triples(&groups[0]), vec![(2, 2, false)]);
    assert_eq!(triples(&groups[1]), vec![(2, 2, false)]);
}

#[test]
fn records_interleave_exact_then_fuzzy_per_left_row() {
    let left = dataset("A", &["Col"], &[&["cat"], &["dog"]]);
    let right = dataset("B", &["Col"], &[&["cot"], &["CAT"], &["dog"], &["dig"]]);

    let groups = match_datasets(&left, &right, &fuzzy(34));

    assert_eq!(groups.len(), 1);
    assert_eq!(
        triples(&groups[0]),
        vec![
            (2, 3, false),
            (2, 2, true),
            (3, 4, false),
            (3, 5, true),
        ]
    );
}

#[test]
fn summary_reflects_run() {
    let left = dataset("A", &["Col", "Other"], &[&["cat", "x"], &["dog", "y"]]);
    let right = dataset("B", &["Col"], &[&["cot"], &["cat"]]);

    let run = MatchEngine::new(fuzzy(34)).run(&left, &right);
    let summary = run.summary();

    assert_eq!(summary.column_pairs, 2);
    assert_eq!(summary.groups, 1);
    assert_eq!(summary.exact_matches, 1);
    assert_eq!(summary.fuzzy_matches, 1);
}

#[test]
fn datasets_without_columns_compare_nothing() {
    let left = dataset("A", &[], &[]);
    let right = dataset("B", &["Col"], &[&["x"]]);

    let run = MatchEngine::default().run(&left, &right);
    assert_eq!(run.column_pairs, 0);
    assert!(run.is_empty());
}
