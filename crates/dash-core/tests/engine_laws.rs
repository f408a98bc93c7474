//! Algebraic laws of the filter and aggregation engine, checked over a small
//! fixed dataset with every field combination that appears in it.

use dash_core::{
    CategoricalField, Record, Selection, apply_filters, distinct_values, sector_counts,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

fn record(title: &str, topic: &str, sector: &str, region: &str, pestle: &str, source: &str) -> Record {
    Record {
        title: title.into(),
        topic: topic.into(),
        sector: sector.into(),
        region: region.into(),
        pestle: pestle.into(),
        source: source.into(),
        ..Default::default()
    }
}

#[fixture]
fn records() -> Vec<Record> {
    vec![
        record("r0", "oil", "Energy", "Asia", "Economic", "EIA"),
        record("r1", "gas", "Energy", "Europe", "Industries", "EIA"),
        record("r2", "oil", "Retail", "Asia", "Economic", "Reuters"),
        record("r3", "", "", "", "", ""),
        record("r4", "oil", "Energy", "Asia", "Political", "EIA"),
        record("r4", "gas", "Government", "World", "Economic", "OPEC"),
    ]
}

fn titles(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

#[rstest]
fn empty_selection_is_identity(records: Vec<Record>) {
    assert_eq!(apply_filters(&records, &Selection::new()), records);
}

#[rstest]
#[case(CategoricalField::Topic)]
#[case(CategoricalField::Sector)]
#[case(CategoricalField::Region)]
#[case(CategoricalField::Pestle)]
#[case(CategoricalField::Source)]
fn single_field_inclusion_and_exclusion(records: Vec<Record>, #[case] field: CategoricalField) {
    for value in distinct_values(&records, field) {
        if value.is_empty() {
            continue;
        }
        let filtered = apply_filters(&records, &Selection::new().with(field, value.clone()));
        for r in &records {
            let included = filtered.iter().any(|f| f == r);
            assert_eq!(
                included,
                field.value_of(r) == value,
                "{field}={value} on {}",
                r.title
            );
        }
    }
}

#[rstest]
fn conjunction_is_intersection(records: Vec<Record>) {
    for topic in distinct_values(&records, CategoricalField::Topic) {
        for sector in distinct_values(&records, CategoricalField::Sector) {
            if topic.is_empty() || sector.is_empty() {
                continue;
            }
            let both = apply_filters(
                &records,
                &Selection::new()
                    .with(CategoricalField::Topic, topic.clone())
                    .with(CategoricalField::Sector, sector.clone()),
            );
            let by_topic = apply_filters(
                &records,
                &Selection::new().with(CategoricalField::Topic, topic.clone()),
            );
            let by_sector = apply_filters(
                &records,
                &Selection::new().with(CategoricalField::Sector, sector.clone()),
            );
            let intersection: Vec<Record> = by_topic
                .into_iter()
                .filter(|r| by_sector.contains(r))
                .collect();
            assert_eq!(both, intersection, "topic={topic} sector={sector}");
        }
    }
}

#[rstest]
fn filtering_is_idempotent(records: Vec<Record>) {
    let selection = Selection::new()
        .with(CategoricalField::Topic, "oil")
        .with(CategoricalField::Region, "Asia");
    let once = apply_filters(&records, &selection);
    let twice = apply_filters(&once, &selection);
    assert_eq!(titles(&once), vec!["r0", "r2", "r4"]);
    assert_eq!(once, twice);
}

#[rstest]
fn sector_counts_sum_to_record_count(records: Vec<Record>) {
    let counts = sector_counts(&records);
    assert_eq!(counts.values().sum::<usize>(), records.len());
    assert_eq!(counts.get("Energy"), Some(&3));
    assert_eq!(counts.get(""), Some(&1));
}

#[rstest]
fn distinct_values_are_unique_and_bounded(records: Vec<Record>) {
    for field in CategoricalField::ALL {
        let values = distinct_values(&records, field);
        assert!(values.len() <= records.len());
        let mut sorted: Vec<&String> = values.iter().collect();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), values.len(), "duplicates in {field}");
    }
}

#[rstest]
fn duplicate_titles_are_not_rejected(records: Vec<Record>) {
    let filtered = apply_filters(
        &records,
        &Selection::new().with(CategoricalField::Source, "OPEC"),
    );
    assert_eq!(titles(&filtered), vec!["r4"]);
    assert_eq!(records.iter().filter(|r| r.title == "r4").count(), 2);
}
