use float_cmp::approx_eq;

use crate::{
  matching::{Normalization, feature_based::extract},
  model::Entry,
  query::ParsedQuery,
  scoring::{Confidence, Screener, ScreeningConfig},
};

fn watch_list() -> Vec<Entry> {
  vec![
    Entry::builder("1", "John Smith").kind("Individual").program("SDN").build(),
    Entry::builder("2", "Maria Lopez").kind("Individual").dob("15/03/1980").nationality("Mexico").build(),
    Entry::builder("3", "HASSAN, Ali")
      .kind("Individual")
      .aliases(&["ABU ALI", "Ali Hasan"])
      .dob("01 Jan 1960")
      .nationality("Iran")
      .remarks("Type: Individual | DOB 01 Jan 1960; nationality Iran; a.k.a. 'ABU ALI'")
      .build(),
    Entry::builder("4", "AEROCARIBBEAN AIRLINES").kind("Entity").aliases(&["AERO-CARIBBEAN", "AEROCARIBE"]).build(),
    Entry::builder("5", "Vladimir Petrov").build(),
  ]
}

#[test]
fn exact_name() {
  let entries = watch_list();
  let screening = Screener::default().screen("John Smith", &entries, Some(10));
  let top = &screening.results[0];

  assert_eq!(top.entry.id, "1");
  assert_eq!(top.features.get("exact_match"), Some(1.0));
  assert_eq!(top.features.get("case_insensitive_match"), Some(1.0));
  assert!(approx_eq!(f64, top.score, 1.0, epsilon = 1e-9));
  assert_eq!(top.confidence, Confidence::High);
}

#[test]
fn exact_name_ignores_case() {
  let entries = watch_list();
  let screening = Screener::default().screen("JOHN SMITH", &entries, Some(10));

  assert_eq!(screening.results[0].entry.id, "1");
  assert_eq!(screening.results[0].features.get("exact_match"), Some(1.0));
}

#[test]
fn misspelled_name() {
  let entries = vec![Entry::builder("1", "John Smith").build()];
  let screening = Screener::default().screen("Jon Smyth", &entries, Some(10));
  let result = &screening.results[0];

  assert_eq!(result.features.get("exact_match"), Some(0.0));
  assert!(result.features.get("levenshtein_similarity").unwrap() > 0.5);
  assert_eq!(result.features.get("soundex_match"), Some(1.0));
  assert!(result.score > 0.3 && result.score < 0.8);
  assert!(matches!(result.confidence, Confidence::Medium | Confidence::MediumHigh));
}

#[test]
fn misspelled_name_against_full_table() {
  let entries = vec![Entry::builder("1", "John Smith").build()];
  let config = ScreeningConfig {
    threshold: 0.0,
    normalization: Normalization::FullTable,
    ..Default::default()
  };

  let evidence = Screener::default().screen("Jon Smyth", &entries, Some(10)).results[0].score;
  let full_table = Screener::new(config).unwrap().screen("Jon Smyth", &entries, Some(10)).results[0].score;

  assert!(approx_eq!(f64, full_table, evidence * 8.1 / 11.6, epsilon = 1e-9));
}

#[test]
fn year_of_birth() {
  let entries = watch_list();
  let screening = Screener::default().screen("Maria Lopez, 1980", &entries, Some(10));
  let top = &screening.results[0];

  assert_eq!(top.entry.id, "2");
  assert_eq!(top.features.get("dob_partial_match"), Some(0.7));
  assert_eq!(top.features.get("exact_match"), Some(1.0));
  assert_eq!(top.features.get("dob_exact_match"), Some(0.0));
  assert_eq!(top.confidence, Confidence::High);
}

#[test]
fn full_date_of_birth_and_nationality() {
  let entries = watch_list();
  let screening = Screener::default().screen("Maria Lopez, 15-03-1980, Mexico", &entries, Some(10));
  let top = &screening.results[0];

  assert_eq!(top.entry.id, "2");
  assert_eq!(top.features.get("dob_exact_match"), Some(1.0));
  assert_eq!(top.features.get("nationality_match"), Some(1.0));
  assert!(approx_eq!(f64, top.score, (8.1 + 0.8 + 0.7 * 0.4 + 0.5) / 9.8, epsilon = 1e-9));
}

#[test]
fn alias_match() {
  let entries = watch_list();
  let screening = Screener::default().screen("Abu Ali, Iran", &entries, Some(10));
  let top = &screening.results[0];

  assert_eq!(top.entry.id, "3");
  assert_eq!(top.features.get("alias_exact_match"), Some(1.0));
  assert_eq!(top.features.get("alias_similarity"), Some(1.0));
  assert_eq!(top.features.get("nationality_match"), Some(1.0));
  assert_eq!(top.features.get("country_in_remarks"), Some(1.0));
  assert!(top.matched_features.contains(&"alias_exact_match"));
}

#[test]
fn below_threshold_is_excluded() {
  let entries = vec![Entry::builder("1", "John Smith").build()];
  let query = ParsedQuery::parse("Jon Smyth").unwrap();
  let score = Screener::default().screen("Jon Smyth", &entries, Some(10)).results[0].score;

  assert!(extract(&query, &entries[0]).matched_count() > 0);

  let config = ScreeningConfig {
    threshold: score + 1e-6,
    ..Default::default()
  };

  assert!(Screener::new(config).unwrap().screen("Jon Smyth", &entries, Some(10)).results.is_empty());

  let config = ScreeningConfig { threshold: score, ..Default::default() };

  assert_eq!(Screener::new(config).unwrap().screen("Jon Smyth", &entries, Some(10)).results.len(), 1);
}

#[test]
fn empty_collection() {
  let screening = Screener::default().screen("John Smith", &[], Some(10));

  assert!(screening.results.is_empty());
  assert_eq!(screening.details.matches_found, 0);
  assert_eq!(screening.details.skipped_entries, 0);
  assert!(screening.details.query_parsed.is_some());
}

#[test]
fn unrelated_names_are_filtered() {
  let entries = watch_list();
  let screening = Screener::default().screen("Zhang Wei", &entries, Some(10));

  assert!(screening.results.iter().all(|result| result.score >= 0.3));
  assert!(screening.results.iter().all(|result| result.confidence < Confidence::High));
}

#[test]
fn from_records() {
  let entries = vec![
    Entry::from_record("36", "AEROCARIBBEAN AIRLINES", "Type: Entity | Aliases: AERO-CARIBBEAN; AEROCARIBE"),
    Entry::from_record("7", "HASSAN, Ali", "Type: Individual | DOB 01 Jan 1960; nationality Iran; a.k.a. 'ABU ALI'"),
  ];

  let screening = Screener::default().screen("Aerocaribe", &entries, Some(10));

  assert_eq!(screening.results[0].entry.id, "36");
  assert_eq!(screening.results[0].features.get("alias_exact_match"), Some(1.0));

  let config = ScreeningConfig { threshold: 0.0, ..Default::default() };
  let screening = Screener::new(config).unwrap().screen("Abu Ali, 1960", &entries[1..], Some(10));
  let top = &screening.results[0];

  assert_eq!(top.entry.id, "7");
  assert_eq!(top.features.get("alias_exact_match"), Some(1.0));
  assert_eq!(top.features.get("dob_partial_match"), Some(0.7));
}

// "HASSAN, Ali" keeps its comma, so neither its first nor its last token
// lines up with "Ali Hassan".
#[test]
fn inverted_name_is_below_threshold() {
  let entries = vec![Entry::from_record("7", "HASSAN, Ali", "Type: Individual | DOB 01 Jan 1960; nationality Iran; a.k.a. 'ABU ALI'")];

  assert!(Screener::default().screen("Ali Hassan, 1960", &entries, Some(10)).results.is_empty());

  let config = ScreeningConfig { threshold: 0.0, ..Default::default() };
  let screening = Screener::new(config).unwrap().screen("Ali Hassan, 1960", &entries, Some(10));
  let result = &screening.results[0];

  assert!(result.score > 0.0 && result.score < 0.3);
  assert_eq!(result.features.get("exact_match"), Some(0.0));
  assert_eq!(result.features.get("dob_partial_match"), Some(0.7));
  assert!(result.features.get("token_set_ratio").unwrap() > 0.9);
}
