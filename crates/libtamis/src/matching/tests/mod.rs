mod scenarios;

use crate::{matching::Candidate, model::Entry};

#[test]
fn candidate_trims_optional_fields() {
  let entry = Entry {
    id: "9".into(),
    name: " Ali HASSAN ".into(),
    aliases: vec!["   ".into(), " ABU ALI ".into()],
    dob: Some("circa".into()),
    nationality: Some(" Iran ".into()),
    remarks: Some("  ".into()),
    ..Default::default()
  };

  let candidate = Candidate::new(&entry);

  assert_eq!(candidate.name, "ali hassan");
  assert_eq!(candidate.aliases, vec!["abu ali"]);
  assert_eq!(candidate.dob_digits, None);
  assert_eq!(candidate.nationality.as_deref(), Some("iran"));
  assert_eq!(candidate.remarks, None);
}
