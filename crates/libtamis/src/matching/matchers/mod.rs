pub(crate) mod alias;
pub(crate) mod dob;
pub(crate) mod edit_distance;
pub(crate) mod jaro_winkler;
pub(crate) mod literal;
pub(crate) mod nationality;
pub(crate) mod ngrams;
pub(crate) mod phonetic;
pub(crate) mod soundex;
pub(crate) mod tokens;
