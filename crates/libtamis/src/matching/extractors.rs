use compact_str::CompactString;

/// Lower-cased, trimmed form every comparison runs on.
#[inline]
pub(crate) fn clean(value: &str) -> String {
  value.trim().to_lowercase()
}

/// ASCII digits of a free-form date, in order.
#[inline]
pub(crate) fn digits(value: &str) -> String {
  value.chars().filter(char::is_ascii_digit).collect()
}

#[inline]
pub(crate) fn first_token(value: &str) -> Option<&str> {
  value.split_whitespace().next()
}

#[inline]
pub(crate) fn last_token(value: &str) -> Option<&str> {
  value.split_whitespace().next_back()
}

/// First character of every whitespace-delimited token.
pub(crate) fn initials(value: &str) -> CompactString {
  value.split_whitespace().filter_map(|token| token.chars().next()).collect()
}
