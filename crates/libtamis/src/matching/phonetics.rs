//! Phonetic hashes used to catch spelling variants of the same name.
//!
//! Both encoders work on the whole (multi-word) name rather than on single
//! tokens, and both are intentionally simpler than their textbook
//! counterparts. Changing either one changes every score computed with it.

use compact_str::CompactString;

const SOUNDEX_LEN: usize = 4;
const METAPHONE_LEN: usize = 6;
const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

#[inline]
fn soundex_digit(c: char) -> Option<char> {
  match c {
    'B' | 'F' | 'P' | 'V' => Some('1'),
    'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
    'D' | 'T' => Some('3'),
    'L' => Some('4'),
    'M' | 'N' => Some('5'),
    'R' => Some('6'),
    _ => None,
  }
}

/// Four-symbol Soundex code.
///
/// The first character is kept as-is (upper-cased). A digit equal to the last
/// emitted symbol is dropped, and uncoded characters (vowels, H, W, Y,
/// whitespace) do not separate two identical digits.
pub fn soundex(value: &str) -> CompactString {
  let mut chars = value.chars().flat_map(char::to_uppercase);

  let Some(first) = chars.next() else {
    return CompactString::default();
  };

  let mut code = CompactString::default();
  let mut last = first;
  let mut len = 1;

  code.push(first);

  for c in chars {
    if len == SOUNDEX_LEN {
      break;
    }

    if let Some(digit) = soundex_digit(c)
      && digit != last
    {
      code.push(digit);
      last = digit;
      len += 1;
    }
  }

  for _ in len..SOUNDEX_LEN {
    code.push('0');
  }

  code
}

/// Coarse consonant skeleton: every upper-cased character that is not a vowel
/// and differs from the last kept one, up to six characters.
pub fn metaphone(value: &str) -> CompactString {
  let mut code = CompactString::default();
  let mut last: Option<char> = None;
  let mut len = 0;

  for c in value.chars().flat_map(char::to_uppercase) {
    if len == METAPHONE_LEN {
      break;
    }

    if !VOWELS.contains(&c) && last != Some(c) {
      code.push(c);
      last = Some(c);
      len += 1;
    }
  }

  code
}

#[cfg(test)]
mod tests {
  #[test]
  fn soundex() {
    assert_eq!(super::soundex("robert"), "R163");
    assert_eq!(super::soundex("rupert"), "R163");
    assert_eq!(super::soundex("john smith"), "J525");
    assert_eq!(super::soundex("jon smyth"), "J525");
    assert_eq!(super::soundex("lee"), "L000");
    assert_eq!(super::soundex(""), "");
  }

  #[test]
  fn soundex_does_not_reset_on_vowels() {
    // B, then A (uncoded), then B again: the second 1 repeats the last code.
    assert_eq!(super::soundex("abab"), "A100");
    assert_eq!(super::soundex("tymczak"), "T520");
  }

  #[test]
  fn soundex_keeps_first_character() {
    assert_eq!(super::soundex("1bc"), "1200");
    assert_eq!(super::soundex("pf"), "P100");
  }

  #[test]
  fn metaphone() {
    assert_eq!(super::metaphone("john smith"), "JHN SM");
    assert_eq!(super::metaphone("jon smyth"), "JN SMY");
    assert_eq!(super::metaphone("aaron"), "RN");
    assert_eq!(super::metaphone("bobby"), "BY");
    assert_eq!(super::metaphone("ouie"), "");
  }
}
