//! # tileforge-text
//!
//! Text layout helpers for fixed-width dialog and HUD boxes.
//!
//! Tile games render text into boxes measured in character cells, so
//! the wrapping here is width-greedy and character-counted rather than
//! pixel-measured.

/// Wraps `sentence` into lines of at most `limit` characters.
///
/// Words are packed greedily, separated by single spaces. A word longer
/// than the limit is broken into chunks; with `hyphenate` set, each
/// chunk but the last gets a trailing `-` and chunks are one character
/// shorter to make room for it. The last chunk of a broken word stays
/// on the open line, so a following short word can share it.
///
/// A limit below 1 yields a single empty line; a limit of exactly 1
/// yields one line per character.
///
/// ```
/// use tileforge_text::wrap;
///
/// assert_eq!(
///     wrap("this has multiple words when that is possible", 9, true),
///     vec!["this has", "multiple", "words", "when that", "is", "possible"],
/// );
/// ```
pub fn wrap(sentence: &str, limit: usize, hyphenate: bool) -> Vec<String> {
    if limit < 1 {
        return vec![String::new()];
    }
    if limit == 1 {
        return sentence.chars().map(String::from).collect();
    }

    let mut results = Vec::new();
    let mut current = String::new();
    let chunk_len = if hyphenate { limit - 1 } else { limit };

    for word in sentence.split(' ') {
        let separator = usize::from(!current.is_empty());
        if current.chars().count() + word.chars().count() + separator <= limit {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                results.push(std::mem::take(&mut current));
            }
            if word.chars().count() <= limit {
                current = word.to_string();
            } else {
                let chars: Vec<char> = word.chars().collect();
                let mut start = 0;
                while start < chars.len() {
                    let end = (start + chunk_len).min(chars.len());
                    current = chars[start..end].iter().collect();
                    // The last chunk stays open so a following word can
                    // share its line.
                    if start + chunk_len < chars.len() {
                        if hyphenate {
                            current.push('-');
                        }
                        results.push(std::mem::take(&mut current));
                    }
                    start += chunk_len;
                }
            }
        }
    }
    if !current.is_empty() {
        results.push(current);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenate_multiple_words() {
        let sentence = "antidisestablishmentarianism is how those folkses rollll";
        assert_eq!(
            wrap(sentence, 5, true),
            vec![
                "anti-", "dise-", "stab-", "lish-", "ment-", "aria-", "nism", "is", "how",
                "those", "folk-", "ses", "roll-", "ll",
            ],
        );
    }

    #[test]
    fn test_no_hyphenate() {
        let sentence = "antidisestablishmentarianism is how those folkses rollll";
        assert_eq!(
            wrap(sentence, 5, false),
            vec![
                "antid", "isest", "ablis", "hment", "arian", "ism", "is", "how", "those",
                "folks", "es", "rolll", "l",
            ],
        );
    }

    #[test]
    fn test_limit_zero_yields_empty_line() {
        assert_eq!(wrap("this might break with the limit at 0", 0, true), vec![""]);
    }

    #[test]
    fn test_limit_one_splits_per_character() {
        let sentence = "at 1";
        let expected: Vec<String> = sentence.chars().map(String::from).collect();
        assert_eq!(wrap(sentence, 1, true), expected);
    }

    #[test]
    fn test_limit_two_hyphenated() {
        assert_eq!(
            wrap("this will be long", 2, true),
            vec!["t-", "h-", "i-", "s", "w-", "i-", "l-", "l", "be", "l-", "o-", "n-", "g"],
        );
    }

    #[test]
    fn test_multiple_words_per_line() {
        assert_eq!(
            wrap("this has multiple words when that is possible", 9, true),
            vec!["this has", "multiple", "words", "when that", "is", "possible"],
        );
    }

    #[test]
    fn test_trailing_chunk_shares_line_with_next_word() {
        // "ll" is the open tail of the broken word and "on" fits after it.
        assert_eq!(wrap("rollll on", 5, true), vec!["roll-", "ll on"]);
    }

    #[test]
    fn test_empty_sentence() {
        assert_eq!(wrap("", 5, true), Vec::<String>::new());
    }
}
