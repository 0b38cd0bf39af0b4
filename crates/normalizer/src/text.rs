//! Text preparation for ingredient lines.
//!
//! Recipe ingredient text is hand-authored and dirty: parenthetical brand
//! annotations, alternatives joined by "or" or slashes, language-specific
//! list separators. These helpers reduce a raw line to the fragments the
//! resolution ladder actually looks up.

use catalog::Lang;

/// Removes every ASCII `(...)` group and the whitespace run preceding it.
///
/// ASCII-only on purpose: fullwidth `（）` annotations are covered by
/// dedicated alias entries, matching how the source vocabulary is curated.
/// An unmatched `(` is left in place.
pub fn strip_parentheticals(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        out.push_str(rest[..open].trim_end());
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out
}

/// Splits a prepared line into alternative fragments.
///
/// Every separator pass re-splits all fragments from the previous pass, so
/// mixed separators compose ("Gin/Vodka or Soju" yields three fragments).
/// English: the word " or " (case-insensitive) and `/`.
/// Chinese: `或`, `、`, `/`, `／`.
pub fn split_alternatives(text: &str, lang: Lang) -> Vec<&str> {
    match lang {
        Lang::En => resplit(split_word_or(text), '/'),
        Lang::Zh => {
            let mut parts = vec![text];
            for sep in ['或', '、', '/', '／'] {
                parts = resplit(parts, sep);
            }
            parts
        }
    }
}

fn resplit(parts: Vec<&str>, sep: char) -> Vec<&str> {
    parts.into_iter().flat_map(|p| p.split(sep)).collect()
}

/// Case-insensitive split on the word `" or "`.
///
/// The separator is pure ASCII, so a byte scan is exact: ASCII bytes never
/// occur inside a multi-byte UTF-8 sequence.
fn split_word_or(text: &str) -> Vec<&str> {
    const SEP: &[u8] = b" or ";
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i + SEP.len() <= bytes.len() {
        if bytes[i..i + SEP.len()].eq_ignore_ascii_case(SEP) {
            parts.push(&text[start..i]);
            start = i + SEP.len();
            i = start;
        } else {
            i += 1;
        }
    }
    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_parenthetical() {
        assert_eq!(
            strip_parentheticals("Green Tea (Bottled)"),
            "Green Tea"
        );
    }

    #[test]
    fn strips_multiple_parentheticals() {
        assert_eq!(
            strip_parentheticals("Soju (Plain) Highball (Tall)"),
            "Soju Highball"
        );
    }

    #[test]
    fn separator_inside_parenthetical_is_removed_with_it() {
        assert_eq!(
            strip_parentheticals("Sugar-free Oolong Tea (Tea Pot/Oolong brand)"),
            "Sugar-free Oolong Tea"
        );
    }

    #[test]
    fn unmatched_paren_left_alone() {
        assert_eq!(strip_parentheticals("Soda (flat"), "Soda (flat");
        assert_eq!(strip_parentheticals("Soda) twice"), "Soda) twice");
    }

    #[test]
    fn fullwidth_parens_untouched() {
        assert_eq!(strip_parentheticals("小樣酒（威士忌）"), "小樣酒（威士忌）");
    }

    #[test]
    fn splits_on_word_or_case_insensitive() {
        assert_eq!(
            split_alternatives("Shochu or Vodka", Lang::En),
            vec!["Shochu", "Vodka"]
        );
        assert_eq!(
            split_alternatives("Shochu OR Vodka", Lang::En),
            vec!["Shochu", "Vodka"]
        );
    }

    #[test]
    fn english_separators_compose() {
        assert_eq!(
            split_alternatives("Gin/Vodka or Soju", Lang::En),
            vec!["Gin", "Vodka", "Soju"]
        );
    }

    #[test]
    fn word_or_requires_surrounding_spaces() {
        assert_eq!(
            split_alternatives("Cordial", Lang::En),
            vec!["Cordial"]
        );
    }

    #[test]
    fn chinese_separators_compose() {
        assert_eq!(
            split_alternatives("琴酒或伏特加、燒酒/清酒／啤酒", Lang::Zh),
            vec!["琴酒", "伏特加", "燒酒", "清酒", "啤酒"]
        );
    }
}
