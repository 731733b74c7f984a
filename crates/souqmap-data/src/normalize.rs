//! Text forms used to compare user-entered values with taxonomy aliases.
//!
//! Three forms exist:
//! - the *lower* form: trimmed and lowercased, compared verbatim;
//! - the *safe* form: lower form with Arabic orthographic variants folded,
//!   runs of spaces, dashes and underscores collapsed to one `_`, and every
//!   other non-alphanumeric character dropped;
//! - the *text* form: lowercased, folded and whitespace-collapsed free text,
//!   used for substring detection.
//!
//! Every form is applied to both sides of a comparison.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-_]+").expect("separator pattern is valid"));
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_]").expect("non-word pattern is valid"));
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Trimmed, lowercased form.
#[must_use]
pub fn lower_form(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Fold the Arabic spellings that users write interchangeably.
///
/// Hamza-carrying alefs become a bare alef, alef maqsura becomes ya,
/// ta marbuta becomes ha, and tatweel and short-vowel marks are removed.
#[must_use]
pub fn fold_arabic(value: &str) -> String {
    value
        .chars()
        .filter_map(|c| match c {
            'أ' | 'إ' | 'آ' | 'ٱ' => Some('ا'),
            'ى' => Some('ي'),
            'ة' => Some('ه'),
            'ـ' | '\u{064B}'..='\u{0652}' => None,
            c => Some(c),
        })
        .collect()
}

/// Separator-insensitive form: `"Land-Cruiser "` and `"land cruiser"` both
/// become `"land_cruiser"`.
#[must_use]
pub fn safe_form(value: &str) -> String {
    let folded = fold_arabic(&lower_form(value));
    let joined = SEPARATORS.replace_all(&folded, "_");
    NON_WORD
        .replace_all(&joined, "")
        .trim_matches('_')
        .to_string()
}

/// Free-text form used for substring detection.
#[must_use]
pub fn text_form(value: &str) -> String {
    let folded = fold_arabic(&value.to_lowercase());
    WHITESPACE.replace_all(folded.trim(), " ").into_owned()
}

/// Read a loosely-typed scalar as text.
///
/// Strings are trimmed, numbers are printed; anything else (null, bools,
/// arrays, objects) and blank strings yield `None`.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_safe_form_collapses_separators() {
        assert_eq!(safe_form("  Land-Cruiser "), "land_cruiser");
        assert_eq!(safe_form("land  cruiser"), "land_cruiser");
        assert_eq!(safe_form("Mercedes - Benz"), "mercedes_benz");
        assert_eq!(safe_form("c.class"), "cclass");
        assert_eq!(safe_form("--"), "");
    }

    #[test]
    fn test_safe_form_folds_arabic() {
        assert_eq!(safe_form("أخرى"), safe_form("اخري"));
        assert_eq!(safe_form("شقة"), safe_form("شقه"));
        assert_eq!(safe_form("للإيجار"), "للايجار");
        assert_eq!(safe_form("تـويـوتا"), "تويوتا");
    }

    #[test]
    fn test_text_form_collapses_whitespace() {
        assert_eq!(text_form("  Toyota\n\tHILUX  "), "toyota hilux");
        assert_eq!(text_form("هايلوكس   غمارتين"), "هايلوكس غمارتين");
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!(" Toyota ")), Some("Toyota".to_string()));
        assert_eq!(scalar_text(&json!(2020)), Some("2020".to_string()));
        assert_eq!(scalar_text(&json!("   ")), None);
        assert_eq!(scalar_text(&json!(null)), None);
        assert_eq!(scalar_text(&json!(true)), None);
        assert_eq!(scalar_text(&json!(["toyota"])), None);
    }
}
