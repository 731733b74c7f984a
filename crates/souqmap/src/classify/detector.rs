use souqmap_data::{FacetTable, normalize::text_form};

use super::matcher::CompiledTable;

impl CompiledTable {
    /// First option, in table order, whose key or an alias occurs anywhere
    /// in `text`.
    pub fn detect(&self, text: &str) -> Option<&str> {
        self.detect_prepared(&text_form(text), true)
    }

    /// Like [`CompiledTable::detect`] but never yields the terminal
    /// `"other"`. Used where a match must be positive evidence.
    pub fn detect_specific(&self, text: &str) -> Option<&str> {
        self.detect_prepared(&text_form(text), false)
    }

    /// Detection over text already in text form.
    pub(crate) fn detect_prepared(&self, prepared: &str, include_other: bool) -> Option<&str> {
        if prepared.is_empty() {
            return None;
        }
        self.text_spellings()
            .filter(|(_, is_other, _)| include_other || !is_other)
            .find(|(_, _, spellings)| {
                spellings
                    .iter()
                    .any(|spelling| prepared.contains(spelling.as_str()))
            })
            .map(|(key, _, _)| key)
    }
}

/// Scan free text for the first option of `table` it mentions.
pub fn detect_key<'t>(text: &str, table: &'t FacetTable) -> Option<&'t str> {
    let compiled = CompiledTable::new(table);
    let key = compiled.detect(text)?;
    table.get(key).map(|option| option.key.as_str())
}

#[cfg(test)]
mod tests {
    use souqmap_data::FacetOption;

    use super::*;

    fn makes() -> FacetTable {
        FacetTable::new(
            "carMakes",
            vec![
                FacetOption::new("toyota", "تويوتا", &["تويوتا", "هايلوكس"]),
                FacetOption::new("nissan", "نيسان", &["نيسان", "باترول"]),
                FacetOption::other(),
            ],
        )
    }

    #[test]
    fn test_substring_containment() {
        let table = makes();
        assert_eq!(detect_key("تويوتا هايلوكس 2012", &table), Some("toyota"));
        assert_eq!(detect_key("للبيع هايلوكس غمارتين", &table), Some("toyota"));
        assert_eq!(detect_key("NISSAN   patrol", &table), Some("nissan"));
        assert_eq!(detect_key("سيارة نيسان", &table), Some("nissan"));
    }

    #[test]
    fn test_first_option_in_table_order_wins() {
        let table = makes();
        assert_eq!(detect_key("نيسان أو تويوتا", &table), Some("toyota"));
    }

    #[test]
    fn test_whitespace_and_case_are_normalized() {
        let table = FacetTable::new(
            "propertyTypes",
            vec![
                FacetOption::new("apartment", "شقة", &["شقة", "Flat For Rent"]),
                FacetOption::other(),
            ],
        );
        assert_eq!(detect_key("nice FLAT\n  for   rent", &table), Some("apartment"));
        // Ta marbuta folds on both sides.
        assert_eq!(detect_key("شقه مفروشة", &table), Some("apartment"));
    }

    #[test]
    fn test_no_mention_is_none() {
        let table = makes();
        assert_eq!(detect_key("دراجة نارية", &table), None);
        assert_eq!(detect_key("", &table), None);
        assert_eq!(detect_key("   ", &table), None);
    }

    #[test]
    fn test_specific_detection_skips_other() {
        let table = makes();
        let compiled = CompiledTable::new(&table);
        assert_eq!(compiled.detect("قطع غيار متنوع"), Some("other"));
        assert_eq!(compiled.detect_specific("قطع غيار متنوع"), None);
    }
}
