use serde_json::Value;
use souqmap_data::{
    FacetTable,
    normalize::{lower_form, safe_form, scalar_text, text_form},
};

/// One option with every spelling pre-normalized.
#[derive(Debug, Clone)]
struct CompiledOption {
    key: String,
    is_other: bool,
    lower: Vec<String>,
    safe: Vec<String>,
    text: Vec<String>,
}

/// A facet table prepared for repeated matching and detection.
///
/// Normalizing aliases is the expensive half of every comparison, so it is
/// done once here instead of once per record.
#[derive(Debug, Clone)]
pub struct CompiledTable {
    name: String,
    options: Vec<CompiledOption>,
}

impl CompiledTable {
    pub fn new(table: &FacetTable) -> Self {
        let options = table
            .options()
            .iter()
            .map(|option| CompiledOption {
                key: option.key.clone(),
                is_other: option.is_other(),
                lower: option.spellings().map(lower_form).collect(),
                safe: option
                    .spellings()
                    .map(safe_form)
                    .filter(|form| !form.is_empty())
                    .collect(),
                text: option
                    .spellings()
                    .map(text_form)
                    .filter(|form| !form.is_empty())
                    .collect(),
            })
            .collect();

        Self {
            name: table.name().to_string(),
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve a loosely-typed value. Only strings and numbers can match.
    pub fn match_value(&self, value: &Value) -> Option<&str> {
        self.match_str(&scalar_text(value)?)
    }

    /// Resolve a raw string to the first option whose key or alias equals it
    /// in lower form or in safe form.
    pub fn match_str(&self, raw: &str) -> Option<&str> {
        let lower = lower_form(raw);
        if lower.is_empty() {
            return None;
        }
        let safe = safe_form(raw);

        self.options
            .iter()
            .find(|option| {
                option.lower.contains(&lower) || (!safe.is_empty() && option.safe.contains(&safe))
            })
            .map(|option| option.key.as_str())
    }

    /// Spellings of each option in text form, with whether the option is the
    /// terminal `"other"`.
    pub(super) fn text_spellings(&self) -> impl Iterator<Item = (&str, bool, &[String])> {
        self.options
            .iter()
            .map(|option| (option.key.as_str(), option.is_other, option.text.as_slice()))
    }
}

/// Resolve `value` against `table`, returning the matching option's key.
///
/// `None` means no option matched, including for empty, null or
/// non-scalar input.
pub fn match_key<'t>(value: &Value, table: &'t FacetTable) -> Option<&'t str> {
    let compiled = CompiledTable::new(table);
    let key = compiled.match_value(value)?;
    table.get(key).map(|option| option.key.as_str())
}
