//! Location name normalization.
//!
//! Turns a raw backup label such as `"Arm - Upper"` into the SiteCycle zone
//! format `"Upper Arm"`, then prefixes the side: `"Right Upper Arm"`.

use crate::Site;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Separator between body part and qualifier in raw labels
const QUALIFIER_SEPARATOR: &str = " - ";

/// Built-in label fixes applied before any other processing
static DEFAULT_RENAMES: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    [("Butt", "Buttock")]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
});

/// Exact-match label substitutions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameTable {
    entries: BTreeMap<String, String>,
}

impl Default for RenameTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_RENAMES.clone(),
        }
    }
}

impl RenameTable {
    /// Built-in table extended with extra entries; extras win on conflict
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut table = Self::default();
        for (from, to) in overrides {
            table.entries.insert(from.clone(), to.clone());
        }
        table
    }

    /// Substitute the whole label if it has an entry, otherwise return it as is
    pub fn apply<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map(String::as_str).unwrap_or(name)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Capitalize the first letter of each word and lowercase the rest.
///
/// A word starts at any character not preceded by a cased letter, so
/// `"upper-arm"` becomes `"Upper-Arm"` and `"日本abc"` becomes `"日本Abc"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_cased = false;
    for c in input.chars() {
        if prev_is_cased {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut out, c);
        }
        prev_is_cased = is_cased(c);
    }
    out
}

/// Titlecase forms of the Latin digraphs; indexed by any of their three cases
const DIGRAPHS: [([char; 3], char); 4] = [
    (['\u{01C4}', '\u{01C5}', '\u{01C6}'], '\u{01C5}'), // DŽ Dž dž
    (['\u{01C7}', '\u{01C8}', '\u{01C9}'], '\u{01C8}'), // LJ Lj lj
    (['\u{01CA}', '\u{01CB}', '\u{01CC}'], '\u{01CB}'), // NJ Nj nj
    (['\u{01F1}', '\u{01F2}', '\u{01F3}'], '\u{01F2}'), // DZ Dz dz
];

fn digraph_titlecase(c: char) -> Option<char> {
    DIGRAPHS
        .iter()
        .find(|(forms, _)| forms.contains(&c))
        .map(|(_, title)| *title)
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || digraph_titlecase(c).is_some()
}

/// Push the titlecase form of `c`. Multi-char uppercase expansions keep only
/// their first char upper: `ß` becomes `Ss`.
fn push_titlecase(out: &mut String, c: char) {
    if let Some(title) = digraph_titlecase(c) {
        out.push(title);
        return;
    }
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}

/// Convert a raw label to a zone name: `"Body - Qualifier"` becomes
/// `"Qualifier Body"`, bare labels are only title-cased.
pub fn to_zone_name(name: &str, renames: &RenameTable) -> String {
    let name = renames.apply(name);
    match name.split_once(QUALIFIER_SEPARATOR) {
        Some((body, qualifier)) => format!("{} {}", title_case(qualifier), title_case(body)),
        None => title_case(name),
    }
}

/// Full display location for a site, e.g. `"Left Buttock"`
pub fn format_location(site: &Site, renames: &RenameTable) -> String {
    format!("{} {}", site.side.prefix(), to_zone_name(&site.name, renames))
}
