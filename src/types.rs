use serde::{Deserialize, Serialize};

/// Presentation category for a trait.
///
/// Categories order output and scope the canonical-family invariants; they
/// carry no behavior of their own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Architecture,
    Platform,
    Shell,
    Terminal,
    Ci,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 5] = [
        Category::Architecture,
        Category::Platform,
        Category::Shell,
        Category::Terminal,
        Category::Ci,
    ];

    /// Stable lowercase label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Architecture => "architecture",
            Category::Platform => "platform",
            Category::Shell => "shell",
            Category::Terminal => "terminal",
            Category::Ci => "ci",
        }
    }

    /// Id of the sentinel trait that absorbs unclassifiable values in this
    /// category.
    pub fn unknown_id(&self) -> &'static str {
        match self {
            Category::Architecture => "unknown-architecture",
            Category::Platform => "unknown-platform",
            Category::Shell => "unknown-shell",
            Category::Terminal => "unknown-terminal",
            Category::Ci => "unknown-ci",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw trait definition as produced by the catalog tables and consumed by
/// the registry builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitRecord {
    /// Unique identifier, case-insensitive across the combined trait/group
    /// namespace. The original casing is preserved for display.
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Single-glyph display symbol
    pub icon: String,
    /// Reference link
    #[serde(default)]
    pub url: String,
    pub category: Category,
    /// Category-specific metadata bag, opaque to the core
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl TraitRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        url: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            url: url.into(),
            category,
            metadata: serde_json::Map::new(),
        }
    }

    /// Attach a metadata field. Chainable; later writes win.
    #[must_use]
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Raw group definition as produced by the catalog tables and consumed by
/// the registry builder. Member ids may reference traits declared later;
/// the builder resolves them in a second pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Unique identifier, sharing the trait id namespace
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Whether this group belongs to its category's canonical partition
    #[serde(default)]
    pub canonical: bool,
    /// Trait ids; duplicates collapse silently at build time
    pub member_ids: Vec<String>,
}

impl GroupRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        canonical: bool,
        member_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            canonical,
            member_ids: member_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Case-insensitive lookup key for an identifier. The stored id keeps its
/// original casing; every index folds through this.
pub(crate) fn fold_id(id: &str) -> String {
    id.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn unknown_ids_are_distinct_per_category() {
        let mut seen = std::collections::HashSet::new();
        for category in Category::ALL {
            assert!(seen.insert(category.unknown_id()));
        }
    }

    #[test]
    fn trait_record_meta_is_chainable() {
        let record = TraitRecord::new("x86_64", "x86-64", "🖥", "", Category::Architecture)
            .meta("bits", 64)
            .meta("endian", "little");
        assert_eq!(record.metadata["bits"], 64);
        assert_eq!(record.metadata["endian"], "little");
    }

    #[test]
    fn fold_id_is_case_insensitive() {
        assert_eq!(fold_id("GitHub-Actions"), fold_id("github-actions"));
    }
}
