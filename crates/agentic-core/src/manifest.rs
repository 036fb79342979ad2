//! The install manifest: which files are installed, where, and from which
//! content-source identifier.
//!
//! The manifest is a single versioned YAML document bundled with the
//! resources. It lists categories in install order; each category lists the
//! files that belong to it, relative to the category directory.

use crate::error::{AgenticError, Result};
use crate::paths;
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MANIFEST_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ManifestFile {
    version: u32,
    #[serde(default)]
    categories: Vec<CategoryFiles>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CategoryFiles {
    category: Category,
    #[serde(default)]
    files: Vec<String>,
}

// ---------------------------------------------------------------------------
// ManifestEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub category: Category,
    /// Destination, relative to the target root (e.g. `commands/all.md`).
    pub relative_path: String,
    /// Identifier handed to the content source.
    pub source_id: String,
}

impl ManifestEntry {
    /// Entry whose destination and source identifier are both
    /// `<category dir>/<file>`.
    pub fn in_category(category: Category, file: &str) -> Self {
        let relative_path = format!("{}/{}", category.dir_name(), file);
        Self {
            category,
            source_id: relative_path.clone(),
            relative_path,
        }
    }
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    version: u32,
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Build a validated manifest. Entries keep the given order.
    pub fn new(version: u32, entries: Vec<ManifestEntry>) -> Result<Self> {
        if version != MANIFEST_VERSION {
            return Err(AgenticError::UnsupportedManifestVersion {
                found: version,
                expected: MANIFEST_VERSION,
            });
        }
        if entries.is_empty() {
            return Err(AgenticError::EmptyManifest);
        }
        let mut seen = HashSet::new();
        for entry in &entries {
            if !paths::is_safe_relative_path(&entry.relative_path) {
                return Err(AgenticError::InvalidEntryPath(entry.relative_path.clone()));
            }
            if !seen.insert(entry.relative_path.as_str()) {
                return Err(AgenticError::DuplicateEntry(entry.relative_path.clone()));
            }
        }
        Ok(Self { version, entries })
    }

    /// Parse and validate a manifest document.
    pub fn parse(yaml: &str) -> Result<Self> {
        let file: ManifestFile = serde_yaml::from_str(yaml)?;
        let entries = file
            .categories
            .iter()
            .flat_map(|c| {
                c.files
                    .iter()
                    .map(move |f| ManifestEntry::in_category(c.category, f))
            })
            .collect();
        Self::new(file.version, entries)
    }

    /// Parse a manifest from raw bytes, which must be UTF-8.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::parse(std::str::from_utf8(data)?)
    }

    /// The manifest shipped inside the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_bytes(&crate::source::bundled_manifest()?)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Categories present in the manifest, in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut out: Vec<Category> = Vec::new();
        for entry in &self.entries {
            if !out.contains(&entry.category) {
                out.push(entry.category);
            }
        }
        out
    }

    /// Narrow the manifest to the given categories, keeping manifest order.
    /// Fails with `EmptyManifest` when nothing is left.
    pub fn restricted_to(&self, categories: &[Category]) -> Result<Self> {
        let entries: Vec<ManifestEntry> = self
            .entries
            .iter()
            .filter(|e| categories.contains(&e.category))
            .cloned()
            .collect();
        Self::new(self.version, entries)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
version: 1
categories:
  - category: commands
    files:
      - a.md
      - nested/b.md
  - category: skills
    files:
      - code-standards/SKILL.md
"#;

    #[test]
    fn parse_keeps_order_and_prefixes_category_dir() {
        let m = Manifest::parse(SAMPLE).unwrap();
        let paths: Vec<&str> = m.entries().iter().map(|e| e.relative_path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "commands/a.md",
                "commands/nested/b.md",
                "skills/code-standards/SKILL.md"
            ]
        );
        assert_eq!(m.entries()[0].source_id, "commands/a.md");
        assert_eq!(m.categories(), vec![Category::Commands, Category::Skills]);
    }

    #[test]
    fn empty_manifest_rejected() {
        let err = Manifest::parse("version: 1\ncategories: []\n").unwrap_err();
        assert!(matches!(err, AgenticError::EmptyManifest));
    }

    #[test]
    fn duplicate_entry_rejected() {
        let yaml = "version: 1\ncategories:\n  - category: agents\n    files: [x.md, x.md]\n";
        let err = Manifest::parse(yaml).unwrap_err();
        assert!(matches!(err, AgenticError::DuplicateEntry(p) if p == "agents/x.md"));
    }

    #[test]
    fn escaping_entry_rejected() {
        let yaml = "version: 1\ncategories:\n  - category: agents\n    files: [../../evil.md]\n";
        let err = Manifest::parse(yaml).unwrap_err();
        assert!(matches!(err, AgenticError::InvalidEntryPath(_)));
    }

    #[test]
    fn aliased_paths_rejected() {
        for alias in ["./a.md", "x/./a.md", "x//a.md", "x/a.md/"] {
            let yaml = format!(
                "version: 1\ncategories:\n  - category: commands\n    files: [a.md, x/a.md, '{alias}']\n"
            );
            let err = Manifest::parse(&yaml).unwrap_err();
            assert!(
                matches!(err, AgenticError::InvalidEntryPath(ref p) if p == &format!("commands/{alias}")),
                "{alias}: {err}"
            );
        }
    }

    #[test]
    fn non_utf8_manifest_rejected() {
        let mut data = b"version: 1\ncategories:\n  - category: agents\n    files: [x".to_vec();
        data.extend_from_slice(&[0xff, 0xfe]);
        data.extend_from_slice(b".md]\n");
        let err = Manifest::from_bytes(&data).unwrap_err();
        assert!(matches!(err, AgenticError::ManifestEncoding(_)));
    }

    #[test]
    fn unknown_version_rejected() {
        let yaml = "version: 7\ncategories:\n  - category: agents\n    files: [x.md]\n";
        let err = Manifest::parse(yaml).unwrap_err();
        assert!(matches!(
            err,
            AgenticError::UnsupportedManifestVersion { found: 7, .. }
        ));
    }

    #[test]
    fn restricted_to_filters_categories() {
        let m = Manifest::parse(SAMPLE).unwrap();
        let only_skills = m.restricted_to(&[Category::Skills]).unwrap();
        assert_eq!(only_skills.len(), 1);
        assert!(matches!(
            m.restricted_to(&[Category::Templates]),
            Err(AgenticError::EmptyManifest)
        ));
    }

    #[test]
    fn bundled_manifest_is_valid_and_covers_every_category() {
        let m = Manifest::bundled().unwrap();
        assert_eq!(m.version(), MANIFEST_VERSION);
        for c in Category::all() {
            assert!(
                m.entries().iter().any(|e| e.category == *c),
                "bundled manifest has no {c} entries"
            );
        }
    }
}
