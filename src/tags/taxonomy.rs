//! Tag taxonomy: categorized vocabulary of selectable tags, loaded from JSON.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Tag identifier. Taxonomy snapshots carry ids as strings or numbers;
/// both are kept as their string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct TagId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for TagId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => Self(s.trim().to_string()),
            RawId::Number(n) => Self(n.to_string()),
        }
    }
}

impl From<TagId> for String {
    fn from(id: TagId) -> Self {
        id.0
    }
}

impl From<&str> for TagId {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}

impl TagId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: TagId,
    pub name: String,
}

impl Tag {
    /// Tags without an id cannot be selected.
    pub fn is_selectable(&self) -> bool {
        !self.id.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTaxonomy {
    Wrapped(Taxonomy),
    Bare(Vec<Category>),
}

impl Taxonomy {
    /// Parse a taxonomy, either `{"categories": [...]}` or a bare category array.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawTaxonomy =
            serde_json::from_str(json).context("Failed to parse taxonomy JSON")?;
        Ok(match raw {
            RawTaxonomy::Wrapped(taxonomy) => taxonomy,
            RawTaxonomy::Bare(categories) => Self { categories },
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read taxonomy: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid taxonomy: {}", path.display()))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.tags.is_empty())
    }

    /// Categories restricted to selectable tags; empty categories are dropped.
    pub fn selectable_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter_map(|category| {
                let tags: Vec<Tag> = category
                    .tags
                    .iter()
                    .filter(|t| t.is_selectable())
                    .cloned()
                    .collect();
                (!tags.is_empty()).then(|| Category {
                    name: category.name.clone(),
                    slug: category.slug.clone(),
                    tags,
                })
            })
            .collect()
    }

    /// Display name of a tag id.
    pub fn tag_name(&self, id: &TagId) -> Option<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.tags.iter())
            .find(|t| &t.id == id)
            .map(|t| t.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "categories": [
            {"name": "Genres", "slug": "genres", "tags": [
                {"id": 12, "name": "Drame"},
                {"id": "13", "name": "Téléfilm"},
                {"name": "Sans identifiant"}
            ]},
            {"name": "Vide", "tags": []}
        ]
    }"#;

    #[test]
    fn test_ids_accept_numbers_and_strings() {
        let taxonomy = Taxonomy::from_json(SAMPLE).unwrap();
        let genres = &taxonomy.categories[0];
        assert_eq!(genres.tags[0].id, TagId::from("12"));
        assert_eq!(genres.tags[1].id.as_str(), "13");
        assert!(!genres.tags[2].is_selectable());
        assert_eq!(taxonomy.tag_name(&TagId::from("13")), Some("Téléfilm"));
    }

    #[test]
    fn test_bare_array_form() {
        let taxonomy = Taxonomy::from_json(r#"[{"name": "HDR", "tags": [{"id": 1, "name": "DV"}]}]"#)
            .unwrap();
        assert_eq!(taxonomy.categories.len(), 1);
        assert!(taxonomy.categories[0].slug.is_none());
    }

    #[test]
    fn test_selectable_categories() {
        let taxonomy = Taxonomy::from_json(SAMPLE).unwrap();
        let selectable = taxonomy.selectable_categories();
        assert_eq!(selectable.len(), 1);
        assert_eq!(selectable[0].tags.len(), 2);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let taxonomy = Taxonomy::load(file.path()).unwrap();
        assert!(!taxonomy.is_empty());

        assert!(Taxonomy::load(Path::new("/nonexistent/taxonomy.json")).is_err());
        assert!(Taxonomy::from_json("{not json").is_err());
    }

    #[test]
    fn test_ids_serialize_as_strings() {
        let json = serde_json::to_string(&TagId::from("42")).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
