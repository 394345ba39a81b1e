//! Icon catalog: the 4-level mapping from (size, color, style, name) to
//! [`IconRecord`] metadata.
//!
//! The catalog is built offline by the [`generator`], persisted as YAML
//! (`icons.yml`), and loaded wholesale into memory when an accessor is
//! constructed. It is read-only at lookup time.

pub mod generator;
mod types;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

pub use types::{IconColor, IconRecord, IconSize, IconStyle};

type Buckets = BTreeMap<IconSize, BTreeMap<IconColor, BTreeMap<IconStyle, BTreeMap<String, IconRecord>>>>;

/// In-memory icon catalog.
///
/// Ordered nested maps keep serialization deterministic: generating the
/// catalog twice from the same inputs yields byte-identical YAML.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    icons: Buckets,
}

impl Catalog {
    /// Load a catalog from a YAML file and check its structural invariant.
    ///
    /// # Errors
    /// Returns [`Error::CatalogNotFound`] if the file does not exist,
    /// [`Error::CatalogParse`] if it is not valid catalog YAML, and
    /// [`Error::CatalogInvariant`] if a leaf disagrees with its position.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let catalog: Catalog = serde_yaml::from_str(&content)?;
        catalog.validate()?;

        debug!(
            "loaded catalog with {} icons from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Serialize the catalog to a YAML file.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), yaml)?;
        debug!(
            "wrote catalog with {} icons to {}",
            self.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Look up the record for (size, color, style, name), if present.
    #[must_use]
    pub fn get(
        &self,
        size: IconSize,
        color: IconColor,
        style: IconStyle,
        name: &str,
    ) -> Option<&IconRecord> {
        self.icons
            .get(&size)?
            .get(&color)?
            .get(&style)?
            .get(name)
    }

    /// Insert a record at the position given by its own fields.
    ///
    /// A record with the same (size, color, style, name) silently replaces
    /// the previous one (last-write-wins, matching catalog generation).
    pub fn insert(&mut self, record: IconRecord) {
        self.icons
            .entry(record.size)
            .or_default()
            .entry(record.color)
            .or_default()
            .entry(record.style)
            .or_default()
            .insert(record.name.clone(), record);
    }

    /// Number of icon records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records().count()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records().next().is_none()
    }

    /// Iterate over all records, in catalog (key) order.
    pub fn records(&self) -> impl Iterator<Item = &IconRecord> {
        self.icons
            .values()
            .flat_map(BTreeMap::values)
            .flat_map(BTreeMap::values)
            .flat_map(BTreeMap::values)
    }

    /// Check that every leaf's embedded fields match its position in the
    /// mapping.
    ///
    /// # Errors
    /// Returns [`Error::CatalogInvariant`] naming the first offending entry.
    pub fn validate(&self) -> Result<()> {
        for (&size, colors) in &self.icons {
            for (&color, styles) in colors {
                for (&style, names) in styles {
                    for (name, record) in names {
                        if record.size != size
                            || record.color != color
                            || record.style != style
                            || record.name != *name
                        {
                            return Err(Error::CatalogInvariant {
                                size,
                                color,
                                style,
                                name: name.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_record(name: &str) -> IconRecord {
        IconRecord {
            path: format!("png/alert/{name}.png"),
            used: false,
            style: IconStyle::Outlined,
            name: name.to_string(),
            size: IconSize::TwoX,
            color: IconColor::Black,
        }
    }

    #[test]
    fn insert_and_get_round_trip() {
        let mut catalog = Catalog::default();
        catalog.insert(sample_record("add_alert"));

        let record = catalog
            .get(IconSize::TwoX, IconColor::Black, IconStyle::Outlined, "add_alert")
            .expect("record present");
        assert_eq!(record.path, "png/alert/add_alert.png");

        assert!(catalog
            .get(IconSize::OneX, IconColor::Black, IconStyle::Outlined, "add_alert")
            .is_none());
        assert!(catalog
            .get(IconSize::TwoX, IconColor::Black, IconStyle::Outlined, "missing")
            .is_none());
    }

    #[test]
    fn insert_is_last_write_wins() {
        let mut catalog = Catalog::default();
        catalog.insert(sample_record("add_alert"));

        let mut replacement = sample_record("add_alert");
        replacement.path = "png/other/add_alert.png".to_string();
        catalog.insert(replacement);

        assert_eq!(catalog.len(), 1);
        let record = catalog
            .get(IconSize::TwoX, IconColor::Black, IconStyle::Outlined, "add_alert")
            .unwrap();
        assert_eq!(record.path, "png/other/add_alert.png");
    }

    #[test]
    fn yaml_round_trip_preserves_records() {
        let mut catalog = Catalog::default();
        catalog.insert(sample_record("add_alert"));
        catalog.insert(sample_record("wrong_location"));

        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let reloaded: Catalog = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(catalog, reloaded);
    }

    #[test]
    fn validate_rejects_misplaced_leaf() {
        // Hand-written YAML with a record filed under the wrong color.
        let yaml = "\
2x:
  white:
    outlined:
      add_alert:
        path: png/alert/add_alert.png
        used: false
        type: outlined
        name: add_alert
        size: 2x
        color: black
";
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(Error::CatalogInvariant { .. })
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Catalog::load("definitely/not/here/icons.yml").unwrap_err();
        assert!(matches!(err, Error::CatalogNotFound { .. }));
    }
}
