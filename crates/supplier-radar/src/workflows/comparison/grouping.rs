use super::category::CategoryClassifier;
use super::domain::{CategoryLabel, SupplierRecord};
use std::collections::HashMap;
use tracing::debug;

/// Suppliers sharing one material category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub label: CategoryLabel,
    pub suppliers: Vec<SupplierRecord>,
}

/// Category buckets in first-seen order; suppliers keep input order per bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryGroups {
    groups: Vec<CategoryGroup>,
}

impl CategoryGroups {
    /// Buckets `suppliers` by category, dropping records flagged with an error.
    pub fn partition(classifier: &CategoryClassifier, suppliers: &[SupplierRecord]) -> Self {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        let mut index: HashMap<CategoryLabel, usize> = HashMap::new();

        for supplier in suppliers {
            if supplier.has_error() {
                debug!(supplier = %supplier.name, "skipping supplier flagged with an error");
                continue;
            }

            let label = classifier.classify(supplier);
            let slot = *index.entry(label.clone()).or_insert_with(|| {
                groups.push(CategoryGroup {
                    label,
                    suppliers: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].suppliers.push(supplier.clone());
        }

        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter().filter(|group| !group.suppliers.is_empty())
    }

    pub fn labels(&self) -> Vec<&CategoryLabel> {
        self.iter().map(|group| &group.label).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, label: &CategoryLabel) -> Option<&CategoryGroup> {
        self.iter().find(|group| &group.label == label)
    }

    /// Finds the bucket a user asked for, by label (`cotton`) or by chart
    /// title (`EI LAINE PAR DEFAUT`), ignoring case and surrounding space.
    pub fn resolve(&self, requested: &str) -> Option<&CategoryGroup> {
        let requested = requested.trim();
        if requested.is_empty() {
            return None;
        }

        self.iter()
            .find(|group| group.label.as_str() == requested)
            .or_else(|| {
                self.iter().find(|group| {
                    group.label.as_str().eq_ignore_ascii_case(requested)
                        || group.label.title().eq_ignore_ascii_case(requested)
                })
            })
    }
}
