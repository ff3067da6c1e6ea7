//! In-memory record collection
//!
//! This module provides the BusinessDirectory, an owned container that is
//! passed to whoever needs to read or mutate records. There is no global
//! store; add, update, and delete are the only ways records change.

use crate::domain::{Business, BusinessId, BusinessPatch, DirectoryError, Result};
use chrono::Utc;
use std::collections::HashSet;

/// Owned collection of business records in insertion order
#[derive(Debug, Clone, Default)]
pub struct BusinessDirectory {
    businesses: Vec<Business>,
    ids: HashSet<BusinessId>,
}

impl BusinessDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::DuplicateId` if a record with the same id
    /// is already present.
    pub fn add(&mut self, business: Business) -> Result<&Business> {
        if self.ids.contains(&business.id) {
            return Err(DirectoryError::DuplicateId(business.id.into_inner()).into());
        }

        tracing::debug!(id = %business.id, name = %business.name, "Adding business");
        self.ids.insert(business.id.clone());
        self.businesses.push(business);
        let index = self.businesses.len() - 1;
        Ok(&self.businesses[index])
    }

    /// Replace the provided fields of a record
    ///
    /// The id is preserved and `last_updated` refreshed.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no record has this id.
    pub fn update(&mut self, id: &BusinessId, patch: BusinessPatch) -> Result<&Business> {
        let index = self
            .position(id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;

        patch.apply_to(&mut self.businesses[index], Utc::now());
        tracing::debug!(id = %id, "Updated business");
        Ok(&self.businesses[index])
    }

    /// Remove a record and return it
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no record has this id.
    pub fn delete(&mut self, id: &BusinessId) -> Result<Business> {
        let index = self
            .position(id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;

        tracing::debug!(id = %id, "Deleting business");
        self.ids.remove(id);
        Ok(self.businesses.remove(index))
    }

    /// Replace the whole collection
    ///
    /// When `businesses` repeats an id, only the first record with it is kept.
    pub fn replace_all(&mut self, businesses: Vec<Business>) {
        self.ids.clear();
        self.businesses.clear();
        for business in businesses {
            if self.ids.insert(business.id.clone()) {
                self.businesses.push(business);
            } else {
                tracing::warn!(id = %business.id, "Dropping record with repeated id");
            }
        }
    }

    pub fn get(&self, id: &BusinessId) -> Option<&Business> {
        self.position(id).map(|index| &self.businesses[index])
    }

    pub fn contains(&self, id: &BusinessId) -> bool {
        self.ids.contains(id)
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Business] {
        &self.businesses
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    fn position(&self, id: &BusinessId) -> Option<usize> {
        if !self.ids.contains(id) {
            return None;
        }
        self.businesses.iter().position(|business| &business.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BizdirError, BusinessFields};

    fn business(name: &str) -> Business {
        Business::new(BusinessFields {
            name: name.to_string(),
            category: "Retail".to_string(),
            ..BusinessFields::default()
        })
    }

    #[test]
    fn test_add_preserves_order() {
        let mut directory = BusinessDirectory::new();
        directory.add(business("A")).unwrap();
        directory.add(business("B")).unwrap();
        directory.add(business("C")).unwrap();

        let names: Vec<&str> = directory.all().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut directory = BusinessDirectory::new();
        let first = business("A");
        let duplicate = first.clone();
        directory.add(first).unwrap();

        let err = directory.add(duplicate).unwrap_err();
        assert!(matches!(
            err,
            BizdirError::Directory(DirectoryError::DuplicateId(_))
        ));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut directory = BusinessDirectory::new();
        let id = BusinessId::generate();
        let err = directory.update(&id, BusinessPatch::new()).unwrap_err();
        assert!(matches!(
            err,
            BizdirError::Directory(DirectoryError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_id() {
        let mut directory = BusinessDirectory::new();
        let id = directory.add(business("A")).unwrap().id.clone();

        let updated = directory
            .update(&id, BusinessPatch::new().with_category("Cafe"))
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "A");
        assert_eq!(updated.category, "Cafe");
    }

    #[test]
    fn test_delete_removes_record() {
        let mut directory = BusinessDirectory::new();
        let id = directory.add(business("A")).unwrap().id.clone();
        directory.add(business("B")).unwrap();

        let removed = directory.delete(&id).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(directory.len(), 1);
        assert!(directory.get(&id).is_none());
        assert!(directory.delete(&id).is_err());
    }

    #[test]
    fn test_replace_all() {
        let mut directory = BusinessDirectory::new();
        let old_id = directory.add(business("A")).unwrap().id.clone();
        directory.replace_all(vec![business("X"), business("Y")]);
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.all()[0].name, "X");
        assert!(!directory.contains(&old_id));
    }

    #[test]
    fn test_replace_all_keeps_first_of_repeated_id() {
        let mut directory = BusinessDirectory::new();
        let first = business("X");
        let mut repeat = business("Y");
        repeat.id = first.id.clone();

        directory.replace_all(vec![first.clone(), repeat]);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get(&first.id).unwrap().name, "X");
        assert!(directory.add(first).is_err());
    }

    #[test]
    fn test_id_index_follows_add_and_delete() {
        let mut directory = BusinessDirectory::new();
        let record = business("A");
        let id = record.id.clone();

        directory.add(record.clone()).unwrap();
        assert!(directory.contains(&id));

        directory.delete(&id).unwrap();
        assert!(!directory.contains(&id));
        assert!(directory.get(&id).is_none());

        directory.add(record).unwrap();
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_bulk_add_unique_ids() {
        let mut directory = BusinessDirectory::new();
        for index in 0..1_000 {
            directory.add(business(&format!("B{index}"))).unwrap();
        }
        assert_eq!(directory.len(), 1_000);
        assert_eq!(directory.all()[999].name, "B999");
    }
}
