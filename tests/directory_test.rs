//! Integration tests for the record collection and manual entry

use bizdir::core::directory::BusinessDirectory;
use bizdir::domain::{
    BizdirError, Business, BusinessFields, BusinessId, BusinessPatch, Coordinates,
    DirectoryError, OpeningHours,
};
use chrono::{Duration, Utc};

fn form(name: &str, category: &str) -> BusinessFields {
    BusinessFields {
        name: name.to_string(),
        category: category.to_string(),
        address: "1 Main St".to_string(),
        phone: "555-0100".to_string(),
        ..BusinessFields::default()
    }
}

#[test]
fn test_manual_entry_requires_fields() {
    let err = Business::from_form(BusinessFields::default()).unwrap_err();
    assert!(matches!(err, BizdirError::Validation(_)));

    let business = Business::from_form(form("Acme", "Retail")).unwrap();
    assert_eq!(business.name, "Acme");
    assert_eq!(business.opening_hours, OpeningHours::fallback());
}

#[test]
fn test_add_update_delete_lifecycle() {
    let mut directory = BusinessDirectory::new();
    let id = directory
        .add(Business::from_form(form("Acme", "Retail")).unwrap())
        .unwrap()
        .id
        .clone();
    directory
        .add(Business::from_form(form("Beta", "Cafe")).unwrap())
        .unwrap();

    let before = directory.get(&id).unwrap().last_updated;
    let updated = directory
        .update(&id, BusinessPatch::new().with_name("Acme Hardware").with_rating(4.0))
        .unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Acme Hardware");
    assert_eq!(updated.rating, 4.0);
    assert_eq!(updated.category, "Retail");
    assert!(updated.last_updated >= before);

    let removed = directory.delete(&id).unwrap();
    assert_eq!(removed.name, "Acme Hardware");
    assert_eq!(directory.len(), 1);
    assert_eq!(directory.all()[0].name, "Beta");
}

#[test]
fn test_unknown_id_is_not_found() {
    let mut directory = BusinessDirectory::new();
    let id = BusinessId::generate();

    assert!(matches!(
        directory.delete(&id),
        Err(BizdirError::Directory(DirectoryError::NotFound(_)))
    ));
    assert!(matches!(
        directory.update(&id, BusinessPatch::new().with_name("X")),
        Err(BizdirError::Directory(DirectoryError::NotFound(_)))
    ));
}

#[test]
fn test_records_serialize_camel_case() {
    let business = Business::new(form("Acme", "Retail"));
    let json = serde_json::to_value(&business).unwrap();

    assert!(json.get("openingHours").is_some());
    assert!(json.get("lastUpdated").is_some());
    assert_eq!(json["coordinates"]["lat"], 0.0);
    assert_eq!(json["id"], business.id.as_str());
}

fn stale_record(fields: BusinessFields) -> Business {
    Business::with_id(
        BusinessId::generate(),
        fields,
        Utc::now() - Duration::days(1),
    )
}

#[test]
fn test_edit_form_replaces_every_field() {
    let mut hours = OpeningHours::blank();
    hours.set("Monday", "7:00 AM - 1:00 PM");
    let original = stale_record(BusinessFields {
        opening_hours: Some(hours),
        coordinates: Some(Coordinates::new(51.5, -0.12)),
        ..form("Acme", "Retail")
    });
    let id = original.id.clone();
    let stamped = original.last_updated;

    let mut directory = BusinessDirectory::new();
    directory.add(original).unwrap();

    let submitted = BusinessFields {
        name: "Acme Hardware".to_string(),
        category: "Hardware".to_string(),
        address: "9 Elm Rd".to_string(),
        phone: "555-0199".to_string(),
        email: "shop@acme.test".to_string(),
        website: "https://acme.test".to_string(),
        rating: 3.5,
        reviews: 12,
        opening_hours: Some(OpeningHours::fallback()),
        coordinates: Some(Coordinates::new(40.0, -73.0)),
    };
    let updated = directory
        .update(&id, BusinessPatch::from_fields(submitted.clone()))
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.fields(), submitted);
    assert!(updated.last_updated > stamped);
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_edit_form_without_structured_fields_keeps_them() {
    let mut hours = OpeningHours::blank();
    hours.set("Friday", "Noon - Midnight");
    let original = stale_record(BusinessFields {
        opening_hours: Some(hours.clone()),
        coordinates: Some(Coordinates::new(51.5, -0.12)),
        ..form("Acme", "Retail")
    });
    let id = original.id.clone();

    let mut directory = BusinessDirectory::new();
    directory.add(original).unwrap();

    let updated = directory
        .update(
            &id,
            BusinessPatch::from_fields(BusinessFields {
                opening_hours: None,
                coordinates: None,
                ..form("Acme Hardware", "Hardware")
            }),
        )
        .unwrap();

    assert_eq!(updated.name, "Acme Hardware");
    assert_eq!(updated.category, "Hardware");
    assert_eq!(updated.opening_hours, hours);
    assert_eq!(updated.coordinates, Coordinates::new(51.5, -0.12));
}

#[test]
fn test_partial_patch_touches_only_given_fields() {
    let mut directory = BusinessDirectory::new();
    let id = directory
        .add(Business::new(form("Acme", "Retail")))
        .unwrap()
        .id
        .clone();

    let mut hours = OpeningHours::blank();
    hours.set("Sunday", "Closed");
    let updated = directory
        .update(
            &id,
            BusinessPatch::new()
                .with_phone("555-0123")
                .with_opening_hours(hours.clone()),
        )
        .unwrap();

    assert_eq!(updated.phone, "555-0123");
    assert_eq!(updated.opening_hours, hours);
    assert_eq!(updated.name, "Acme");
    assert_eq!(updated.address, "1 Main St");
}
