use super::*;
use crate::domain::EntryId;

#[test]
fn empty_draft_defaults_to_available() {
    let draft = MenuDraft::default();
    assert!(draft.name.is_empty());
    assert!(draft.price.is_empty());
    assert!(draft.available);
}

#[test]
fn validate_trims_name_and_defaults_blank_category() {
    let validated = MenuDraft::new("  Churros ", "4", "  ", false)
        .validate()
        .expect("valid draft");
    assert_eq!(validated.name, "Churros");
    assert_eq!(validated.category, UNCATEGORIZED);
    assert_eq!(validated.price, Price::from_cents(400));
    assert!(!validated.available);
}

#[test]
fn validate_checks_name_before_price() {
    let err = MenuDraft::new(" ", "abc", "", true)
        .validate()
        .expect_err("should fail");
    assert_eq!(err, ValidationError::EmptyName);
}

#[test]
fn from_entry_renders_price_back_to_text() {
    let entry = MenuEntry {
        id: EntryId::new("item-1"),
        name: "Taco al Pastor".into(),
        price: Price::from_cents(850),
        category: "Tacos".into(),
        available: true,
    };
    let draft = MenuDraft::from_entry(&entry);
    assert_eq!(draft, MenuDraft::new("Taco al Pastor", "8.5", "Tacos", true));
}
