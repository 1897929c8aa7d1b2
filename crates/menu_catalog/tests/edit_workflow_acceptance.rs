use menu_catalog::{MenuCatalog, MenuEditor, SequentialIds, SubmitOutcome};
use menu_model::{
    CatalogError, Direction, EditMode, EntryId, MenuDraft, MenuEntry, Price, UNCATEGORIZED,
};

#[test]
fn edit_price_of_existing_item_end_to_end() {
    let catalog = MenuCatalog::with_entries(
        SequentialIds::default(),
        vec![MenuEntry {
            id: EntryId::new("item-1"),
            name: "Taco al Pastor".into(),
            price: Price::from_cents(850),
            category: "Tacos".into(),
            available: true,
        }],
    )
    .expect("catalog");
    let mut editor = MenuEditor::new(catalog);
    let id = EntryId::new("item-1");

    let draft = editor.begin_edit(&id).expect("begin edit");
    assert_eq!(draft.name, "Taco al Pastor");
    assert_eq!(draft.price, "8.5");
    assert_eq!(draft.category, "Tacos");
    assert!(draft.available);

    editor.draft_mut().price = "9.00".into();
    let outcome = editor.submit().expect("submit");
    assert_eq!(outcome, SubmitOutcome::Updated(id.clone()));

    let entry = editor.catalog().entry_at(0).expect("entry");
    assert_eq!(entry.id, id);
    assert_eq!(entry.price.amount(), 9.0);
    assert_eq!(entry.price.to_string(), "9.00");
    assert_eq!(editor.mode(), &EditMode::Idle);
}

#[test]
fn waiter_session_add_toggle_reorder_and_reject() {
    let mut editor = MenuEditor::new(MenuCatalog::seeded(SequentialIds::default()));

    *editor.draft_mut() = MenuDraft::new("", "5", "", true);
    let err = editor.submit().expect_err("empty name rejected");
    assert!(matches!(err, CatalogError::Validation(_)));
    assert_eq!(editor.catalog().len(), 3);

    *editor.draft_mut() = MenuDraft::new("X", "1", "  ", true);
    let created = editor.submit().expect("create");
    let new_id = created.id().clone();
    assert_eq!(editor.entries()[0].category, UNCATEGORIZED);

    assert!(!editor.toggle_availability(&new_id).expect("toggle"));
    assert!(editor.reorder(0, Direction::Down));
    assert!(!editor.reorder(0, Direction::Up));

    let order: Vec<_> = editor
        .entries()
        .iter()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(order, ["item-1", new_id.as_str(), "item-2", "item-3"]);

    let json = serde_json::to_string(editor.entries()).expect("json");
    assert!(json.contains("\"id\":\"item-4\""));
    assert!(json.contains("\"price\":1.0"));
}
