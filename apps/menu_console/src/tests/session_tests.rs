use menu_catalog::{MenuCatalog, SequentialIds};
use menu_model::EditMode;

use super::*;

fn session(json: bool) -> Session<SequentialIds> {
    Session::new(
        MenuEditor::new(MenuCatalog::seeded(SequentialIds::default())),
        RenderOptions {
            currency_symbol: "£".into(),
            json,
        },
    )
}

fn run_script(session: &mut Session<SequentialIds>, script: &str) -> String {
    let mut out = Vec::new();
    session
        .run(script.as_bytes(), &mut out, false)
        .expect("run script");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn initial_listing_shows_seed_menu() {
    let mut session = session(false);
    let output = run_script(&mut session, "");
    assert!(output.contains("Taco al Pastor"));
    assert!(output.contains("£12.00"));
    assert!(output.contains("unavailable"));
}

#[test]
fn add_item_script_prepends_entry() {
    let mut session = session(false);
    let output = run_script(
        &mut session,
        "set name \"Spicy shrimp taco\"\nset price 9.50\nset category Tacos\nsubmit\n",
    );
    assert!(output.contains("added item-4"));
    let first = &session.editor().entries()[0];
    assert_eq!(first.name, "Spicy shrimp taco");
    assert_eq!(first.price.to_string(), "9.50");
}

#[test]
fn invalid_price_is_reported_and_ignored() {
    let mut session = session(false);
    let output = run_script(&mut session, "set name Taco\nset price abc\nsubmit\n");
    assert!(output.contains("cannot save: invalid draft: price 'abc' is not a number"));
    assert_eq!(session.editor().catalog().len(), 3);
    assert_eq!(session.editor().draft().price, "abc");
}

#[test]
fn edit_then_save_updates_in_place() {
    let mut session = session(false);
    let output = run_script(&mut session, "edit item-2\nset price 7.25\nsave\n");
    assert!(output.contains("Edit item (item-2)"));
    assert!(output.contains("saved item-2"));
    let entry = session.editor().catalog().entry_at(1).expect("entry");
    assert_eq!(entry.price.to_string(), "7.25");
    assert_eq!(session.editor().mode(), &EditMode::Idle);
}

#[test]
fn unknown_id_is_an_error_not_a_crash() {
    let mut session = session(false);
    let output = run_script(&mut session, "toggle item-99\nedit nope\n");
    assert!(output.contains("error: no menu entry with id 'item-99'"));
    assert!(output.contains("error: no menu entry with id 'nope'"));
}

#[test]
fn boundary_moves_are_reported() {
    let mut session = session(false);
    let output = run_script(&mut session, "up 0\ndown 2\n");
    assert!(output.contains("item at 0 cannot move up"));
    assert!(output.contains("item at 2 cannot move down"));
}

#[test]
fn quit_stops_processing() {
    let mut session = session(false);
    run_script(&mut session, "quit\ndelete item-1\n");
    assert_eq!(session.editor().catalog().len(), 3);
}

#[test]
fn comments_and_parse_errors_are_skipped() {
    let mut session = session(false);
    let output = run_script(
        &mut session,
        "# warm up\nset name \"unterminated\nfrobnicate\ntoggle item-1\n",
    );
    assert!(output.contains("parse error: unterminated quote"));
    assert!(output.contains("item-1 is now unavailable"));
}

#[test]
fn json_mode_emits_structured_errors() {
    let mut session = session(true);
    let output = run_script(&mut session, "delete item-77\n");
    assert!(output.contains("\"code\":\"not_found\""));
    assert!(output.contains("\"display_price\": \"£8.50\""));
}
