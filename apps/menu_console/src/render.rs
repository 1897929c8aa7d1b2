//! Text and JSON views of the catalog and the form.

use menu_model::{EditMode, EntryId, MenuDraft, MenuEntry, Price};
use serde::Serialize;

pub fn format_price(price: Price, symbol: &str) -> String {
    format!("{symbol}{price}")
}

pub fn form_heading(mode: &EditMode) -> String {
    match mode {
        EditMode::Idle => "Add new item".to_string(),
        EditMode::Editing(id) => format!("Edit item ({id})"),
    }
}

pub fn render_form(mode: &EditMode, draft: &MenuDraft, symbol: &str) -> String {
    let submit_label = if mode.is_editing() {
        "Save changes"
    } else {
        "Add item"
    };
    let mut out = format!("== {} ==\n", form_heading(mode));
    out.push_str(&format!("  name:      {}\n", draft.name));
    out.push_str(&format!("  price ({symbol}): {}\n", draft.price));
    out.push_str(&format!("  category:  {}\n", draft.category));
    out.push_str(&format!(
        "  available: {}\n",
        if draft.available { "on" } else { "off" }
    ));
    out.push_str(&format!("  [submit: {submit_label}]"));
    if mode.is_editing() {
        out.push_str(" [cancel]");
    }
    out.push('\n');
    out
}

pub fn render_entries(entries: &[MenuEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "(menu is empty)\n".to_string();
    }

    let name_width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    let category_width = entries
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (position, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{position:>3}  {id:<10}  {name:<name_width$}  {category:<category_width$}  {price:>9}  {status}\n",
            id = entry.id,
            name = entry.name,
            category = entry.category,
            price = format_price(entry.price, symbol),
            status = if entry.available {
                "available"
            } else {
                "unavailable"
            },
        ));
    }
    out
}

#[derive(Debug, Serialize)]
pub struct ListingView<'a> {
    pub mode: &'a EditMode,
    pub available_count: usize,
    pub entries: Vec<RowView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RowView<'a> {
    pub position: usize,
    #[serde(flatten)]
    pub entry: &'a MenuEntry,
    pub display_price: String,
}

pub fn listing_view<'a>(
    mode: &'a EditMode,
    entries: &'a [MenuEntry],
    symbol: &str,
) -> ListingView<'a> {
    ListingView {
        mode,
        available_count: entries.iter().filter(|e| e.available).count(),
        entries: entries
            .iter()
            .enumerate()
            .map(|(position, entry)| RowView {
                position,
                entry,
                display_price: format_price(entry.price, symbol),
            })
            .collect(),
    }
}

pub fn availability_line(id: &EntryId, available: bool) -> String {
    format!(
        "{id} is now {}",
        if available { "available" } else { "unavailable" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, cents: u32, available: bool) -> MenuEntry {
        MenuEntry {
            id: EntryId::new(id),
            name: name.into(),
            price: Price::from_cents(cents),
            category: "Tacos".into(),
            available,
        }
    }

    #[test]
    fn formats_price_with_two_decimals() {
        assert_eq!(format_price(Price::from_cents(850), "£"), "£8.50");
        assert_eq!(format_price(Price::from_cents(1200), "$"), "$12.00");
    }

    #[test]
    fn heading_follows_edit_mode() {
        assert_eq!(form_heading(&EditMode::Idle), "Add new item");
        assert_eq!(
            form_heading(&EditMode::Editing(EntryId::new("item-2"))),
            "Edit item (item-2)"
        );
    }

    #[test]
    fn editing_form_offers_cancel() {
        let form = render_form(
            &EditMode::Editing(EntryId::new("item-1")),
            &MenuDraft::default(),
            "£",
        );
        assert!(form.contains("Save changes"));
        assert!(form.contains("[cancel]"));
        assert!(!render_form(&EditMode::Idle, &MenuDraft::default(), "£").contains("[cancel]"));
    }

    #[test]
    fn rows_show_position_price_and_status() {
        let rendered = render_entries(
            &[
                entry("item-1", "Taco al Pastor", 850, true),
                entry("item-3", "Mole Chicken Bowl", 1200, false),
            ],
            "£",
        );
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("0  item-1"));
        assert!(lines[0].contains("£8.50"));
        assert!(lines[1].ends_with("unavailable"));
    }

    #[test]
    fn json_listing_flattens_entries() {
        let entries = [entry("item-1", "Taco al Pastor", 850, true)];
        let view = listing_view(&EditMode::Idle, &entries, "£");
        let json = serde_json::to_value(&view).expect("json");
        assert_eq!(json["available_count"], 1);
        assert_eq!(json["entries"][0]["id"], "item-1");
        assert_eq!(json["entries"][0]["display_price"], "£8.50");
        assert_eq!(json["mode"]["state"], "idle");
    }
}
