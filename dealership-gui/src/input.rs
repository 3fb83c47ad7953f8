//! Keystroke-level guards for the year and price text fields.

use dealership_lib::form::{digits_only, is_partial_price};

/// Strip everything but ASCII digits from year text.
pub fn sanitize_year(text: &str) -> String {
    digits_only(text)
}

/// Whether an edit to the price field should be kept. Rejected edits put
/// the previous text back.
pub fn accept_price_edit(new: &str) -> bool {
    new.is_empty() || is_partial_price(new)
}

/// Single-line field that only ever holds digits.
pub fn year_field(ui: &mut egui::Ui, text: &mut String) -> egui::Response {
    let response = ui.add(egui::TextEdit::singleline(text).hint_text("e.g. 2020"));
    if response.changed() {
        let clean = sanitize_year(text);
        if clean != *text {
            *text = clean;
        }
    }
    response
}

/// Single-line field that refuses edits leaving something other than
/// digits with at most one decimal point.
pub fn price_field(ui: &mut egui::Ui, text: &mut String) -> egui::Response {
    let before = text.clone();
    let response = ui.add(egui::TextEdit::singleline(text).hint_text("e.g. 19999.99"));
    if response.changed() && !accept_price_edit(text) {
        *text = before;
    }
    response
}
