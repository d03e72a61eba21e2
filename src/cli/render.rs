//! Plain-text rendering of the contact views.

use crate::domain::Field;
use crate::form::FormController;
use crate::models::Contact;
use crate::search::result_summary;
use crate::services::ContactApp;
use std::fmt::Write;

pub fn header() -> String {
    "Contact Manager\nManage your contacts efficiently\n".to_string()
}

/// One contact card.
pub fn contact_card(contact: &Contact) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}  #{}", contact.initial(), contact.name, contact.id);
    if let Some(company) = &contact.company {
        let _ = writeln!(out, "    {}", company);
    }
    let _ = writeln!(out, "    Email: {}", contact.email);
    let _ = writeln!(out, "    Phone: {}", contact.phone);
    out
}

/// The main view: search summary, then cards or the empty state.
pub fn contact_list(app: &ContactApp) -> String {
    if app.is_loading() {
        return "Loading contacts...\n".to_string();
    }

    let mut out = String::new();
    let visible = app.visible_contacts();

    if app.has_search() {
        let _ = writeln!(out, "Search: \"{}\"", app.search_query());
        let _ = writeln!(out, "{}", result_summary(visible.len()));
        out.push('\n');
    }

    if let Some(empty) = app.empty_state() {
        let _ = writeln!(out, "{}", empty.title());
        let _ = writeln!(out, "{}", empty.subtitle());
        return out;
    }

    for (i, contact) in visible.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&contact_card(contact));
    }
    out
}

/// The open form with current values and any field errors.
///
/// Returns an empty string when the form is closed.
pub fn form(form: &FormController) -> String {
    let (Some(title), Some(submit)) = (form.title(), form.submit_label()) else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", title);
    for field in Field::ALL {
        let marker = if field.is_required() { " *" } else { "" };
        let _ = writeln!(
            out,
            "  {:<10} {}",
            format!("{}{}:", field.label(), marker),
            form.draft().get(field)
        );
        if let Some(message) = form.errors().message(field) {
            let _ = writeln!(out, "             ! {}", message);
        }
    }
    let _ = writeln!(out, "  (save: {} | cancel: Cancel)", submit);
    out
}
