//! Pure query functions over the contact list
//!
//! Filtering, sorting, and display counts. Nothing here touches store
//! state or storage; the store methods delegate to these with a
//! snapshot of the list.

use shared::{Contact, ViewMode};

/// Filter by view mode and search query, newest first.
///
/// A non-empty query keeps contacts whose name, phone, or email
/// contains it; name and email compare case-insensitively, the phone
/// as-is. Ties on the creation timestamp keep insertion order (the sort
/// is stable).
pub fn filter_contacts(contacts: &[Contact], view: ViewMode, search: &str) -> Vec<Contact> {
    let query = search.trim().to_lowercase();

    let mut filtered: Vec<Contact> = contacts
        .iter()
        .filter(|c| view == ViewMode::All || c.is_favorite)
        .filter(|c| query.is_empty() || matches_query(c, &query))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    filtered
}

/// OR across name, phone, and email.
fn matches_query(contact: &Contact, query: &str) -> bool {
    let name_hit = contact
        .name
        .as_deref()
        .is_some_and(|n| n.to_lowercase().contains(query));
    let email_hit = contact
        .email
        .as_deref()
        .is_some_and(|e| e.to_lowercase().contains(query));
    name_hit || contact.phone.contains(query) || email_hit
}

/// Display count for the given view and search.
///
/// The favorites view counts every favorited contact regardless of the
/// search; an active search in the all view shows `<visible> of
/// <total>`.
pub fn count_label(contacts: &[Contact], view: ViewMode, search: &str) -> String {
    let total = contacts.len();

    if view == ViewMode::Favorites {
        let favorites = contacts.iter().filter(|c| c.is_favorite).count();
        return format!("{} favorite{}", favorites, plural(favorites));
    }

    let query = search.trim();
    if !query.is_empty() {
        let visible = filter_contacts(contacts, view, query).len();
        return format!("{} of {} contact{}", visible, total, plural(total));
    }

    format!("{} contact{}", total, plural(total))
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
