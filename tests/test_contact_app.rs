//! Tests for the contact app: load, search, add, edit and delete working
//! together against the seed data.

mod mocks;

use contact_manager::services::DELETE_CONFIRMATION;
use contact_manager::{
    filter, seed_contacts, ContactApp, ContactDraft, ContactId, ContactStore, DeleteOutcome,
    Field, FormError, FormState, LoadState, SeedContactSource, SubmitOutcome, ValidationError,
};
use mocks::{MockConfirmPrompt, MockContactSource};
use std::time::Duration;

async fn seeded_app() -> ContactApp {
    let mut app = ContactApp::new();
    app.load(&SeedContactSource::new(Duration::ZERO)).await;
    app
}

fn submit_new(app: &mut ContactApp, name: &str, email: &str, phone: &str, company: &str) -> SubmitOutcome {
    app.open_add();
    app.set_field(Field::Name, name);
    app.set_field(Field::Email, email);
    app.set_field(Field::Phone, phone);
    app.set_field(Field::Company, company);
    app.submit().expect("draft should be valid")
}

#[tokio::test]
async fn test_end_to_end_search_then_add() {
    let mut app = seeded_app().await;
    assert_eq!(app.store().len(), 8);

    app.set_search_query("diana");
    let visible = app.visible_contacts();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Diana Prince");

    app.clear_search();
    let outcome = submit_new(&mut app, "Zoe", "z@z.com", "123", "");
    assert!(matches!(outcome, SubmitOutcome::Added(_)));

    let list = app.store().list();
    assert_eq!(list.len(), 9);
    assert_eq!(list[0].name, "Zoe");
    assert_eq!(list[0].id, ContactId::new(9));
    assert_eq!(list[0].company, None);
}

#[tokio::test]
async fn test_two_adds_get_increasing_unique_ids() {
    let mut app = seeded_app().await;

    let first = match submit_new(&mut app, "Yan", "y@y.io", "1", "") {
        SubmitOutcome::Added(c) => c,
        other => panic!("Expected Added, got: {:?}", other),
    };
    let second = match submit_new(&mut app, "Zoe", "z@z.io", "2", "Zed") {
        SubmitOutcome::Added(c) => c,
        other => panic!("Expected Added, got: {:?}", other),
    };

    assert!(second.id > first.id);
    assert_eq!(app.store().list()[0].id, second.id);
    assert_eq!(app.store().list()[1].id, first.id);
}

#[tokio::test]
async fn test_edit_preserves_id_and_replaces_fields() {
    let mut app = seeded_app().await;

    assert!(app.open_edit(ContactId::new(5)));
    app.set_field(Field::Name, "Ed Norton");
    app.set_field(Field::Email, "ed@norton.dev");
    app.set_field(Field::Phone, "+44 20 7946 0000");
    app.set_field(Field::Company, "Norton & Co");
    let outcome = app.submit().unwrap();

    let edited = app.store().get(ContactId::new(5)).unwrap().clone();
    assert_eq!(outcome, SubmitOutcome::Updated(edited.clone()));
    assert_eq!(edited.name, "Ed Norton");
    assert_eq!(edited.email, "ed@norton.dev");
    assert_eq!(edited.phone, "+44 20 7946 0000");
    assert_eq!(edited.company.as_deref(), Some("Norton & Co"));
    assert_eq!(app.store().len(), 8);
    // Edits stay in place
    assert_eq!(app.store().list()[4].id, ContactId::new(5));
}

#[tokio::test]
async fn test_invalid_submit_reports_all_errors_without_mutation() {
    let mut app = seeded_app().await;

    app.open_add();
    app.set_field(Field::Name, "");
    app.set_field(Field::Email, "bob");
    app.set_field(Field::Phone, "555");

    let errors = match app.submit() {
        Err(FormError::Invalid(errors)) => errors,
        other => panic!("Expected Invalid, got: {:?}", other),
    };
    assert_eq!(errors.get(Field::Name), Some(ValidationError::Required));
    assert_eq!(errors.get(Field::Email), Some(ValidationError::InvalidFormat));
    assert_eq!(errors.get(Field::Phone), None);

    assert_eq!(app.form().state(), &FormState::OpenForAdd);
    assert_eq!(app.store().list(), seed_contacts().as_slice());
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let mut app = seeded_app().await;
    let mut prompt = MockConfirmPrompt::new([false, true]);

    let declined = app.delete(ContactId::new(2), &mut prompt).await;
    assert_eq!(declined, DeleteOutcome::Declined);
    assert_eq!(app.store().len(), 8);

    let deleted = app.delete(ContactId::new(2), &mut prompt).await;
    assert!(matches!(deleted, DeleteOutcome::Deleted(ref c) if c.name == "Bob Smith"));
    assert_eq!(app.store().len(), 7);
    assert!(app.store().get(ContactId::new(2)).is_none());

    assert_eq!(prompt.questions(), &[DELETE_CONFIRMATION, DELETE_CONFIRMATION]);
}

#[tokio::test]
async fn test_delete_nonexistent_leaves_list_unchanged() {
    let mut app = seeded_app().await;
    let mut prompt = MockConfirmPrompt::always_yes();

    let outcome = app.delete(ContactId::new(404), &mut prompt).await;
    assert_eq!(outcome, DeleteOutcome::NotFound(ContactId::new(404)));
    assert_eq!(app.store().list(), seed_contacts().as_slice());
    assert!(prompt.questions().is_empty());
}

#[tokio::test]
async fn test_delete_everything_then_add_restarts_ids() {
    let mut app = seeded_app().await;
    let mut prompt = MockConfirmPrompt::always_yes();

    for id in 1..=8 {
        app.delete(ContactId::new(id), &mut prompt).await;
    }
    assert!(app.store().is_empty());

    let outcome = submit_new(&mut app, "Zoe", "z@z.com", "123", "");
    match outcome {
        SubmitOutcome::Added(contact) => assert_eq!(contact.id, ContactId::new(1)),
        other => panic!("Expected Added, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_filter_on_seed() {
    let seed = seed_contacts();

    let all = filter(&seed, "");
    assert_eq!(all.len(), 8);

    let tech = filter(&seed, "tech");
    assert_eq!(tech.len(), 1);
    assert_eq!(tech[0].company.as_deref(), Some("Tech Corp"));
}

#[tokio::test]
async fn test_load_uses_source_once() {
    let source = MockContactSource::new(seed_contacts());
    let mut app = ContactApp::new();
    assert_eq!(app.load_state(), LoadState::Loading);

    app.load(&source).await;

    assert_eq!(source.fetch_count(), 1);
    assert_eq!(app.load_state(), LoadState::Ready);
    assert_eq!(app.store().len(), 8);
}

#[tokio::test(start_paused = true)]
async fn test_seed_load_is_delayed() {
    let mut app = ContactApp::new();
    let start = tokio::time::Instant::now();

    app.load(&SeedContactSource::new(Duration::from_millis(800))).await;

    assert!(start.elapsed() >= Duration::from_millis(800));
    assert_eq!(app.store().len(), 8);
}

#[test]
fn test_store_add_prepends() {
    let mut store = ContactStore::with_contacts(seed_contacts());
    let contact = store.add(ContactDraft {
        name: "Zoe".to_string(),
        email: "z@z.com".to_string(),
        phone: "123".to_string(),
        company: String::new(),
    });

    assert_eq!(store.len(), 9);
    assert_eq!(store.list()[0], contact);
}
