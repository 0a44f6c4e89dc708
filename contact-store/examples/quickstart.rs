//! End-to-end walkthrough: open a store, add contacts, search,
//! favorite, remove, and print display counts.
//!
//! Run with: `cargo run --example quickstart`

use std::sync::Arc;

use contact_store::{
    ContactDraft, ContactStore, RedbBackend, StoreConfig, ViewMode, init_logger,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let config = StoreConfig::from_env();
    // The demo runs against a throwaway in-memory database. For a
    // durable store, swap in RedbBackend::open(config.db_path())
    // with CONTACTHUB_WORK_DIR pointing at a writable directory.
    let backend = Arc::new(RedbBackend::open_in_memory()?);
    let store = ContactStore::with_config(backend, &config);
    store.load();

    let ada = store
        .add(ContactDraft {
            name: "Ada".to_string(),
            phone: "555-0100".to_string(),
            email: "ada@example.com".to_string(),
            address: String::new(),
        })
        .await?;
    let bo = store
        .add(ContactDraft {
            name: "Bo".to_string(),
            phone: "555-0200".to_string(),
            ..Default::default()
        })
        .await?;

    store.toggle_favorite(&bo.id)?;

    println!("{}", store.count_label(ViewMode::All, ""));
    for contact in store.query(ViewMode::All, "") {
        println!("  {} ({})", contact.display_name(), contact.phone);
    }

    println!("{}", store.count_label(ViewMode::Favorites, ""));
    for contact in store.query(ViewMode::Favorites, "") {
        println!("  {}", contact.display_name());
    }

    println!("search 'ada': {}", store.count_label(ViewMode::All, "ada"));

    store.remove(&ada.id)?;
    println!("after remove: {}", store.count_label(ViewMode::All, ""));

    Ok(())
}
