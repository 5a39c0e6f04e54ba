#![cfg(target_arch = "wasm32")]

use spotlight_core::{ArtistRef, RecentSearchStore, RecentSearches, RouterConfig};
use spotlight_web::storage::{BrowserStore, clear_recent, load_recent, remember_artist};
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn history_round_trips_through_local_storage() {
    let config = RouterConfig::default_config();
    clear_recent(&config, "wasm-user");

    remember_artist(&config, "wasm-user", ArtistRef::new("a-1"));
    let list = remember_artist(&config, "wasm-user", ArtistRef::new("a-2"));
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, "a-2");
    assert_eq!(load_recent(&config, "wasm-user"), list);

    clear_recent(&config, "wasm-user");
    assert!(load_recent(&config, "wasm-user").is_empty());
}

#[wasm_bindgen_test]
fn corrupt_history_reads_as_empty() {
    let config = RouterConfig::default_config();
    let store = BrowserStore::open().expect("localStorage");
    store
        .write("spotlight_recent_artists_broken", "{oops")
        .expect("write");
    assert!(load_recent(&config, "broken").is_empty());

    let history = RecentSearches::new(BrowserStore::open().expect("localStorage"), 8);
    assert!(history.load("broken").is_err());
    let _ = store.delete("spotlight_recent_artists_broken");
}
