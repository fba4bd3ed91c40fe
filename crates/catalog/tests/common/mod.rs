//! Canned upstream fixtures shared by the proxy integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use pokeadmin_catalog::{CacheStore, CatalogProxy, StubCatalogClient};
use serde_json::{json, Value};

pub const BASE_URL: &str = "http://catalog.test/api/v2";

pub fn detail_url(id: i64) -> String {
    format!("{BASE_URL}/pokemon/{id}/")
}

pub fn list_url(limit: u32, offset: u32) -> String {
    format!("{BASE_URL}/pokemon?limit={limit}&offset={offset}")
}

pub fn index_url() -> String {
    format!("{BASE_URL}/pokemon?limit=10000")
}

pub fn type_url(kind: &str) -> String {
    format!("{BASE_URL}/type/{kind}")
}

/// Upstream detail document in the shape the real API returns.
pub fn detail_body(id: i64, name: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 10,
        "weight": 100,
        "types": [{ "slot": 1, "type": { "name": kind, "url": type_url(kind) } }],
        "sprites": {
            "front_default": null,
            "other": {
                "official-artwork": {
                    "front_default": format!("https://img.test/artwork/{id}.png")
                }
            }
        },
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "overgrow", "url": "" }, "is_hidden": false, "slot": 1 }
        ]
    })
}

pub fn entry(id: i64, name: &str) -> Value {
    json!({ "name": name, "url": detail_url(id) })
}

/// Listing response containing `entries` as `(id, name)` pairs.
pub fn list_body(entries: &[(i64, &str)]) -> Value {
    let results: Vec<Value> = entries.iter().map(|(id, name)| entry(*id, name)).collect();
    json!({ "count": results.len(), "next": null, "previous": null, "results": results })
}

/// Type response containing `entries` as members.
pub fn type_body(entries: &[(i64, &str)]) -> Value {
    let members: Vec<Value> = entries
        .iter()
        .map(|(id, name)| json!({ "slot": 1, "pokemon": entry(*id, name) }))
        .collect();
    json!({ "name": "fire", "pokemon": members })
}

/// Register a detail document for each `(id, name)` pair.
pub fn serve_details(stub: &StubCatalogClient, entries: &[(i64, &str)], kind: &str) {
    for (id, name) in entries {
        stub.insert(detail_url(*id), detail_body(*id, name, kind));
    }
}

pub fn build_proxy() -> (CatalogProxy, Arc<StubCatalogClient>) {
    let stub = Arc::new(StubCatalogClient::new());
    let proxy = CatalogProxy::new(stub.clone(), CacheStore::new(1_000), BASE_URL);
    (proxy, stub)
}

/// The first generation starters plus a few unrelated entries.
pub const STARTERS: &[(i64, &str)] = &[
    (1, "bulbasaur"),
    (2, "ivysaur"),
    (3, "venusaur"),
    (4, "charmander"),
    (5, "charmeleon"),
    (6, "charizard"),
    (7, "squirtle"),
];
