//! Upstream wire shapes and the simplified records served to clients.

use serde::{Deserialize, Serialize};

/// Minimal reference to a creature as returned by the listing endpoints.
///
/// `url` points at the detail document and doubles as its cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

/// Simplified creature record derived from an upstream detail document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureDetail {
    pub id: i64,
    pub name: String,
    pub types: Vec<TypeRef>,
    pub height: i64,
    pub weight: i64,
    pub sprites: Sprites,
    pub stats: Vec<Stat>,
    pub abilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub slot: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    /// Official artwork. Upstream leaves this `null` for some forms.
    pub artwork_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: i64,
}

// ---------------------------------------------------------------------------
// Upstream response bodies
// ---------------------------------------------------------------------------

/// `GET /pokemon?limit=&offset=`
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub results: Vec<CatalogEntry>,
}

/// `GET /type/{name}`
#[derive(Debug, Deserialize)]
pub struct TypeResponse {
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Deserialize)]
pub struct TypeMember {
    pub pokemon: CatalogEntry,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

/// `GET /pokemon/{id|name}`, reduced to the fields the projection reads.
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    id: i64,
    name: String,
    types: Vec<TypeSlot>,
    height: i64,
    weight: i64,
    #[serde(default)]
    sprites: SpritesResponse,
    stats: Vec<StatResponse>,
    abilities: Vec<AbilitySlot>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(default)]
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
struct SpritesResponse {
    #[serde(default)]
    other: OtherSprites,
}

#[derive(Debug, Default, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Artwork,
}

#[derive(Debug, Default, Deserialize)]
struct Artwork {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatResponse {
    base_stat: i64,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
}

impl From<DetailResponse> for CreatureDetail {
    fn from(raw: DetailResponse) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            types: raw
                .types
                .into_iter()
                .map(|t| TypeRef {
                    slot: t.slot,
                    name: t.kind.name,
                })
                .collect(),
            height: raw.height,
            weight: raw.weight,
            sprites: Sprites {
                artwork_url: raw.sprites.other.official_artwork.front_default,
            },
            stats: raw
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            abilities: raw.abilities.into_iter().map(|a| a.ability.name).collect(),
        }
    }
}
