//! Shared fixtures for the search integration tests.

use lesmat_catalog::Catalog;

/// A small bilingual export: two materials from the canonical ranking
/// scenario plus a few with taxonomy references and a draft.
pub const EXPORT: &str = r#"{
    "materials": [
        {
            "id": 1,
            "slug": "reizen-in-duitsland",
            "title_nl": "Reizen in Duitsland",
            "cefr": ["B1"],
            "featured": false,
            "createdAt": "2024-01-01"
        },
        {
            "id": 2,
            "slug": "reizen",
            "title_nl": "Reizen",
            "cefr": ["A2"],
            "featured": true,
            "createdAt": "2023-01-01"
        },
        {
            "id": 3,
            "title_nl": "Boodschappen doen",
            "title_de": "Einkaufen",
            "description_de": "Auf dem Markt",
            "materialTypes": ["w"],
            "schoolTypes": [{"id": "gym", "title_nl": "Gymnasium", "title_de": "Gymnasium"}],
            "topics": [{"id": "eten", "title_nl": "Eten en drinken", "title_de": "Essen und Trinken"}],
            "language": ["de"],
            "cefr": ["A2"],
            "createdAt": "2022-05-01T09:00:00Z"
        },
        {
            "id": 4,
            "slug": "kaas",
            "title_nl": "Kaas op de markt",
            "materialTypes": ["w", "v"],
            "schoolType": "havo",
            "topics": ["eten"],
            "language": ["nl", "de"],
            "createdAt": "2021-01-01"
        },
        {
            "id": 5,
            "title_nl": "Nog niet klaar",
            "status": "draft",
            "cefr": ["B1"]
        }
    ],
    "materialTypes": [
        {"id": "w", "title_nl": "Werkblad", "title_de": "Arbeitsblatt"},
        {"id": "v", "title_nl": "Video", "title_de": "Video"}
    ],
    "schoolTypes": [
        {"id": "gym", "title_nl": "Gymnasium", "title_de": "Gymnasium"},
        {"id": "havo", "title_nl": "Havo", "title_de": "Havo"}
    ],
    "competences": [],
    "topics": [
        {"id": "eten", "title_nl": "Eten en drinken", "title_de": "Essen und Trinken"}
    ]
}"#;

/// The published view of [`EXPORT`].
pub fn catalog() -> Catalog {
    Catalog::from_json_str(EXPORT)
        .expect("fixture export should parse")
        .published()
}

/// Identifiers of `materials`, in order.
pub fn ids<'a>(materials: impl Iterator<Item = &'a lesmat_catalog::CourseMaterial>) -> Vec<String> {
    materials.map(|m| m.id.to_string()).collect()
}
