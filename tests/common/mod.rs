//! Common test utilities

#![allow(dead_code)]

use serde_json::json;

/// JSON body for a content item that has a translation in the other locale
pub fn item_with_translation(slug: &str, lang: &str, langslug: &str) -> serde_json::Value {
    json!({
        "slug": slug,
        "lang": lang,
        "langslug": langslug,
        "title": format!("Title of {slug}"),
    })
}

/// JSON body for a content item with no translated counterpart
///
/// The API serializes the missing cross-reference as an empty string.
pub fn item_without_translation(slug: &str, lang: &str) -> serde_json::Value {
    json!({
        "slug": slug,
        "lang": lang,
        "langslug": "",
        "title": format!("Title of {slug}"),
    })
}

/// Flat menuitems payload mixing both locales, out of order
pub fn menu_payload() -> serde_json::Value {
    json!([
        {
            "id": 3,
            "title": "Products",
            "link": "/products",
            "order": 2,
            "parent": null,
            "newtab": false,
            "lang": "en",
            "children": [
                {
                    "id": 4,
                    "title": "Citrus",
                    "link": "/category/citrus",
                    "order": 1,
                    "parent": 3,
                    "newtab": false,
                    "lang": "en",
                    "children": null
                }
            ]
        },
        {
            "id": 1,
            "title": "Home",
            "link": "/",
            "order": 1,
            "parent": null,
            "newtab": false,
            "lang": "en",
            "children": null
        },
        {
            "id": 2,
            "title": "Anasayfa",
            "link": "/",
            "order": 1,
            "parent": null,
            "newtab": false,
            "lang": "tr",
            "children": null
        }
    ])
}

/// Product search payload mixing both locales
pub fn product_search_payload() -> serde_json::Value {
    json!([
        {
            "id": 10,
            "title": "Red Orange",
            "slug": "red-orange",
            "lang": "en",
            "langslug": "kirmizi-portakal"
        },
        {
            "id": 11,
            "title": "Kırmızı Portakal",
            "slug": "kirmizi-portakal",
            "lang": "tr",
            "langslug": "red-orange"
        }
    ])
}

/// Category search payload, English only
pub fn category_search_payload() -> serde_json::Value {
    json!([
        {
            "lang": "en",
            "title": "Citrus",
            "slug": "citrus"
        }
    ])
}
