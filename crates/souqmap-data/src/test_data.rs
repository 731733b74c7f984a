//! Listing fixtures shared by unit and integration tests.
//!
//! The records deliberately mix field spellings, coordinate shapes and
//! missing data the way production records do.

use serde_json::{Value, json};

/// A small marketplace snapshot around Sana'a and Aden.
///
/// | id   | root        | level1  | level2     | position            |
/// |------|-------------|---------|------------|---------------------|
/// | c1   | cars        | toyota  | hilux      | Sana'a (pair)       |
/// | c2   | cars        | toyota  | land_cruiser | Sana'a (swapped)  |
/// | c3   | cars        | toyota  | corolla    | Aden (lat/lng obj)  |
/// | c4   | cars        | nissan  | patrol     | Sana'a (fields)     |
/// | c5   | cars        | other   | -          | none                |
/// | r1   | realestate  | rent    | apartment  | Sana'a (geo)        |
/// | r2   | realestate  | sale    | land       | Aden (latitude/..)  |
/// | r3   | realestate  | -       | villa      | Sana'a (location)   |
/// | p1   | phones      | apple   | -          | Sana'a (strings)    |
/// | p2   | phones      | samsung | -          | Aden (pair)         |
/// | s1   | solar       | panel   | -          | unusable            |
#[must_use]
pub fn sample_listings() -> Vec<Value> {
    vec![
        json!({
            "id": "c1",
            "title": "هايلوكس غمارتين للبيع",
            "description": "",
            "category": "cars",
            "coords": [15.3694, 44.1910],
        }),
        json!({
            "id": "c2",
            "title": "جيب شاص نظيف",
            "category": "سيارات",
            "make": "Toyota",
            "model": "Land-Cruiser",
            "coords": [44.2067, 15.3547],
        }),
        json!({
            "id": "c3",
            "title": "Corolla 2015",
            "categoryKey": "cars",
            "carMake": "تويوتا",
            "coords": {"lat": 12.7855, "lng": 45.0187},
        }),
        json!({
            "id": "c4",
            "title": "نيسان باترول سوبر سفاري",
            "category": "cars",
            "brand": "NISSAN",
            "carModel": "patrol",
            "lat": 15.3520,
            "lng": 44.2080,
        }),
        json!({
            "id": "c5",
            "title": "سيارة نظيفة جدا",
            "category": "cars",
        }),
        json!({
            "id": "r1",
            "title": "شقة للإيجار في حدة",
            "category": "realestate",
            "geo": {"latitude": 15.3300, "longitude": 44.1800},
        }),
        json!({
            "id": "r2",
            "title": "أرض في المنصورة",
            "category": "عقارات",
            "dealType": "sale",
            "propertyType": "plot",
            "latitude": 12.8600,
            "longitude": 44.9800,
        }),
        json!({
            "id": "r3",
            "title": "فيلا فاخرة",
            "category": "real-estate",
            "location": {"lat": 15.3400, "lng": 44.2200},
        }),
        json!({
            "id": "p1",
            "title": "ايفون 13 برو ماكس",
            "category": "phones",
            "lat": "15.3600",
            "lng": "44.2000",
        }),
        json!({
            "id": "p2",
            "title": "Galaxy S23 Ultra",
            "category": "phones",
            "coords": [12.8000, 45.0300],
        }),
        json!({
            "id": "s1",
            "title": "الواح شمسية 550 وات",
            "category": "solar",
            "coords": [999, 999],
        }),
    ]
}
