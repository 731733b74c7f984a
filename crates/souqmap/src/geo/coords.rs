use serde_json::Value;
use souqmap_data::number_field;
use tracing::trace;

use super::{Coords, GeoBounds};

type Shape = fn(&Value) -> Option<(f64, f64)>;

/// Input shapes in priority order.
const SHAPES: [(&str, Shape); 5] = [
    ("pair", pair_shape),
    ("lat/lng object", lat_lng_object_shape),
    ("lat/lng fields", lat_lng_fields_shape),
    ("latitude/longitude fields", latitude_longitude_fields_shape),
    ("nested location", nested_location_shape),
];

const PAIR_FIELDS: [&str; 3] = ["coords", "coordinates", "position"];
const NESTED_FIELDS: [&str; 5] = ["location", "geo", "geoPoint", "geopoint", "position"];
const KEY_PAIRS: [(&str, &str); 5] = [
    ("lat", "lng"),
    ("lat", "lon"),
    ("latitude", "longitude"),
    ("_lat", "_long"),
    ("_latitude", "_longitude"),
];

/// Extract a `(lat, lng)` pair from a raw value and validate it against
/// `region`, repairing swapped components.
///
/// `raw` may be the pair or object itself, or a whole listing record
/// carrying one of the supported shapes. The first shape that yields two
/// finite numbers decides the candidate; it is then accepted in this order:
/// as-is inside `region`, swapped inside `region`, as-is on the globe,
/// swapped on the globe. Anything else is `None`.
pub fn normalize_coords(raw: &Value, region: &GeoBounds) -> Option<Coords> {
    let (shape, (a, b)) = SHAPES
        .iter()
        .find_map(|(name, shape)| shape(raw).map(|pair| (*name, pair)))?;

    let candidates = [
        (region, Coords::new(a, b)),
        (region, Coords::new(b, a)),
        (&GeoBounds::GLOBAL, Coords::new(a, b)),
        (&GeoBounds::GLOBAL, Coords::new(b, a)),
    ];
    let accepted = candidates
        .into_iter()
        .find(|(bounds, coords)| bounds.contains(*coords))
        .map(|(_, coords)| coords);

    if accepted.is_none() {
        trace!(shape, a, b, "Dropping unusable coordinates");
    }
    accepted
}

fn number_pair(first: Option<&Value>, second: Option<&Value>) -> Option<(f64, f64)> {
    Some((number_field(first?)?, number_field(second?)?))
}

fn array_pair(value: &Value) -> Option<(f64, f64)> {
    match value.as_array()?.as_slice() {
        [a, b] => number_pair(Some(a), Some(b)),
        _ => None,
    }
}

fn keyed_pair(value: &Value, keys: &[(&str, &str)]) -> Option<(f64, f64)> {
    let object = value.as_object()?;
    keys.iter()
        .find_map(|(lat, lng)| number_pair(object.get(*lat), object.get(*lng)))
}

fn pair_shape(raw: &Value) -> Option<(f64, f64)> {
    array_pair(raw).or_else(|| {
        PAIR_FIELDS
            .iter()
            .find_map(|field| raw.get(field).and_then(array_pair))
    })
}

fn lat_lng_object_shape(raw: &Value) -> Option<(f64, f64)> {
    PAIR_FIELDS
        .iter()
        .find_map(|field| keyed_pair(raw.get(field)?, &KEY_PAIRS[..2]))
}

fn lat_lng_fields_shape(raw: &Value) -> Option<(f64, f64)> {
    keyed_pair(raw, &KEY_PAIRS[..2])
}

fn latitude_longitude_fields_shape(raw: &Value) -> Option<(f64, f64)> {
    keyed_pair(raw, &KEY_PAIRS[2..3])
}

fn nested_location_shape(raw: &Value) -> Option<(f64, f64)> {
    NESTED_FIELDS.iter().find_map(|field| {
        let nested = raw.get(field)?;
        keyed_pair(nested, &KEY_PAIRS).or_else(|| pair_shape(nested))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn yemen(raw: Value) -> Option<[f64; 2]> {
        normalize_coords(&raw, &GeoBounds::YEMEN).map(Coords::as_pair)
    }

    #[test]
    fn test_pair_shapes() {
        assert_eq!(yemen(json!([15.37, 44.19])), Some([15.37, 44.19]));
        assert_eq!(yemen(json!({"coords": [15.37, 44.19]})), Some([15.37, 44.19]));
        assert_eq!(
            yemen(json!({"coordinates": ["15.37", "44.19"]})),
            Some([15.37, 44.19])
        );
    }

    #[test]
    fn test_object_and_field_shapes() {
        assert_eq!(
            yemen(json!({"coords": {"lat": 15.37, "lng": 44.19}})),
            Some([15.37, 44.19])
        );
        assert_eq!(yemen(json!({"lat": 15.37, "lng": 44.19})), Some([15.37, 44.19]));
        assert_eq!(
            yemen(json!({"latitude": 15.37, "longitude": 44.19})),
            Some([15.37, 44.19])
        );
    }

    #[test]
    fn test_nested_location_shapes() {
        assert_eq!(
            yemen(json!({"location": {"latitude": 15.37, "longitude": 44.19}})),
            Some([15.37, 44.19])
        );
        assert_eq!(
            yemen(json!({"geo": {"_lat": 15.37, "_long": 44.19}})),
            Some([15.37, 44.19])
        );
        assert_eq!(
            yemen(json!({"geoPoint": {"_latitude": 15.37, "_longitude": 44.19}})),
            Some([15.37, 44.19])
        );
        assert_eq!(
            yemen(json!({"location": {"coords": [15.37, 44.19]}})),
            Some([15.37, 44.19])
        );
    }

    #[test]
    fn test_shape_priority() {
        // A usable pair wins over separate fields.
        let raw = json!({"coords": [15.37, 44.19], "lat": 13.0, "lng": 45.0});
        assert_eq!(yemen(raw), Some([15.37, 44.19]));

        // The first parsable shape decides even when it is unusable.
        let raw = json!({"coords": [999, 999], "lat": 13.0, "lng": 45.0});
        assert_eq!(yemen(raw), None);

        // An unparsable pair falls through to the next shape.
        let raw = json!({"coords": ["x", 1], "lat": 13.0, "lng": 45.0});
        assert_eq!(yemen(raw), Some([13.0, 45.0]));
    }

    #[test]
    fn test_swap_repair_in_region() {
        assert_eq!(yemen(json!([44.19, 15.37])), Some([15.37, 44.19]));
        assert_eq!(yemen(json!({"lat": 44.19, "lng": 15.37})), Some([15.37, 44.19]));
    }

    #[test]
    fn test_global_fallback() {
        // Paris as-is.
        assert_eq!(yemen(json!([48.85, 2.35])), Some([48.85, 2.35]));
        // Longitude beyond 90 can only be a longitude.
        assert_eq!(yemen(json!([139.69, 35.68])), Some([35.68, 139.69]));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(yemen(json!([999, 999])), None);
        assert_eq!(yemen(json!([15.37])), None);
        assert_eq!(yemen(json!([15.37, 44.19, 10.0])), None);
        assert_eq!(yemen(json!({"lat": null, "lng": 44.19})), None);
        assert_eq!(yemen(json!("15.37,44.19")), None);
        assert_eq!(yemen(json!(null)), None);
        assert_eq!(yemen(json!({})), None);
    }

    #[test]
    fn test_worldwide_region_skips_swap_repair() {
        let coords = normalize_coords(&json!([44.19, 15.37]), &GeoBounds::GLOBAL);
        assert_eq!(coords, Some(Coords::new(44.19, 15.37)));
    }
}
