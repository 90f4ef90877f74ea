// crates/penamap-core/src/loader/convert.rs

//! Raw document → flat [`PlaceStore`].

use super::LoadOptions;
use crate::common::Coordinate;
use crate::error::{PlaceError, Result};
use crate::model::{PlaceRecord, PlaceStore};
use crate::raw::{KmlRoot, PlacemarkRaw};

/// Flattens every placemark of the document into records, in document order.
pub fn from_raw(root: &KmlRoot, options: LoadOptions) -> Result<PlaceStore> {
    let document = &root.kml.document;
    let placemarks = document.flatten();
    if placemarks.is_empty() {
        return Err(PlaceError::EmptyDocument);
    }

    let mut places = Vec::with_capacity(placemarks.len());
    let mut skipped = 0usize;

    for (index, pm) in placemarks.into_iter().enumerate() {
        match to_record(pm) {
            Ok(record) => places.push(record),
            Err(reason) => {
                let name = pm.name.clone().unwrap_or_default();
                if !options.skip_invalid {
                    return Err(PlaceError::InvalidPlacemark {
                        index,
                        name,
                        reason,
                    });
                }
                tracing::warn!(index, name = %name, %reason, "skipping placemark");
                skipped += 1;
            }
        }
    }

    tracing::debug!(
        document = document.name.as_deref().unwrap_or("<unnamed>"),
        places = places.len(),
        skipped,
        "placemarks normalized"
    );
    Ok(PlaceStore::from_records(places))
}

fn to_record(pm: &PlacemarkRaw) -> std::result::Result<PlaceRecord, String> {
    // blank names are rejected, others are kept verbatim as the search key
    let name = pm
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| "missing name".to_string())?;
    let point = pm.point.as_ref().ok_or_else(|| "missing Point".to_string())?;
    let coordinate = parse_lng_lat(&point.coordinates)?;
    Ok(PlaceRecord::new(name, coordinate))
}

/// Parses a KML `"lng,lat"` or `"lng,lat,alt"` string.
///
/// ```rust
/// use penamap_core::loader::convert::parse_lng_lat;
///
/// let c = parse_lng_lat("-4.1510,40.5731").unwrap();
/// assert_eq!((c.lat, c.lng), (40.5731, -4.1510));
/// assert!(parse_lng_lat("40.5731").is_err());
/// ```
pub fn parse_lng_lat(s: &str) -> std::result::Result<Coordinate, String> {
    let parts: Vec<&str> = s.trim().split(',').map(str::trim).collect();
    let (lng, lat) = match parts.as_slice() {
        [lng, lat] | [lng, lat, _] => (*lng, *lat),
        _ => return Err(format!("expected \"lng,lat\", got {s:?}")),
    };
    let lng: f64 = lng
        .parse()
        .map_err(|_| format!("longitude {lng:?} is not a number"))?;
    let lat: f64 = lat
        .parse()
        .map_err(|_| format!("latitude {lat:?} is not a number"))?;

    let c = Coordinate::new(lat, lng);
    if !c.is_valid() {
        return Err(format!("coordinate {s:?} is out of range"));
    }
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn altitude_and_whitespace_are_tolerated() {
        let c = parse_lng_lat(" -4.15 , 40.57 , 0 ").unwrap();
        assert_eq!(c, Coordinate::new(40.57, -4.15));
    }

    #[test]
    fn rejects_garbage_and_out_of_range() {
        assert!(parse_lng_lat("").is_err());
        assert!(parse_lng_lat("a,b").is_err());
        assert!(parse_lng_lat("1,2,3,4").is_err());
        assert!(parse_lng_lat("NaN,40").is_err());
        assert!(parse_lng_lat("-4.15,95.0").is_err());
        assert!(parse_lng_lat("200,40").is_err());
    }
}
