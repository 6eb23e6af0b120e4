// Map feature derived from a backend row
use super::row::RegionRow;
use super::units::kwh_to_gwh;
use serde_json::{json, Value};

/// A renderable region: geometry plus display-ready attributes. Only rows
/// with geometry produce a feature; the production value is carried in GWh
/// and may be non-finite when the source cell was not numeric.
#[derive(Debug, Clone)]
pub struct RegionFeature {
    pub region: String,
    pub period: String,
    pub production_gwh: f64,
    geometry: Value,
}

impl RegionFeature {
    pub fn from_row(row: &RegionRow) -> Option<Self> {
        if !row.has_geometry() {
            return None;
        }
        let geometry = row.geom.clone()?;
        Some(Self {
            region: row.region.clone(),
            period: row.period.clone(),
            production_gwh: kwh_to_gwh(row.production_kwh()),
            geometry,
        })
    }

    /// Build the GeoJSON Feature object handed to the map widget. A
    /// non-finite production value serializes as null.
    pub fn to_geojson(&self) -> Value {
        let value_gwh = if self.production_gwh.is_finite() {
            json!(self.production_gwh)
        } else {
            Value::Null
        };
        json!({
            "type": "Feature",
            "geometry": self.geometry,
            "properties": {
                "region": self.region,
                "period": self.period,
                "value_gwh": value_gwh,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(geom: Value) -> RegionRow {
        serde_json::from_value(json!({
            "region": "Umbria",
            "period": "summer",
            "production": 5_000_000,
            "geom": geom,
        }))
        .unwrap()
    }

    #[test]
    fn test_row_without_geometry_yields_no_feature() {
        assert!(RegionFeature::from_row(&sample_row(Value::Null)).is_none());
    }

    #[test]
    fn test_feature_converts_to_display_units() {
        let geom = json!({"type": "Point", "coordinates": [12.5, 42.5]});
        let feature = RegionFeature::from_row(&sample_row(geom)).unwrap();
        assert_eq!(feature.production_gwh, 5.0);
        assert_eq!(feature.region, "Umbria");
    }

    #[test]
    fn test_to_geojson_shape() {
        let geom = json!({"type": "Point", "coordinates": [12.5, 42.5]});
        let feature = RegionFeature::from_row(&sample_row(geom.clone())).unwrap();
        let gj = feature.to_geojson();
        assert_eq!(gj["type"], "Feature");
        assert_eq!(gj["geometry"], geom);
        assert_eq!(gj["properties"]["region"], "Umbria");
        assert_eq!(gj["properties"]["period"], "summer");
        assert_eq!(gj["properties"]["value_gwh"], json!(5.0));
    }

    #[test]
    fn test_to_geojson_non_finite_value_is_null() {
        let row: RegionRow = serde_json::from_value(json!({
            "region": "Umbria",
            "period": "summer",
            "production": null,
            "geom": {"type": "Point", "coordinates": [0.0, 0.0]},
        }))
        .unwrap();
        let feature = RegionFeature::from_row(&row).unwrap();
        assert!(feature.production_gwh.is_nan());
        assert_eq!(feature.to_geojson()["properties"]["value_gwh"], Value::Null);
    }
}
