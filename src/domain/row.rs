// Backend row model as returned by the data service
use serde::Deserialize;
use serde_json::Value;

/// One record of the long-format production table. `production` arrives as a
/// JSON number or a numeric string depending on the column type upstream;
/// `geom` is an opaque GeoJSON geometry and may be null or absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionRow {
    pub region: String,
    pub period: String,
    #[serde(default)]
    pub production: Value,
    #[serde(default)]
    pub geom: Option<Value>,
}

impl RegionRow {
    /// Coerce the raw production cell to kWh: numbers pass through, numeric
    /// strings are parsed, anything else becomes NaN.
    pub fn production_kwh(&self) -> f64 {
        match &self.production {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
            _ => f64::NAN,
        }
    }

    pub fn has_geometry(&self) -> bool {
        matches!(&self.geom, Some(g) if !g.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(body: Value) -> RegionRow {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_production_from_number_and_string() {
        let r = row(json!({"region": "X", "period": "summer", "production": 5000000, "geom": null}));
        assert_eq!(r.production_kwh(), 5_000_000.0);

        let r = row(json!({"region": "X", "period": "summer", "production": "1500000", "geom": null}));
        assert_eq!(r.production_kwh(), 1_500_000.0);
    }

    #[test]
    fn test_production_otherwise_is_nan() {
        let r = row(json!({"region": "X", "period": "summer", "production": null, "geom": null}));
        assert!(r.production_kwh().is_nan());

        let r = row(json!({"region": "X", "period": "summer", "production": "n/a", "geom": null}));
        assert!(r.production_kwh().is_nan());

        let r = row(json!({"region": "X", "period": "summer"}));
        assert!(r.production_kwh().is_nan());
    }

    #[test]
    fn test_has_geometry() {
        let r = row(json!({"region": "X", "period": "summer", "production": 1,
            "geom": {"type": "Point", "coordinates": [12.5, 42.5]}}));
        assert!(r.has_geometry());

        let r = row(json!({"region": "X", "period": "summer", "production": 1, "geom": null}));
        assert!(!r.has_geometry());

        let r = row(json!({"region": "X", "period": "summer", "production": 1}));
        assert!(!r.has_geometry());
    }
}
