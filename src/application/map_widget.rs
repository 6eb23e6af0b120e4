// Map widget port
use serde_json::Value;

/// Handle to one rendered shape, assigned by the widget in layer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u64);

#[derive(Debug, Clone)]
pub struct FeatureStyle {
    pub weight: u32,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}

/// Structured popup content; the widget decides how to render it.
#[derive(Debug, Clone)]
pub struct Popup {
    pub region: String,
    pub season: String,
    pub production: String,
}

#[derive(Debug, Clone)]
pub struct MapFeature {
    pub region: String,
    /// GeoJSON Feature object.
    pub geometry: Value,
    pub style: FeatureStyle,
    pub popup: Popup,
}

pub trait MapWidget: Send {
    /// Replace any previous layer with these features. Returns one shape
    /// handle per feature, in input order.
    fn replace_layer(&mut self, features: Vec<MapFeature>) -> Vec<ShapeId>;

    /// Fit the viewport to the bounds of the whole current layer.
    fn fit_layer_bounds(&mut self);

    /// Fit the viewport to the bounds of a single shape.
    fn fit_shape_bounds(&mut self, shape: ShapeId);
}
