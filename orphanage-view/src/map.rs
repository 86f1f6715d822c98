//! Static map description and external routing link
//!
//! The view never drives a map widget itself. It hands the widget a
//! [`MapView`]: where to center, how far to zoom, and which interactions
//! stay off.

use serde::Serialize;

/// Fixed zoom level of the detail map
pub const DETAIL_MAP_ZOOM: u8 = 10;

/// Mapbox raster tile template; the widget fills `{z}/{x}/{y}` and the
/// access token is appended to the query
const TILE_URL_TEMPLATE: &str =
    "https://api.mapbox.com/styles/v1/mapbox/light-v10/tiles/256/{z}/{x}/{y}@2x?access_token=";

/// Directions endpoint of the external routing service
const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1&destination=";

/// Geographic point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// `"{lat},{lng}"` using shortest round-trip float formatting
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Interaction switches handed to the map widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapInteractions {
    pub dragging: bool,
    pub touch_zoom: bool,
    pub scroll_wheel_zoom: bool,
    pub double_click_zoom: bool,
    pub zoom_control: bool,
}

impl MapInteractions {
    /// Everything off: the map is a picture
    pub const fn disabled() -> Self {
        Self {
            dragging: false,
            touch_zoom: false,
            scroll_wheel_zoom: false,
            double_click_zoom: false,
            zoom_control: false,
        }
    }
}

/// Single marker on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapMarker {
    pub position: LatLng,
    pub interactive: bool,
}

/// Declarative map for the detail page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub interactions: MapInteractions,
    pub marker: MapMarker,
    pub tile_url: String,
}

impl MapView {
    /// Non-interactive map centered on `center` with a marker on the same spot
    pub fn static_at(center: LatLng, mapbox_token: &str) -> Self {
        Self {
            center,
            zoom: DETAIL_MAP_ZOOM,
            interactions: MapInteractions::disabled(),
            marker: MapMarker {
                position: center,
                interactive: false,
            },
            tile_url: tile_url(mapbox_token),
        }
    }
}

/// Tile URL template with the access token appended
pub fn tile_url(mapbox_token: &str) -> String {
    format!("{}{}", TILE_URL_TEMPLATE, mapbox_token)
}

/// "See routes" link for a destination
pub fn directions_url(destination: LatLng) -> String {
    format!("{}{}", DIRECTIONS_BASE_URL, destination.to_query_value())
}
