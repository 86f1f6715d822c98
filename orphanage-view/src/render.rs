//! Pure render function: state in, page out
//!
//! Must stay free of side effects; diagnostics belong to the fetch
//! completion path in the controller.

use shared::Orphanage;

use crate::controller::DetailState;
use crate::map::{LatLng, MapView, directions_url};
use crate::page::{
    DetailPage, OpeningHours, Page, PrimaryImage, ROUTES_LINK_TEXT, RoutesLink, Thumbnail,
    WEEKDAYS_LABEL, WeekendNotice,
};

/// Settings that affect rendering but not state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub mapbox_token: String,
}

pub fn render(state: &DetailState, config: &RenderConfig) -> Page {
    match &state.record {
        None => Page::Loading,
        Some(record) => Page::Detail(Box::new(render_detail(
            record,
            state.active_image_index,
            config,
        ))),
    }
}

fn render_detail(record: &Orphanage, active_index: usize, config: &RenderConfig) -> DetailPage {
    // Clamp so a stale index can never point past the end
    let active = active_index.min(record.images.len().saturating_sub(1));

    let primary_image = record.image(active).map(|image| PrimaryImage {
        src: image.path.clone(),
        alt: record.name.clone(),
    });

    let thumbnails = record
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| Thumbnail {
            key: image.id,
            index,
            src: image.path.clone(),
            alt: record.name.clone(),
            active: index == active,
        })
        .collect();

    let (latitude, longitude) = record.coordinates();
    let center = LatLng::new(latitude, longitude);

    DetailPage {
        primary_image,
        thumbnails,
        name: record.name.clone(),
        about: record.about.clone(),
        map: MapView::static_at(center, &config.mapbox_token),
        routes_link: RoutesLink {
            href: directions_url(center),
            text: ROUTES_LINK_TEXT,
        },
        instructions: record.instructions.clone(),
        opening_hours: OpeningHours {
            label: WEEKDAYS_LABEL,
            hours: record.opening_hours.clone(),
        },
        weekend: WeekendNotice::from_flag(record.open_on_weekends),
    }
}
