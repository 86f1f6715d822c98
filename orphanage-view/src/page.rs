//! Rendered page model
//!
//! Output of [`crate::render::render`]. Serializers ([`crate::html`],
//! [`crate::text`]) and front-end bridges consume it; nothing here knows
//! how it was produced.

use serde::Serialize;

use crate::map::MapView;

/// Loading indicator text
pub const LOADING_TEXT: &str = "Loading...";

/// Label in front of the weekday opening hours
pub const WEEKDAYS_LABEL: &str = "Monday to Friday";

/// Text of the routes link
pub const ROUTES_LINK_TEXT: &str = "See routes on Google Maps";

/// Whole page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Page {
    /// No record yet (or the fetch failed)
    Loading,
    Detail(Box<DetailPage>),
}

impl Page {
    pub fn is_loading(&self) -> bool {
        matches!(self, Page::Loading)
    }

    pub fn detail(&self) -> Option<&DetailPage> {
        match self {
            Page::Loading => None,
            Page::Detail(d) => Some(&**d),
        }
    }
}

/// Image shown at full size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryImage {
    pub src: String,
    pub alt: String,
}

/// Thumbnail button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    /// Stable key (image id)
    pub key: i64,
    /// Position to pass back to `select_image`
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub active: bool,
}

/// Weekday opening hours block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpeningHours {
    pub label: &'static str,
    pub hours: String,
}

/// Weekend availability notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendNotice {
    Open,
    Closed,
}

impl WeekendNotice {
    pub fn from_flag(open_on_weekends: bool) -> Self {
        if open_on_weekends {
            WeekendNotice::Open
        } else {
            WeekendNotice::Closed
        }
    }

    /// Text lines of the notice
    pub fn lines(&self) -> [&'static str; 2] {
        match self {
            WeekendNotice::Open => ["We are open", "on Weekends!"],
            WeekendNotice::Closed => ["Sorry, We are not open", "on Weekends!"],
        }
    }
}

/// Routes link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutesLink {
    pub href: String,
    pub text: &'static str,
}

/// Loaded detail page, fields in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPage {
    pub primary_image: Option<PrimaryImage>,
    pub thumbnails: Vec<Thumbnail>,
    pub name: String,
    pub about: String,
    pub map: MapView,
    pub routes_link: RoutesLink,
    pub instructions: String,
    pub opening_hours: OpeningHours,
    pub weekend: WeekendNotice,
}

impl DetailPage {
    /// Thumbnail currently marked active
    pub fn active_thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnails.iter().find(|t| t.active)
    }
}
