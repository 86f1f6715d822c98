//! HTML serialization of a [`Page`]
//!
//! Markup mirrors the web page the view replaces, so existing
//! stylesheets keep applying. Map options travel as `data-*` attributes
//! for whatever widget script picks them up.
//!
//! The markup lives in a [Handlebars](https://handlebarsjs.com/) template;
//! every `{{value}}` is HTML-escaped by the registry.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::ViewResult;
use crate::page::{DetailPage, LOADING_TEXT, Page, WeekendNotice};

const LOADING_TEMPLATE: &str = "loading";
const DETAIL_TEMPLATE: &str = "detail";

/// Data handed to the detail template
#[derive(Serialize)]
struct DetailContext<'a> {
    page: &'a DetailPage,
    map_center: String,
    marker_position: String,
    weekend_class: &'static str,
    weekend_heading: &'static str,
    weekend_tail: &'static str,
}

impl<'a> DetailContext<'a> {
    fn new(page: &'a DetailPage) -> Self {
        let weekend_class = match page.weekend {
            WeekendNotice::Open => "open-on-weekends",
            WeekendNotice::Closed => "open-on-weekends closed-on-weekends",
        };
        let [weekend_heading, weekend_tail] = page.weekend.lines();
        Self {
            page,
            // Same float formatting as the routes link
            map_center: page.map.center.to_query_value(),
            marker_position: page.map.marker.position.to_query_value(),
            weekend_class,
            weekend_heading,
            weekend_tail,
        }
    }
}

#[derive(Serialize)]
struct LoadingContext {
    text: &'static str,
}

/// Template registry for page markup
pub struct HtmlRenderer<'reg> {
    hb: Handlebars<'reg>,
}

impl HtmlRenderer<'_> {
    /// Compile the page templates
    pub fn new() -> ViewResult<Self> {
        let mut hb = Handlebars::new();
        hb.register_template_string(LOADING_TEMPLATE, "<p>{{text}}</p>")?;
        hb.register_template_string(DETAIL_TEMPLATE, include_str!("../templates/detail.html.hbs"))?;
        Ok(Self { hb })
    }

    pub fn render(&self, page: &Page) -> ViewResult<String> {
        let html = match page {
            Page::Loading => self
                .hb
                .render(LOADING_TEMPLATE, &LoadingContext { text: LOADING_TEXT })?,
            Page::Detail(detail) => self
                .hb
                .render(DETAIL_TEMPLATE, &DetailContext::new(detail))?,
        };
        Ok(html)
    }
}

/// Render one page with a freshly compiled registry
pub fn render_html(page: &Page) -> ViewResult<String> {
    HtmlRenderer::new()?.render(page)
}
