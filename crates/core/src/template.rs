//! Page rendering with Tera.
//!
//! The site pages carry no dynamic data; each route maps to one template
//! and a fixed title.

use crate::error::{Error, Result};
use tera::{Context, Tera};

/// A static site page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    MyTrips,
    TravelInformation,
    Destinations,
    ExecutiveClub,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::MyTrips,
        Page::TravelInformation,
        Page::Destinations,
        Page::ExecutiveClub,
    ];

    /// Template file name, relative to the template root.
    pub fn template(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::MyTrips => "my-trips.html",
            Page::TravelInformation => "travel-information.html",
            Page::Destinations => "destinations.html",
            Page::ExecutiveClub => "executive-club.html",
        }
    }

    /// Route the page is served on.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::MyTrips => "/my-trips",
            Page::TravelInformation => "/travel-information",
            Page::Destinations => "/destinations",
            Page::ExecutiveClub => "/executive-club",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::MyTrips => "My Trips",
            Page::TravelInformation => "Travel Information",
            Page::Destinations => "Destinations",
            Page::ExecutiveClub => "Executive Club",
        }
    }
}

/// Renders [`Page`]s from a loaded template set.
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Load every template matching `glob`, e.g. `templates/**/*.html`.
    pub fn from_glob(glob: &str) -> Result<Self> {
        let tera = Tera::new(glob)?;
        let renderer = Self { tera };

        let missing = renderer.missing_pages();
        if !missing.is_empty() {
            tracing::warn!(glob = %glob, missing = ?missing, "Some page templates are missing");
        }
        Ok(renderer)
    }

    /// Build from in-memory `(name, source)` pairs.
    pub fn from_raw(templates: &[(&str, &str)]) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied())?;
        Ok(Self { tera })
    }

    /// Pages whose template was not loaded.
    pub fn missing_pages(&self) -> Vec<Page> {
        let loaded: Vec<&str> = self.tera.get_template_names().collect();
        Page::ALL
            .into_iter()
            .filter(|p| !loaded.contains(&p.template()))
            .collect()
    }

    pub fn render(&self, page: Page) -> Result<String> {
        let mut context = Context::new();
        context.insert("page_title", page.title());
        context.insert("page_path", page.path());

        self.tera
            .render(page.template(), &context)
            .map_err(|e| Error::template(format!("{}: {}", page.template(), e)))
    }
}
