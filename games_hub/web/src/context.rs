//! Capabilities shared with components through the Dioxus context.
//!
//! Components fall back to the browser implementations when no provider is
//! mounted, so rendering a component on its own still works.

use crate::browser::BrowserOpener;
use dioxus::prelude::*;
use games_hub_core::{Clock, SystemClock, UrlOpener};
use std::rc::Rc;

/// Opens live games in a new browsing context.
#[derive(Clone)]
pub struct Opener(Rc<dyn UrlOpener>);

impl Opener {
    pub fn new(opener: impl UrlOpener + 'static) -> Self {
        Opener(Rc::new(opener))
    }

    pub fn browser() -> Self {
        Opener::new(BrowserOpener)
    }

    /// Reads the opener from context, or the browser one if none is provided.
    pub fn from_context() -> Self {
        try_consume_context::<Opener>().unwrap_or_else(Opener::browser)
    }

    pub fn get(&self) -> &dyn UrlOpener {
        self.0.as_ref()
    }
}

/// Supplies the year printed in the footer.
#[derive(Clone)]
pub struct SiteClock(Rc<dyn Clock>);

impl SiteClock {
    pub fn new(clock: impl Clock + 'static) -> Self {
        SiteClock(Rc::new(clock))
    }

    pub fn system() -> Self {
        SiteClock::new(SystemClock)
    }

    pub fn from_context() -> Self {
        try_consume_context::<SiteClock>().unwrap_or_else(SiteClock::system)
    }

    pub fn current_year(&self) -> i32 {
        self.0.current_year()
    }
}
