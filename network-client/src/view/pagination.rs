//! Prev/next navigation controls
//!
//! Each visible control holds the loader invocation it will trigger, built
//! from the loader binding passed to [`Pagination::update`]. The server's
//! has-next/has-previous flags are trusted as-is.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination<A> {
    current_page: Option<u32>,
    previous: Option<A>,
    next: Option<A>,
}

impl<A: Clone> Pagination<A> {
    /// Both controls hidden, no page loaded
    pub fn new() -> Self {
        Self {
            current_page: None,
            previous: None,
            next: None,
        }
    }

    /// Show the page just loaded and rebind the controls to `loader`
    pub fn update<F>(&mut self, current_page: u32, has_next: bool, has_previous: bool, loader: F)
    where
        F: Fn(u32) -> A,
    {
        self.current_page = Some(current_page);
        self.previous = has_previous.then(|| loader(current_page.saturating_sub(1)));
        self.next = has_next.then(|| loader(current_page.saturating_add(1)));
    }

    pub fn current_page(&self) -> Option<u32> {
        self.current_page
    }

    pub fn is_previous_visible(&self) -> bool {
        self.previous.is_some()
    }

    pub fn is_next_visible(&self) -> bool {
        self.next.is_some()
    }

    /// Loader invocation bound to the previous control, if shown
    pub fn activate_previous(&self) -> Option<A> {
        self.previous.clone()
    }

    /// Loader invocation bound to the next control, if shown
    pub fn activate_next(&self) -> Option<A> {
        self.next.clone()
    }
}

impl<A: Clone> Default for Pagination<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Display for Pagination<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(page) = self.current_page else {
            return Ok(());
        };
        if self.previous.is_some() {
            write!(f, "« Previous  ")?;
        }
        write!(f, "Page {}", page)?;
        if self.next.is_some() {
            write!(f, "  Next »")?;
        }
        writeln!(f)
    }
}
