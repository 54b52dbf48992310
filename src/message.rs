//! Content items. Anything `Display` can be logged; values that only
//! implement `Debug` go through [`Dbg`].

use std::fmt;

/// The one capability the renderer needs from a content item.
pub trait Printable {
    fn printable(&self) -> String;
}

impl<T: fmt::Display + ?Sized> Printable for T {
    fn printable(&self) -> String {
        self.to_string()
    }
}

/// Fallback for values without a `Display` impl: renders their `Debug` form.
#[derive(Clone, Copy)]
pub struct Dbg<T>(pub T);

impl<T: fmt::Debug> fmt::Display for Dbg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Several content items logged as one body, joined by single spaces.
///
/// Usually built by the `info!`/`warn!`/... macros:
///
/// ```
/// use taglog::{Message, Printable};
///
/// let msg = Message::new().item(&"copied").item(&3).item(&"files");
/// assert_eq!(msg.printable(), "copied 3 files");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    items: Vec<String>,
}

impl Message {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn item(mut self, item: &dyn Printable) -> Self {
        self.items.push(item.printable());
        self
    }

    pub fn push(&mut self, item: &dyn Printable) {
        self.items.push(item.printable());
    }

    #[must_use]
    pub fn from_items(items: &[&dyn Printable]) -> Self {
        Self {
            items: items.iter().map(|item| item.printable()).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.items.join(" "))
    }
}
