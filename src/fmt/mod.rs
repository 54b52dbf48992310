//! Terminal styling: colours, attributes, inline markup, icons and colour
//! capability detection. The rest of the crate only talks to a [`Painter`].

mod color;
mod icon;
mod paint;
pub mod style;
mod target;

pub use color::{Color, colorize};
pub use icon::Icon;
pub use paint::{Painter, hl};
pub use style::{Segment, Style};
pub use target::{ColorMode, OutputTarget};
