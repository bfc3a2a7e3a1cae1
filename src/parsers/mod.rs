pub mod html;
pub mod unescape;

#[cfg(test)]
mod tests;

pub use html::{Anchor, AnchorView, Document};
pub use unescape::{InvalidReference, unescape};
