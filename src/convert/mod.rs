//! Source format converters to Fragment
//!
//! Matchers run over a [`Fragment`](crate::node::Fragment). Hosts that
//! already own a parsed DOM can build one directly; this module turns raw
//! clipboard payloads into one.
//!
//! # Supported Formats
//!
//! | Format | Feature | Module | Function |
//! |--------|---------|--------|----------|
//! | HTML | `html-parser` | [`html`] | [`from_html()`] |

// =============================================================================
// HTML converter
// =============================================================================

#[cfg(feature = "html-parser")]
pub mod html;

#[cfg(feature = "html-parser")]
pub use self::html::from_html;
