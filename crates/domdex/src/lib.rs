//! domdex
//!
//! Render a view once, index it once, then assert on its elements as many
//! times as you like.
//!
//! Every element is indexed under seven independent keys (see [`LookupKind`])
//! and each index can be read three ways:
//!
//! - [`GetAll`]: every match, in document order
//! - [`GetFirst`]: the first match, if any
//! - [`GetOnly`]: the single match, failing if the key is ambiguous
//!
//! # Example
//! ```rust
//! use domdex::{Getter, Template};
//!
//! let page = Template::from_markup(r#"<div id="div-1">Hello</div>"#);
//! let div = page.get_only().by_id("div-1")?.expect("present");
//! assert_eq!(div.text(), "Hello");
//! # Ok::<(), domdex::LookupError>(())
//! ```

mod config;
mod element;
mod error;
mod getters;
mod lookup;
pub mod render;
mod template;

pub use config::Config;
pub use element::Element;
pub use error::{LookupError, RenderError};
pub use getters::{GetAll, GetFirst, GetOnly, Getter};
pub use lookup::{Lookup, LookupKind};
pub use render::{RenderedView, Renderer, ViewRenderer};
pub use template::{RenderedTemplate, Template};

// Re-export sub-crates for advanced usage
pub use domdex_dom as dom;
pub use domdex_html as html;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
