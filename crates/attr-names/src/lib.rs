//! Attribute-name resolution for an HTML5 parser.
//!
//! The tokenizer hands this crate the lowercased bytes of an attribute name
//! and receives an immutable [`AttributeName`] record describing how that
//! name behaves in each of the four parsing contexts of [`Mode`]: plain
//! HTML, MathML content, SVG content, and foreign content embedded in an
//! HTML document. Well-known names come from a pre-allocated static table
//! keyed by a fingerprint; anything else is built on the fly.
//!
//! @see https://html.spec.whatwg.org/#adjust-foreign-attributes

mod attribute_name;
mod fingerprint;
mod mode;
mod names;
mod ncname;

pub use attribute_name::{
    AttributeName, ContentType, XLINK_NAMESPACE, XMLNS_NAMESPACE, XML_NAMESPACE,
};
pub use mode::Mode;
pub use ncname::is_ncname;
