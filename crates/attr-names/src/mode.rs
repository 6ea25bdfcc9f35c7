/// Attribute-name resolution context.
///
/// The same attribute spelling carries different namespace information
/// depending on where the tree builder encounters it: ordinary HTML content,
/// MathML or SVG foreign content, or foreign content embedded in an HTML
/// document, where the "adjust foreign attributes" step applies to the
/// `xml:`, `xlink:`, and `xmlns:` families.
///
/// @see https://html.spec.whatwg.org/#adjust-foreign-attributes
///
/// The discriminants index directly into the per-mode arrays of
/// `AttributeName`; the 0..=3 ordering is load-bearing and mirrors the
/// column order of the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Html = 0,
    MathMl = 1,
    Svg = 2,
    Foreign = 3,
}
