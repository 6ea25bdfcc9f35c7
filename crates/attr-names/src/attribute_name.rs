use std::borrow::Cow;

use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

use crate::fingerprint::fingerprint;
use crate::mode::Mode;
use crate::names::{ATTRIBUTE_HASHES, ATTRIBUTE_NAMES};
use crate::ncname::is_ncname;

/// XML namespace, bound to the `xml` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// XLink namespace, used by SVG and MathML for cross-reference attributes.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// XMLNS namespace, the namespace of namespace declarations themselves.
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

const ALL_NO_NS: [&str; 4] = ["", "", "", ""];
const ALL_NO_PREFIX: [Option<&str>; 4] = [None, None, None, None];
const ALL_NCNAME: [bool; 4] = [true, true, true, true];
const ALL_NO_NCNAME: [bool; 4] = [false, false, false, false];

const fn same4(name: &'static str) -> [Cow<'static, str>; 4] {
    [
        Cow::Borrowed(name),
        Cow::Borrowed(name),
        Cow::Borrowed(name),
        Cow::Borrowed(name),
    ]
}

/// Declared content type of an attribute, in the sense of a DTD
/// attribute-list declaration. Only the `id` attribute is declared `ID`;
/// every other name, well-known or not, is `CDATA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Cdata,
    Id,
}

/// A resolved attribute name.
///
/// Holds, for each of the four resolution contexts in [`Mode`], the
/// namespace URI, local name, prefix, and derived qualified name that the
/// HTML5 tree-construction algorithm assigns to the attribute, together
/// with mode-independent classification flags.
///
/// > When the steps below require the user agent to adjust foreign
/// > attributes for a token, then, if any of the attributes on the token
/// > match the strings given in the first column of the following table,
/// > let the attribute be a namespaced attribute, with the prefix being the
/// > string given in the corresponding cell in the second column, the local
/// > name being the string given in the corresponding cell in the third
/// > column, and the namespace being the namespace given in the
/// > corresponding cell in the fourth column.
///
/// @see https://html.spec.whatwg.org/#adjust-foreign-attributes
///
/// Names found in the generated table are plain `static` data shared by
/// every parse for the life of the process. Names built dynamically are
/// owned by the caller that resolved them; two dynamic records for the same
/// spelling are distinct allocations and compare equivalent only through
/// [`AttributeName::equals_name`].
#[derive(Debug, Clone)]
pub struct AttributeName {
    content_type: ContentType,
    uri: [&'static str; 4],
    local: [Cow<'static, str>; 4],
    prefix: [Option<&'static str>; 4],
    qualified: [Cow<'static, str>; 4],
    ncname: [bool; 4],
    xmlns: bool,
}

impl AttributeName {
    /// Table row for a name with no special handling in any mode.
    pub(crate) const fn of(local: &'static str) -> Self {
        AttributeName {
            content_type: ContentType::Cdata,
            uri: ALL_NO_NS,
            local: same4(local),
            prefix: ALL_NO_PREFIX,
            qualified: same4(local),
            ncname: ALL_NCNAME,
            xmlns: false,
        }
    }

    /// The `id` attribute, the only name with `ID` content type.
    pub(crate) const fn id() -> Self {
        AttributeName {
            content_type: ContentType::Id,
            uri: ALL_NO_NS,
            local: same4("id"),
            prefix: ALL_NO_PREFIX,
            qualified: same4("id"),
            ncname: ALL_NCNAME,
            xmlns: false,
        }
    }

    /// Table row for a name whose SVG-mode spelling restores a camelCase
    /// form that HTML tokenization lowercased away, e.g. `viewbox` becoming
    /// `viewBox` on SVG elements.
    ///
    /// @see https://html.spec.whatwg.org/#adjust-svg-attributes
    pub(crate) const fn svg_camel(lower: &'static str, camel: &'static str) -> Self {
        AttributeName {
            content_type: ContentType::Cdata,
            uri: ALL_NO_NS,
            local: [
                Cow::Borrowed(lower),
                Cow::Borrowed(lower),
                Cow::Borrowed(camel),
                Cow::Borrowed(lower),
            ],
            prefix: ALL_NO_PREFIX,
            qualified: [
                Cow::Borrowed(lower),
                Cow::Borrowed(lower),
                Cow::Borrowed(camel),
                Cow::Borrowed(lower),
            ],
            ncname: ALL_NCNAME,
            xmlns: false,
        }
    }

    /// Table row for an `xml:*` or `xlink:*` attribute, which the foreign
    /// attribute adjustment splits into a prefix and local name in the
    /// MathML and SVG modes. The colonified spelling stays the local name
    /// in the Html and Foreign modes, where it is not a valid NCName.
    pub(crate) const fn adjusted(
        ns: &'static str,
        pfx: &'static str,
        colonified: &'static str,
        local: &'static str,
    ) -> Self {
        AttributeName {
            content_type: ContentType::Cdata,
            uri: ["", ns, ns, ""],
            local: [
                Cow::Borrowed(colonified),
                Cow::Borrowed(local),
                Cow::Borrowed(local),
                Cow::Borrowed(colonified),
            ],
            prefix: [None, Some(pfx), Some(pfx), None],
            qualified: same4(colonified),
            ncname: [false, true, true, false],
            xmlns: false,
        }
    }

    /// The bare `xmlns` attribute: the namespace declaration mechanism
    /// itself, placed in the XMLNS namespace with no prefix.
    pub(crate) const fn xmlns_declaration() -> Self {
        AttributeName {
            content_type: ContentType::Cdata,
            uri: ["", XMLNS_NAMESPACE, XMLNS_NAMESPACE, ""],
            local: same4("xmlns"),
            prefix: ALL_NO_PREFIX,
            qualified: same4("xmlns"),
            ncname: ALL_NO_NCNAME,
            xmlns: true,
        }
    }

    /// An `xmlns:*` declaration from the foreign-attribute table, currently
    /// only `xmlns:xlink`.
    pub(crate) const fn xmlns_prefixed(colonified: &'static str, local: &'static str) -> Self {
        AttributeName {
            content_type: ContentType::Cdata,
            uri: ["", XMLNS_NAMESPACE, XMLNS_NAMESPACE, ""],
            local: [
                Cow::Borrowed(colonified),
                Cow::Borrowed(local),
                Cow::Borrowed(local),
                Cow::Borrowed(colonified),
            ],
            prefix: [None, Some("xmlns"), Some("xmlns"), None],
            qualified: same4(colonified),
            ncname: ALL_NO_NCNAME,
            xmlns: true,
        }
    }

    /// The bare `lang` attribute, which gains the XML namespace and `xml`
    /// prefix only in the Foreign mode.
    pub(crate) const fn foreign_lang() -> Self {
        AttributeName {
            content_type: ContentType::Cdata,
            uri: ["", "", "", XML_NAMESPACE],
            local: same4("lang"),
            prefix: [None, None, None, Some("xml")],
            qualified: [
                Cow::Borrowed("lang"),
                Cow::Borrowed("lang"),
                Cow::Borrowed("lang"),
                Cow::Borrowed("xml:lang"),
            ],
            ncname: ALL_NCNAME,
            xmlns: false,
        }
    }

    /// Resolves an attribute name scanned by the tokenizer.
    ///
    /// `buf[offset..offset + length]` must hold the already-lowercased bytes
    /// of the name and `length` must be at least 1; an empty or out-of-range
    /// span is a caller bug and panics.
    ///
    /// The name's fingerprint narrows a binary search over the static table,
    /// but a fingerprint match alone is never trusted: the candidate's
    /// HTML-mode local name is compared byte-for-byte against the input, and
    /// on any mismatch the name is built dynamically instead. A silent
    /// collision introduced by a future table edit therefore costs an
    /// allocation, never a wrong record.
    pub fn from_buffer(
        buf: &[u8],
        offset: usize,
        length: usize,
        check_ncname: bool,
    ) -> Cow<'static, AttributeName> {
        let name = &buf[offset..offset + length];
        if let Ok(index) = ATTRIBUTE_HASHES.binary_search(&fingerprint(name)) {
            let known = &ATTRIBUTE_NAMES[index];
            if known.local(Mode::Html).as_bytes() == name {
                return Cow::Borrowed(known);
            }
        }
        Cow::Owned(Self::create(&String::from_utf8_lossy(name), check_ncname))
    }

    /// Builds a record for a name absent from the static table.
    ///
    /// Dynamic names never receive namespace adjustment: the local name is
    /// identical in all four modes with no namespace and no prefix. When
    /// `check_ncname` is false every NCName slot is marked valid - the
    /// caller has opted out because the surrounding grammar already
    /// guarantees well-formedness. When it is true, an `xmlns:`-prefixed
    /// name is never a valid NCName-bearing attribute, whatever follows the
    /// colon; any other name is validated against the NCName production.
    pub fn create(local_name: &str, check_ncname: bool) -> AttributeName {
        let xmlns = local_name.starts_with("xmlns:");
        let ncname = if !check_ncname {
            ALL_NCNAME
        } else if xmlns || !is_ncname(local_name) {
            ALL_NO_NCNAME
        } else {
            ALL_NCNAME
        };
        let local: Cow<'static, str> = Cow::Owned(local_name.to_string());
        AttributeName {
            content_type: ContentType::Cdata,
            uri: ALL_NO_NS,
            local: [local.clone(), local.clone(), local.clone(), local.clone()],
            prefix: ALL_NO_PREFIX,
            qualified: [local.clone(), local.clone(), local.clone(), local],
            ncname,
            xmlns,
        }
    }

    /// Namespace URI for the given mode; the empty string means no
    /// namespace.
    pub fn uri(&self, mode: Mode) -> &str {
        self.uri[mode as usize]
    }

    /// Local name for the given mode.
    pub fn local(&self, mode: Mode) -> &str {
        &self.local[mode as usize]
    }

    /// Namespace prefix for the given mode, if any.
    pub fn prefix(&self, mode: Mode) -> Option<&str> {
        self.prefix[mode as usize]
    }

    /// Qualified name for the given mode: the local name alone when there is
    /// no prefix, otherwise `prefix:local`.
    pub fn qualified_name(&self, mode: Mode) -> &str {
        &self.qualified[mode as usize]
    }

    /// Whether the qualified spelling for the given mode is a legal NCName.
    pub fn is_ncname(&self, mode: Mode) -> bool {
        self.ncname[mode as usize]
    }

    /// Whether this attribute is the `xmlns` declaration mechanism itself:
    /// the name `xmlns` or any `xmlns:*` form.
    pub fn is_xmlns(&self) -> bool {
        self.xmlns
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Whether this is one of the boolean presence-attributes, set by
    /// appearing at all rather than by their value, e.g. `checked`,
    /// `disabled`, `selected`.
    ///
    /// Membership is decided by the canonical HTML-mode local name so that
    /// dynamically built records classify the same as table rows.
    pub fn is_boolean(&self) -> bool {
        BOOLEAN_ATTRIBUTES.contains(self.local(Mode::Html))
    }

    /// Whether this attribute's value (not its name) is conventionally
    /// compared ASCII-case-insensitively, e.g. `type`, `dir`, `method`.
    pub fn is_case_folded(&self) -> bool {
        CASE_FOLDED_ATTRIBUTES.contains(self.local(Mode::Html))
    }

    /// Whether two records name the same attribute: their HTML-mode local
    /// names are equal as text. Freshly built dynamic records for a repeated
    /// unknown name are equivalent to each other and to any earlier
    /// resolution of the same spelling, despite being distinct allocations.
    pub fn equals_name(&self, other: &AttributeName) -> bool {
        self.local(Mode::Html) == other.local(Mode::Html)
    }
}

lazy_static! {
    static ref BOOLEAN_ATTRIBUTES: FxHashSet<&'static str> = [
        "active",
        "async",
        "autofocus",
        "autosubmit",
        "checked",
        "compact",
        "declare",
        "default",
        "defer",
        "disabled",
        "ismap",
        "multiple",
        "nohref",
        "noresize",
        "noshade",
        "nowrap",
        "readonly",
        "required",
        "selected",
    ]
    .into_iter()
    .collect();
    static ref CASE_FOLDED_ATTRIBUTES: FxHashSet<&'static str> = [
        "active",
        "align",
        "async",
        "autocomplete",
        "autofocus",
        "autosubmit",
        "checked",
        "clear",
        "compact",
        "dataformatas",
        "declare",
        "default",
        "defer",
        "dir",
        "disabled",
        "enctype",
        "frame",
        "ismap",
        "method",
        "multiple",
        "nohref",
        "noresize",
        "noshade",
        "nowrap",
        "readonly",
        "replace",
        "required",
        "rules",
        "scope",
        "scrolling",
        "selected",
        "shape",
        "step",
        "type",
        "valign",
        "valuetype",
    ]
    .into_iter()
    .collect();
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fingerprint::fingerprint;
    use quickcheck_macros::quickcheck;

    const ALL_MODES: [Mode; 4] = [Mode::Html, Mode::MathMl, Mode::Svg, Mode::Foreign];

    fn resolve(name: &[u8], check_ncname: bool) -> Cow<'static, AttributeName> {
        AttributeName::from_buffer(name, 0, name.len(), check_ncname)
    }

    #[test]
    fn table_is_strictly_ascending_and_collision_free() {
        for pair in ATTRIBUTE_HASHES.windows(2) {
            assert!(pair[0] < pair[1], "hashes out of order: {:?}", pair);
        }
    }

    #[test]
    fn table_hashes_match_table_rows() {
        for (hash, name) in ATTRIBUTE_HASHES.iter().zip(ATTRIBUTE_NAMES.iter()) {
            assert_eq!(
                *hash,
                fingerprint(name.local(Mode::Html).as_bytes()),
                "stale hash for {:?}",
                name.local(Mode::Html)
            );
        }
    }

    #[test]
    fn qualified_name_invariant_holds_for_every_row() {
        for name in ATTRIBUTE_NAMES.iter() {
            for mode in ALL_MODES {
                let expected = match name.prefix(mode) {
                    Some(prefix) => format!("{}:{}", prefix, name.local(mode)),
                    None => name.local(mode).to_string(),
                };
                assert_eq!(name.qualified_name(mode), expected);
            }
        }
    }

    #[test]
    fn every_table_row_resolves_to_itself() {
        for name in ATTRIBUTE_NAMES.iter() {
            let resolved = resolve(name.local(Mode::Html).as_bytes(), true);
            match resolved {
                Cow::Borrowed(found) => assert!(std::ptr::eq(found, name)),
                Cow::Owned(_) => panic!("{:?} missed the table", name.local(Mode::Html)),
            }
        }
    }

    #[test]
    fn resolution_honors_offset_and_length() {
        let buf = b"<input checked disabled>";
        let resolved = AttributeName::from_buffer(buf, 7, 7, true);
        assert_eq!(resolved.local(Mode::Html), "checked");
        assert!(matches!(resolved, Cow::Borrowed(_)));
    }

    #[test]
    fn fingerprint_collision_falls_back_to_dynamic() {
        // "blask" happens to share a fingerprint with the table row for
        // "class"; the textual comparison must reject it.
        assert_eq!(fingerprint(b"blask"), fingerprint(b"class"));
        let resolved = resolve(b"blask", true);
        assert!(matches!(resolved, Cow::Owned(_)));
        assert_eq!(resolved.local(Mode::Html), "blask");
        assert_eq!(resolved.uri(Mode::MathMl), "");
    }

    #[test]
    fn unknown_names_build_dynamic_records() {
        let resolved = resolve(b"data-foo", true);
        assert!(matches!(resolved, Cow::Owned(_)));
        for mode in ALL_MODES {
            assert_eq!(resolved.local(mode), "data-foo");
            assert_eq!(resolved.qualified_name(mode), "data-foo");
            assert_eq!(resolved.uri(mode), "");
            assert_eq!(resolved.prefix(mode), None);
            assert!(resolved.is_ncname(mode));
        }
        assert!(!resolved.is_xmlns());
        assert_eq!(resolved.content_type(), ContentType::Cdata);
    }

    #[test]
    fn dynamic_xmlns_names_are_never_ncnames() {
        let resolved = resolve(b"xmlns:foo", true);
        assert!(resolved.is_xmlns());
        for mode in ALL_MODES {
            assert!(!resolved.is_ncname(mode));
            assert_eq!(resolved.prefix(mode), None);
            assert_eq!(resolved.uri(mode), "");
        }
    }

    #[test]
    fn skipping_ncname_validation_marks_all_modes_valid() {
        let name = AttributeName::create("not a name", false);
        for mode in ALL_MODES {
            assert!(name.is_ncname(mode));
        }
        let checked = AttributeName::create("not a name", true);
        for mode in ALL_MODES {
            assert!(!checked.is_ncname(mode));
        }
    }

    #[test]
    fn xlink_href_is_adjusted_in_foreign_content() {
        let resolved = resolve(b"xlink:href", true);
        assert!(matches!(resolved, Cow::Borrowed(_)));
        assert_eq!(resolved.uri(Mode::MathMl), XLINK_NAMESPACE);
        assert_eq!(resolved.uri(Mode::Svg), XLINK_NAMESPACE);
        assert_eq!(resolved.uri(Mode::Html), "");
        assert_eq!(resolved.prefix(Mode::MathMl), Some("xlink"));
        assert_eq!(resolved.prefix(Mode::Svg), Some("xlink"));
        assert_eq!(resolved.local(Mode::MathMl), "href");
        assert_eq!(resolved.local(Mode::Svg), "href");
        assert_eq!(resolved.local(Mode::Html), "xlink:href");
        assert_eq!(resolved.qualified_name(Mode::Html), "xlink:href");
        assert_eq!(resolved.qualified_name(Mode::Svg), "xlink:href");
        assert!(!resolved.is_ncname(Mode::Html));
        assert!(resolved.is_ncname(Mode::Svg));
    }

    #[test]
    fn xml_lang_is_adjusted_in_foreign_content() {
        let resolved = resolve(b"xml:lang", true);
        assert_eq!(resolved.uri(Mode::MathMl), XML_NAMESPACE);
        assert_eq!(resolved.prefix(Mode::Svg), Some("xml"));
        assert_eq!(resolved.local(Mode::Svg), "lang");
        assert_eq!(resolved.qualified_name(Mode::Svg), "xml:lang");
        assert_eq!(resolved.local(Mode::Foreign), "xml:lang");
        assert_eq!(resolved.prefix(Mode::Foreign), None);
    }

    #[test]
    fn bare_lang_gains_xml_namespace_only_in_foreign_mode() {
        let resolved = resolve(b"lang", true);
        for mode in [Mode::Html, Mode::MathMl, Mode::Svg] {
            assert_eq!(resolved.uri(mode), "");
            assert_eq!(resolved.prefix(mode), None);
            assert_eq!(resolved.qualified_name(mode), "lang");
        }
        assert_eq!(resolved.uri(Mode::Foreign), XML_NAMESPACE);
        assert_eq!(resolved.prefix(Mode::Foreign), Some("xml"));
        assert_eq!(resolved.qualified_name(Mode::Foreign), "xml:lang");
        assert_eq!(resolved.local(Mode::Foreign), "lang");
    }

    #[test]
    fn xmlns_family_is_flagged() {
        let xmlns = resolve(b"xmlns", true);
        assert!(xmlns.is_xmlns());
        assert_eq!(xmlns.uri(Mode::Svg), XMLNS_NAMESPACE);
        assert_eq!(xmlns.prefix(Mode::Svg), None);
        assert!(!xmlns.is_ncname(Mode::Svg));

        let xmlns_xlink = resolve(b"xmlns:xlink", true);
        assert!(xmlns_xlink.is_xmlns());
        assert_eq!(xmlns_xlink.uri(Mode::MathMl), XMLNS_NAMESPACE);
        assert_eq!(xmlns_xlink.prefix(Mode::MathMl), Some("xmlns"));
        assert_eq!(xmlns_xlink.local(Mode::MathMl), "xlink");
        assert_eq!(xmlns_xlink.qualified_name(Mode::MathMl), "xmlns:xlink");
    }

    #[test]
    fn svg_camel_case_spellings_apply_to_svg_mode_only() {
        let resolved = resolve(b"viewbox", true);
        assert_eq!(resolved.local(Mode::Svg), "viewBox");
        assert_eq!(resolved.local(Mode::Html), "viewbox");
        assert_eq!(resolved.local(Mode::MathMl), "viewbox");
        assert_eq!(resolved.qualified_name(Mode::Svg), "viewBox");
    }

    #[test]
    fn id_has_id_content_type() {
        let id = resolve(b"id", true);
        assert_eq!(id.content_type(), ContentType::Id);
        let class = resolve(b"class", true);
        assert_eq!(class.content_type(), ContentType::Cdata);
    }

    #[test]
    fn equals_name_spans_table_and_dynamic_records() {
        let first = AttributeName::create("data-widget", true);
        let second = AttributeName::create("data-widget", true);
        assert!(first.equals_name(&second));
        assert!(!first.equals_name(&AttributeName::create("data-gadget", true)));

        let known = resolve(b"checked", true);
        let dynamic = AttributeName::create("checked", true);
        assert!(known.equals_name(&dynamic));
    }

    #[test]
    fn boolean_and_case_folded_sets() {
        assert!(resolve(b"checked", true).is_boolean());
        assert!(resolve(b"checked", true).is_case_folded());
        assert!(resolve(b"type", true).is_case_folded());
        assert!(!resolve(b"type", true).is_boolean());
        assert!(!resolve(b"href", true).is_boolean());
        assert!(!resolve(b"href", true).is_case_folded());

        // Classification follows the local name, not the allocation.
        assert!(AttributeName::create("selected", true).is_boolean());
    }

    #[derive(Clone, Debug)]
    struct LowercaseName(String);

    impl quickcheck::Arbitrary for LowercaseName {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            use quickcheck::Arbitrary;

            let alphabet: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";
            let len = 1 + usize::arbitrary(g) % 14;
            LowercaseName(
                (0..len)
                    .map(|_| *g.choose(alphabet).unwrap() as char)
                    .collect(),
            )
        }
    }

    #[quickcheck]
    fn resolution_round_trips_arbitrary_lowercase_names(name: LowercaseName) -> bool {
        let resolved = resolve(name.0.as_bytes(), true);
        let again = resolve(name.0.as_bytes(), true);
        resolved.equals_name(&again)
            && ALL_MODES.iter().all(|&mode| {
                let qualified = match resolved.prefix(mode) {
                    Some(prefix) => format!("{}:{}", prefix, resolved.local(mode)),
                    None => resolved.local(mode).to_string(),
                };
                resolved.local(Mode::Html) == name.0 && resolved.qualified_name(mode) == qualified
            })
    }
}
