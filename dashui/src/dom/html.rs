// HTML fragment parsing and serialization
// Tolerant parser for trusted markup (markdown output, component templates).
// Unknown or mismatched closing tags are dropped, unterminated markup is text.

use super::{Document, NodeId, NodeKind};
use std::fmt::Write;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// Contents are not markup
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];
// Contents are not markup, but entities still decode
const ESCAPABLE_RAW_TEXT_ELEMENTS: &[&str] = &["textarea", "title"];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

struct StartTag {
    name: String,
    attributes: Vec<(String, String)>,
    self_closing: bool,
}

/// Parse `source` and append the resulting nodes to `parent`.
pub fn parse_into(doc: &mut Document, parent: NodeId, source: &str) {
    let mut open = vec![parent];
    let mut rest = source;

    while !rest.is_empty() {
        let current = open.last().copied().unwrap_or(parent);

        if let Some(after) = rest.strip_prefix("<!--") {
            rest = after.find("-->").map_or("", |end| &after[end + 3..]);
            continue;
        }

        if let Some(after) = rest.strip_prefix("</") {
            let end = after.find('>').unwrap_or(after.len());
            let name = after[..end].trim().to_ascii_lowercase();
            rest = after.get(end + 1..).unwrap_or("");
            // Index 0 is the fragment parent, which a closing tag never closes
            if let Some(position) = open.iter().rposition(|id| doc.tag(*id) == Some(name.as_str()))
            {
                if position > 0 {
                    open.truncate(position);
                }
            }
            continue;
        }

        if rest.starts_with("<!") || rest.starts_with("<?") {
            let end = rest.find('>').map_or(rest.len(), |end| end + 1);
            rest = &rest[end..];
            continue;
        }

        if let Some((tag, consumed)) = parse_start_tag(rest) {
            rest = &rest[consumed..];
            let element = doc.create_element(&tag.name);
            for (name, value) in &tag.attributes {
                doc.set_attribute(element, name, value);
            }
            doc.append_child(current, element);

            let raw = RAW_TEXT_ELEMENTS.contains(&tag.name.as_str());
            let escapable = ESCAPABLE_RAW_TEXT_ELEMENTS.contains(&tag.name.as_str());
            if tag.self_closing || is_void(&tag.name) {
                continue;
            }
            if raw || escapable {
                let (text, remaining) = split_raw_text(rest, &tag.name);
                let text = if escapable {
                    decode_entities(text)
                } else {
                    text.to_string()
                };
                if !text.is_empty() {
                    let text_node = doc.create_text(text);
                    doc.append_child(element, text_node);
                }
                rest = remaining;
            } else {
                open.push(element);
            }
            continue;
        }

        let end = text_end(rest);
        let text_node = doc.create_text(decode_entities(&rest[..end]));
        doc.append_child(current, text_node);
        rest = &rest[end..];
    }
}

// The first byte is always text: either not '<' or a '<' that failed to open
// a tag. Stops at the next '<' that could begin markup.
fn text_end(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        if bytes[i] == b'<'
            && bytes
                .get(i + 1)
                .is_some_and(|b| b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?'))
        {
            return i;
        }
        i += 1;
    }
    bytes.len()
}

fn parse_start_tag(rest: &str) -> Option<(StartTag, usize)> {
    let bytes = rest.as_bytes();
    let len = bytes.len();
    if bytes.first() != Some(&b'<') || !bytes.get(1).is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }

    let mut i = 1;
    while i < len && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'-' | b':')) {
        i += 1;
    }
    let name = rest[1..i].to_ascii_lowercase();
    let mut attributes = Vec::new();

    loop {
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= len {
            return None;
        }
        match bytes[i] {
            b'>' => {
                let tag = StartTag { name, attributes, self_closing: false };
                return Some((tag, i + 1));
            }
            b'/' if bytes.get(i + 1) == Some(&b'>') => {
                let tag = StartTag { name, attributes, self_closing: true };
                return Some((tag, i + 2));
            }
            b'/' | b'=' => {
                i += 1;
                continue;
            }
            _ => {}
        }

        let start = i;
        while i < len
            && !bytes[i].is_ascii_whitespace()
            && !matches!(bytes[i], b'=' | b'>' | b'/')
        {
            i += 1;
        }
        let attribute = rest[start..i].to_ascii_lowercase();

        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i < len && bytes[i] == b'=' {
            i += 1;
            while i < len && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i >= len {
                return None;
            }
            let value = match bytes[i] {
                quote @ (b'"' | b'\'') => {
                    let close = rest[i + 1..].find(quote as char)?;
                    let value = &rest[i + 1..i + 1 + close];
                    i += close + 2;
                    value
                }
                _ => {
                    let start = i;
                    while i < len && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                        i += 1;
                    }
                    &rest[start..i]
                }
            };
            attributes.push((attribute, decode_entities(value)));
        } else {
            attributes.push((attribute, String::new()));
        }
    }
}

fn split_raw_text<'a>(rest: &'a str, tag: &str) -> (&'a str, &'a str) {
    // ASCII lowercasing keeps byte offsets intact
    let lower = rest.to_ascii_lowercase();
    match lower.find(&format!("</{tag}")) {
        Some(position) => {
            let after = &rest[position..];
            let skip = after.find('>').map_or(after.len(), |end| end + 1);
            (&rest[..position], &after[skip..])
        }
        None => (rest, ""),
    }
}

/// Decode named and numeric character references. Unknown references are
/// left as written.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest
            .find(';')
            .filter(|semi| *semi <= 10)
            .and_then(|semi| lookup_entity(&rest[1..semi]).map(|ch| (ch, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn lookup_entity(name: &str) -> Option<char> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(code);
    }
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "hellip" => '…',
        "mdash" => '—',
        "ndash" => '–',
        "laquo" => '«',
        "raquo" => '»',
        "times" => '×',
        "deg" => '°',
        "euro" => '€',
        _ => return None,
    };
    Some(ch)
}

pub fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

pub fn escape_attribute(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

/// Serialize `node` the way `outerHTML` does: attributes in insertion order,
/// no closing tag for void elements.
pub fn serialize(doc: &Document, node: NodeId, out: &mut String) {
    match doc.kind(node) {
        None => {}
        Some(NodeKind::Text(text)) => {
            let raw_parent = doc
                .parent(node)
                .and_then(|parent| doc.tag(parent))
                .is_some_and(|tag| RAW_TEXT_ELEMENTS.contains(&tag));
            if raw_parent {
                out.push_str(text);
            } else {
                escape_text(text, out);
            }
        }
        Some(NodeKind::Element(element)) => {
            let _ = write!(out, "<{}", element.tag());
            for (name, value) in element.attributes() {
                let _ = write!(out, " {name}=\"");
                escape_attribute(value, out);
                out.push('"');
            }
            out.push('>');
            if is_void(element.tag()) {
                return;
            }
            for child in doc.children(node) {
                serialize(doc, *child, out);
            }
            let _ = write!(out, "</{}>", element.tag());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(markup: &str) -> String {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        parse_into(&mut doc, div, markup);
        doc.inner_html(div)
    }

    #[test]
    fn nested_elements_and_attributes() {
        assert_eq!(
            round_trip(r#"<p class="lead">Hi <a href='/x'>there</a></p>"#),
            r#"<p class="lead">Hi <a href="/x">there</a></p>"#
        );
    }

    #[test]
    fn void_and_self_closing_elements_have_no_children() {
        assert_eq!(round_trip("<hr />\n<p>a<br>b</p>"), "<hr>\n<p>a<br>b</p>");
    }

    #[test]
    fn boolean_attributes_serialize_empty() {
        assert_eq!(
            round_trip("<input type=radio checked>"),
            r#"<input type="radio" checked="">"#
        );
    }

    #[test]
    fn entities_decode_then_reescape() {
        let mut doc = Document::new();
        let nodes = doc.parse_fragment("<small>&copy; 2024 &amp; co &#x41;</small>");
        assert_eq!(doc.text_content(nodes[0]), "© 2024 & co A");
        assert_eq!(doc.outer_html(nodes[0]), "<small>© 2024 &amp; co A</small>");
    }

    #[test]
    fn stray_angle_bracket_is_text() {
        assert_eq!(round_trip("1 < 2 and 3 > 2"), "1 &lt; 2 and 3 &gt; 2");
    }

    #[test]
    fn mismatched_close_tag_is_ignored() {
        assert_eq!(round_trip("<p>one</span> two</p>"), "<p>one two</p>");
    }

    #[test]
    fn unclosed_elements_close_at_fragment_end() {
        assert_eq!(round_trip("<ul><li>a<li>b"), "<ul><li>a<li>b</li></li></ul>");
    }

    #[test]
    fn comments_are_dropped() {
        assert_eq!(round_trip("a<!-- note -->b"), "ab");
    }

    #[test]
    fn script_contents_stay_raw() {
        assert_eq!(
            round_trip("<script>if (a < b) {}</script>"),
            "<script>if (a < b) {}</script>"
        );
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(round_trip("📈 Revenue: <b>$12,450</b>"), "📈 Revenue: <b>$12,450</b>");
    }
}
