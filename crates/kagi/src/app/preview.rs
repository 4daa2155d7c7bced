//! Loads render instructions into text the terminal preview pane can show.

use std::fs;

use crate::domain::render::RenderInstruction;

const INLINE_SOURCE: &str = "inline";
const BLOCK_TAGS: &[&str] = &[
    "br", "div", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "li", "p", "pre", "section", "title",
    "tr",
];
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];
const MAX_ENTITY_LEN: usize = 32;
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("apos", '\''),
    ("bull", '•'),
    ("copy", '©'),
    ("euro", '€'),
    ("gt", '>'),
    ("hellip", '…'),
    ("laquo", '«'),
    ("ldquo", '“'),
    ("lsquo", '‘'),
    ("lt", '<'),
    ("mdash", '—'),
    ("middot", '·'),
    ("nbsp", ' '),
    ("ndash", '–'),
    ("quot", '"'),
    ("raquo", '»'),
    ("rdquo", '”'),
    ("reg", '®'),
    ("rsquo", '’'),
    ("trade", '™'),
];

/// Text rendition of one render instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewDocument {
    /// URI of the loaded document, or `inline` for literal markup.
    pub source: String,
    pub text: String,
}

/// Loads `instruction` for display.
///
/// Documents behind a `LoadUri` are read from disk; read failures become an
/// explanatory text instead of an error.
pub fn load_preview(instruction: &RenderInstruction) -> PreviewDocument {
    match instruction {
        RenderInstruction::LoadInlineHtml(html) => PreviewDocument {
            source: INLINE_SOURCE.to_string(),
            text: visible_text(html),
        },
        RenderInstruction::LoadUri(uri) => {
            let text = match uri.to_file_path() {
                Ok(path) => fs::read(&path).map_or_else(
                    |error| format!("Failed to read `{}`: {error}", path.display()),
                    |bytes| visible_text(&String::from_utf8_lossy(&bytes)),
                ),
                Err(()) => format!("Cannot preview non-file URI `{uri}`"),
            };

            PreviewDocument {
                source: uri.to_string(),
                text,
            }
        }
    }
}

/// Extracts the human-visible text of an HTML document.
///
/// Tags and comments are dropped, `script`/`style` bodies are skipped, block
/// tags start new lines, and character references are decoded. A `<` that
/// does not open a tag is kept as text.
pub fn visible_text(html: &str) -> String {
    let mut text = String::new();
    let mut rest = html;

    while let Some(tag_start) = find_tag_start(rest) {
        text.push_str(&rest[..tag_start]);
        rest = &rest[tag_start..];

        if let Some(comment) = rest.strip_prefix("<!--") {
            rest = comment.find("-->").map_or("", |end| &comment[end + 3..]);
            continue;
        }

        let Some(tag_end) = rest.find('>') else {
            rest = "";
            break;
        };
        let tag = &rest[1..tag_end];
        rest = &rest[tag_end + 1..];

        let name = tag_name(tag);
        if !tag.starts_with('/') && RAW_TEXT_TAGS.contains(&name.as_str()) {
            rest = skip_past_closing_tag(rest, &name);
            continue;
        }

        if BLOCK_TAGS.contains(&name.as_str()) {
            text.push('\n');
        }
    }
    text.push_str(rest);

    normalize_lines(&decode_entities(&text))
}

/// Returns the offset of the first `<` that opens a tag, comment, or
/// declaration.
fn find_tag_start(text: &str) -> Option<usize> {
    text.match_indices('<')
        .map(|(index, _)| index)
        .find(|&index| {
            text[index + 1..]
                .chars()
                .next()
                .is_some_and(|next| next.is_ascii_alphabetic() || matches!(next, '/' | '!'))
        })
}

fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('/')
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase()
}

fn skip_past_closing_tag<'a>(rest: &'a str, name: &str) -> &'a str {
    let closing_tag = format!("</{name}");
    // ASCII lowercasing keeps byte offsets aligned with `rest`.
    let Some(start) = rest.to_ascii_lowercase().find(&closing_tag) else {
        return "";
    };
    let closing = &rest[start..];

    closing.find('>').map_or("", |end| &closing[end + 1..])
}

fn decode_entities(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(ampersand) = rest.find('&') {
        decoded.push_str(&rest[..ampersand]);
        rest = &rest[ampersand..];

        match decode_entity(rest) {
            Some((character, length)) => {
                decoded.push(character);
                rest = &rest[length..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }
    decoded.push_str(rest);

    decoded
}

/// Decodes the character reference at the start of `text`.
///
/// Returns the character and the byte length of the reference, or `None`
/// when `text` does not start with a known reference.
fn decode_entity(text: &str) -> Option<(char, usize)> {
    let (end, _) = text
        .char_indices()
        .take(MAX_ENTITY_LEN)
        .find(|&(_, character)| character == ';')?;
    let name = &text[1..end];

    let character = match name.strip_prefix('#') {
        Some(number) => decode_numeric_entity(number)?,
        None => NAMED_ENTITIES
            .iter()
            .find(|(entity, _)| *entity == name)
            .map(|(_, character)| *character)?,
    };

    Some((character, end + 1))
}

fn decode_numeric_entity(number: &str) -> Option<char> {
    let code = match number.strip_prefix(|prefix: char| prefix == 'x' || prefix == 'X') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => number.parse::<u32>().ok()?,
    };

    char::from_u32(code)
}

/// Collapses whitespace inside lines and runs of blank lines.
fn normalize_lines(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        let previous_blank = lines.last().is_none_or(String::is_empty);
        if line.is_empty() && previous_blank {
            continue;
        }

        lines.push(line);
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    lines.join("\n")
}
