use markup5ever::data::NAMED_ENTITIES;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use thiserror::Error;

static CHAR_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]+);?|#[xX]([0-9a-fA-F]+);?|([^\t\n\x0C <&#;]{1,32};?))")
        .expect("character reference pattern should be valid")
});

/// Code points 0x80..=0x9F as browsers read them: windows-1252
const WINDOWS_1252: [char; 32] = [
    '\u{20ac}', '\u{81}', '\u{201a}', '\u{192}', '\u{201e}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{2c6}', '\u{2030}', '\u{160}', '\u{2039}', '\u{152}', '\u{8d}', '\u{17d}', '\u{8f}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{2dc}', '\u{2122}', '\u{161}', '\u{203a}', '\u{153}', '\u{9d}', '\u{17e}', '\u{178}',
];

/// A numeric character reference that names no Unicode scalar value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid character reference {reference:?}")]
pub struct InvalidReference {
    pub reference: String,
}

/// Decodes HTML character references in an attribute value.
///
/// Attribute values coming out of the tree builder are already decoded once;
/// repositories that double-escape (`&amp;gt;=3.8`) still produce `>=3.8`.
/// Named references use the full HTML5 table, including the legacy forms
/// without a semicolon (`&copyright` reads as `©right`). Unknown names are
/// kept as written.
pub fn unescape(value: &str) -> Result<String, InvalidReference> {
    if !value.contains('&') {
        return Ok(value.to_string());
    }

    let mut out = String::with_capacity(value.len());
    let mut last = 0;
    for caps in CHAR_REF.captures_iter(value) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&value[last..whole.start()]);
        last = whole.end();

        if let Some(name) = caps.get(3) {
            push_named(&mut out, name.as_str());
        } else {
            out.push(numeric(&caps, whole.as_str())?);
        }
    }
    out.push_str(&value[last..]);

    Ok(out)
}

fn numeric(caps: &Captures<'_>, whole: &str) -> Result<char, InvalidReference> {
    let invalid = || InvalidReference {
        reference: whole.to_string(),
    };

    let code = match (caps.get(1), caps.get(2)) {
        (Some(dec), _) => dec.as_str().parse::<u32>().map_err(|_| invalid())?,
        (_, Some(hex)) => u32::from_str_radix(hex.as_str(), 16).map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };

    if (0x80..=0x9f).contains(&code) {
        return Ok(WINDOWS_1252[(code - 0x80) as usize]);
    }

    match char::from_u32(code) {
        Some(c) if c != '\0' => Ok(c),
        _ => Err(invalid()),
    }
}

/// Appends the decoded form of `&<name>`, where `name` may end in `;`
fn push_named(out: &mut String, name: &str) {
    if let Some(decoded) = lookup(name) {
        out.push_str(&decoded);
        return;
    }

    // Longest legacy prefix, e.g. `&gtfoo` is `>foo`
    for end in (2..name.len()).rev() {
        if !name.is_char_boundary(end) {
            continue;
        }
        if let Some(decoded) = lookup(&name[..end]) {
            out.push_str(&decoded);
            out.push_str(&name[end..]);
            return;
        }
    }

    out.push('&');
    out.push_str(name);
}

fn lookup(name: &str) -> Option<String> {
    let &(first, second) = NAMED_ENTITIES.get(name)?;
    if first == 0 {
        return None;
    }
    let mut decoded = String::new();
    decoded.push(char::from_u32(first)?);
    if second != 0 {
        decoded.push(char::from_u32(second)?);
    }
    Some(decoded)
}
