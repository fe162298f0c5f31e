//! Show title cleanup.

use crate::api::REPLAY_MARKER;

/// Appended to titles of shows broadcast live.
pub const LIVE_INDICATOR: &str = "🔴";

/// Unescape HTML entities and mark live shows.
///
/// NTS titles arrive HTML-escaped (`Tom &amp; Jerry`). Replays carry `(R)`
/// in the title and are left as they are; everything else gets the live
/// indicator appended.
pub fn format_show_title(title: &str) -> String {
    let title = unescape_html(title);
    if title.contains(REPLAY_MARKER) {
        title
    } else {
        format!("{} {}", title, LIVE_INDICATOR)
    }
}

/// Decode named and numeric HTML character references.
///
/// Unknown or malformed references are kept verbatim.
pub fn unescape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        match candidate
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| decode_entity(&candidate[1..end]).map(|c| (c, end)))
        {
            Some((ch, end)) => {
                out.push(ch);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
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
        "ndash" => '–',
        "mdash" => '—',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "hellip" => '…',
        _ => return None,
    };
    Some(ch)
}
