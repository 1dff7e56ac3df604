// src/core/html.rs
//
// Case-insensitive tag scanning over raw HTML text. The wiki export is
// static and regular enough that local scanning inside known blocks
// beats carrying a full DOM.

/// ASCII-only lowercasing; byte offsets stay valid against the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Byte offset just past the first `id="<id>"` (or single-quoted)
/// attribute. Id comparison is exact: HTML ids are case-sensitive.
pub fn find_anchor(doc: &str, id: &str) -> Option<usize> {
    let dq = format!("id=\"{id}\"");
    if let Some(i) = doc.find(&dq) {
        return Some(i + dq.len());
    }
    let sq = format!("id='{id}'");
    doc.find(&sq).map(|i| i + sq.len())
}

/// Next `<o ...> … </o>` block at or after `from`. Tag match is
/// case-insensitive; returns byte bounds of the whole block.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Content between a block's opening tag and its last closing tag.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Drop all tags, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
