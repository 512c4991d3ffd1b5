/// Maps a declared field identifier to the lowerCamelCase name used in the
/// rendered query.
///
/// The first character is lower-cased. A leading run of upper-case
/// characters (an acronym such as `URL` or `XML`) is lower-cased as a block,
/// except for its last character when a lower-case character follows it:
/// that character starts the next camel segment (`XMLName` → `xmlName`).
///
/// snake_case identifiers are camel-cased first, so `primary_function` maps
/// to `primaryFunction`.
pub fn to_field_name(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let camel_cased =
        if ident.contains('_') {
            camel_case_segments(ident)
        } else {
            ident.to_string()
        };

    let mut prev_idx: Option<usize> = None;
    for (idx, ch) in camel_cased.char_indices() {
        if let Some(prev_idx) = prev_idx
            && !ch.is_uppercase() {
            let split_at = if prev_idx == 0 { idx } else { prev_idx };
            return format!(
                "{}{}",
                camel_cased[..split_at].to_lowercase(),
                &camel_cased[split_at..],
            );
        }
        prev_idx = Some(idx);
    }

    camel_cased.to_lowercase()
}

fn camel_case_segments(ident: &str) -> String {
    let mut segments = ident.split('_').filter(|segment| !segment.is_empty());
    let mut camel_cased = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            camel_cased.extend(first.to_uppercase());
            camel_cased.push_str(chars.as_str());
        }
    }
    camel_cased
}
