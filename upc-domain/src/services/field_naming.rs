/// Converts a GraphQL field name to the upstream snake_case key.
///
/// The name is split before every ASCII uppercase letter that is not the
/// first character; every segment after the first is lower-cased and the
/// segments are joined with `_`. Names without uppercase letters come back
/// unchanged, so the function is safe to apply to names that are already
/// snake_case.
pub fn to_snake_case(field_name: &str) -> String {
    let mut out = String::with_capacity(field_name.len() + 4);
    let mut first_segment = true;
    for (idx, ch) in field_name.char_indices() {
        if idx > 0 && ch.is_ascii_uppercase() {
            first_segment = false;
            out.push('_');
        }
        if first_segment {
            out.push(ch);
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
