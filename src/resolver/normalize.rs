use crate::resolver::types::NormalizedItem;

/// Trim surrounding whitespace on `title`, `author` and `description`.
///
/// A value that is only whitespace becomes `None`. Every other field is left
/// as the parser produced it. Applying this twice is the same as applying it once.
pub fn trim_item(mut item: NormalizedItem) -> NormalizedItem {
    item.title = trim_field(item.title);
    item.author = trim_field(item.author);
    item.description = trim_field(item.description);
    item
}

fn trim_field(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_string())
        }
    })
}
