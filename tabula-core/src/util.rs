pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

/// Longest prefix of `value` within `len` bytes that ends on a char boundary.
pub fn truncated(value: &str, len: usize) -> &str {
    if value.len() <= len {
        return value;
    }
    let end = (0..=len)
        .rev()
        .find(|i| value.is_char_boundary(*i))
        .unwrap_or_default();
    &value[..end]
}

#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {
        format_args!(
            "{}{}",
            $crate::truncated(&$query, 497).trim_end(),
            if $query.len() > 497 { "..." } else { "" },
        )
    };
}
