//! Column-header derivation from namespace paths.

use sl_core::Namespace;

/// Derive the display header for `key`.
///
/// With `max_len` unset, the full path is joined with `sep`.  Otherwise
/// the leaf segment is always kept, and earlier segments are added from
/// the second-to-last backward while the cumulative character count of
/// kept segments (separators excluded) stays within `max_len`; the walk
/// stops at the first segment that would exceed the budget.  The result is
/// therefore a suffix of the path containing at least the leaf, however
/// small `max_len` is.
///
/// ```rust,ignore
/// let key = Namespace::from_dotted("md.pair.LJ.energy")?;
/// assert_eq!(derive_header(&key, ".", None), "md.pair.LJ.energy");
/// assert_eq!(derive_header(&key, ".", Some(8)), "LJ.energy");
/// assert_eq!(derive_header(&key, ".", Some(0)), "energy");
/// ```
pub fn derive_header(key: &Namespace, sep: &str, max_len: Option<usize>) -> String {
    let Some(max_len) = max_len else {
        return key.join(sep);
    };
    let segments = key.segments();
    let mut kept = key.leaf().chars().count();
    let mut start = segments.len() - 1;
    for (i, segment) in segments[..segments.len() - 1].iter().enumerate().rev() {
        let chars = segment.chars().count();
        if kept + chars > max_len {
            break;
        }
        kept += chars;
        start = i;
    }
    segments[start..].join(sep)
}
