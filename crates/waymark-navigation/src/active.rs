//! Active-link check for navigation links

use waymark_routes::split_path;

use crate::location::decode_segment;
use crate::target::Target;

/// Whether a link to `target` counts as active on `current`.
///
/// With `end` the paths must be equal; otherwise `target` must be a prefix
/// of `current`. Both compare whole decoded segments, so `/products` is not
/// a prefix of `/productsxyz` and `/caf%C3%A9` equals `/café`. Search and
/// hash on the target are ignored.
pub fn is_active(target: &str, current: &str, end: bool) -> bool {
    let target = Target::parse(target);
    let target: Vec<_> = split_path(&target.path).into_iter().map(decode_segment).collect();
    let current: Vec<_> = split_path(current).into_iter().map(decode_segment).collect();

    if end {
        target == current
    } else {
        current.starts_with(&target)
    }
}
