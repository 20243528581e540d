//! Fixed binary tree merge of per-chunk partial results

use crate::dtype::Element;

/// Combine `partials` pairwise, in place, until one value remains.
///
/// Each level computes `p[i] = p[2i] + p[2i + 1]` for `i` in `0..m/2`; when
/// `m` is odd the last element is carried unchanged into slot `ceil(m/2) - 1`.
/// The combination order depends only on `partials.len()`, never on which
/// thread produced which partial. Runs on the calling thread.
///
/// Returns zero for an empty slice. The buffer contents are unspecified
/// afterwards.
///
/// ```text
/// m = 5:  p0  p1  p2  p3  p4
///          \  /    \  /    |
///          p01     p23    p4
///            \     /       |
///             p0123       p4
///                  \      /
///                   result
/// ```
pub fn tree_merge<T: Element>(partials: &mut [T]) -> T {
    let mut active = partials.len();
    if active == 0 {
        return T::zero();
    }

    let mut levels = 0usize;
    while active > 1 {
        let next = active.div_ceil(2);
        for i in 0..active / 2 {
            partials[i] = partials[2 * i] + partials[2 * i + 1];
        }
        if active % 2 == 1 {
            partials[next - 1] = partials[active - 1];
        }
        active = next;
        levels += 1;
    }

    tracing::trace!(chunks = partials.len(), levels, "tree merge complete");
    partials[0]
}
