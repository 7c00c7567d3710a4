// ── Image URL resolution ──
//
// Images are served as uploaded: no resizing. A `srcset` still has to be
// produced for responsive markup, so every width points at the original.

/// Resolved image source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub url: String,
    pub srcset: Option<String>,
}

/// Resolve `src` against `base_url`.
///
/// Absolute (`http…`, `//…`) sources are used as-is. Root-relative and bare
/// sources are joined onto `base_url` (bare ones gain a leading `/`).
/// `sizes` is a comma-separated list of descriptors such as `"320w, 640w"`.
pub fn resolve_image(src: &str, base_url: &str, sizes: Option<&str>) -> ResolvedImage {
    let url = if src.starts_with("http") || src.starts_with("//") {
        src.to_owned()
    } else {
        let path = src.trim_start_matches("./").trim_start_matches('/');
        let base = base_url.trim_end_matches('/');
        format!("{base}/{path}")
    };

    let srcset = sizes.filter(|s| !s.trim().is_empty()).map(|sizes| {
        sizes
            .split(',')
            .map(|size| format!("{url} {}", size.trim()))
            .collect::<Vec<_>>()
            .join(", ")
    });

    ResolvedImage { url, srcset }
}
