/// Appends a trailing slash so relative hrefs resolve inside the page's directory
pub fn ensure_directory_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Splits a filename into stem and extension, keeping `.tar.*` together.
///
/// Leading dots never start an extension, so `.hidden` has none.
pub fn splitext(filename: &str) -> (&str, &str) {
    let leading = filename.len() - filename.trim_start_matches('.').len();
    let (stem, ext) = match filename[leading..].rfind('.') {
        Some(i) => filename.split_at(leading + i),
        None => (filename, ""),
    };

    if stem.to_ascii_lowercase().ends_with(".tar") {
        let cut = stem.len() - 4;
        (&filename[..cut], &filename[cut..])
    } else {
        (stem, ext)
    }
}
