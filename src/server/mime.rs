use std::path::Path;

static MIME_TYPES: &[(&str, &str)] = &[
    ("gif", "image/gif"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("ico", "image/ico"),
    ("svg", "image/svg+xml"),
    ("mp3", "audio/mpeg"),
    ("aac", "audio/aac"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("mid", "audio/midi"),
    ("midi", "audio/midi"),
    ("mp4", "video/mp4"),
    ("htm", "text/html"),
    ("html", "text/html"),
    ("txt", "text/plain"),
    ("otf", "font/otf"),
    ("ttf", "font/ttf"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("xml", "application/xml"),
    ("zip", "application/zip"),
    ("pdf", "application/pdf"),
    ("json", "application/json"),
    ("js", "application/javascript"),
];

/// Content type for a path, keyed on the substring after the last `.`.
/// The match is case-sensitive; an unknown or missing extension yields
/// `None` and the response carries no Content-Type header.
pub fn content_type(path: &Path) -> Option<&'static str> {
    let path = path.to_string_lossy();
    let ext = &path[path.rfind('.')? + 1..];

    MIME_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn known_extensions() {
        assert_eq!(
            content_type(Path::new("./data.json")),
            Some("application/json")
        );
        assert_eq!(content_type(Path::new("./page.html")), Some("text/html"));
        assert_eq!(content_type(Path::new("./page.htm")), Some("text/html"));
        assert_eq!(content_type(Path::new("./notes.txt")), Some("text/plain"));
    }

    #[test]
    fn unknown_extension_has_no_type() {
        assert_eq!(content_type(Path::new("./blob.xyz")), None);
        assert_eq!(content_type(Path::new("./Makefile")), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(content_type(Path::new("./data.JSON")), None);
    }

    #[test]
    fn last_dot_wins() {
        assert_eq!(
            content_type(Path::new("./archive.tar.zip")),
            Some("application/zip")
        );
    }
}
