use std::fs;
use std::io;
use std::path::Path;

const STYLE: &str = "* {\
margin: 0;\
padding: 0;\
}\
body {\
padding: 16px;\
font-size: 16px;\
font-family: Monospace;\
}\
li {\
list-style: none;\
}\
a {\
color: blue;\
text-decoration: none;\
}\
a:hover {\
background: blue;\
color: white;\
}";

/// Render an HTML listing of `dir`, which the caller has already
/// classified as a directory. `url_path` is the request path the listing
/// was asked for; entry links are built relative to it.
///
/// Entries whose name starts with `.` are skipped. Entries are sorted by
/// name so the output does not depend on directory read order.
pub fn render(url_path: &str, dir: &Path) -> io::Result<String> {
    let mut entries: Vec<(String, bool)> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let is_dir = fs::metadata(entry.path())
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        entries.push((name, is_dir));
    }

    entries.sort();

    let base = url_path.trim_end_matches('/');

    let mut page = format!(
        "<!DOCTYPE html>\
         <html>\
         <head>\
         <title>{}</title>\
         <style>{}</style>\
         </head>\
         <body>\
         <ul>",
        url_path, STYLE
    );

    for (name, is_dir) in &entries {
        let suffix = if *is_dir { "/" } else { "" };
        page.push_str(&format!(
            "<li><a href=\"{base}/{name}{suffix}\">{name}{suffix}</a></li>"
        ));
    }

    page.push_str("</ul></body></html>");

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scratch_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join(".hidden"), "x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        dir
    }

    #[test]
    fn lists_non_hidden_entries_sorted() {
        let dir = scratch_dir();
        let page = render("/", dir.path()).unwrap();

        let a = page.find("a.txt").unwrap();
        let b = page.find("b.txt").unwrap();
        let nested = page.find("nested").unwrap();
        assert!(a < b && b < nested);
        assert!(!page.contains(".hidden"));
    }

    #[test]
    fn directory_entries_get_trailing_slash_in_href_and_text() {
        let dir = scratch_dir();
        let page = render("/", dir.path()).unwrap();

        assert!(page.contains("<li><a href=\"/nested/\">nested/</a></li>"));
        assert!(page.contains("<li><a href=\"/a.txt\">a.txt</a></li>"));
    }

    #[test]
    fn links_are_relative_to_the_request_path() {
        let dir = scratch_dir();
        let page = render("/sub/", dir.path()).unwrap();

        assert!(page.contains("href=\"/sub/a.txt\""));
        assert!(page.contains("href=\"/sub/nested/\""));
    }

    #[test]
    fn title_is_the_requested_path() {
        let dir = scratch_dir();
        let page = render("/sub/", dir.path()).unwrap();

        assert!(page.contains("<title>/sub/</title>"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(render("/", Path::new("/no/such/dir-here")).is_err());
    }

    #[test]
    fn empty_directory_renders_an_empty_list() {
        let dir = TempDir::new().unwrap();
        let page = render("/", dir.path()).unwrap();

        assert!(page.contains("<ul></ul>"));
    }
}
