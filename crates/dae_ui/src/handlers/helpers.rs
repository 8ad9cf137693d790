//! Helper functions for handler modules.

use percent_encoding::percent_decode_str;

/// Clean up a file URL (from drag-drop or paste) to a regular path.
///
/// Takes the first non-comment line of a `text/uri-list` payload and
/// percent-decodes a `file://` prefix. Plain paths pass through trimmed.
pub fn clean_file_url(url: &str) -> String {
    let first_uri = url
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .unwrap_or("");

    let path = match first_uri.strip_prefix("file://") {
        Some(without_prefix) => percent_decode_str(without_prefix)
            .decode_utf8_lossy()
            .to_string(),
        None => first_uri.to_string(),
    };

    path.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(clean_file_url("  /models/ship.dae \n"), "/models/ship.dae");
    }

    #[test]
    fn file_uris_are_decoded() {
        assert_eq!(
            clean_file_url("file:///models/My%20Ship.dae"),
            "/models/My Ship.dae"
        );
    }

    #[test]
    fn uri_list_takes_first_entry() {
        let list = "# comment\r\nfile:///a.dae\r\nfile:///b.dae\r\n";
        assert_eq!(clean_file_url(list), "/a.dae");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(clean_file_url(""), "");
    }
}
