pub mod subdomain {
    /// Printed to stdout when the binary is not given exactly one argument.
    pub const USAGE: &str = "Usage: python extract_subdomain.py <branch_name>";

    /// Whitespace stripped from both ends of a branch name.
    ///
    /// Unicode `White_Space` plus the ASCII information separators U+001C..=U+001F.
    pub fn is_strip_whitespace(c: char) -> bool {
        c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
    }

    /// Last `/`-separated segment of a branch name, after trimming surrounding whitespace.
    ///
    /// Consecutive separators are not collapsed, so a trailing `/` yields `""`.
    /// Input without a `/` comes back trimmed but otherwise unchanged.
    pub fn extract_subdomain(branch_name: &str) -> &str {
        let trimmed = branch_name.trim_matches(is_strip_whitespace);
        match trimmed.rsplit_once('/') {
            Some((_rest, last)) => last,
            None => trimmed,
        }
    }

    /// Byte-level [`extract_subdomain`] for arguments that need not be UTF-8.
    ///
    /// Invalid sequences are never whitespace. `/` cannot occur inside a multi-byte
    /// UTF-8 sequence, so valid input gives the same segment as the `&str` version.
    pub fn extract_subdomain_bytes(branch_name: &[u8]) -> &[u8] {
        let trimmed = trim_bytes(branch_name);
        trimmed.rsplit(|b| *b == b'/').next().unwrap_or(trimmed)
    }

    fn trim_bytes(bytes: &[u8]) -> &[u8] {
        let mut start = None;
        let mut end = 0;
        let mut offset = 0;
        for chunk in bytes.utf8_chunks() {
            let valid = chunk.valid();
            let invalid = chunk.invalid();

            let kept_start = valid.trim_start_matches(is_strip_whitespace);
            if start.is_none() && (!kept_start.is_empty() || !invalid.is_empty()) {
                start = Some(offset + valid.len() - kept_start.len());
            }

            let kept_end = valid.trim_end_matches(is_strip_whitespace).len();
            if kept_end > 0 {
                end = offset + kept_end;
            }
            if !invalid.is_empty() {
                end = offset + valid.len() + invalid.len();
            }
            offset += valid.len() + invalid.len();
        }
        match start {
            Some(start) => &bytes[start..end],
            None => &bytes[..0],
        }
    }

}
