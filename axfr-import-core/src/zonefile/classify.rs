//! Line classification

/// Kind of a raw input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Blank, whitespace-only or `;` comment line.
    Ignore,
    /// Anything else; may still fail to parse.
    Candidate,
}

/// Classifies one line of a zone transfer dump.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with(';') {
        LineKind::Ignore
    } else {
        LineKind::Candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(classify_line(""), LineKind::Ignore);
        assert_eq!(classify_line("   \t "), LineKind::Ignore);
        assert_eq!(classify_line("\r"), LineKind::Ignore);
    }

    #[test]
    fn comments_are_ignored() {
        assert_eq!(
            classify_line("; <<>> DiG 9.18.24 <<>> @ns1.example.com example.com axfr"),
            LineKind::Ignore
        );
        assert_eq!(classify_line("   ;; Query time: 12 msec"), LineKind::Ignore);
    }

    #[test]
    fn records_are_candidates() {
        assert_eq!(
            classify_line("example.com. 300 IN A 1.2.3.4"),
            LineKind::Candidate
        );
        // 注释符号不在行首时不算注释
        assert_eq!(classify_line("a;b"), LineKind::Candidate);
    }
}
