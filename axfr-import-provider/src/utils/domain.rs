//! 域名比较工具

/// 两个域名是否指向同一 Zone（忽略末尾的点和大小写）
pub fn same_domain(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_domain_ignores_dot_and_case() {
        assert!(same_domain("Example.COM.", "example.com"));
        assert!(same_domain("example.com", "example.com."));
        assert!(!same_domain("www.example.com", "example.com"));
    }
}
