//! 비밀값 로그 마스킹 규칙.

/// 비밀값을 로그 표시용으로 마스킹한다.
/// 10자 이하는 전체를 가리고, 그 이상은 앞뒤 4자만 남긴다.
pub fn redact(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    if secret.chars().count() <= 10 {
        return "***".to_string();
    }

    let head: String = secret.chars().take(4).collect();
    let tail: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{head}***{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_stays_empty() {
        assert_eq!(redact(""), "");
    }

    #[test]
    fn short_secret_is_fully_masked() {
        assert_eq!(redact("abc"), "***");
        assert_eq!(redact("0123456789"), "***");
    }

    #[test]
    fn long_secret_keeps_head_and_tail() {
        assert_eq!(redact("0123456789a"), "0123***789a");
        assert_eq!(redact("sk-proj-abcdef123456"), "sk-p***3456");
    }

    #[test]
    fn middle_segment_never_leaks() {
        let secret = "headMIDDLESECRETtail";
        let masked = redact(secret);
        assert!(!masked.contains("MIDDLESECRET"));
        assert_eq!(masked, "head***tail");
    }
}
