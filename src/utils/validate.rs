use once_cell::sync::Lazy;
use regex::Regex;

static SUBMISSION_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("Invalid submission url regex")
});

/// 必填文本校验：去除首尾空白后非空
pub fn validate_non_empty(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}

/// 提交链接校验
///
/// 链接必须非空且为 http/https 形式的定位串。
pub fn validate_submission_url(url: &str) -> Result<(), String> {
    validate_non_empty(url, "submissionUrl")?;
    if !SUBMISSION_URL_RE.is_match(url.trim()) {
        return Err("submissionUrl must be an http(s) URL".to_string());
    }
    Ok(())
}
