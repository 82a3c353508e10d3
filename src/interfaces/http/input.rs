/// Extracts the subscriber's latest input from the gateway's accumulated string.
///
/// Gateways send the whole dial string so far, e.g. `*183#*2*1234`. The service
/// code prefix is dropped and only the last `*`-separated segment is kept.
pub fn current_input(raw: Option<&str>) -> &str {
    let Some(raw) = raw else {
        return "";
    };
    strip_service_code(raw).rsplit('*').next().unwrap_or("")
}

fn strip_service_code(raw: &str) -> &str {
    if let Some(body) = raw.strip_prefix('*')
        && let Some(end) = body.find('#')
    {
        let code = &body[..end];
        if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
            return &body[end + 1..];
        }
    }
    raw
}
