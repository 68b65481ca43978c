use anyhow::{Result, anyhow};

/// Canonical form used when comparing endpoint cnames: ascii, lower-case,
/// without a trailing dot.
pub fn normalize_cname(input: &str) -> Result<String> {
    let trimmed = input.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return Err(anyhow!("endpoint name is required"));
    }
    let ascii =
        idna::domain_to_ascii(trimmed).map_err(|err| anyhow!("invalid endpoint name: {err}"))?;
    Ok(ascii.to_lowercase())
}

/// Unicode comparison form of a full or partial cname. Punycode labels are
/// decoded so a fragment such as `café` is a substring of the stored
/// `xn--caf-1050-...` cname; invalid input is only lower-cased.
pub fn comparable_cname(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('.');
    match idna::domain_to_unicode(trimmed) {
        (unicode, Ok(())) => unicode,
        (_, Err(_)) => trimmed.to_lowercase(),
    }
}

/// First label of a cname, used as the display name of dedicated endpoints
/// that were created without one.
pub fn first_label(cname: &str) -> &str {
    cname.split('.').next().unwrap_or(cname)
}
