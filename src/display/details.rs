use chrono::{DateTime, Utc};

use crate::core::types::{Endpoint, SslCert};

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn trust_line(cert: &SslCert) -> &'static str {
    if cert.ca_signed == Some(true) {
        "SSL certificate is verified by a root authority."
    } else if cert.self_signed == Some(true) {
        "SSL certificate is self signed."
    } else {
        "SSL certificate is not trusted."
    }
}

/// Aligned key/value block describing the endpoint's certificate.
pub fn certificate_details(endpoint: &Endpoint) -> String {
    let Some(cert) = &endpoint.ssl_cert else {
        return "No certificate installed.".to_string();
    };

    let optional_date =
        |value: &Option<DateTime<Utc>>| value.as_ref().map(format_date).unwrap_or_default();
    let rows = [
        ("Common Name(s)", cert.cert_domains.join(", ")),
        ("Expires At", optional_date(&cert.expires_at)),
        ("Issuer", cert.issuer.clone().unwrap_or_default()),
        ("Starts At", optional_date(&cert.starts_at)),
        ("Subject", cert.subject.clone().unwrap_or_default()),
    ];
    let width = rows.iter().map(|(key, _)| key.len() + 1).max().unwrap_or(0);

    let mut lines: Vec<String> = rows
        .iter()
        .map(|(key, value)| {
            let key = format!("{key}:");
            format!("{key:<width$} {value}").trim_end().to_string()
        })
        .collect();
    lines.push(trust_line(cert).to_string());
    lines.join("\n")
}
