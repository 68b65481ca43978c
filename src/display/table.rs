use super::details::format_date;
use crate::core::types::Endpoint;

const SNI_CNAME_PLACEHOLDER: &str = "(Not applicable for SNI)";

struct Column {
    label: &'static str,
    cells: Vec<String>,
}

impl Column {
    fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.chars().count())
            .chain(std::iter::once(self.label.chars().count()))
            .max()
            .unwrap_or(0)
    }
}

fn trusted(value: Option<bool>) -> String {
    match value {
        Some(true) => "True".to_string(),
        Some(false) => "False".to_string(),
        None => String::new(),
    }
}

/// Tabular listing of the endpoints that carry a certificate. Returns `None`
/// when there is nothing to show.
pub fn endpoint_table<'a>(endpoints: impl IntoIterator<Item = &'a Endpoint>) -> Option<String> {
    let rows: Vec<&Endpoint> = endpoints
        .into_iter()
        .filter(|endpoint| endpoint.ssl_cert.is_some())
        .collect();
    if rows.is_empty() {
        return None;
    }

    let mut columns = vec![Column {
        label: "Name",
        cells: rows.iter().map(|endpoint| endpoint.display_name()).collect(),
    }];

    if rows.iter().any(|endpoint| endpoint.cname.is_some()) {
        columns.push(Column {
            label: "Endpoint",
            cells: rows
                .iter()
                .map(|endpoint| {
                    endpoint
                        .cname
                        .clone()
                        .unwrap_or_else(|| SNI_CNAME_PLACEHOLDER.to_string())
                })
                .collect(),
        });
    }

    let certs: Vec<_> = rows
        .iter()
        .filter_map(|endpoint| endpoint.ssl_cert.as_ref())
        .collect();
    columns.push(Column {
        label: "Common Name(s)",
        cells: certs.iter().map(|cert| cert.cert_domains.join(", ")).collect(),
    });
    columns.push(Column {
        label: "Expires",
        cells: certs
            .iter()
            .map(|cert| cert.expires_at.as_ref().map(format_date).unwrap_or_default())
            .collect(),
    });
    columns.push(Column {
        label: "Trusted",
        cells: certs.iter().map(|cert| trusted(cert.ca_signed)).collect(),
    });
    columns.push(Column {
        label: "Type",
        cells: rows
            .iter()
            .map(|endpoint| endpoint.kind().to_string())
            .collect(),
    });

    let widths: Vec<usize> = columns.iter().map(Column::width).collect();
    let render = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render(
        columns.iter().map(|column| column.label.to_string()).collect(),
    ));
    lines.push(render(widths.iter().map(|width| "─".repeat(*width)).collect()));
    for index in 0..rows.len() {
        lines.push(render(
            columns
                .iter()
                .map(|column| column.cells[index].clone())
                .collect(),
        ));
    }
    Some(lines.join("\n"))
}
