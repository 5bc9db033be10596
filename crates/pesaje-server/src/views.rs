//! Server-rendered HTML pages.

use domain::MeasurementRecord;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;}\
table{border-collapse:collapse;}\
th,td{border:1px solid #ccc;padding:.4rem .8rem;text-align:left;}\
td.peso{text-align:right;}";

/// Listing of the latest measurements, newest first.
pub fn render_index(records: &[MeasurementRecord]) -> String {
    let rows: String = records
        .iter()
        .map(|record| {
            format!(
                "<tr><td>{}</td><td class=\"peso\">{}</td></tr>",
                escape(&record.date),
                record.weight_g
            )
        })
        .collect();

    let body = if records.is_empty() {
        "<p>No hay registros todavía.</p>".to_string()
    } else {
        format!(
            "<table><thead><tr><th>Fecha (UTC-5)</th><th>Peso (g)</th></tr></thead>\
             <tbody>{rows}</tbody></table>"
        )
    };

    page("Registros de peso", &body)
}

/// Shown when the listing cannot be loaded.
pub fn render_error() -> String {
    page(
        "Error",
        "<p>No fue posible cargar los registros. Intente de nuevo más tarde.</p>",
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"es\"><head><meta charset=\"utf-8\">\
         <title>{title}</title><style>{STYLE}</style></head>\
         <body><h1>{title}</h1>{body}</body></html>",
        title = escape(title),
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lists_rows_in_order() {
        let html = render_index(&[
            MeasurementRecord {
                date: "02/01/2025 10:00".to_string(),
                weight_g: 320,
            },
            MeasurementRecord {
                date: "01/01/2025 09:00".to_string(),
                weight_g: 480,
            },
        ]);

        let first = html.find("02/01/2025 10:00").unwrap();
        let second = html.find("01/01/2025 09:00").unwrap();
        assert!(first < second);
        assert!(html.contains("<td class=\"peso\">320</td>"));
    }

    #[test]
    fn test_index_rows_are_escaped() {
        let html = render_index(&[MeasurementRecord {
            date: "<b>N/A</b>".to_string(),
            weight_g: 7,
        }]);

        assert!(html.contains("<tr><td>&lt;b&gt;N/A&lt;/b&gt;</td><td class=\"peso\">7</td></tr>"));
        assert!(!html.contains("<b>N/A</b>"));
    }

    #[test]
    fn test_empty_index() {
        let html = render_index(&[]);
        assert!(html.contains("No hay registros"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }
}
