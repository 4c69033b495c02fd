use crate::api::models::RoleStat;
use scraper::{Html, Selector};

const ROWS: &str = "table.data_table.sortable_table tbody tr";
const VALUE_ATTR: &str = "data-value";

/// Reads the per-role table of a stats page. The first row is the header.
/// Column 0 holds the role, columns 1 and 2 hold popularity and win rate in
/// a `<progressbar data-value>`.
pub fn extract_role_stats(html: &str) -> Vec<RoleStat> {
    let (Ok(row_sel), Ok(cell_sel), Ok(bar_sel)) = (
        Selector::parse(ROWS),
        Selector::parse("td"),
        Selector::parse("progressbar"),
    ) else {
        return vec![];
    };

    let document = Html::parse_document(html);

    document
        .select(&row_sel)
        .skip(1)
        .map(|row| {
            let cells: Vec<_> = row.select(&cell_sel).collect();
            let role = cells
                .first()
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .unwrap_or_default();
            let bar_value = |idx: usize| {
                cells
                    .get(idx)
                    .and_then(|cell| cell.select(&bar_sel).next())
                    .and_then(|bar| bar.value().attr(VALUE_ATTR))
                    .map(parse_decimal)
                    .unwrap_or(0.0)
            };

            RoleStat {
                role,
                popularity: bar_value(1),
                win_rate: bar_value(2),
            }
        })
        .collect()
}

/// Locale-agnostic decimal parse of the leading number in `raw`
/// ("12.5" -> 12.5, "48.3%" -> 48.3, "1e2" -> 100). Anything unparsable is 0.
pub fn parse_decimal(raw: &str) -> f64 {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        (i, i > start)
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let (after_int, int_digits) = digits_from(end);
    end = after_int;
    let mut frac_digits = false;
    if bytes.get(end) == Some(&b'.') {
        let (after_frac, seen) = digits_from(end + 1);
        end = after_frac;
        frac_digits = seen;
    }
    if !int_digits && !frac_digits {
        return 0.0;
    }

    // exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let (after_exp, seen) = digits_from(exp);
        if seen {
            end = after_exp;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
