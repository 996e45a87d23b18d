use crate::constants::SHORT_NAMES;
use crate::models::SymbolRecord;

fn sign_prefix(value: f64) -> &'static str {
    // Only strictly positive values get a prefix; negatives carry
    // their own sign and zero shows bare.
    if value > 0.0 {
        "+"
    } else {
        ""
    }
}

/// Render one record's bracketed value: `ERR` when errored, otherwise
/// two decimals with a `+` prefix for gains. Percent mode appends `%`.
fn format_value(record: &SymbolRecord, show_price: bool) -> String {
    if record.errored {
        "ERR".to_string()
    } else if show_price {
        format!("{}{:.2}", sign_prefix(record.change), record.change)
    } else {
        format!("{}{:.2}%", sign_prefix(record.percent), record.percent)
    }
}

/// Detail line: `SYMBOL[VALUE] ` per record in the given order, each
/// item carrying its trailing space.
pub fn format_body(records: &[SymbolRecord], show_price: bool) -> String {
    let mut body = String::new();
    for record in records {
        body.push_str(&record.symbol);
        body.push('[');
        body.push_str(&format_value(record, show_price));
        body.push_str("] ");
    }
    body
}

/// Status text and expanded title for the master record. Price mode is
/// a detail-line-only option; the master line always shows percent.
pub fn format_master(master: &SymbolRecord) -> (String, String) {
    let value = format_value(master, false);
    let title = format!("{} [{}]", short_name(&master.symbol), value);
    (value, title)
}

/// Resolve a symbol to its short display name for the status line,
/// falling back to the raw symbol when unknown. Display-only.
pub fn short_name(symbol: &str) -> &str {
    SHORT_NAMES
        .iter()
        .find(|(known, _)| *known == symbol)
        .map(|(_, name)| *name)
        .unwrap_or(symbol)
}
