//! OCC contract symbol helpers.

use chrono::NaiveDate;
use tracing::warn;

/// Parse the expiration date embedded in an OCC symbol.
///
/// The symbol ends in `YYMMDD` + `C|P` + 8-digit strike, so the date sits at
/// `[len-15, len-9)`: `AAPL250117C00150000` expires 2025-01-17.
pub fn parse_expiration(contract_symbol: &str) -> Option<NaiveDate> {
    let len = contract_symbol.len();
    let date = len
        .checked_sub(15)
        .and_then(|start| contract_symbol.get(start..len - 9));

    let Some(date) = date else {
        warn!(contract_symbol, "could not locate expiration in contract symbol");
        return None;
    };

    match NaiveDate::parse_from_str(date, "%y%m%d") {
        Ok(expiration) => Some(expiration),
        Err(e) => {
            warn!(contract_symbol, error = %e, "could not parse expiration from contract symbol");
            None
        }
    }
}
