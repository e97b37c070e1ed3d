//! Quote the fee for a rental without opening the menu

use std::io;

use movie_rental::config::RentalConfig;
use movie_rental::core::models::MovieKind;
use movie_rental::output::{FeeQuote, OutputMode, Render};

/// Print the fee for renting a `kind` movie for `days` days
pub fn quote(config: &RentalConfig, kind: MovieKind, days: u32, mode: OutputMode) -> anyhow::Result<()> {
    let fees = config.fees;
    let quote = FeeQuote {
        kind,
        days,
        base_fee: fees.base_fee(kind),
        fee: fees.total_fee(kind, days),
        currency: config.currency.clone(),
    };
    quote.render(mode, &mut io::stdout().lock())?;
    Ok(())
}
