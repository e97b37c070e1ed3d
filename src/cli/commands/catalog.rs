//! Print the starting catalog

use std::io;

use movie_rental::config::RentalConfig;
use movie_rental::output::{CatalogList, OutputMode, Render};

/// Print every seeded movie with its status
pub fn catalog(config: &RentalConfig, mode: OutputMode) -> anyhow::Result<()> {
    let desk = config.build_desk();
    CatalogList::from_catalog(desk.catalog()).render(mode, &mut io::stdout().lock())?;
    Ok(())
}
