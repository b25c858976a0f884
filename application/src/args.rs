//! [`Args`] definitions.

use clap::Parser;
use common::{
    pagination::{PageNumber, RowsPerPage},
    Date,
};
use service::Criteria;

/// Terminal viewer of the user directory.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Family name to filter by (case-sensitive substring).
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// City to filter by (case-sensitive substring).
    #[arg(long, default_value = "")]
    pub city: String,

    /// Phone number to filter by (non-digit characters are ignored on
    /// both sides of the comparison).
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Inclusive lower bound on the birth date (`YYYY-MM-DD`).
    #[arg(long)]
    pub from_birth_date: Option<Date>,

    /// Inclusive upper bound on the birth date (`YYYY-MM-DD`).
    #[arg(long)]
    pub to_birth_date: Option<Date>,

    /// Number of rows per displayed page.
    #[arg(long)]
    pub rows_per_page: Option<RowsPerPage>,

    /// 1-based number of the page to display.
    #[arg(long)]
    pub page: Option<PageNumber>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Builds the [`Criteria`] described by these [`Args`].
    #[must_use]
    pub fn criteria(&self) -> Criteria {
        Criteria {
            last_name: self.last_name.clone(),
            city: self.city.clone(),
            phone: self.phone.clone(),
            from_birth_date: self.from_birth_date,
            to_birth_date: self.to_birth_date,
            rows_per_page: self.rows_per_page.unwrap_or_default(),
            current_page: self.page.unwrap_or_default(),
        }
    }
}
