use colored::Colorize;

use crate::error::Result;
use crate::parser::get_statement_dates;
use crate::settings::expand_home;
use crate::statement::read_statement_text;

pub fn run(file: &str) -> Result<()> {
    let text = read_statement_text(&expand_home(file))?;
    let period = get_statement_dates(&text)?;
    println!(
        "{} {} to {}",
        "Statement period:".bold(),
        period.start_date,
        period.end_date
    );
    Ok(())
}
