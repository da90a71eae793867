use crate::{
    db::rentals::{RentalFilter, Rentals},
    libs::{
        duration::{current_rental_duration, rental_duration},
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortOrder {
    /// Most recent rental first
    Start,
    /// Longest duration first; open rentals sort above everything
    Duration,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Only open rentals, showing their elapsed time so far
    #[arg(long)]
    active: bool,
    /// Table ordering
    #[arg(long, value_enum, default_value = "start")]
    sort: SortOrder,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let mut rentals = Rentals::new()?;

    let filter = if args.active { RentalFilter::Active } else { RentalFilter::All };
    let records = rentals.fetch(filter)?;

    if records.is_empty() {
        if args.active {
            msg_info!(Message::NoActiveRentals);
        } else {
            msg_info!(Message::NoRentalsFound);
        }
        return Ok(());
    }

    // The duration pair is computed once per row and reused for both the
    // printed string and the sort key. For the active view the elapsed-so-far
    // span is shown instead of the "Active rental" marker.
    let mut rows: Vec<_> = records
        .into_iter()
        .map(|record| {
            let duration = if args.active {
                current_rental_duration(Some(record.start))
            } else {
                rental_duration(Some(record.start), record.end)
            };
            (record, duration)
        })
        .collect();

    // Rows failing the validity check would break the table ordering.
    rows.retain(|(_, duration)| duration.is_well_formed());

    if args.sort == SortOrder::Duration {
        rows.sort_by(|a, b| b.1.sort_seconds.total_cmp(&a.1.sort_seconds));
    }

    msg_print!(Message::RentalHistoryHeader, true);
    View::history(&rows)?;
    Ok(())
}
