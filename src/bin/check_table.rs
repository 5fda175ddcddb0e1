use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use ramadan_timings::config::{LOCATIONS, PERSISTENCE};
use ramadan_timings::{PrayerResolver, TimeTable};

/// Report which Ramadan dates a prayer time table is missing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Table to check. Defaults to the bundled one
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let table = match &args.path {
        Some(path) => TimeTable::load(path)?,
        None => {
            log::info!(
                "No path given, checking the bundled {}/{}",
                PERSISTENCE.table.directory,
                PERSISTENCE.table.filename
            );
            TimeTable::bundled()?
        }
    };

    let resolver = PrayerResolver::new(&table);
    let calendar = resolver.calendar();
    log::info!(
        "Checking '{}' ({} entries) against {} .. {}",
        table.source(),
        table.len(),
        calendar.anchor,
        calendar.last_date()
    );

    // Known divisions first, then anything extra the table carries
    let mut keys: Vec<&str> = LOCATIONS.iter().map(|l| l.key).collect();
    let extra: Vec<&str> = table
        .location_keys()
        .filter(|k| !keys.contains(k))
        .collect();
    keys.extend(extra);

    if !table.matches_calendar_year() {
        log::warn!(
            "Table year {:?} differs from the Ramadan calendar ({})",
            table.year(),
            calendar.anchor
        );
    }

    let report = resolver.table_gaps(&keys);
    for key in keys.iter().filter(|k| !report.iter().any(|(r, _)| r.as_str() == **k)) {
        log::info!("{}: all {} days present", key, calendar.days_count);
    }

    let mut gaps = 0;
    for (key, missing) in &report {
        gaps += missing.len();
        if !table.has_location(key) {
            log::error!(
                "{}: not in table, all {} days missing (would fall back to another city)",
                key,
                calendar.days_count
            );
            continue;
        }
        let dates: Vec<String> = missing
            .iter()
            .map(|&day| calendar.date_of_day(i64::from(day)).to_string())
            .collect();
        log::error!("{}: missing days {:?} ({})", key, missing, dates.join(", "));
    }

    if gaps > 0 {
        bail!("{} Ramadan days missing from the table", gaps);
    }
    log::info!("Table complete.");
    Ok(())
}
