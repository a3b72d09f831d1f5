//! Watch command: manage the persisted commenter watchlist.

use std::fmt::Write;

use anyhow::{Result, bail};
use chrono::Utc;
use pagepulse_core::WatchlistEntry;
use pagepulse_data::{AnalyticsDoc, PersistedWatchlist, WatchlistStore};

use crate::cli::WatchAction;
use crate::render::{format_date, format_number};

/// Formats the watchlist joined with the current export's commenter data.
///
/// A watched user absent from the export keeps their stored name with a
/// note; the watchlist outlives any single export.
pub fn format_list<S: WatchlistStore>(
    doc: &AnalyticsDoc,
    watchlist: &PersistedWatchlist<S>,
) -> String {
    let mut out = String::new();

    writeln!(out, "WATCHLIST").unwrap();
    writeln!(out, "=========").unwrap();

    if watchlist.list().is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "(empty)").unwrap();
        return out;
    }

    writeln!(out).unwrap();
    for entry in watchlist.list() {
        let added = format_date(Some(entry.added_at.to_rfc3339().as_str()));
        match doc.find_commenter(&entry.user_id) {
            Some(commenter) => writeln!(
                out,
                "{:<24} {:>7} comments on {:>3} pages  (added {added})",
                commenter.name,
                format_number(commenter.comment_count),
                commenter.pages_commented
            )
            .unwrap(),
            None => writeln!(
                out,
                "{:<24} (not in current export)  (added {added})",
                entry.name
            )
            .unwrap(),
        }
    }

    out
}

/// Runs the watch command.
pub fn run<S: WatchlistStore>(
    doc: &AnalyticsDoc,
    watchlist: &mut PersistedWatchlist<S>,
    action: &WatchAction,
) -> Result<()> {
    match action {
        WatchAction::List => {
            print!("{}", format_list(doc, watchlist));
        }
        WatchAction::Add { user_id } => {
            let Some(commenter) = doc.find_commenter(user_id) else {
                bail!("no commenter with id '{user_id}' in the current export");
            };
            let entry = WatchlistEntry {
                user_id: commenter.user_id.clone(),
                name: commenter.name.clone(),
                added_at: Utc::now(),
            };
            if watchlist.add(entry)? {
                println!("Watching {}.", commenter.name);
            } else {
                println!("{} is already on the watchlist.", commenter.name);
            }
        }
        WatchAction::Remove { user_id } => {
            if watchlist.remove(user_id)? {
                println!("Removed {user_id} from the watchlist.");
            } else {
                println!("{user_id} is not on the watchlist.");
            }
        }
    }
    Ok(())
}
