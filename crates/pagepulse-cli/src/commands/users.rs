//! Users command: commenter leaderboard, search, and per-user detail.

use std::fmt::Write;

use anyhow::Result;
use chrono::Utc;
use pagepulse_core::Watchlist;
use pagepulse_data::{AnalyticsDoc, Commenter};

use crate::cli::UsersAction;
use crate::render::{format_number, format_time_ago};

const COMMENT_HISTORY_SHOWN: usize = 20;

/// Formats the ranked leaderboard. Watched commenters get a `★` marker.
pub fn format_leaderboard(doc: &AnalyticsDoc, watchlist: &Watchlist) -> String {
    let mut out = String::new();

    writeln!(out, "TOP COMMENTERS").unwrap();
    writeln!(out, "==============").unwrap();

    if doc.top_commenters.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "(no commenter data)").unwrap();
        return out;
    }

    writeln!(out).unwrap();
    for (rank, commenter) in doc.top_commenters.iter().enumerate() {
        let marker = if watchlist.contains(&commenter.user_id) {
            "★"
        } else {
            " "
        };
        writeln!(
            out,
            "{:>3}. {marker} {:<24} {:>7} comments on {:>3} pages",
            rank + 1,
            commenter.name,
            format_number(commenter.comment_count),
            commenter.pages_commented
        )
        .unwrap();
    }

    out
}

/// Formats search results for a name fragment.
pub fn format_search(doc: &AnalyticsDoc, query: &str) -> String {
    let mut out = String::new();

    writeln!(out, "COMMENTER SEARCH: {query}").unwrap();
    writeln!(out, "=================").unwrap();

    let matches = doc.search_commenters(query);
    writeln!(out).unwrap();
    if matches.is_empty() {
        writeln!(out, "No commenters match.").unwrap();
        return out;
    }

    for commenter in matches {
        writeln!(
            out,
            "{:<12} {:<24} {:>7} comments",
            commenter.user_id,
            commenter.name,
            format_number(commenter.comment_count)
        )
        .unwrap();
    }

    out
}

/// Formats the detail view for one commenter, including recent comments.
pub fn format_detail(doc: &AnalyticsDoc, commenter: &Commenter, watchlist: &Watchlist) -> String {
    let mut out = String::new();
    let now = Utc::now();

    writeln!(out, "COMMENTER: {}", commenter.name).unwrap();
    writeln!(out, "==========").unwrap();
    writeln!(out, "Id:             {}", commenter.user_id).unwrap();
    writeln!(
        out,
        "Comments:       {}",
        format_number(commenter.comment_count)
    )
    .unwrap();
    writeln!(out, "Pages:          {}", commenter.pages_commented).unwrap();
    writeln!(
        out,
        "First comment:  {}",
        format_time_ago(commenter.first_comment.as_deref(), now)
    )
    .unwrap();
    writeln!(
        out,
        "Last comment:   {}",
        format_time_ago(commenter.last_comment.as_deref(), now)
    )
    .unwrap();
    writeln!(
        out,
        "Watched:        {}",
        if watchlist.contains(&commenter.user_id) {
            "yes"
        } else {
            "no"
        }
    )
    .unwrap();

    let comments = doc.comments_for(&commenter.user_id);
    writeln!(out).unwrap();
    writeln!(out, "RECENT COMMENTS").unwrap();
    writeln!(out, "───────────────").unwrap();
    if comments.is_empty() {
        writeln!(out, "(no comment history)").unwrap();
    }
    for comment in comments.iter().take(COMMENT_HISTORY_SHOWN) {
        writeln!(
            out,
            "[{}] {}: {}",
            format_time_ago(comment.time.as_deref(), now),
            comment.page_name,
            comment.text
        )
        .unwrap();
    }
    let remaining = comments.len().saturating_sub(COMMENT_HISTORY_SHOWN);
    if remaining > 0 {
        writeln!(out, "... and {remaining} more").unwrap();
    }

    out
}

/// Runs the users command. No action means the leaderboard.
pub fn run(doc: &AnalyticsDoc, watchlist: &Watchlist, action: Option<&UsersAction>) -> Result<()> {
    match action {
        None | Some(UsersAction::Leaderboard) => {
            print!("{}", format_leaderboard(doc, watchlist));
        }
        Some(UsersAction::Search { query }) => {
            print!("{}", format_search(doc, query));
        }
        Some(UsersAction::Show { user_id }) => match doc.find_commenter(user_id) {
            Some(commenter) => print!("{}", format_detail(doc, commenter, watchlist)),
            None => println!("No commenter with id '{user_id}' in the current export."),
        },
    }
    Ok(())
}
