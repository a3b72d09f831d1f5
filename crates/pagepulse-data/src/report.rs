//! Management-report grouping over page × shift rows.
//!
//! The export emits `pageShiftPerformance` as a flat list of page × shift
//! rows; the report view wants them grouped per page with page totals, plus
//! grand totals and per-shift summaries over whatever subset survives the
//! category filter.

use pagepulse_core::Shift;

use crate::document::PageShiftRow;

/// Counter totals for a page (or a set of pages).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTotals {
    pub messages: u64,
    pub incoming: u64,
    pub outgoing: u64,
    pub sessions: u64,
}

impl PageTotals {
    fn accumulate(&mut self, row: &PageShiftRow) {
        self.messages += row.messages;
        self.incoming += row.incoming;
        self.outgoing += row.outgoing;
        self.sessions += row.sessions;
    }
}

/// One page of the management report: its shift rows and their totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageGroup {
    pub name: String,
    pub page_id: String,
    pub category: String,
    /// One slot per [`Shift`], in schedule order. `None` when the export
    /// carries no row for that page/shift pair.
    pub shifts: [Option<PageShiftRow>; 3],
    pub totals: PageTotals,
}

impl PageGroup {
    /// The row for a given shift, if the export carried one.
    #[must_use]
    pub const fn shift_row(&self, shift: Shift) -> Option<&PageShiftRow> {
        self.shifts[shift.index()].as_ref()
    }
}

/// Groups flat page × shift rows per page, sorted by total messages
/// descending.
///
/// Rows with a label outside the three shifts still count toward page
/// totals but get no shift slot. A duplicate page/shift pair keeps the last
/// row, matching how the original view indexed rows into a map.
#[must_use]
pub fn group_pages(rows: &[PageShiftRow]) -> Vec<PageGroup> {
    let mut groups: Vec<PageGroup> = Vec::new();

    for row in rows {
        let existing = groups.iter().position(|g| g.name == row.name);
        let idx = existing.unwrap_or_else(|| {
            groups.push(PageGroup {
                name: row.name.clone(),
                page_id: row.page_id.clone(),
                category: row.category.clone(),
                ..PageGroup::default()
            });
            groups.len() - 1
        });
        let group = &mut groups[idx];

        group.totals.accumulate(row);
        if let Ok(shift) = row.shift.parse::<Shift>() {
            group.shifts[shift.index()] = Some(row.clone());
        }
    }

    groups.sort_by_key(|g| std::cmp::Reverse(g.totals.messages));
    groups
}

/// Grand totals across a (possibly category-filtered) set of pages.
#[must_use]
pub fn grand_totals<'a>(pages: impl IntoIterator<Item = &'a PageGroup>) -> PageTotals {
    let mut totals = PageTotals::default();
    for page in pages {
        totals.messages += page.totals.messages;
        totals.incoming += page.totals.incoming;
        totals.outgoing += page.totals.outgoing;
        totals.sessions += page.totals.sessions;
    }
    totals
}

/// Message and session totals for one shift across a set of pages.
#[must_use]
pub fn shift_summary<'a>(
    pages: impl IntoIterator<Item = &'a PageGroup>,
    shift: Shift,
) -> (u64, u64) {
    let mut messages = 0;
    let mut sessions = 0;
    for page in pages {
        if let Some(row) = page.shift_row(shift) {
            messages += row.messages;
            sessions += row.sessions;
        }
    }
    (messages, sessions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, category: &str, shift: &str, messages: u64, sessions: u64) -> PageShiftRow {
        PageShiftRow {
            page_id: format!("id-{name}"),
            name: name.to_string(),
            category: category.to_string(),
            shift: shift.to_string(),
            messages,
            incoming: messages / 2,
            outgoing: messages - messages / 2,
            sessions,
            avg_response_time: None,
        }
    }

    fn sample() -> Vec<PageShiftRow> {
        vec![
            row("Alpha", "Hosts", "Morning", 10, 2),
            row("Beta", "Babes", "Morning", 50, 9),
            row("Alpha", "Hosts", "Mid", 30, 5),
            row("Alpha", "Hosts", "Evening", 5, 1),
            row("Beta", "Babes", "Evening", 20, 4),
        ]
    }

    #[test]
    fn groups_by_page_and_sorts_by_messages_desc() {
        let pages = group_pages(&sample());
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].name, "Beta");
        assert_eq!(pages[0].totals.messages, 70);
        assert_eq!(pages[1].name, "Alpha");
        assert_eq!(pages[1].totals.messages, 45);
        assert_eq!(pages[1].totals.sessions, 8);
    }

    #[test]
    fn shift_rows_land_in_their_slots() {
        let pages = group_pages(&sample());
        let alpha = &pages[1];
        assert_eq!(alpha.shift_row(Shift::Morning).unwrap().messages, 10);
        assert_eq!(alpha.shift_row(Shift::Mid).unwrap().messages, 30);
        assert_eq!(alpha.shift_row(Shift::Evening).unwrap().messages, 5);

        let beta = &pages[0];
        assert!(beta.shift_row(Shift::Mid).is_none());
    }

    #[test]
    fn unknown_shift_labels_count_toward_totals_only() {
        let rows = vec![
            row("Alpha", "Hosts", "Morning", 10, 2),
            row("Alpha", "Hosts", "Graveyard", 7, 1),
        ];
        let pages = group_pages(&rows);
        assert_eq!(pages[0].totals.messages, 17);
        assert!(pages[0].shift_row(Shift::Evening).is_none());
    }

    #[test]
    fn grand_totals_cover_the_filtered_set() {
        let pages = group_pages(&sample());
        let all = grand_totals(&pages);
        assert_eq!(all.messages, 115);
        assert_eq!(all.sessions, 21);

        let hosts_only: Vec<_> = pages.iter().filter(|p| p.category == "Hosts").collect();
        let hosts = grand_totals(hosts_only.iter().copied());
        assert_eq!(hosts.messages, 45);
    }

    #[test]
    fn shift_summary_sums_messages_and_sessions() {
        let pages = group_pages(&sample());
        assert_eq!(shift_summary(&pages, Shift::Morning), (60, 11));
        assert_eq!(shift_summary(&pages, Shift::Mid), (30, 5));
        assert_eq!(shift_summary(&pages, Shift::Evening), (25, 5));
    }

    #[test]
    fn empty_input_yields_no_pages() {
        assert!(group_pages(&[]).is_empty());
        assert_eq!(grand_totals(&[]), PageTotals::default());
    }
}
