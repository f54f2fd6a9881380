use chrono::NaiveTime;

use crate::domain::models::availability::Availability;
use crate::domain::models::booking::Booking;

/// Half-open interval overlap: [a_start, a_end) and [b_start, b_end)
/// overlap iff a_start < b_end and a_end > b_start.
pub fn overlaps(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
    a_start < b_end && a_end > b_start
}

/// Whether the block [block_start, block_end] fully contains the requested
/// window.
pub fn covers(block_start: NaiveTime, block_end: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    block_start <= start && block_end >= end
}

/// The open windows of a day: availability blocks minus the intervals taken
/// by active bookings. Feeds the calendar frontend; the booking engine
/// itself re-checks inside its insert transaction.
pub fn free_windows(blocks: &[Availability], bookings: &[Booking]) -> Vec<(NaiveTime, NaiveTime)> {
    let mut busy: Vec<(NaiveTime, NaiveTime)> = bookings
        .iter()
        .map(|b| (b.start_time, b.end_time))
        .collect();
    busy.sort();

    let mut windows = Vec::new();
    for block in blocks {
        if !block.is_available {
            continue;
        }
        let mut cursor = block.start_time;
        for &(b_start, b_end) in &busy {
            if !overlaps(cursor, block.end_time, b_start, b_end) {
                continue;
            }
            if b_start > cursor {
                windows.push((cursor, b_start));
            }
            if b_end > cursor {
                cursor = b_end;
            }
        }
        if cursor < block.end_time {
            windows.push((cursor, block.end_time));
        }
    }

    windows.sort();
    windows.dedup();
    windows
}
