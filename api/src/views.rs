use crate::{PlayerBattingLine, StrikeoutEntry, ZeroHitEntry};
use std::cmp::Reverse;

/// The 0-fer Club: players with at least one at-bat and no hits, most at-bats
/// first, then most strikeouts. Ties keep batting-order position.
pub fn zero_hit_view(players: &[PlayerBattingLine]) -> Vec<ZeroHitEntry> {
    let mut entries: Vec<ZeroHitEntry> = players
        .iter()
        .filter(|p| p.at_bats > 0 && p.hits == 0)
        .map(|p| ZeroHitEntry {
            name: p.name.clone(),
            at_bats: p.at_bats,
            strike_outs: p.strike_outs,
        })
        .collect();
    // sort_by_key is stable
    entries.sort_by_key(|e| (Reverse(e.at_bats), Reverse(e.strike_outs)));
    entries
}

/// Players who struck out at least once, most strikeouts first.
pub fn strikeout_view(players: &[PlayerBattingLine]) -> Vec<StrikeoutEntry> {
    let mut entries: Vec<StrikeoutEntry> = players
        .iter()
        .filter(|p| p.strike_outs > 0)
        .map(|p| StrikeoutEntry {
            name: p.name.clone(),
            strike_outs: p.strike_outs,
        })
        .collect();
    entries.sort_by_key(|e| Reverse(e.strike_outs));
    entries
}
