//! Latest-completed-game search, team-side resolution and batting-line
//! normalization.

use crate::client::MlbApi;
use crate::{BoxScore, Game, GameSummary, LatestGame, PlayerBattingLine, Side, TrackedTeam};
use chrono::{Days, NaiveDate};
use log::{debug, info, warn};

/// How many calendar days, today included, are searched for a finished game.
pub const LOOKBACK_DAYS: u64 = 7;

/// `today, today-1, …, today-6`, newest first.
pub fn lookback_dates(today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..LOOKBACK_DAYS).filter_map(move |offset| today.checked_sub_days(Days::new(offset)))
}

/// First game on the list whose status is Final. Only one game per team per
/// day is expected, so later completed games (doubleheaders) are ignored.
pub fn first_completed(games: Vec<Game>) -> Option<Game> {
    games.into_iter().find(Game::is_final)
}

/// Walk back from `today` and return the most recent completed game for
/// `team` with its normalized batting lines, or None when the window holds
/// no finished game.
pub async fn find_latest_game(api: &MlbApi, team: &TrackedTeam, today: NaiveDate) -> Option<LatestGame> {
    for date in lookback_dates(today) {
        let games = api.schedule(team.id, date).await;
        debug!("{} game(s) scheduled for team {} on {date}", games.len(), team.id);

        let Some(game) = first_completed(games) else {
            continue;
        };

        info!("latest completed game for {}: {} on {date}", team.name, game.id);
        let box_score = api.boxscore(game.id).await;
        return Some(build_latest_game(&game, &box_score, team));
    }

    info!("no completed game for {} in the {LOOKBACK_DAYS} days up to {today}", team.name);
    None
}

/// Combine a schedule entry and its box score into the tracked team's view.
pub fn build_latest_game(game: &Game, box_score: &BoxScore, team: &TrackedTeam) -> LatestGame {
    let side = resolve_side(game, team);
    let ours = game.team(side);
    let theirs = game.team(side.opposite());

    LatestGame {
        summary: GameSummary {
            game_id: game.id,
            date: game.date,
            start_time: game.start_time,
            venue: game.venue.clone(),
            is_home: side == Side::Home,
            team_name: team.name.clone(),
            team_score: ours.score,
            opponent: theirs.name.clone(),
            opponent_score: theirs.score,
        },
        players: normalize_players(box_score, side),
    }
}

/// Home when the home side's name equals the tracked team's display name,
/// away otherwise. A renamed team silently lands on the away side, so a
/// mismatch on both sides is logged.
pub fn resolve_side(game: &Game, team: &TrackedTeam) -> Side {
    if game.home.name == team.name {
        return Side::Home;
    }
    if game.away.name != team.name {
        warn!(
            "game {}: neither \"{}\" (home) nor \"{}\" (away) matches tracked team \"{}\"; assuming away",
            game.id, game.home.name, game.away.name, team.name
        );
    }
    Side::Away
}

/// Batting lines for `side` in batting-order position. Ids missing from the
/// player map and players without batting stats are skipped.
pub fn normalize_players(box_score: &BoxScore, side: Side) -> Vec<PlayerBattingLine> {
    box_score
        .batting(side)
        .batting_order
        .iter()
        .filter_map(|id| box_score.players.get(id))
        .filter_map(|player| {
            let stats = player.batting?;
            Some(PlayerBattingLine {
                name: player.name.clone(),
                at_bats: stats.at_bats,
                hits: stats.hits,
                strike_outs: stats.strike_outs,
            })
        })
        .collect()
}
