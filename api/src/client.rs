use crate::mlb::{BoxscoreResponse, BoxscoreTeam, ScheduleGame, ScheduleResponse, ScheduleTeam};
use crate::{BattingStats, BoxPlayer, BoxScore, Game, GameStatus, TeamBatting, TeamScore};
use chrono::{NaiveDate, Utc};
use log::{debug, error};
use reqwest::Client;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const MLB_STATS_API: &str = "https://statsapi.mlb.com/api";
const MLB_SPORT_ID: u32 = 1;

/// MLB Stats API client.
#[derive(Debug, Clone)]
pub struct MlbApi {
    client: Client,
    timeout: Duration,
    base_url: String,
}

impl Default for MlbApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("oferclub/0.1 (terminal box score viewer)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
            base_url: MLB_STATS_API.to_owned(),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl MlbApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another statsapi-compatible host (no trailing slash).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Fetch every game scheduled for `team_id` on `date`.
    pub async fn fetch_schedule(&self, team_id: u32, date: NaiveDate) -> ApiResult<Vec<Game>> {
        let url = format!(
            "{}/v1/schedule?sportId={MLB_SPORT_ID}&hydrate=team&teamId={team_id}&date={}",
            self.base_url,
            date.format("%Y-%m-%d")
        );
        let raw: ScheduleResponse = self.get(&url).await?;
        Ok(map_schedule(raw, date))
    }

    /// Schedule lookup that never fails: transport and parse errors are logged
    /// and reported as "no games", which callers cannot tell apart.
    pub async fn schedule(&self, team_id: u32, date: NaiveDate) -> Vec<Game> {
        match self.fetch_schedule(team_id, date).await {
            Ok(games) => games,
            Err(e) => {
                error!("Error fetching schedule for team {team_id} on {date}: {e}");
                Vec::new()
            }
        }
    }

    /// Fetch the box score for one game.
    pub async fn fetch_boxscore(&self, game_id: u64) -> ApiResult<BoxScore> {
        let url = format!("{}/v1/game/{game_id}/boxscore", self.base_url);
        let raw: BoxscoreResponse = self.get(&url).await?;
        Ok(map_boxscore(raw))
    }

    /// Box score fetch that never fails: on error the empty box score is returned.
    pub async fn boxscore(&self, game_id: u64) -> BoxScore {
        match self.fetch_boxscore(game_id).await {
            Ok(box_score) => box_score,
            Err(e) => {
                error!("Error fetching boxscore for game {game_id}: {e}");
                BoxScore::default()
            }
        }
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping: statsapi wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_schedule(raw: ScheduleResponse, date: NaiveDate) -> Vec<Game> {
    raw.dates
        .unwrap_or_default()
        .into_iter()
        .flat_map(|d| d.games.unwrap_or_default())
        .map(|g| map_schedule_game(g, date))
        .collect()
}

fn map_schedule_game(g: ScheduleGame, date: NaiveDate) -> Game {
    let detailed_state = g
        .status
        .and_then(|s| s.detailed_state)
        .unwrap_or_default();

    let start_time = g
        .game_date
        .as_deref()
        .and_then(|d| chrono::DateTime::parse_from_rfc3339(d).ok())
        .map(|dt| dt.with_timezone(&Utc));

    let (home, away) = g
        .teams
        .map(|t| (map_schedule_team(t.home), map_schedule_team(t.away)))
        .unwrap_or_default();

    Game {
        id: g.game_pk,
        date,
        start_time,
        status: GameStatus::from_detailed_state(&detailed_state),
        detailed_state,
        venue: g.venue.and_then(|v| v.name).unwrap_or_default(),
        home,
        away,
    }
}

fn map_schedule_team(t: Option<ScheduleTeam>) -> TeamScore {
    let Some(t) = t else {
        return TeamScore::default();
    };
    let name = t.team.and_then(|r| r.name).unwrap_or_default();
    TeamScore { name, score: t.score.unwrap_or_default() }
}

fn map_boxscore(raw: BoxscoreResponse) -> BoxScore {
    let Some(teams) = raw.teams else {
        return BoxScore::default();
    };
    let home = teams.home.unwrap_or_default();
    let away = teams.away.unwrap_or_default();

    let mut players = HashMap::new();
    collect_players(&home, &mut players);
    collect_players(&away, &mut players);

    BoxScore {
        home: TeamBatting { batting_order: home.batters },
        away: TeamBatting { batting_order: away.batters },
        players,
    }
}

fn collect_players(team: &BoxscoreTeam, players: &mut HashMap<u64, BoxPlayer>) {
    for (key, p) in &team.players {
        let Some(id) = parse_player_key(key) else {
            debug!("skipping boxscore player with unexpected key {key}");
            continue;
        };

        let name = p
            .person
            .as_ref()
            .and_then(|person| person.full_name.clone())
            .unwrap_or_default();

        let batting = p
            .stats
            .as_ref()
            .and_then(|s| s.batting.as_ref())
            .filter(|b| !b.is_empty())
            .map(|b| BattingStats {
                at_bats: b.at_bats.unwrap_or_default(),
                hits: b.hits.unwrap_or_default(),
                strike_outs: b.strike_outs.unwrap_or_default(),
            });

        players.insert(id, BoxPlayer { name, batting });
    }
}

/// "ID592450" → 592450
fn parse_player_key(key: &str) -> Option<u64> {
    key.strip_prefix("ID").unwrap_or(key).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const SCHEDULE_JSON: &str = r#"{
        "dates": [{
            "date": "2024-08-01",
            "games": [{
                "gamePk": 745123,
                "gameDate": "2024-08-01T23:10:00Z",
                "status": { "abstractGameState": "Final", "detailedState": "Final" },
                "teams": {
                    "away": { "score": 3, "team": { "id": 144, "name": "Atlanta Braves" } },
                    "home": { "score": 5, "team": { "id": 121, "name": "New York Mets" } }
                },
                "venue": { "id": 3289, "name": "Citi Field" }
            }]
        }]
    }"#;

    const BOXSCORE_JSON: &str = r#"{
        "teams": {
            "home": {
                "batters": [1, 2, 3],
                "players": {
                    "ID1": { "person": { "id": 1, "fullName": "Player One" },
                             "stats": { "batting": { "atBats": 4, "hits": 0, "strikeOuts": 2 } } },
                    "ID2": { "person": { "id": 2, "fullName": "Player Two" },
                             "stats": { "batting": { "atBats": 3, "hits": 1 } } },
                    "ID3": { "person": { "id": 3, "fullName": "Pitcher Three" },
                             "stats": { "batting": {}, "pitching": { "strikeOuts": 7 } } }
                }
            },
            "away": {
                "batters": [10],
                "players": {
                    "ID10": { "person": { "id": 10, "fullName": "Visitor Ten" },
                              "stats": { "batting": { "atBats": 5, "hits": 2, "strikeOuts": 1 } } },
                    "bogus": { "person": { "fullName": "Nobody" } }
                }
            }
        }
    }"#;

    #[test]
    fn player_key_strips_id_prefix() {
        assert_eq!(parse_player_key("ID592450"), Some(592450));
        assert_eq!(parse_player_key("592450"), Some(592450));
        assert_eq!(parse_player_key("IDabc"), None);
    }

    #[test]
    fn schedule_maps_game_fields() {
        let raw: ScheduleResponse = serde_json::from_str(SCHEDULE_JSON).unwrap();
        let games = map_schedule(raw, day(2024, 8, 1));
        assert_eq!(games.len(), 1);
        let g = &games[0];
        assert_eq!(g.id, 745123);
        assert_eq!(g.date, day(2024, 8, 1));
        assert!(g.is_final());
        assert_eq!(g.venue, "Citi Field");
        assert_eq!(g.home.name, "New York Mets");
        assert_eq!(g.home.score, 5);
        assert_eq!(g.away.score, 3);
        assert_eq!(
            g.start_time.map(|t| t.to_rfc3339()),
            Some("2024-08-01T23:10:00+00:00".to_string())
        );
    }

    #[test]
    fn schedule_missing_fields_default() {
        let raw: ScheduleResponse =
            serde_json::from_str(r#"{"dates":[{"games":[{"gamePk":7}]}]}"#).unwrap();
        let games = map_schedule(raw, day(2024, 8, 1));
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].status, GameStatus::Scheduled);
        assert_eq!(games[0].home, TeamScore::default());
        assert!(games[0].venue.is_empty());
        assert!(games[0].start_time.is_none());
    }

    #[test]
    fn empty_schedule_has_no_games() {
        let raw: ScheduleResponse = serde_json::from_str(r#"{"dates":[]}"#).unwrap();
        assert!(map_schedule(raw, day(2024, 8, 1)).is_empty());
        assert!(map_schedule(ScheduleResponse::default(), day(2024, 8, 1)).is_empty());
    }

    #[test]
    fn boxscore_flattens_both_sides() {
        let raw: BoxscoreResponse = serde_json::from_str(BOXSCORE_JSON).unwrap();
        let b = map_boxscore(raw);
        assert_eq!(b.home.batting_order, vec![1, 2, 3]);
        assert_eq!(b.away.batting_order, vec![10]);
        assert_eq!(b.players.len(), 4, "unparseable key must be skipped");

        let p2 = &b.players[&2];
        assert_eq!(p2.name, "Player Two");
        assert_eq!(p2.batting, Some(BattingStats { at_bats: 3, hits: 1, strike_outs: 0 }));
        assert_eq!(b.players[&3].batting, None, "empty batting object means no batting stats");
        assert_eq!(b.players[&10].batting.map(|s| s.hits), Some(2));
    }

    #[test]
    fn boxscore_without_teams_is_empty() {
        let raw: BoxscoreResponse = serde_json::from_str("{}").unwrap();
        let b = map_boxscore(raw);
        assert!(b.is_empty());
        assert_eq!(b, BoxScore::default());
    }

    #[tokio::test]
    async fn fetch_schedule_queries_team_and_date() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/schedule")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("sportId".into(), "1".into()),
                Matcher::UrlEncoded("teamId".into(), "121".into()),
                Matcher::UrlEncoded("date".into(), "2024-08-01".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(SCHEDULE_JSON)
            .create_async()
            .await;

        let api = MlbApi::with_base_url(server.url());
        let games = api.fetch_schedule(121, day(2024, 8, 1)).await.unwrap();
        mock.assert_async().await;
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, 745123);
    }

    #[tokio::test]
    async fn schedule_server_error_degrades_to_empty() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/schedule")
            .match_query(Matcher::Any)
            .with_status(500)
            .expect(2)
            .create_async()
            .await;

        let api = MlbApi::with_base_url(server.url());
        assert!(matches!(
            api.fetch_schedule(121, day(2024, 8, 1)).await,
            Err(ApiError::Api(..))
        ));
        assert!(api.schedule(121, day(2024, 8, 1)).await.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn schedule_malformed_json_degrades_to_empty() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/schedule")
            .match_query(Matcher::Any)
            .with_body("{ not json")
            .create_async()
            .await;

        let api = MlbApi::with_base_url(server.url());
        assert!(api.schedule(121, day(2024, 8, 1)).await.is_empty());
    }

    #[tokio::test]
    async fn boxscore_malformed_json_degrades_to_empty() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/game/745123/boxscore")
            .with_body(r#"{"teams": {"home": {"batters": "oops"}}}"#)
            .create_async()
            .await;

        let api = MlbApi::with_base_url(server.url());
        assert!(matches!(api.fetch_boxscore(745123).await, Err(ApiError::Parsing(..))));
        assert_eq!(api.boxscore(745123).await, BoxScore::default());
    }

    #[tokio::test]
    async fn boxscore_not_found_is_empty() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/game/1/boxscore")
            .with_status(404)
            .create_async()
            .await;

        let api = MlbApi::with_base_url(server.url());
        assert!(api.fetch_boxscore(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_boxscore_maps_players() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/game/745123/boxscore")
            .with_header("content-type", "application/json")
            .with_body(BOXSCORE_JSON)
            .create_async()
            .await;

        let api = MlbApi::with_base_url(server.url());
        let b = api.boxscore(745123).await;
        assert_eq!(b.players[&1].name, "Player One");
        assert_eq!(b.players[&1].batting.map(|s| s.strike_outs), Some(2));
    }
}
