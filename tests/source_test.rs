//! Integration tests for the cached, failure-tolerant data source

use cbb_draft::{
    cbbd::{CbbdClient, DataSource, FetchMode, LoadRequest},
    core::{QueryKey, ResponseCache},
    Season,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn game(id: u64, home: &str, home_id: u32, away: &str, away_id: u32) -> Value {
    json!({
        "id": id,
        "season": 2026,
        "startDate": "2026-01-10T00:00:00.000Z",
        "homeTeamId": home_id,
        "homeTeam": home,
        "homePoints": 70,
        "awayTeamId": away_id,
        "awayTeam": away,
        "awayPoints": 60
    })
}

async fn mount_teams_and_rankings(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 150, "school": "Duke", "conference": "ACC"}
        ])))
        .expect(expected_calls)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rankings"))
        .and(query_param("season", "2026"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"teamId": 150, "pollDate": "2026-01-05T00:00:00Z", "ranking": 4, "week": 9, "pollType": "AP Top 25"}
        ])))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn source(server: &MockServer, cache: ResponseCache<QueryKey, Vec<Value>>) -> DataSource {
    let client = CbbdClient::with_base_url("test-token", server.uri()).unwrap();
    DataSource::new(Some(client), cache)
}

fn bulk_request(refresh: bool) -> LoadRequest {
    LoadRequest {
        season: Season::new(2026),
        mode: FetchMode::Bulk,
        teams: Vec::new(),
        dates: None,
        refresh,
    }
}

#[tokio::test]
async fn test_repeat_load_within_ttl_does_not_refetch() {
    let server = MockServer::start().await;
    mount_teams_and_rankings(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([game(1, "Duke", 150, "UNC", 153)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let source = source(&server, ResponseCache::new(None, 3600));

    let first = source.load(&bulk_request(false)).await;
    let second = source.load(&bulk_request(false)).await;

    assert!(first.warnings.is_empty());
    assert_eq!(first.games.len(), 1);
    assert_eq!(second.games.len(), 1);
    assert_eq!(first.games[0].id, second.games[0].id);
    assert_eq!(second.rankings[0].ranking, Some(4));
}

#[tokio::test]
async fn test_disk_cache_shared_across_sources() {
    let server = MockServer::start().await;
    mount_teams_and_rankings(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let first = source(&server, ResponseCache::new(Some(dir.path().to_path_buf()), 3600));
    first.load(&bulk_request(false)).await;

    // A fresh process only has the files
    let second = source(&server, ResponseCache::new(Some(dir.path().to_path_buf()), 3600));
    let data = second.load(&bulk_request(false)).await;

    assert!(data.warnings.is_empty());
    assert_eq!(data.teams.len(), 1);
    assert!(dir.path().join("teams.json").exists());
}

#[tokio::test]
async fn test_refresh_bypasses_cache() {
    let server = MockServer::start().await;
    mount_teams_and_rankings(&server, 2).await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let source = source(&server, ResponseCache::new(None, 3600));

    source.load(&bulk_request(false)).await;
    source.load(&bulk_request(true)).await;
}

#[tokio::test]
async fn test_zero_ttl_disables_cache() {
    let server = MockServer::start().await;
    mount_teams_and_rankings(&server, 2).await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let source = source(&server, ResponseCache::new(None, 0));

    source.load(&bulk_request(false)).await;
    source.load(&bulk_request(false)).await;
}

#[tokio::test]
async fn test_per_team_failure_is_isolated_and_games_deduplicated() {
    let server = MockServer::start().await;
    mount_teams_and_rankings(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("team", "Duke"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            game(1, "Duke", 150, "Kansas", 2305),
            game(2, "Duke", 150, "Army", 9)
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("team", "UNC"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("team", "Kansas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            game(1, "Duke", 150, "Kansas", 2305),
            game(3, "Kansas", 2305, "Navy", 10)
        ])))
        .mount(&server)
        .await;

    let source = source(&server, ResponseCache::new(None, 3600));
    let request = LoadRequest {
        season: Season::new(2026),
        mode: FetchMode::PerTeam,
        teams: vec!["Duke".to_string(), "UNC".to_string(), "Kansas".to_string()],
        dates: None,
        refresh: false,
    };

    let data = source.load(&request).await;

    let ids: Vec<Option<u64>> = data.games.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    assert_eq!(data.warnings.len(), 1);
    assert_eq!(data.warnings[0].query, "games for UNC (2026)");
    assert!(data.warnings[0].message.contains("500"));
    assert_eq!(data.teams.len(), 1);
}

#[tokio::test]
async fn test_failed_query_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rankings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let source = source(&server, ResponseCache::new(None, 3600));

    let first = source.load(&bulk_request(false)).await;
    let second = source.load(&bulk_request(false)).await;

    assert_eq!(first.warnings.len(), 1);
    assert_eq!(first.warnings[0].query, "teams");
    assert_eq!(second.warnings.len(), 1);
    assert!(source.cache().get(&QueryKey::Teams).is_none());
}

#[tokio::test]
async fn test_malformed_rows_are_skipped() {
    let server = MockServer::start().await;
    mount_teams_and_rankings(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            game(1, "Duke", 150, "UNC", 153),
            {"id": "not-a-number"},
            "garbage"
        ])))
        .mount(&server)
        .await;

    let source = source(&server, ResponseCache::new(None, 3600));

    let data = source.load(&bulk_request(false)).await;

    assert_eq!(data.games.len(), 1);
    assert!(data.warnings.is_empty());
}

#[tokio::test]
async fn test_date_window_is_sent_with_each_games_query() {
    let server = MockServer::start().await;
    mount_teams_and_rankings(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("team", "Duke"))
        .and(query_param("startDateRange", "2026-01-09"))
        .and(query_param("endDateRange", "2026-01-11"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([game(1, "Duke", 150, "UNC", 153)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let source = source(&server, ResponseCache::new(None, 3600));
    let request = LoadRequest {
        season: Season::new(2026),
        mode: FetchMode::PerTeam,
        teams: vec!["Duke".to_string()],
        dates: Some((
            NaiveDate::from_ymd_opt(2026, 1, 9).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
        )),
        refresh: false,
    };

    let data = source.load(&request).await;

    assert!(data.warnings.is_empty());
    assert_eq!(data.games.len(), 1);
}
