use std::time::Duration;

use async_trait::async_trait;
use http::header::HeaderValue;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;
use crate::model::Season;

pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Fetches a single API resource and hands back its parsed JSON body.
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    async fn fetch(&self, uri: &str) -> Result<Value, Error>;
}

pub struct FootballDataService {
    pub client: Client,
    auth_token: Option<HeaderValue>,
}

impl FootballDataService {
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(client, api_key)
    }

    /// An empty key sends no auth header at all; the API then applies its anonymous quota.
    pub fn with_client(client: Client, api_key: &str) -> Result<Self, Error> {
        let auth_token = match api_key.trim() {
            "" => None,
            key => {
                let mut token = HeaderValue::from_str(key)?;
                token.set_sensitive(true);
                Some(token)
            }
        };
        Ok(FootballDataService { client, auth_token })
    }

    /// Every league season the API knows about. Fetched once per run.
    pub async fn seasons(&self, api_url: &str) -> Result<Vec<Season>, Error> {
        let uri = format!("{api_url}/soccerseasons", api_url = api_url.trim_end_matches('/'));
        fetch_typed(self, &uri).await
    }
}

#[async_trait]
impl ResourceLoader for FootballDataService {
    async fn fetch(&self, uri: &str) -> Result<Value, Error> {
        debug!("GET {uri}");
        let mut request = self.client.get(uri);
        if let Some(token) = &self.auth_token {
            request = request.header(AUTH_TOKEN_HEADER, token.clone());
        }
        let mut response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus(format!(
                "GET {uri} answered {status}: {body}",
                body = response.text().await.unwrap_or_default()
            )));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Fetches `uri` and deserializes the body into `T`. Shape mismatches are `Error::Malformed`.
pub async fn fetch_typed<L, T>(loader: &L, uri: &str) -> Result<T, Error>
where
    L: ResourceLoader + ?Sized,
    T: DeserializeOwned,
{
    let body = loader.fetch(uri).await?;
    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
use mockito::server_url;

#[cfg(not(test))]
const FOOTBALL_DATA_URL: &str = "http://api.football-data.org/alpha";

/// Base URL of the upstream API.
pub fn api_url() -> String {
    #[cfg(not(test))]
    let url = String::from(FOOTBALL_DATA_URL);
    #[cfg(test)]
    let url = server_url();
    url
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::error::Error;
    use crate::model::{Players, Teams};
    use crate::service::{api_url, fetch_typed, FootballDataService, ResourceLoader};
    use mockito::mock;
    use serde_json::json;

    fn football_data_service() -> FootballDataService {
        FootballDataService::new("my-api-key", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn given_api_key_when_fetch_then_send_auth_token_header() {
        // Given
        let _m = mock("GET", "/service/auth")
            .match_header("x-auth-token", "my-api-key")
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(r#"{"ok": true}"#)
            .create();

        // When
        let response = football_data_service()
            .fetch(&format!("{}/service/auth", api_url()))
            .await
            .unwrap();

        // Then
        assert_eq!(response, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn given_empty_api_key_when_fetch_then_no_auth_token_header() {
        // Given
        let _m = mock("GET", "/service/anonymous")
            .match_header("x-auth-token", mockito::Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body("[]")
            .create();
        let service = FootballDataService::new("  ", Duration::from_secs(5)).unwrap();

        // When
        let response = service.fetch(&format!("{}/service/anonymous", api_url())).await.unwrap();

        // Then
        assert_eq!(response, json!([]));
    }

    #[tokio::test]
    async fn given_seasons_resource_when_seasons_then_get_all_seasons() {
        // Given
        let base = format!("{}/service/seasons", api_url());
        let seasons = json!([
            {
                "_links": {
                    "teams": { "href": format!("{base}/399/teams") },
                    "fixtures": { "href": format!("{base}/399/fixtures") },
                    "leagueTable": { "href": format!("{base}/399/leagueTable") }
                },
                "caption": "Primera Division 2015/16",
                "league": "PD",
                "numberOfTeams": 20
            },
            {
                "_links": {
                    "teams": { "href": format!("{base}/402/teams") },
                    "fixtures": { "href": format!("{base}/402/fixtures") },
                    "leagueTable": { "href": format!("{base}/402/leagueTable") }
                },
                "caption": "Primeira Liga 2015/16",
                "league": "PPL",
                "numberOfTeams": 18
            }
        ]);
        let _m = mock("GET", "/service/seasons/soccerseasons")
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(seasons.to_string())
            .create();

        // When
        let response = football_data_service().seasons(&base).await.unwrap();

        // Then
        let codes: Vec<&str> = response.iter().map(|s| s.short_code.as_str()).collect();
        assert_eq!(codes, vec!["PD", "PPL"]);
    }

    #[tokio::test]
    async fn given_not_found_when_fetch_then_unexpected_status_error() {
        // Given
        let _m = mock("GET", "/service/missing")
            .with_status(404)
            .with_body("no such resource")
            .create();

        // When
        let error = football_data_service()
            .fetch(&format!("{}/service/missing", api_url()))
            .await
            .unwrap_err();

        // Then
        assert!(matches!(error, Error::UnexpectedStatus(_)));
        assert!(error.to_string().contains("404"));
        assert!(error.to_string().contains("no such resource"));
    }

    #[tokio::test]
    async fn given_truncated_body_when_fetch_then_malformed_error() {
        // Given
        let _m = mock("GET", "/service/truncated")
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(r#"{"teams": [{"name": "#)
            .create();

        // When
        let error = football_data_service()
            .fetch(&format!("{}/service/truncated", api_url()))
            .await
            .unwrap_err();

        // Then
        assert!(matches!(error, Error::Malformed(_)));
    }

    #[tokio::test]
    async fn given_body_of_wrong_shape_when_fetch_typed_then_malformed_error() {
        // Given
        let _m = mock("GET", "/service/wrong-shape")
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(r#"{"players": []}"#)
            .create();

        // When
        let error = fetch_typed::<_, Teams>(
            &football_data_service(),
            &format!("{}/service/wrong-shape", api_url()),
        )
        .await
        .unwrap_err();

        // Then
        assert!(matches!(error, Error::Malformed(_)));
    }

    #[tokio::test]
    async fn given_players_body_when_fetch_typed_then_players() {
        // Given
        let _m = mock("GET", "/service/teams/560/players")
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(
                json!({
                    "count": 1,
                    "players": [{
                        "name": "Germán Lux",
                        "position": "Keeper",
                        "jerseyNumber": 1,
                        "dateOfBirth": "1982-06-07",
                        "nationality": "Argentina",
                        "contractUntil": "2016-06-30",
                        "marketValue": "200,000 €"
                    }]
                })
                .to_string(),
            )
            .create();

        // When
        let players = fetch_typed::<_, Players>(
            &football_data_service(),
            &format!("{}/service/teams/560/players", api_url()),
        )
        .await
        .unwrap();

        // Then
        assert_eq!(players.players.len(), 1);
        assert_eq!(players.players[0].jersey_number, Some(1));
    }

    #[tokio::test]
    async fn given_unreachable_host_when_fetch_then_transport_error() {
        let error = football_data_service()
            .fetch("http://127.0.0.1:1/unreachable")
            .await
            .unwrap_err();

        assert!(matches!(error, Error::Transport(_)));
    }

    #[test]
    fn given_api_key_with_newline_when_new_then_invalid_header_error() {
        let error = FootballDataService::new("bad\nkey", Duration::from_secs(1))
            .err()
            .unwrap();

        assert!(matches!(error, Error::InvalidHeader(_)));
    }
}
