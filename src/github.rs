//! Live contribution source backed by the GitHub GraphQL API.

use crate::errors::FetchError;
use crate::models::{ContributionCalendar, ContributionRecord};
use crate::source::{ContributionSource, SourceFuture};
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

pub const CONTRIBUTIONS_QUERY: &str = r#"
query($username: String!) {
  user(login: $username) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}
"#;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token,
        })
    }

    async fn query(&self, username: &str) -> Result<ContributionCalendar, FetchError> {
        let body = GraphQlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: Variables { username },
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("bearer {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let calendar = parse_calendar(&text, username)?;
        debug!(
            "fetched {} days ({} contributions) for {username}",
            calendar.records.len(),
            calendar.total
        );
        Ok(calendar)
    }
}

impl ContributionSource for GitHubClient {
    fn fetch<'a>(&'a self, username: &'a str) -> SourceFuture<'a> {
        Box::pin(self.query(username))
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
struct Variables<'a> {
    username: &'a str,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct ResponseData {
    user: Option<User>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    contributions_collection: ContributionsCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: RawCalendar,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCalendar {
    total_contributions: u64,
    weeks: Vec<Week>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Week {
    contribution_days: Vec<Day>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Day {
    contribution_count: u64,
    date: NaiveDate,
}

pub fn parse_calendar(body: &str, username: &str) -> Result<ContributionCalendar, FetchError> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    let user = response.data.and_then(|data| data.user);
    let Some(user) = user else {
        if response.errors.is_empty() {
            return Err(FetchError::MissingUser(username.to_string()));
        }
        let messages = response.errors.into_iter().map(|err| err.message).collect();
        return Err(FetchError::GraphQl(messages));
    };

    let raw = user.contributions_collection.contribution_calendar;
    let records = raw
        .weeks
        .into_iter()
        .flat_map(|week| week.contribution_days)
        .map(|day| ContributionRecord::new(day.date, day.contribution_count))
        .collect();

    Ok(ContributionCalendar {
        total: raw.total_contributions,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
      "data": {
        "user": {
          "contributionsCollection": {
            "contributionCalendar": {
              "totalContributions": 12,
              "weeks": [
                { "contributionDays": [
                  { "contributionCount": 0, "date": "2023-12-31" },
                  { "contributionCount": 5, "date": "2024-01-01" }
                ] },
                { "contributionDays": [
                  { "contributionCount": 7, "date": "2024-01-07" }
                ] }
              ]
            }
          }
        }
      }
    }"#;

    #[test]
    fn flattens_weeks_in_order() {
        let calendar = parse_calendar(SAMPLE, "octocat").unwrap();
        assert_eq!(calendar.total, 12);

        let dates: Vec<String> = calendar.records.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, ["2023-12-31", "2024-01-01", "2024-01-07"]);
        let counts: Vec<u64> = calendar.records.iter().map(|r| r.count).collect();
        assert_eq!(counts, [0, 5, 7]);
    }

    #[test]
    fn graphql_errors_surface_messages() {
        let body = r#"{"data":{"user":null},"errors":[{"message":"Could not resolve to a User"}]}"#;
        match parse_calendar(body, "ghost") {
            Err(FetchError::GraphQl(messages)) => {
                assert_eq!(messages, ["Could not resolve to a User"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn null_user_without_errors_is_missing_user() {
        let body = r#"{"data":{"user":null}}"#;
        assert!(matches!(
            parse_calendar(body, "ghost"),
            Err(FetchError::MissingUser(login)) if login == "ghost"
        ));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            parse_calendar("<html>", "octocat"),
            Err(FetchError::Parse(_))
        ));
        let bad_date = r#"{"data":{"user":{"contributionsCollection":{"contributionCalendar":
            {"totalContributions":1,"weeks":[{"contributionDays":[{"contributionCount":1,"date":"soon"}]}]}}}}}"#;
        assert!(matches!(
            parse_calendar(bad_date, "octocat"),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn request_body_carries_username_variable() {
        let body = GraphQlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: Variables { username: "octocat" },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["variables"]["username"], "octocat");
        assert!(json["query"].as_str().unwrap().contains("contributionCount"));
    }
}
