//! Gemini-backed insight client.
//!
//! Builds a compact business snapshot from the current collections and asks
//! the Gemini `generateContent` API for a narrative read on it. Prompt
//! building and response extraction are plain functions so they stay
//! testable without the network.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::dashboard;
use crate::fleet::models::Vehicle;
use crate::insights::InsightError;
use crate::trips::models::Trip;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Client for the Gemini insight endpoint
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    /// Build a client from configuration; fails when no API key is set.
    pub fn from_config(config: &Config) -> Result<Self, InsightError> {
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or(InsightError::MissingApiKey)?;
        Ok(Self::new(api_key, config.gemini_model.clone()))
    }

    /// Generate a narrative read on the current business data.
    pub async fn generate_business_insight(
        &self,
        trips: &[Trip],
        vehicles: &[Vehicle],
    ) -> Result<String, InsightError> {
        let prompt = build_prompt(trips, vehicles);
        debug!(chars = prompt.len(), "requesting business insight");

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_ENDPOINT, self.model, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let send = self.client.post(&url).json(&body).send();
        let response = tokio::time::timeout(REQUEST_TIMEOUT, send)
            .await
            .map_err(|_| InsightError::Timeout)??
            .error_for_status()?;

        let payload: GenerateContentResponse = response.json().await?;
        extract_text(&payload).ok_or(InsightError::EmptyResponse)
    }
}

/// Compose the analysis prompt from the current collections.
fn build_prompt(trips: &[Trip], vehicles: &[Vehicle]) -> String {
    let summary = dashboard::summarize(trips, None);

    let mut prompt = String::from(
        "You are an operations analyst for a small vehicle-for-hire business. \
         Review the snapshot below and reply with three short observations and \
         one concrete recommendation, in plain prose.\n\n",
    );

    prompt.push_str(&format!(
        "Fleet: {} vehicles. Trips recorded: {}.\n",
        vehicles.len(),
        trips.len()
    ));
    prompt.push_str(&format!(
        "This month: income {}, expenses {}, net profit {}.\n",
        summary.monthly_income, summary.monthly_expense, summary.monthly_net_profit
    ));
    prompt.push_str(&format!(
        "Pending driver payouts (all time): {}.\n\nRecent trips:\n",
        summary.pending_driver_payable
    ));

    for point in dashboard::recent_activity(trips) {
        prompt.push_str(&format!(
            "- {}: income {}, expense {}, profit {}\n",
            point.label, point.income, point.expense, point.profit
        ));
    }

    prompt.push_str("\nVehicles:\n");
    for vehicle in vehicles {
        prompt.push_str(&format!(
            "- {} ({}): next service {}, insurance expires {}\n",
            vehicle.registration_number,
            vehicle.make_model,
            or_unset(&vehicle.next_service_due_date),
            or_unset(&vehicle.insurance_expiry_date),
        ));
    }

    prompt
}

fn or_unset(date: &str) -> &str {
    if date.is_empty() {
        "unset"
    } else {
        date
    }
}

/// Text of the first candidate's parts, if any.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let text = candidate
        .content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::models::default_vehicle;
    use crate::trips::calculators::derive_trip;
    use crate::trips::models::TripInput;
    use rust_decimal_macros::dec;

    #[test]
    fn test_build_prompt_carries_snapshot() {
        let trip = derive_trip(
            TripInput {
                date: "2024-03-05".to_string(),
                total_amount: dec!(500),
                ..Default::default()
            },
            None,
        );
        let vehicles = vec![default_vehicle()];

        let prompt = build_prompt(&[trip], &vehicles);
        assert!(prompt.contains("Fleet: 1 vehicles. Trips recorded: 1."));
        assert!(prompt.contains("AB-123-CD (Toyota Sienna 2022)"));
        assert!(prompt.contains("next service 2024-04-01"));
        assert!(prompt.contains("- Mar 5: income 500, expense 0, profit 500"));
    }

    #[test]
    fn test_build_prompt_marks_unset_dates() {
        let mut vehicle = default_vehicle();
        vehicle.insurance_expiry_date = String::new();

        let prompt = build_prompt(&[], &[vehicle]);
        assert!(prompt.contains("insurance expires unset"));
    }

    #[test]
    fn test_extract_text_reads_first_candidate() {
        let payload: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "Profit is "}, {"text": "healthy."}]}},
                    {"content": {"parts": [{"text": "ignored"}]}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(extract_text(&payload).as_deref(), Some("Profit is healthy."));
    }

    #[test]
    fn test_extract_text_empty_payloads() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(&empty), None);

        let blank: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": []}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(&blank), None);
    }
}
