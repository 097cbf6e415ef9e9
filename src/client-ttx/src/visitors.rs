//! Visitor lookup and bot-visit tracking.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::errors::Error;

/// Response of the IP-lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpLookup {
    pub success: bool,
    pub ip: String,
    pub user_agent: String,
}

/// One crawler hit reported to the tracking endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotVisit {
    pub user_agent: String,
    pub referer: String,
    pub url: String,
}

/// Looks up the caller's IP and user agent as the backend sees them.
pub async fn lookup_ip(client: &reqwest::Client, api_base_url: &str) -> Result<IpLookup, Error> {
    let endpoint = format!("{}/api/ip", api_base_url);

    let response = client.get(&endpoint).send().await?;
    let lookup: IpLookup = response.error_for_status()?.json().await?;

    if !lookup.success {
        return Err(Error::ApiError("IP lookup reported failure".to_string()));
    }

    debug!("Resolved visitor IP: {}", lookup.ip);
    Ok(lookup)
}

/// Reports a crawler hit to the tracking endpoint.
pub async fn track_bot_visit(client: &reqwest::Client, api_base_url: &str, visit: &BotVisit) -> Result<(), Error> {
    let endpoint = format!("{}/api/track-bot", api_base_url);

    let response = client.post(&endpoint).json(visit).send().await?;
    response.error_for_status()?;

    Ok(())
}

/// Fire-and-forget variant of [`track_bot_visit`]: tracking never blocks
/// page handling. Failures are logged and dropped, with no retry.
pub fn spawn_bot_visit(client: reqwest::Client, api_base_url: String, visit: BotVisit) {
    tokio::spawn(async move {
        if let Err(e) = track_bot_visit(&client, &api_base_url, &visit).await {
            error!("Error tracking bot visit for {}: {}", visit.url, e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_visit_serializes_camel_case() {
        let visit = BotVisit {
            user_agent: "GPTBot/1.0".to_string(),
            referer: "https://chat.example.com".to_string(),
            url: "https://thellmstxt.com/blog".to_string(),
        };

        let json = serde_json::to_value(&visit).unwrap();
        assert_eq!(json["userAgent"], "GPTBot/1.0");
        assert_eq!(json["referer"], "https://chat.example.com");
        assert_eq!(json["url"], "https://thellmstxt.com/blog");
    }

    #[test]
    fn test_ip_lookup_deserializes_camel_case() {
        let lookup: IpLookup =
            serde_json::from_str(r#"{"success":true,"ip":"203.0.113.9","userAgent":"Mozilla/5.0"}"#).unwrap();

        assert!(lookup.success);
        assert_eq!(lookup.ip, "203.0.113.9");
        assert_eq!(lookup.user_agent, "Mozilla/5.0");
    }
}
