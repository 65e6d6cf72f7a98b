use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A captured inbound request, immutable once stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub remote_addr: String,
}

/// Everything about a captured request except its id, which the capture log assigns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub remote_addr: String,
}

impl NewRecord {
    pub fn into_record(self, id: u64) -> Record {
        Record {
            id,
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
            timestamp: self.timestamp,
            remote_addr: self.remote_addr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn into_record_keeps_fields() {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let new_record = NewRecord {
            method: "PUT".to_string(),
            url: "/orders/7?dry_run=1".to_string(),
            headers: HashMap::from([("x-signature".to_string(), "abc".to_string())]),
            body: "payload".to_string(),
            timestamp,
            remote_addr: "10.0.0.2:5000".to_string(),
        };

        let record = new_record.into_record(42);

        assert_eq!(record.id, 42);
        assert_eq!(record.method, "PUT");
        assert_eq!(record.url, "/orders/7?dry_run=1");
        assert_eq!(record.headers.get("x-signature").map(String::as_str), Some("abc"));
        assert_eq!(record.body, "payload");
        assert_eq!(record.timestamp, timestamp);
        assert_eq!(record.remote_addr, "10.0.0.2:5000");
    }
}
