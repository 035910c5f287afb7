use serde::{Deserialize, Serialize};

/// Per-province election results, as stored in the database. Seeded
/// out-of-band; read-only through the API. `province` is the unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    pub province: String,
    #[serde(default)]
    pub election_date: String,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub total_votes: u64,
    /// Turnout as a percentage of registered voters.
    #[serde(default)]
    pub turnout: f64,
    #[serde(default)]
    pub valid_votes: u64,
    #[serde(default)]
    pub invalid_votes: u64,
    #[serde(default)]
    pub no_vote_preference: u64,
    #[serde(default)]
    pub total_registered: u64,
    /// "completed" or "upcoming"; drives the dashboard's progress panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub votes: u64,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;
    use rocket::serde::json::serde_json;

    use super::*;

    impl Election {
        pub fn example() -> Self {
            Self {
                province: "เชียงใหม่".to_string(),
                election_date: "4 ก.พ. 2567".to_string(),
                candidates: vec![
                    Candidate {
                        name: "ผู้สมัคร ก".to_string(),
                        party: "พรรคหนึ่ง".to_string(),
                        votes: 421_605,
                        percentage: 62.3,
                        image_url: None,
                    },
                    Candidate {
                        name: "ผู้สมัคร ข".to_string(),
                        party: "พรรคสอง".to_string(),
                        votes: 255_188,
                        percentage: 37.7,
                        image_url: Some("https://example.com/b.jpg".to_string()),
                    },
                ],
                total_votes: 676_793,
                turnout: 68.2,
                valid_votes: 650_010,
                invalid_votes: 18_411,
                no_vote_preference: 8_372,
                total_registered: 992_365,
                status: Some("completed".to_string()),
            }
        }
    }

    #[test]
    fn wire_format_is_camel_case() {
        let value = serde_json::to_value(Election::example()).unwrap();
        assert!(value.get("electionDate").is_some());
        assert!(value.get("totalVotes").is_some());
        assert!(value.get("noVotePreference").is_some());
        assert!(value.get("totalRegistered").is_some());
        assert!(value["candidates"][1].get("imageUrl").is_some());
        // Absent optionals are omitted, not null.
        assert!(value["candidates"][0].get("imageUrl").is_none());
    }

    #[test]
    fn tolerates_sparse_documents() {
        // Seeded documents may omit any of the numeric summary fields.
        let election: Election = mongodb::bson::from_document(doc! {
            "province": "ภูเก็ต",
        })
        .unwrap();
        assert_eq!(election.province, "ภูเก็ต");
        assert_eq!(election.total_votes, 0);
        assert!(election.candidates.is_empty());
        assert_eq!(election.status, None);
    }
}
