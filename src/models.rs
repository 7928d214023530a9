use serde::{Deserialize, Serialize};

// Quote as served to clients
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: u64,
    pub body: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl Quote {
    // Case-insensitive exact match against one of the tags
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

// What a caller asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalRequest {
    Random { count: usize },
    Tagged { tag: String, count: usize },
}

impl RetrievalRequest {
    pub fn count(&self) -> usize {
        match self {
            RetrievalRequest::Random { count } => *count,
            RetrievalRequest::Tagged { count, .. } => *count,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            RetrievalRequest::Random { .. } => None,
            RetrievalRequest::Tagged { tag, .. } => Some(tag.as_str()),
        }
    }
}

// FavQs page response format (only the parts we read)
#[derive(Deserialize, Debug)]
pub struct UpstreamPage {
    pub quotes: Vec<UpstreamQuote>,
}

#[derive(Deserialize, Debug)]
pub struct UpstreamQuote {
    pub id: u64,
    pub body: String,
    pub author: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl From<UpstreamQuote> for Quote {
    fn from(q: UpstreamQuote) -> Self {
        Quote {
            id: q.id,
            body: q.body,
            author: q.author,
            tags: q.tags.unwrap_or_default(),
        }
    }
}

// Body returned with a 500
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_quote_without_tags_maps_to_empty() {
        let raw = r#"{"quotes":[
            {"id": 7, "body": "b", "author": "a", "favorites_count": 3},
            {"id": 8, "body": "c", "author": "d", "tags": null},
            {"id": 9, "body": "e", "author": "f", "tags": ["Life"]}
        ]}"#;
        let page: UpstreamPage = serde_json::from_str(raw).unwrap();
        let quotes: Vec<Quote> = page.quotes.into_iter().map(Quote::from).collect();

        assert!(quotes[0].tags.is_empty());
        assert!(quotes[1].tags.is_empty());
        assert_eq!(quotes[2].tags, vec!["Life".to_string()]);
        assert!(quotes[2].has_tag("life"));
        assert!(!quotes[2].has_tag("lif"));
    }

    #[test]
    fn quote_serializes_with_expected_keys() {
        let quote = Quote {
            id: 1,
            body: "x".into(),
            author: "y".into(),
            tags: vec![],
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "body": "x", "author": "y", "tags": []})
        );
    }
}
