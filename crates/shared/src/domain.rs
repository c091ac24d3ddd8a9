use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

macro_rules! index_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub usize);
    };
}

index_newtype!(ClusterIndex);

impl ClusterIndex {
    /// 1-based number shown to operators ("Cluster 3").
    pub fn display_number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for ClusterIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_number())
    }
}

/// One submitted question. Keys on the wire follow the question services'
/// contract; English spellings are accepted when reading local files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "タイムスタンプ", alias = "timestamp", default)]
    pub timestamp: String,
    #[serde(
        rename = "質問",
        alias = "question",
        alias = "question_text",
        default
    )]
    pub question_text: String,
    #[serde(
        rename = "回答",
        alias = "answer",
        alias = "existing_answer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub existing_answer: Option<String>,
    /// Columns we do not interpret are forwarded to the services untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl QuestionRecord {
    pub fn new(
        timestamp: impl Into<String>,
        question_text: impl Into<String>,
        existing_answer: Option<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            question_text: question_text.into(),
            existing_answer,
            extra: BTreeMap::new(),
        }
    }

    /// The existing answer; an empty string counts as none.
    pub fn answer(&self) -> Option<&str> {
        self.existing_answer
            .as_deref()
            .filter(|answer| !answer.is_empty())
    }
}

pub type QuestionSet = Vec<QuestionRecord>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub size: usize,
    pub representative_question: QuestionRecord,
    pub questions: Vec<QuestionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<i64>,
}

pub type ClusterCollection = Vec<Cluster>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
