use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::KeyValue;

/// The six crowding categories a vote can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Class,
    Free,
    Garagara,
    Sukuname,
    Hutsu,
    Konzatsu,
}

impl VoteType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "class" => Some(Self::Class),
            "free" => Some(Self::Free),
            "garagara" => Some(Self::Garagara),
            "sukuname" => Some(Self::Sukuname),
            "hutsu" => Some(Self::Hutsu),
            "konzatsu" => Some(Self::Konzatsu),
            _ => None,
        }
    }
}

/// Tally for one room/weekday/period key. Counters only ever go up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteBucket {
    pub class: u64,
    pub free: u64,
    pub garagara: u64,
    pub sukuname: u64,
    pub hutsu: u64,
    pub konzatsu: u64,
}

impl VoteBucket {
    pub fn increment(&mut self, vote_type: VoteType) {
        match vote_type {
            VoteType::Class => self.class += 1,
            VoteType::Free => self.free += 1,
            VoteType::Garagara => self.garagara += 1,
            VoteType::Sukuname => self.sukuname += 1,
            VoteType::Hutsu => self.hutsu += 1,
            VoteType::Konzatsu => self.konzatsu += 1,
        }
    }
}

/// room → weekday label → period label → tallies, mirroring votes.json.
pub type VoteDocument = BTreeMap<String, BTreeMap<String, BTreeMap<String, VoteBucket>>>;

#[derive(Debug, Deserialize)]
pub struct NewVoteRequest {
    #[serde(rename = "roomId")]
    pub room_id: Option<KeyValue>,
    #[serde(rename = "type")]
    pub vote_type: Option<String>,
    pub day: Option<KeyValue>,
    #[serde(rename = "periodId")]
    pub period_id: Option<KeyValue>,
}
