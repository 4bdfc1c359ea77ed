//! Shared timeline fixtures for the integration harnesses.
//!
//! Import via `mod common; use common::*;`.

#![allow(dead_code)]

use serde_json::{Value, json};

use riot_timeline_rdbms::relation::Relation;

/// Two frames, two participants, a kill with assists and damage breakdowns,
/// an item purchase and a ward placement.
pub fn sample_timeline() -> Value {
    json!({
        "KR_7301234567": {
            "metadata": {
                "dataVersion": "2",
                "matchId": "KR_7301234567",
                "participants": ["puuid-a", "puuid-b"]
            },
            "info": {
                "endOfGameResult": "GameComplete",
                "frameInterval": 60000,
                "gameId": 7301234567u64,
                "participants": [
                    { "participantId": 1, "puuid": "puuid-a" },
                    { "participantId": 2, "puuid": "puuid-b" }
                ],
                "frames": [
                    {
                        "timestamp": 0,
                        "participantFrames": {
                            "1": {
                                "currentGold": 500,
                                "goldPerSecond": 0,
                                "jungleMinionsKilled": 0,
                                "level": 1,
                                "minionsKilled": 0,
                                "participantId": 1,
                                "position": { "x": 554, "y": 581 },
                                "timeEnemySpentControlled": 0,
                                "totalGold": 500,
                                "xp": 0,
                                "championStats": { "attackDamage": 10, "abilityHaste": 0 },
                                "damageStats": { "magicDamageDone": 5, "TotalDamageTaken": 0 }
                            },
                            "2": {
                                "currentGold": 500,
                                "level": 1,
                                "position": { "x": 14340, "y": 14390 },
                                "championStats": { "armor": 30 }
                            }
                        },
                        "events": [
                            {
                                "realTimestamp": 1700000000000u64,
                                "timestamp": 0,
                                "type": "PAUSE_END"
                            }
                        ]
                    },
                    {
                        "timestamp": 60012,
                        "participantFrames": {
                            "1": { "currentGold": 120, "level": 2 },
                            "2": { "currentGold": 90, "level": 2, "position": { "x": 7000 } }
                        },
                        "events": [
                            {
                                "itemId": 1055,
                                "participantId": 1,
                                "timestamp": 15000,
                                "type": "ITEM_PURCHASED"
                            },
                            {
                                "bounty": 300,
                                "killStreakLength": 0,
                                "killerId": 1,
                                "position": { "x": 7200, "y": 7100 },
                                "shutdownBounty": 0,
                                "timestamp": 45000,
                                "type": "CHAMPION_KILL",
                                "victimId": 2,
                                "assistingParticipantIds": [3, 4],
                                "victimDamageDealt": [
                                    {
                                        "basic": false,
                                        "magicDamage": 0,
                                        "name": "Ahri",
                                        "participantId": 2,
                                        "physicalDamage": 40,
                                        "spellName": "ahriq",
                                        "spellSlot": 0,
                                        "trueDamage": 0,
                                        "type": "OTHER"
                                    },
                                    {
                                        "basic": true,
                                        "magicDamage": 12,
                                        "name": "Ahri",
                                        "participantId": 2,
                                        "physicalDamage": 0,
                                        "spellName": "ahribasicattack",
                                        "spellSlot": 65,
                                        "trueDamage": 0,
                                        "type": "OTHER"
                                    }
                                ],
                                "victimDamageReceived": [
                                    {
                                        "basic": true,
                                        "magicDamage": 0,
                                        "name": "Garen",
                                        "participantId": 1,
                                        "physicalDamage": 210,
                                        "spellName": "garenq",
                                        "spellSlot": 0,
                                        "trueDamage": 35,
                                        "type": "OTHER"
                                    }
                                ]
                            },
                            {
                                "creatorId": 2,
                                "timestamp": 52000,
                                "type": "WARD_PLACED",
                                "wardType": "YELLOW_TRINKET",
                                "assistingParticipantIds": []
                            }
                        ]
                    }
                ]
            }
        }
    })
}

/// One match, no participants, one frame with one snapshot and no events.
pub fn minimal_timeline() -> Value {
    json!({
        "NA1_42": {
            "metadata": {},
            "info": {
                "frames": [
                    {
                        "timestamp": 0,
                        "participantFrames": { "1": { "level": 1 } }
                    }
                ]
            }
        }
    })
}

/// Values of `column` across every row, absent keys as `Value::Null`.
pub fn column(relation: &Relation, column: &str) -> Vec<Value> {
    relation
        .rows()
        .iter()
        .map(|row| row.get(column).cloned().unwrap_or(Value::Null))
        .collect()
}
