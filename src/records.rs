use serde::Serialize;
use serde_json::Value;

// Source values are passed through untouched, so most columns are
// `Option<Value>`: absent and JSON null both land as an empty cell.

#[derive(Debug, Default, Serialize)]
pub struct MatchRow {
    pub match_id: String,
    pub match_number: Option<u64>,
    pub game_id: Option<Value>,
    pub data_version: Option<Value>,
    pub end_of_game_result: Option<Value>,
    pub frame_interval: Option<Value>,
}

#[derive(Debug, Default, Serialize)]
pub struct ParticipantRow {
    pub match_id: String,
    pub match_number: Option<u64>,
    pub participant_id: Option<Value>,
    pub puuid: Option<Value>,
}

#[derive(Debug, Default, Serialize)]
pub struct FrameRow {
    pub match_id: String,
    pub match_number: Option<u64>,
    pub timestamp: Option<Value>,
}

/// Fixed leading columns of a `participant_frames` row. Champion and damage
/// stat columns are appended after these per snapshot.
#[derive(Debug, Default, Serialize)]
pub struct ParticipantFrameRow {
    pub match_id: String,
    pub match_number: Option<u64>,
    pub participant_id: i64,
    pub frame_timestamp: Option<Value>,
    pub current_gold: Option<Value>,
    pub gold_per_second: Option<Value>,
    pub jungle_minions_killed: Option<Value>,
    pub level: Option<Value>,
    pub minions_killed: Option<Value>,
    pub time_enemy_spent_controlled: Option<Value>,
    pub total_gold: Option<Value>,
    pub xp: Option<Value>,
    pub position_x: Option<Value>,
    pub position_y: Option<Value>,
}

/// Wide row covering the fields of every event type.
#[derive(Debug, Default, Serialize)]
pub struct EventRow {
    pub match_id: String,
    pub match_number: Option<u64>,
    pub frame_timestamp: Option<Value>,
    pub timestamp: Option<Value>,
    pub real_timestamp: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub participant_id: Option<Value>,
    pub killer_id: Option<Value>,
    pub victim_id: Option<Value>,
    pub creator_id: Option<Value>,
    pub killer_team_id: Option<Value>,
    pub team_id: Option<Value>,
    pub item_id: Option<Value>,
    pub before_id: Option<Value>,
    pub after_id: Option<Value>,
    pub skill_slot: Option<Value>,
    pub level_up_type: Option<Value>,
    pub level: Option<Value>,
    pub ward_type: Option<Value>,
    pub building_type: Option<Value>,
    pub tower_type: Option<Value>,
    pub lane_type: Option<Value>,
    pub monster_type: Option<Value>,
    pub monster_sub_type: Option<Value>,
    pub kill_streak_length: Option<Value>,
    pub multi_kill_length: Option<Value>,
    pub kill_type: Option<Value>,
    pub bounty: Option<Value>,
    pub shutdown_bounty: Option<Value>,
    pub gold_gain: Option<Value>,
    pub feat_type: Option<Value>,
    pub feat_value: Option<Value>,
    pub winning_team: Option<Value>,
    pub actual_start_time: Option<Value>,
    pub position_x: Option<Value>,
    pub position_y: Option<Value>,
}

#[derive(Debug, Default, Serialize)]
pub struct EventAssistRow {
    pub match_id: String,
    pub match_number: Option<u64>,
    pub frame_timestamp: Option<Value>,
    pub event_timestamp: Option<Value>,
    pub event_type: Option<Value>,
    pub participant_id: Value,
}

/// Shared by `event_victim_damage_dealt` and `event_victim_damage_received`.
#[derive(Debug, Default, Serialize)]
pub struct DamageInstanceRow {
    pub match_id: String,
    pub match_number: Option<u64>,
    pub frame_timestamp: Option<Value>,
    pub event_timestamp: Option<Value>,
    pub instance: usize,
    pub basic: Option<Value>,
    pub magic_damage: Option<Value>,
    pub physical_damage: Option<Value>,
    pub true_damage: Option<Value>,
    pub name: Option<Value>,
    pub participant_id: Option<Value>,
    pub spell_name: Option<Value>,
    pub spell_slot: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
}
