//! Flattens one match timeline document into relational tables.
//!
//! Every field lookup is tolerant: a missing field (or one nested under a
//! missing parent) becomes a null cell. Only the document shape itself
//! (single match key, `info`, `info.frames`) and participant frame keys that
//! are not integers are treated as errors.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ExportError;
use crate::match_key::{MatchKey, split_document};
use crate::records::{
    DamageInstanceRow, EventAssistRow, EventRow, FrameRow, MatchRow, ParticipantFrameRow,
    ParticipantRow,
};
use crate::relation::Relation;

pub const MATCHES: &str = "matches";
pub const PARTICIPANTS: &str = "participants";
pub const FRAMES: &str = "frames";
pub const PARTICIPANT_FRAMES: &str = "participant_frames";
pub const EVENTS: &str = "events";
pub const EVENT_ASSISTS: &str = "event_assists";
pub const EVENT_VICTIM_DAMAGE_DEALT: &str = "event_victim_damage_dealt";
pub const EVENT_VICTIM_DAMAGE_RECEIVED: &str = "event_victim_damage_received";

#[derive(Debug, Clone)]
pub struct NormalizedMatch {
    pub key: MatchKey,
    pub matches: Relation,
    pub participants: Relation,
    pub frames: Relation,
    pub participant_frames: Relation,
    pub events: Relation,
    pub event_assists: Relation,
    pub event_victim_damage_dealt: Relation,
    pub event_victim_damage_received: Relation,
}

impl NormalizedMatch {
    /// All relations in persistence order.
    pub fn relations(&self) -> [&Relation; 8] {
        [
            &self.matches,
            &self.participants,
            &self.frames,
            &self.participant_frames,
            &self.events,
            &self.event_assists,
            &self.event_victim_damage_dealt,
            &self.event_victim_damage_received,
        ]
    }
}

pub fn normalize(document: &Value) -> Result<NormalizedMatch, ExportError> {
    let (key, body) = split_document(document)?;

    let Some(info) = body.get("info").filter(|info| info.is_object()) else {
        return Err(ExportError::MissingInfo {
            match_id: key.match_id,
        });
    };
    let metadata = body.get("metadata");

    let Some(frames) = info.get("frames").and_then(|f| f.as_array()) else {
        return Err(ExportError::MissingFrames {
            match_id: key.match_id,
        });
    };

    let matches = build_matches(&key, info, metadata)?;
    let participants = build_participants(&key, info)?;

    let mut normalized = NormalizedMatch {
        matches,
        participants,
        frames: Relation::for_record::<FrameRow>(FRAMES),
        participant_frames: Relation::for_record::<ParticipantFrameRow>(PARTICIPANT_FRAMES),
        events: Relation::for_record::<EventRow>(EVENTS),
        event_assists: Relation::for_record::<EventAssistRow>(EVENT_ASSISTS),
        event_victim_damage_dealt: Relation::for_record::<DamageInstanceRow>(
            EVENT_VICTIM_DAMAGE_DEALT,
        ),
        event_victim_damage_received: Relation::for_record::<DamageInstanceRow>(
            EVENT_VICTIM_DAMAGE_RECEIVED,
        ),
        key,
    };

    for (frame_index, frame) in frames.iter().enumerate() {
        let frame_ts = frame.get("timestamp").cloned();

        normalized.frames.push_record(&FrameRow {
            match_id: normalized.key.match_id.clone(),
            match_number: normalized.key.match_number,
            timestamp: frame_ts.clone(),
        })?;

        flatten_participant_frames(&mut normalized, frame, frame_index, &frame_ts)?;
        flatten_events(&mut normalized, frame, frame_index, &frame_ts)?;
    }

    debug!(
        match_id = %normalized.key.match_id,
        frames = normalized.frames.len(),
        participant_frames = normalized.participant_frames.len(),
        events = normalized.events.len(),
        "normalized match timeline"
    );

    Ok(normalized)
}

fn build_matches(
    key: &MatchKey,
    info: &Value,
    metadata: Option<&Value>,
) -> Result<Relation, ExportError> {
    let mut matches = Relation::for_record::<MatchRow>(MATCHES);
    matches.push_record(&MatchRow {
        match_id: key.match_id.clone(),
        match_number: key.match_number,
        game_id: info.get("gameId").cloned(),
        data_version: field(metadata, "dataVersion"),
        end_of_game_result: info.get("endOfGameResult").cloned(),
        frame_interval: info.get("frameInterval").cloned(),
    })?;
    Ok(matches)
}

fn build_participants(key: &MatchKey, info: &Value) -> Result<Relation, ExportError> {
    let mut participants = Relation::for_record::<ParticipantRow>(PARTICIPANTS);

    let Some(list) = info.get("participants").and_then(|p| p.as_array()) else {
        return Ok(participants);
    };

    for participant in list {
        participants.push_record(&ParticipantRow {
            match_id: key.match_id.clone(),
            match_number: key.match_number,
            participant_id: participant.get("participantId").cloned(),
            puuid: participant.get("puuid").cloned(),
        })?;
    }

    Ok(participants)
}

fn flatten_participant_frames(
    normalized: &mut NormalizedMatch,
    frame: &Value,
    frame_index: usize,
    frame_ts: &Option<Value>,
) -> Result<(), ExportError> {
    let Some(snapshots) = frame.get("participantFrames").and_then(|p| p.as_object()) else {
        return Ok(());
    };

    for (pid_key, snapshot) in snapshots {
        let Ok(participant_id) = pid_key.trim().parse::<i64>() else {
            return Err(ExportError::ParticipantKey {
                key: pid_key.clone(),
                frame_index,
            });
        };

        if !snapshot.is_object() {
            warn!(
                frame_index,
                participant = %pid_key,
                "participant frame is not an object, emitting null fields"
            );
        }

        let base = ParticipantFrameRow {
            match_id: normalized.key.match_id.clone(),
            match_number: normalized.key.match_number,
            participant_id,
            frame_timestamp: frame_ts.clone(),
            current_gold: snapshot.get("currentGold").cloned(),
            gold_per_second: snapshot.get("goldPerSecond").cloned(),
            jungle_minions_killed: snapshot.get("jungleMinionsKilled").cloned(),
            level: snapshot.get("level").cloned(),
            minions_killed: snapshot.get("minionsKilled").cloned(),
            time_enemy_spent_controlled: snapshot.get("timeEnemySpentControlled").cloned(),
            total_gold: snapshot.get("totalGold").cloned(),
            xp: snapshot.get("xp").cloned(),
            position_x: position_axis(snapshot, "x"),
            position_y: position_axis(snapshot, "y"),
        };

        let mut row = normalized.participant_frames.record_row(&base)?;

        if let Some(stats) = snapshot.get("championStats").and_then(|s| s.as_object()) {
            for (stat, value) in stats {
                row.insert(champion_stat_column(stat), value.clone());
            }
        }

        if let Some(stats) = snapshot.get("damageStats").and_then(|s| s.as_object()) {
            for (stat, value) in stats {
                row.insert(damage_stat_column(stat), value.clone());
            }
        }

        normalized.participant_frames.push(row);
    }

    Ok(())
}

fn flatten_events(
    normalized: &mut NormalizedMatch,
    frame: &Value,
    frame_index: usize,
    frame_ts: &Option<Value>,
) -> Result<(), ExportError> {
    let Some(events) = frame.get("events").and_then(|e| e.as_array()) else {
        return Ok(());
    };

    let key = &normalized.key;

    for (event_index, event) in events.iter().enumerate() {
        if !event.is_object() {
            warn!(
                frame_index,
                event_index,
                "event is not an object, emitting null fields"
            );
        }

        let event_ts = event.get("timestamp").cloned();
        let event_type = event.get("type").cloned();

        normalized.events.push_record(&EventRow {
            match_id: key.match_id.clone(),
            match_number: key.match_number,
            frame_timestamp: frame_ts.clone(),
            timestamp: event_ts.clone(),
            real_timestamp: event.get("realTimestamp").cloned(),
            kind: event_type.clone(),
            participant_id: event.get("participantId").cloned(),
            killer_id: event.get("killerId").cloned(),
            victim_id: event.get("victimId").cloned(),
            creator_id: event.get("creatorId").cloned(),
            killer_team_id: event.get("killerTeamId").cloned(),
            team_id: event.get("teamId").cloned(),
            item_id: event.get("itemId").cloned(),
            before_id: event.get("beforeId").cloned(),
            after_id: event.get("afterId").cloned(),
            skill_slot: event.get("skillSlot").cloned(),
            level_up_type: event.get("levelUpType").cloned(),
            level: event.get("level").cloned(),
            ward_type: event.get("wardType").cloned(),
            building_type: event.get("buildingType").cloned(),
            tower_type: event.get("towerType").cloned(),
            lane_type: event.get("laneType").cloned(),
            monster_type: event.get("monsterType").cloned(),
            monster_sub_type: event.get("monsterSubType").cloned(),
            kill_streak_length: event.get("killStreakLength").cloned(),
            multi_kill_length: event.get("multiKillLength").cloned(),
            kill_type: event.get("killType").cloned(),
            bounty: event.get("bounty").cloned(),
            shutdown_bounty: event.get("shutdownBounty").cloned(),
            gold_gain: event.get("goldGain").cloned(),
            feat_type: event.get("featType").cloned(),
            feat_value: event.get("featValue").cloned(),
            winning_team: event.get("winningTeam").cloned(),
            actual_start_time: event.get("actualStartTime").cloned(),
            position_x: position_axis(event, "x"),
            position_y: position_axis(event, "y"),
        })?;

        if let Some(assists) = event
            .get("assistingParticipantIds")
            .and_then(|a| a.as_array())
        {
            for participant_id in assists {
                normalized.event_assists.push_record(&EventAssistRow {
                    match_id: key.match_id.clone(),
                    match_number: key.match_number,
                    frame_timestamp: frame_ts.clone(),
                    event_timestamp: event_ts.clone(),
                    event_type: event_type.clone(),
                    participant_id: participant_id.clone(),
                })?;
            }
        }

        push_damage_instances(
            &mut normalized.event_victim_damage_dealt,
            key,
            event.get("victimDamageDealt"),
            frame_ts,
            &event_ts,
        )?;
        push_damage_instances(
            &mut normalized.event_victim_damage_received,
            key,
            event.get("victimDamageReceived"),
            frame_ts,
            &event_ts,
        )?;
    }

    Ok(())
}

fn push_damage_instances(
    relation: &mut Relation,
    key: &MatchKey,
    instances: Option<&Value>,
    frame_ts: &Option<Value>,
    event_ts: &Option<Value>,
) -> Result<(), ExportError> {
    let Some(instances) = instances.and_then(|i| i.as_array()) else {
        return Ok(());
    };

    for (idx, damage) in instances.iter().enumerate() {
        relation.push_record(&DamageInstanceRow {
            match_id: key.match_id.clone(),
            match_number: key.match_number,
            frame_timestamp: frame_ts.clone(),
            event_timestamp: event_ts.clone(),
            instance: idx + 1,
            basic: damage.get("basic").cloned(),
            magic_damage: damage.get("magicDamage").cloned(),
            physical_damage: damage.get("physicalDamage").cloned(),
            true_damage: damage.get("trueDamage").cloned(),
            name: damage.get("name").cloned(),
            participant_id: damage.get("participantId").cloned(),
            spell_name: damage.get("spellName").cloned(),
            spell_slot: damage.get("spellSlot").cloned(),
            kind: damage.get("type").cloned(),
        })?;
    }

    Ok(())
}

/// Champion stat keys are lower-cased in full: `attackDamage` -> `attackdamage`.
pub fn champion_stat_column(stat: &str) -> String {
    stat.to_lowercase()
}

/// Damage stat keys only lower-case their first character:
/// `MagicDamageDone` -> `magicDamageDone`.
pub fn damage_stat_column(stat: &str) -> String {
    let mut chars = stat.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn field(container: Option<&Value>, key: &str) -> Option<Value> {
    container.and_then(|c| c.get(key)).cloned()
}

fn position_axis(container: &Value, axis: &str) -> Option<Value> {
    container
        .get("position")
        .and_then(|position| position.get(axis))
        .cloned()
}
