//! Classification tests for inbound notifications

use super::value_id::{self, jumbo_party, jumbo_type};
use super::*;

fn classify(raw: RawNotification) -> Option<ObservedEvent> {
    EventDispatcher::new().classify(&raw)
}

#[test]
fn targeted_values_swap_actor_and_recipient() {
    let event = classify(RawNotification::GenericValueTarget {
        value_id: value_id::SKILL_ACTIVATED,
        caster_id: 200,
        target_id: 100,
        value: 50,
    });
    assert_eq!(
        event,
        Some(ObservedEvent::SkillActivated {
            actor: 100,
            target: 200,
            skill_id: 50,
        })
    );
}

#[test]
fn untargeted_values_have_no_recipient() {
    let raw = RawNotification::GenericValue {
        value_id: value_id::SKILL_ACTIVATED,
        agent_id: 100,
        value: 50,
    };
    let canonical = raw.canonical().unwrap();
    assert!(canonical.no_target);
    assert_eq!(canonical.recipient, 0);
    assert_eq!(
        classify(raw),
        Some(ObservedEvent::SkillActivated {
            actor: 100,
            target: 0,
            skill_id: 50,
        })
    );
}

#[test]
fn completions_carry_only_the_actor() {
    let cases = [
        (value_id::SKILL_FINISHED, ObservedEvent::SkillFinished { actor: 7 }),
        (value_id::SKILL_STOPPED, ObservedEvent::SkillStopped { actor: 7 }),
        (value_id::ATTACK_SKILL_FINISHED, ObservedEvent::AttackSkillFinished { actor: 7 }),
        (value_id::ATTACK_SKILL_STOPPED, ObservedEvent::AttackSkillStopped { actor: 7 }),
        (value_id::MELEE_ATTACK_FINISHED, ObservedEvent::BasicAttackFinished { actor: 7 }),
        (value_id::ATTACK_STOPPED, ObservedEvent::BasicAttackStopped { actor: 7 }),
        (value_id::INTERRUPTED, ObservedEvent::Interrupted { actor: 7 }),
    ];
    for (id, expected) in cases {
        let raw = RawNotification::GenericValue {
            value_id: id,
            agent_id: 7,
            value: 0,
        };
        assert_eq!(classify(raw), Some(expected), "value id {id}");
    }
}

#[test]
fn modifiers_keep_cause_as_actor() {
    let event = classify(RawNotification::GenericModifier {
        value_id: value_id::CRITICAL,
        target_id: 200,
        cause_id: 100,
        value: -0.25,
    });
    assert_eq!(
        event,
        Some(ObservedEvent::Damage {
            source: 100,
            target: 200,
            fraction: -0.25,
            kind: DamageKind::Critical,
        })
    );

    let knockdown = classify(RawNotification::GenericModifier {
        value_id: value_id::KNOCKED_DOWN,
        target_id: 200,
        cause_id: 100,
        value: 2.0,
    });
    assert_eq!(
        knockdown,
        Some(ObservedEvent::Knockdown {
            cause: 100,
            target: 200,
        })
    );
}

#[test]
fn unknown_value_ids_are_dropped() {
    assert_eq!(
        classify(RawNotification::GenericValue {
            value_id: 9999,
            agent_id: 1,
            value: 1,
        }),
        None
    );
}

#[test]
fn payload_type_mismatch_is_dropped() {
    // damage is a float value; an integer form is not something the client sends
    assert_eq!(
        classify(RawNotification::GenericValue {
            value_id: value_id::DAMAGE,
            agent_id: 1,
            value: 3,
        }),
        None
    );
}

#[test]
fn jumbo_messages_resolve_team() {
    let victory = classify(RawNotification::JumboMessage {
        message_type: jumbo_type::VICTORY,
        value: jumbo_party::PARTY_TWO,
    });
    assert_eq!(
        victory,
        Some(ObservedEvent::Milestone(Milestone {
            kind: MilestoneKind::Victory,
            team_id: 2,
            raw_value: jumbo_party::PARTY_TWO,
        }))
    );

    let Some(ObservedEvent::Milestone(shrine)) = classify(RawNotification::JumboMessage {
        message_type: jumbo_type::CAPTURED_SHRINE,
        value: 12345,
    }) else {
        panic!("expected a milestone");
    };
    assert_eq!(shrine.kind, MilestoneKind::ShrineCaptured);
    assert_eq!(shrine.team_id, 0);
}

#[test]
fn unknown_jumbo_type_is_still_a_milestone() {
    let Some(ObservedEvent::Milestone(milestone)) = classify(RawNotification::JumboMessage {
        message_type: 42,
        value: jumbo_party::PARTY_ONE,
    }) else {
        panic!("expected a milestone");
    };
    assert_eq!(milestone.kind, MilestoneKind::Unknown(42));
    assert_eq!(milestone.team_id, 1);
    assert!(!milestone.kind.is_victory());
}

#[test]
fn movement_passes_through() {
    assert_eq!(
        classify(RawNotification::AgentMovement {
            agent_id: 5,
            x: 1.5,
            y: -2.0,
            plane: 3,
        }),
        Some(ObservedEvent::EntityMoved {
            entity_id: 5,
            x: 1.5,
            y: -2.0,
            plane: 3,
        })
    );
}

#[test]
fn notifications_deserialize_from_tagged_json() {
    let raw: RawNotification = serde_json::from_str(
        r#"{"shape":"generic_value_target","value_id":50,"caster_id":2,"target_id":1,"value":330}"#,
    )
    .unwrap();
    assert_eq!(raw.participants(), (1, 2));
    assert_eq!(raw.value_id(), Some(value_id::ATTACK_SKILL_ACTIVATED));
}
