//! Write-type tags of the replicated log and their event-type labels.

use changefeed_events::EventType;

/// Highest wire tag with a named [`MessageType`] variant.
const LAST_NAMED_TAG: u8 = 30;

/// A wire tag with no named [`MessageType`] variant.
///
/// Only obtainable by decoding, so it never aliases a named tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UnknownTag(u8);

impl UnknownTag {
    pub fn get(self) -> u8 {
        self.0
    }
}

/// Which high-level operation produced a transaction.
///
/// Decoded from the `u8` tag the store writes in front of every log entry.
/// Tags this crate has no name for are kept as `Unknown` so they can still
/// be logged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MessageType {
    NodeRegister,
    NodeDeregister,
    NodeUpdateStatus,
    NodeUpdateDrain,
    JobRegister,
    JobDeregister,
    EvalUpdate,
    EvalDelete,
    AllocUpdate,
    AllocClientUpdate,
    ReconcileJobSummaries,
    VaultAccessorRegister,
    VaultAccessorDeregister,
    ApplyPlanResults,
    DeploymentStatusUpdate,
    DeploymentPromote,
    DeploymentAllocHealth,
    DeploymentDelete,
    JobStability,
    AclPolicyUpsert,
    AclPolicyDelete,
    AclTokenUpsert,
    AclTokenDelete,
    AclTokenBootstrap,
    Autopilot,
    UpsertNodeEvents,
    JobBatchDeregister,
    AllocUpdateDesiredTransition,
    NodeUpdateEligibility,
    BatchNodeUpdateDrain,
    SchedulerConfig,
    Unknown(UnknownTag),
}

impl MessageType {
    /// Event-type label for transactions of this write type.
    ///
    /// `None` means the event system does not know the write type; the
    /// whole transaction then produces no events.
    pub fn event_type(self) -> Option<EventType> {
        let event_type = match self {
            MessageType::NodeRegister => EventType::NodeRegistration,
            MessageType::NodeDeregister => EventType::NodeDeregistration,
            MessageType::NodeUpdateStatus | MessageType::UpsertNodeEvents => EventType::NodeEvent,
            MessageType::NodeUpdateEligibility | MessageType::BatchNodeUpdateDrain => {
                EventType::NodeDrain
            }
            MessageType::EvalUpdate => EventType::EvalUpdated,
            MessageType::AllocUpdate | MessageType::AllocClientUpdate => EventType::AllocUpdated,
            MessageType::AllocUpdateDesiredTransition => EventType::AllocUpdateDesiredStatus,
            MessageType::JobRegister => EventType::JobRegistered,
            MessageType::JobDeregister => EventType::JobDeregistered,
            MessageType::JobBatchDeregister => EventType::JobBatchDeregistered,
            MessageType::DeploymentStatusUpdate => EventType::DeploymentStatusUpdate,
            MessageType::DeploymentPromote => EventType::DeploymentPromotion,
            MessageType::DeploymentAllocHealth => EventType::DeploymentAllocHealth,
            MessageType::ApplyPlanResults => EventType::PlanResult,
            MessageType::NodeUpdateDrain
            | MessageType::EvalDelete
            | MessageType::ReconcileJobSummaries
            | MessageType::VaultAccessorRegister
            | MessageType::VaultAccessorDeregister
            | MessageType::DeploymentDelete
            | MessageType::JobStability
            | MessageType::AclPolicyUpsert
            | MessageType::AclPolicyDelete
            | MessageType::AclTokenUpsert
            | MessageType::AclTokenDelete
            | MessageType::AclTokenBootstrap
            | MessageType::Autopilot
            | MessageType::SchedulerConfig
            | MessageType::Unknown(_) => return None,
        };
        Some(event_type)
    }

    /// Wire tag of this write type.
    pub fn as_u8(self) -> u8 {
        match self {
            MessageType::NodeRegister => 0,
            MessageType::NodeDeregister => 1,
            MessageType::NodeUpdateStatus => 2,
            MessageType::NodeUpdateDrain => 3,
            MessageType::JobRegister => 4,
            MessageType::JobDeregister => 5,
            MessageType::EvalUpdate => 6,
            MessageType::EvalDelete => 7,
            MessageType::AllocUpdate => 8,
            MessageType::AllocClientUpdate => 9,
            MessageType::ReconcileJobSummaries => 10,
            MessageType::VaultAccessorRegister => 11,
            MessageType::VaultAccessorDeregister => 12,
            MessageType::ApplyPlanResults => 13,
            MessageType::DeploymentStatusUpdate => 14,
            MessageType::DeploymentPromote => 15,
            MessageType::DeploymentAllocHealth => 16,
            MessageType::DeploymentDelete => 17,
            MessageType::JobStability => 18,
            MessageType::AclPolicyUpsert => 19,
            MessageType::AclPolicyDelete => 20,
            MessageType::AclTokenUpsert => 21,
            MessageType::AclTokenDelete => 22,
            MessageType::AclTokenBootstrap => 23,
            MessageType::Autopilot => 24,
            MessageType::UpsertNodeEvents => 25,
            MessageType::JobBatchDeregister => 26,
            MessageType::AllocUpdateDesiredTransition => 27,
            MessageType::NodeUpdateEligibility => 28,
            MessageType::BatchNodeUpdateDrain => 29,
            MessageType::SchedulerConfig => 30,
            MessageType::Unknown(tag) => tag.get(),
        }
    }
}

impl From<u8> for MessageType {
    fn from(tag: u8) -> Self {
        match tag {
            0 => MessageType::NodeRegister,
            1 => MessageType::NodeDeregister,
            2 => MessageType::NodeUpdateStatus,
            3 => MessageType::NodeUpdateDrain,
            4 => MessageType::JobRegister,
            5 => MessageType::JobDeregister,
            6 => MessageType::EvalUpdate,
            7 => MessageType::EvalDelete,
            8 => MessageType::AllocUpdate,
            9 => MessageType::AllocClientUpdate,
            10 => MessageType::ReconcileJobSummaries,
            11 => MessageType::VaultAccessorRegister,
            12 => MessageType::VaultAccessorDeregister,
            13 => MessageType::ApplyPlanResults,
            14 => MessageType::DeploymentStatusUpdate,
            15 => MessageType::DeploymentPromote,
            16 => MessageType::DeploymentAllocHealth,
            17 => MessageType::DeploymentDelete,
            18 => MessageType::JobStability,
            19 => MessageType::AclPolicyUpsert,
            20 => MessageType::AclPolicyDelete,
            21 => MessageType::AclTokenUpsert,
            22 => MessageType::AclTokenDelete,
            23 => MessageType::AclTokenBootstrap,
            24 => MessageType::Autopilot,
            25 => MessageType::UpsertNodeEvents,
            26 => MessageType::JobBatchDeregister,
            27 => MessageType::AllocUpdateDesiredTransition,
            28 => MessageType::NodeUpdateEligibility,
            29 => MessageType::BatchNodeUpdateDrain,
            30 => MessageType::SchedulerConfig,
            other => {
                debug_assert!(other > LAST_NAMED_TAG);
                MessageType::Unknown(UnknownTag(other))
            }
        }
    }
}

impl From<MessageType> for u8 {
    fn from(value: MessageType) -> Self {
        value.as_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classifies_every_event_producing_write_type() {
        let table = [
            (MessageType::NodeRegister, EventType::NodeRegistration),
            (MessageType::NodeDeregister, EventType::NodeDeregistration),
            (MessageType::NodeUpdateStatus, EventType::NodeEvent),
            (MessageType::UpsertNodeEvents, EventType::NodeEvent),
            (MessageType::NodeUpdateEligibility, EventType::NodeDrain),
            (MessageType::BatchNodeUpdateDrain, EventType::NodeDrain),
            (MessageType::EvalUpdate, EventType::EvalUpdated),
            (MessageType::AllocClientUpdate, EventType::AllocUpdated),
            (MessageType::AllocUpdate, EventType::AllocUpdated),
            (
                MessageType::AllocUpdateDesiredTransition,
                EventType::AllocUpdateDesiredStatus,
            ),
            (MessageType::JobRegister, EventType::JobRegistered),
            (MessageType::JobDeregister, EventType::JobDeregistered),
            (MessageType::JobBatchDeregister, EventType::JobBatchDeregistered),
            (
                MessageType::DeploymentStatusUpdate,
                EventType::DeploymentStatusUpdate,
            ),
            (MessageType::DeploymentPromote, EventType::DeploymentPromotion),
            (
                MessageType::DeploymentAllocHealth,
                EventType::DeploymentAllocHealth,
            ),
            (MessageType::ApplyPlanResults, EventType::PlanResult),
        ];

        for (msg_type, expected) in table {
            assert_eq!(msg_type.event_type(), Some(expected), "{msg_type:?}");
        }
    }

    #[test]
    fn write_types_outside_the_event_system_are_unrecognized() {
        for msg_type in [
            MessageType::EvalDelete,
            MessageType::DeploymentDelete,
            MessageType::AclTokenUpsert,
            MessageType::SchedulerConfig,
            MessageType::from(200),
        ] {
            assert_eq!(msg_type.event_type(), None, "{msg_type:?}");
        }
    }

    #[test]
    fn only_tags_past_the_named_range_are_unknown() {
        for tag in 0..=LAST_NAMED_TAG {
            assert!(
                !matches!(MessageType::from(tag), MessageType::Unknown(_)),
                "tag {tag}"
            );
        }
        match MessageType::from(LAST_NAMED_TAG + 1) {
            MessageType::Unknown(tag) => assert_eq!(tag.get(), LAST_NAMED_TAG + 1),
            other => panic!("Expected Unknown, got {other:?}"),
        }
    }

    proptest! {
        /// Property: decoding any tag and encoding it again is lossless, and
        /// classification of the decoded tag is stable across calls.
        #[test]
        fn tag_decoding_is_total_and_classification_is_pure(tag in any::<u8>()) {
            let msg_type = MessageType::from(tag);
            prop_assert_eq!(u8::from(msg_type), tag);
            prop_assert_eq!(msg_type.event_type(), MessageType::from(tag).event_type());
            prop_assert_eq!(matches!(msg_type, MessageType::Unknown(_)), tag > LAST_NAMED_TAG);
        }
    }
}
