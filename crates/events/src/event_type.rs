use serde::{Deserialize, Serialize};

/// Label describing the store operation that produced an event.
///
/// Serialized as the bare label (e.g. `"JobRegistered"`); subscribers match
/// on these strings, so variants must never be renamed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    NodeRegistration,
    NodeDeregistration,
    NodeEligibility,
    NodeDrain,
    NodeEvent,
    DeploymentStatusUpdate,
    DeploymentPromotion,
    DeploymentAllocHealth,
    AllocCreated,
    AllocUpdated,
    AllocUpdateDesiredStatus,
    EvalUpdated,
    JobRegistered,
    JobDeregistered,
    JobBatchDeregistered,
    PlanResult,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::NodeRegistration => "NodeRegistration",
            EventType::NodeDeregistration => "NodeDeregistration",
            EventType::NodeEligibility => "NodeEligibility",
            EventType::NodeDrain => "NodeDrain",
            EventType::NodeEvent => "NodeEvent",
            EventType::DeploymentStatusUpdate => "DeploymentStatusUpdate",
            EventType::DeploymentPromotion => "DeploymentPromotion",
            EventType::DeploymentAllocHealth => "DeploymentAllocHealth",
            EventType::AllocCreated => "AllocCreated",
            EventType::AllocUpdated => "AllocUpdated",
            EventType::AllocUpdateDesiredStatus => "AllocUpdateDesiredStatus",
            EventType::EvalUpdated => "EvalUpdated",
            EventType::JobRegistered => "JobRegistered",
            EventType::JobDeregistered => "JobDeregistered",
            EventType::JobBatchDeregistered => "JobBatchDeregistered",
            EventType::PlanResult => "PlanResult",
        }
    }
}

impl core::fmt::Display for EventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&EventType::AllocUpdateDesiredStatus).unwrap();
        assert_eq!(json, "\"AllocUpdateDesiredStatus\"");

        let back: EventType = serde_json::from_str("\"PlanResult\"").unwrap();
        assert_eq!(back, EventType::PlanResult);
        assert_eq!(back.to_string(), "PlanResult");
    }
}
