use serde::{Deserialize, Serialize};

/// Coarse routing category of an event.
///
/// Each topic corresponds to exactly one payload kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    Deployment,
    Eval,
    Alloc,
    Job,
    Node,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Deployment,
        Topic::Eval,
        Topic::Alloc,
        Topic::Job,
        Topic::Node,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Deployment => "Deployment",
            Topic::Eval => "Eval",
            Topic::Alloc => "Alloc",
            Topic::Job => "Job",
            Topic::Node => "Node",
        }
    }
}

impl core::fmt::Display for Topic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_name_matches_display() {
        for topic in Topic::ALL {
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{topic}\""));
        }
    }
}
