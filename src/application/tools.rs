//! # Tool Catalog
//!
//! The fixed set of tools and the capability set derived from configuration.
//! `Capabilities` is computed once at startup and consulted by both advertisement and
//! dispatch, so a tool is callable exactly when it is listed.

use crate::domain::config::RuntimeConfig;
use crate::domain::types::{InputField, ToolDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Validate,
    Disassemble,
    DocLookup,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::Validate, ToolKind::Disassemble, ToolKind::DocLookup];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Validate => "fluffos_validate",
            ToolKind::Disassemble => "fluffos_disassemble",
            ToolKind::DocLookup => "fluffos_doc_lookup",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn descriptor(self) -> ToolDescriptor {
        match self {
            ToolKind::Validate => ToolDescriptor {
                name: self.name(),
                description: "Validate an LPC file using the FluffOS driver's symbol tool. \
                              Returns success/failure and any compilation errors.",
                input: InputField {
                    name: "file",
                    description: "Absolute path to the LPC file to validate",
                },
            },
            ToolKind::Disassemble => ToolDescriptor {
                name: self.name(),
                description: "Disassemble an LPC file to show compiled bytecode using lpcc. \
                              Useful for debugging and understanding how code compiles.",
                input: InputField {
                    name: "file",
                    description: "Absolute path to the LPC file to disassemble",
                },
            },
            ToolKind::DocLookup => ToolDescriptor {
                name: self.name(),
                description: "Search the FluffOS driver documentation for efuns, applies, \
                              and concepts. Returns matching documentation excerpts.",
                input: InputField {
                    name: "query",
                    description: "Function name or term to search for (e.g. 'call_out', 'save_object')",
                },
            },
        }
    }
}

/// Tools enabled for this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    enabled: Vec<ToolKind>,
}

impl Capabilities {
    pub fn from_config(config: &RuntimeConfig) -> Self {
        let enabled = ToolKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                ToolKind::DocLookup => config.docs_dir.is_some(),
                ToolKind::Validate | ToolKind::Disassemble => true,
            })
            .collect();
        Self { enabled }
    }

    pub fn contains(&self, kind: ToolKind) -> bool {
        self.enabled.contains(&kind)
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.enabled.iter().map(|kind| kind.descriptor()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_config;
    use std::path::PathBuf;

    #[test]
    fn test_name_round_trip() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.descriptor().name, kind.name());
        }
        assert_eq!(ToolKind::from_name("fluffos_compile"), None);
    }

    #[test]
    fn test_doc_lookup_requires_docs_dir() {
        let mut config = sample_config();
        config.docs_dir = None;
        let caps = Capabilities::from_config(&config);
        assert!(!caps.contains(ToolKind::DocLookup));
        let names: Vec<_> = caps.descriptors().iter().map(|d| d.name).collect();
        assert_eq!(names, ["fluffos_validate", "fluffos_disassemble"]);

        config.docs_dir = Some(PathBuf::from("/mud/docs"));
        let caps = Capabilities::from_config(&config);
        assert!(caps.contains(ToolKind::DocLookup));
        assert_eq!(caps.descriptors().len(), 3);
        assert_eq!(caps.descriptors()[2].input.name, "query");
    }
}
