// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Class schemas for the SLF object graph.
//!
//! SLF objects carry no field names: a class instance is followed by its
//! field values in a fixed order. Each known class is described here by its
//! role in the tree and its ordered field list. Some fields only exist from a
//! given format version onward.

use std::fmt;

/// What an object is used for in the tree. Object-valued fields and list
/// elements accept only classes of the expected role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Section,
    Message,
    Location,
    Attachment,
    FlowEdge,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Section => "section",
            Role::Message => "message",
            Role::Location => "document location",
            Role::Attachment => "attachment",
            Role::FlowEdge => "control flow edge",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Int,
    Double,
    /// String or null
    Str,
    /// JSON blob or null
    Json,
    /// Instance of a class with this role, or null
    Object(Role),
    /// List of instances with this role, or null for an empty list
    List(Role),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Int => f.write_str("integer"),
            FieldKind::Double => f.write_str("double"),
            FieldKind::Str => f.write_str("string"),
            FieldKind::Json => f.write_str("json"),
            FieldKind::Object(role) => write!(f, "{role}"),
            FieldKind::List(role) => write!(f, "list of {role}"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    /// First format version that writes this field
    pub since: u64,
}

const fn field(name: &'static str, kind: FieldKind) -> Field {
    Field {
        name,
        kind,
        since: 0,
    }
}

const fn since(version: u64, name: &'static str, kind: FieldKind) -> Field {
    Field {
        name,
        kind,
        since: version,
    }
}

#[derive(Debug)]
pub(crate) struct ClassSchema {
    pub name: &'static str,
    pub role: Role,
    base: &'static [Field],
    extra: &'static [Field],
}

impl ClassSchema {
    /// Fields present in `version`, in stream order.
    pub fn fields(&self, version: u64) -> Vec<&'static Field> {
        self.base
            .iter()
            .chain(self.extra)
            .filter(|f| version >= f.since)
            .collect()
    }
}

use FieldKind::{Double, Int, Json, List, Object, Str};

const SECTION_FIELDS: &[Field] = &[
    field("section_type", Int),
    field("domain_type", Str),
    field("title", Str),
    field("signature", Str),
    field("time_started", Double),
    field("time_stopped", Double),
    field("sub_sections", List(Role::Section)),
    field("text", Str),
    field("messages", List(Role::Message)),
    field("was_cancelled", Int),
    field("is_quiet", Int),
    field("was_fetched_from_cache", Int),
    field("subtitle", Str),
    field("location", Object(Role::Location)),
    field("command_detail", Str),
    field("unique_identifier", Str),
    field("localized_result", Str),
    field("xcbuild_signature", Str),
    since(9, "attachments", List(Role::Attachment)),
    since(11, "unit_test_subsections", Int),
];

const UNIT_TEST_FIELDS: &[Field] = &[
    field("tests_passed", Str),
    field("duration", Str),
    field("summary", Str),
    field("suite_name", Str),
    field("test_name", Str),
    field("performance_output", Str),
];

const MESSAGE_FIELDS: &[Field] = &[
    field("title", Str),
    field("short_title", Str),
    field("time_emitted", Double),
    field("range_end", Int),
    field("range_start", Int),
    field("sub_messages", List(Role::Message)),
    field("severity", Int),
    field("type", Str),
    field("location", Object(Role::Location)),
    field("category", Str),
    field("secondary_locations", List(Role::Location)),
    field("additional_description", Str),
];

const ACTION_FIELDS: &[Field] = &[field("action", Str)];

const ANALYZER_RESULT_FIELDS: &[Field] = &[
    field("result_type", Str),
    field("key_event_index", Int),
];

const ANALYZER_EVENT_FIELDS: &[Field] = &[
    field("parent_index", Int),
    field("description", Str),
    field("call_depth", Int),
];

const ANALYZER_FLOW_FIELDS: &[Field] = &[
    field("parent_index", Int),
    field("end_location", Object(Role::Location)),
    field("edges", List(Role::FlowEdge)),
];

const DOCUMENT_LOCATION_FIELDS: &[Field] = &[field("url", Str), field("timestamp", Double)];

const TEXT_LOCATION_FIELDS: &[Field] = &[
    field("starting_line", Int),
    field("starting_column", Int),
    field("ending_line", Int),
    field("ending_column", Int),
    field("char_range_end", Int),
    field("char_range_start", Int),
    field("encoding", Int),
];

const ATTACHMENT_FIELDS: &[Field] = &[
    field("identifier", Str),
    field("major_version", Int),
    field("minor_version", Int),
    field("data", Json),
];

const FLOW_EDGE_FIELDS: &[Field] = &[
    field("start_location", Object(Role::Location)),
    field("end_location", Object(Role::Location)),
];

const fn class(name: &'static str, role: Role, base: &'static [Field]) -> ClassSchema {
    ClassSchema {
        name,
        role,
        base,
        extra: &[],
    }
}

const fn subclass(
    name: &'static str,
    role: Role,
    base: &'static [Field],
    extra: &'static [Field],
) -> ClassSchema {
    ClassSchema {
        name,
        role,
        base,
        extra,
    }
}

static CLASSES: &[ClassSchema] = &[
    class("IDEActivityLogSection", Role::Section, SECTION_FIELDS),
    class("IDEActivityLogMajorGroupSection", Role::Section, SECTION_FIELDS),
    class("IDECommandLineBuildLog", Role::Section, SECTION_FIELDS),
    class("IDEActivityLogCommandInvocationSection", Role::Section, SECTION_FIELDS),
    subclass(
        "IDEActivityLogUnitTestSection",
        Role::Section,
        SECTION_FIELDS,
        UNIT_TEST_FIELDS,
    ),
    class("IDEActivityLogMessage", Role::Message, MESSAGE_FIELDS),
    class("IDEDiagnosticActivityLogMessage", Role::Message, MESSAGE_FIELDS),
    class("IDEClangDiagnosticActivityLogMessage", Role::Message, MESSAGE_FIELDS),
    subclass(
        "IDEActivityLogActionMessage",
        Role::Message,
        MESSAGE_FIELDS,
        ACTION_FIELDS,
    ),
    subclass(
        "IDEActivityLogAnalyzerResultMessage",
        Role::Message,
        MESSAGE_FIELDS,
        ANALYZER_RESULT_FIELDS,
    ),
    subclass(
        "IDEActivityLogAnalyzerEventStepMessage",
        Role::Message,
        MESSAGE_FIELDS,
        ANALYZER_EVENT_FIELDS,
    ),
    subclass(
        "IDEActivityLogAnalyzerControlFlowStepMessage",
        Role::Message,
        MESSAGE_FIELDS,
        ANALYZER_FLOW_FIELDS,
    ),
    class("DVTDocumentLocation", Role::Location, DOCUMENT_LOCATION_FIELDS),
    subclass(
        "DVTTextDocumentLocation",
        Role::Location,
        DOCUMENT_LOCATION_FIELDS,
        TEXT_LOCATION_FIELDS,
    ),
    class(
        "IDEFoundation.IDEActivityLogSectionAttachment",
        Role::Attachment,
        ATTACHMENT_FIELDS,
    ),
    class(
        "IDEActivityLogAnalyzerControlFlowStepEdge",
        Role::FlowEdge,
        FLOW_EDGE_FIELDS,
    ),
];

/// Find the schema for a class name as it appears in the stream.
pub(crate) fn lookup(name: &[u8]) -> Option<&'static ClassSchema> {
    CLASSES.iter().find(|c| c.name.as_bytes() == name)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
