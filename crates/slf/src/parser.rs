// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! SLF object-graph parser.
//!
//! Objects and lists are tracked on an explicit frame stack: opening an
//! object or a non-empty list pushes a frame, and a frame that has received
//! all of its fields (or elements) is popped and handed to its parent.

use std::ops::RangeInclusive;

use tracing::trace;

use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::schema::{self, ClassSchema, Field, FieldKind, Role};
use crate::token::{Spanned, Token};
use crate::tree::{ActivityLog, DocumentLocation, LogNode, MessageNode, StepNode};

/// Format versions this parser understands.
pub const SUPPORTED_VERSIONS: RangeInclusive<u64> = 8..=11;

/// Maximum number of open objects and lists. Each build step holds two
/// (the section and its sub-section list). Bounded so that dropping the
/// decoded tree stays within a blocking-pool thread's stack.
pub const MAX_DEPTH: usize = 4096;

/// Parse an uncompressed SLF stream.
pub fn parse(input: &[u8]) -> Result<ActivityLog, ParseError> {
    let mut parser = Parser {
        lexer: Lexer::new(input)?,
        classes: Vec::new(),
        version: 0,
        stack: Vec::new(),
    };
    parser.run()
}

/// A decoded field value.
enum Value {
    Int(u64),
    Double,
    Str(Option<String>),
    Object(Option<Built>),
    List(Vec<Built>),
}

/// A finished object.
enum Built {
    Section(StepNode),
    Message(MessageNode),
    Location(DocumentLocation),
    Opaque,
}

struct ObjectFrame {
    schema: &'static ClassSchema,
    fields: Vec<&'static Field>,
    values: Vec<Value>,
}

struct ListFrame {
    role: Role,
    remaining: usize,
    items: Vec<Built>,
}

enum Frame {
    Object(ObjectFrame),
    List(ListFrame),
}

/// What the top frame needs next.
enum Step {
    Field(&'static Field),
    Element(Role),
    CloseObject,
    CloseList,
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    classes: Vec<&'a [u8]>,
    version: u64,
    stack: Vec<Frame>,
}

impl<'a> Parser<'a> {
    fn run(&mut self) -> Result<ActivityLog, ParseError> {
        let version = match self.expect("format version")? {
            Spanned {
                token: Token::Int(v),
                ..
            } => v,
            other => return Err(unexpected(&other, "format version")),
        };
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ParseError::UnsupportedVersion { version });
        }
        self.version = version;

        // The main section follows the version directly
        match self.expect("main section")? {
            Spanned {
                token: Token::ClassRef(index),
                offset,
            } => self.open_object(index, offset, Role::Section)?,
            Spanned {
                token: Token::Null, ..
            } => return Err(ParseError::MissingMainSection),
            other => return Err(unexpected(&other, "main section")),
        }

        loop {
            match self.next_step() {
                Step::Field(field) => self.read_field(field)?,
                Step::Element(role) => self.read_element(role)?,
                Step::CloseList => {
                    if let Some(Frame::List(list)) = self.stack.pop() {
                        self.deliver_value(Value::List(list.items));
                    }
                }
                Step::CloseObject => {
                    let Some(Frame::Object(frame)) = self.stack.pop() else {
                        continue;
                    };
                    let built = finish(frame);
                    if self.stack.is_empty() {
                        // Tokens after the root object are ignored
                        return match built {
                            Built::Section(main_section) => Ok(ActivityLog {
                                version,
                                main_section,
                            }),
                            _ => Err(ParseError::MissingMainSection),
                        };
                    }
                    self.deliver_built(built);
                }
            }
        }
    }

    fn next_step(&self) -> Step {
        match self.stack.last() {
            Some(Frame::Object(frame)) => match frame.fields.get(frame.values.len()) {
                Some(field) => Step::Field(field),
                None => Step::CloseObject,
            },
            Some(Frame::List(list)) if list.remaining == 0 => Step::CloseList,
            Some(Frame::List(list)) => Step::Element(list.role),
            // The root frame is pushed before the loop starts and the loop
            // returns when it closes.
            None => Step::CloseObject,
        }
    }

    fn read_field(&mut self, field: &'static Field) -> Result<(), ParseError> {
        let spanned = self.expect_with(|| describe(field))?;

        let value = match (field.kind, &spanned.token) {
            (FieldKind::Int, Token::Int(v)) => Value::Int(*v),
            (FieldKind::Double, Token::Double(_)) => Value::Double,
            (FieldKind::Str | FieldKind::Json, Token::Null) => Value::Str(None),
            (FieldKind::Str, Token::String(bytes)) | (FieldKind::Json, Token::Json(bytes)) => {
                Value::Str(Some(String::from_utf8_lossy(bytes).into_owned()))
            }
            (FieldKind::Object(_), Token::Null) => Value::Object(None),
            (FieldKind::Object(role), Token::ClassRef(index)) => {
                return self.open_object(*index, spanned.offset, role);
            }
            (FieldKind::List(_), Token::Null | Token::List(0)) => Value::List(Vec::new()),
            (FieldKind::List(role), Token::List(count)) => {
                return self.push(Frame::List(ListFrame {
                    role,
                    remaining: *count,
                    items: Vec::new(),
                }));
            }
            _ => return Err(unexpected(&spanned, &describe(field))),
        };
        self.deliver_value(value);
        Ok(())
    }

    fn read_element(&mut self, role: Role) -> Result<(), ParseError> {
        let spanned = self.expect_with(|| format!("{role} list element"))?;
        match spanned.token {
            Token::ClassRef(index) => self.open_object(index, spanned.offset, role),
            Token::Null => {
                if let Some(Frame::List(list)) = self.stack.last_mut() {
                    list.remaining -= 1;
                }
                Ok(())
            }
            _ => Err(unexpected(&spanned, &format!("{role} list element"))),
        }
    }

    fn open_object(&mut self, index: usize, offset: usize, role: Role) -> Result<(), ParseError> {
        let name = index
            .checked_sub(1)
            .and_then(|i| self.classes.get(i))
            .ok_or(ParseError::UndefinedClass { index, offset })?;
        let schema = schema::lookup(name).ok_or_else(|| ParseError::UnknownClass {
            name: String::from_utf8_lossy(name).into_owned(),
            offset,
        })?;
        if schema.role != role {
            return Err(ParseError::WrongRole {
                name: schema.name.to_string(),
                expected: role,
                offset,
            });
        }
        trace!(class = schema.name, offset, "open object");
        self.push(Frame::Object(ObjectFrame {
            schema,
            fields: schema.fields(self.version),
            values: Vec::new(),
        }))
    }

    fn push(&mut self, frame: Frame) -> Result<(), ParseError> {
        if self.stack.len() >= MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        self.stack.push(frame);
        Ok(())
    }

    /// Hand a field value to the object on top of the stack.
    fn deliver_value(&mut self, value: Value) {
        if let Some(Frame::Object(frame)) = self.stack.last_mut() {
            frame.values.push(value);
        }
    }

    /// Hand a finished object to its parent: a field value or a list element.
    fn deliver_built(&mut self, built: Built) {
        match self.stack.last_mut() {
            Some(Frame::Object(frame)) => frame.values.push(Value::Object(Some(built))),
            Some(Frame::List(list)) => {
                list.items.push(built);
                list.remaining -= 1;
            }
            None => {}
        }
    }

    fn expect(&mut self, expected: &str) -> Result<Spanned<'a>, ParseError> {
        self.expect_with(|| expected.to_string())
    }

    fn expect_with(
        &mut self,
        expected: impl FnOnce() -> String,
    ) -> Result<Spanned<'a>, ParseError> {
        match self.next_significant()? {
            Some(spanned) => Ok(spanned),
            None => Err(ParseError::UnexpectedEof {
                expected: expected(),
            }),
        }
    }

    /// Next token, registering class-name definitions along the way.
    fn next_significant(&mut self) -> Result<Option<Spanned<'a>>, ParseError> {
        loop {
            match self.lexer.next_token()? {
                Some(Spanned {
                    token: Token::ClassName(name),
                    ..
                }) => self.classes.push(name),
                other => return Ok(other),
            }
        }
    }
}

fn describe(field: &Field) -> String {
    format!("{} for field `{}`", field.kind, field.name)
}

fn unexpected(spanned: &Spanned<'_>, expected: &str) -> ParseError {
    ParseError::UnexpectedToken {
        found: spanned.token.kind(),
        expected: expected.to_string(),
        offset: spanned.offset,
    }
}

fn finish(frame: ObjectFrame) -> Built {
    let ObjectFrame {
        schema,
        fields,
        values,
    } = frame;
    let pairs = fields.into_iter().map(|f| f.name).zip(values);

    match schema.role {
        Role::Section => {
            let mut step = StepNode {
                class: schema.name.to_string(),
                ..StepNode::default()
            };
            let mut messages = Vec::new();
            for (name, value) in pairs {
                match (name, value) {
                    ("title", Value::Str(title)) => step.title = title.unwrap_or_default(),
                    ("location", Value::Object(location)) => step.location = into_location(location),
                    ("sub_sections", Value::List(items)) => {
                        step.children.extend(items.into_iter().filter_map(|b| match b {
                            Built::Section(s) => Some(LogNode::Step(s)),
                            _ => None,
                        }));
                    }
                    ("messages", Value::List(items)) => messages = into_messages(items),
                    _ => {}
                }
            }
            step.children.extend(messages);
            Built::Section(step)
        }
        Role::Message => {
            let mut message = MessageNode {
                class: schema.name.to_string(),
                ..MessageNode::default()
            };
            for (name, value) in pairs {
                match (name, value) {
                    ("title", Value::Str(title)) => message.title = title.unwrap_or_default(),
                    ("severity", Value::Int(severity)) => message.severity = severity,
                    ("type", Value::Str(kind)) => message.kind = kind.unwrap_or_default(),
                    ("location", Value::Object(location)) => {
                        message.location = into_location(location)
                    }
                    ("sub_messages", Value::List(items)) => message.children = into_messages(items),
                    _ => {}
                }
            }
            Built::Message(message)
        }
        Role::Location => {
            let mut location = DocumentLocation::default();
            for (name, value) in pairs {
                match (name, value) {
                    ("url", Value::Str(url)) => location.url = url.unwrap_or_default(),
                    ("starting_line", Value::Int(v)) => location.line = one_based(v),
                    ("starting_column", Value::Int(v)) => location.column = one_based(v),
                    _ => {}
                }
            }
            Built::Location(location)
        }
        Role::Attachment | Role::FlowEdge => Built::Opaque,
    }
}

fn into_location(built: Option<Built>) -> Option<DocumentLocation> {
    match built {
        Some(Built::Location(location)) => Some(location),
        _ => None,
    }
}

fn into_messages(items: Vec<Built>) -> Vec<LogNode> {
    items
        .into_iter()
        .filter_map(|b| match b {
            Built::Message(m) => Some(LogNode::Message(m)),
            _ => None,
        })
        .collect()
}

/// Convert a 0-based line or column. Absent positions are written as
/// all-ones sentinels, which fall outside `u32`.
fn one_based(v: u64) -> Option<u32> {
    v.checked_add(1).and_then(|n| u32::try_from(n).ok())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
