//! Directive parser
//!
//! Turns the flattened text of one comment group into at most one record per
//! directive kind. Each record type declares an ordered table of
//! `(tag, setter)` pairs; a line is assigned to the first tag it starts with.

use crate::models::{Position, Requirement, SecurityControl};
use crate::scanner::constants::{
    TAG_DESCRIPTION, TAG_REFERENCES, TAG_REQUIREMENT, TAG_SECURITY_CONTROL, TAG_STAKEHOLDER,
    TAG_VERIFICATION,
};

/// Writes a tag's value into a record under construction
pub type FieldSetter<T> = fn(&mut T, String);

/// Tag family to extract from a comment group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    SecurityControl,
    Requirement,
}

impl DirectiveKind {
    pub const ALL: [DirectiveKind; 2] = [DirectiveKind::SecurityControl, DirectiveKind::Requirement];

    /// Identifying tag; its presence anywhere in a group triggers parsing
    pub fn tag(&self) -> &'static str {
        match self {
            DirectiveKind::SecurityControl => TAG_SECURITY_CONTROL,
            DirectiveKind::Requirement => TAG_REQUIREMENT,
        }
    }
}

/// A record produced by [`parse_directive`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Control(SecurityControl),
    Requirement(Requirement),
}

/// A record type that can be populated from tagged comment lines
pub trait Annotation: Sized + 'static {
    const KIND: DirectiveKind;

    /// Ordered tag table. The first entry is the identifying tag.
    const FIELDS: &'static [(&'static str, FieldSetter<Self>)];

    fn located(file_path: &str, position: Position) -> Self;

    /// Identifying field; empty means the block is not a real directive
    fn id(&self) -> &str;
}

impl Annotation for SecurityControl {
    const KIND: DirectiveKind = DirectiveKind::SecurityControl;

    const FIELDS: &'static [(&'static str, FieldSetter<Self>)] = &[
        (TAG_SECURITY_CONTROL, |c, v| c.control_id = v),
        (TAG_DESCRIPTION, |c, v| c.description = v),
        (TAG_REFERENCES, |c, v| c.references = v),
        (TAG_VERIFICATION, |c, v| c.verification = v),
    ];

    fn located(file_path: &str, position: Position) -> Self {
        SecurityControl::located(file_path, position)
    }

    fn id(&self) -> &str {
        &self.control_id
    }
}

impl Annotation for Requirement {
    const KIND: DirectiveKind = DirectiveKind::Requirement;

    const FIELDS: &'static [(&'static str, FieldSetter<Self>)] = &[
        (TAG_REQUIREMENT, |r, v| r.requirement_id = v),
        (TAG_DESCRIPTION, |r, v| r.description = v),
        (TAG_VERIFICATION, |r, v| r.verification = v),
        (TAG_STAKEHOLDER, |r, v| r.stakeholder = v),
    ];

    fn located(file_path: &str, position: Position) -> Self {
        Requirement::located(file_path, position)
    }

    fn id(&self) -> &str {
        &self.requirement_id
    }
}

/// Extract one record of type `A` from a comment group's text
///
/// Later lines carrying the same tag overwrite earlier ones. Lines that match
/// no tag in `A::FIELDS` are ignored.
///
/// # Returns
/// * `Some(record)` when the identifying tag carried a non-empty value
/// * `None` otherwise
pub fn parse_annotation<A: Annotation>(text: &str, file_path: &str, position: &Position) -> Option<A> {
    let mut record = A::located(file_path, position.clone());

    for line in text.split('\n') {
        let line = line.trim();
        let matched = A::FIELDS
            .iter()
            .find_map(|(tag, set)| line.strip_prefix(tag).map(|rest| (rest, set)));

        if let Some((rest, set)) = matched {
            set(&mut record, rest.trim().to_string());
        }
    }

    if record.id().is_empty() {
        None
    } else {
        Some(record)
    }
}

/// Extract a record of the given kind from a comment group's text
pub fn parse_directive(
    kind: DirectiveKind,
    text: &str,
    file_path: &str,
    position: &Position,
) -> Option<Directive> {
    match kind {
        DirectiveKind::SecurityControl => {
            parse_annotation::<SecurityControl>(text, file_path, position).map(Directive::Control)
        }
        DirectiveKind::Requirement => {
            parse_annotation::<Requirement>(text, file_path, position).map(Directive::Requirement)
        }
    }
}
