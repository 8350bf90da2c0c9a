//! Wire decoder for stream payloads.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::DecodeError;
use crate::payload::{StreamAction, StreamInstruction, StreamPayload};
use crate::target::TargetId;

const SNIPPET_LEN: usize = 40;

static ELEMENT_RE: OnceLock<Regex> = OnceLock::new();
static ATTRIBUTE_RE: OnceLock<Regex> = OnceLock::new();

fn element_regex() -> &'static Regex {
    ELEMENT_RE.get_or_init(|| {
        let pattern =
            r"(?s)<turbo-stream\b([^>]*)>\s*<template>(.*?)</template>\s*</turbo-stream>";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("stream element regex failed to compile: {error}"))
    })
}

fn attribute_regex() -> &'static Regex {
    ATTRIBUTE_RE.get_or_init(|| {
        let pattern = r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*"([^"]*)""#;
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("stream attribute regex failed to compile: {error}"))
    })
}

pub(crate) fn decode(body: &str) -> Result<StreamPayload, DecodeError> {
    let mut payload = StreamPayload::new();
    let mut cursor = 0;

    for captures in element_regex().captures_iter(body) {
        let Some(element) = captures.get(0) else {
            continue;
        };
        ensure_blank(body, cursor, element.start())?;
        cursor = element.end();

        let attributes = captures.get(1).map_or("", |m| m.as_str());
        let markup = captures.get(2).map_or("", |m| m.as_str());
        payload.push(parse_instruction(element.start(), attributes, markup)?);
    }

    ensure_blank(body, cursor, body.len())?;
    Ok(payload)
}

fn parse_instruction(
    offset: usize,
    attributes: &str,
    markup: &str,
) -> Result<StreamInstruction, DecodeError> {
    let mut found_action = None;
    let mut found_target = None;
    for captures in attribute_regex().captures_iter(attributes) {
        let (Some(name), Some(value)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        match name.as_str() {
            "action" => found_action = Some(value.as_str()),
            "target" => found_target = Some(value.as_str()),
            _ => {}
        }
    }

    let action = found_action.ok_or(DecodeError::MissingAttribute {
        offset,
        attribute: "action",
    })?;
    let target = found_target.ok_or(DecodeError::MissingAttribute {
        offset,
        attribute: "target",
    })?;

    match action.parse::<StreamAction>()? {
        StreamAction::Replace => Ok(StreamInstruction::replace(
            TargetId::new(target)?,
            markup,
        )),
    }
}

fn ensure_blank(body: &str, start: usize, end: usize) -> Result<(), DecodeError> {
    let Some(gap) = body.get(start..end) else {
        return Ok(());
    };
    match gap.char_indices().find(|(_, c)| !c.is_whitespace()) {
        None => Ok(()),
        Some((index, _)) => {
            let offset = start + index;
            let snippet = body
                .get(offset..)
                .unwrap_or_default()
                .chars()
                .take(SNIPPET_LEN)
                .collect();
            Err(DecodeError::UnexpectedContent { offset, snippet })
        }
    }
}
