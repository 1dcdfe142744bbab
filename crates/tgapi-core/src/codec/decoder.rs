use serde_json::{Map, Value};

use crate::{codec::JsonKind, config::CodecConfig, errors::DecodeError};

/// One step of the path from the document root to the value being decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Field(&'static str),
    Index(usize),
}

/// Per-call decoding state: current field path and object nesting depth.
///
/// A fresh decoder is created for every top-level decode, so any number of
/// decodes can run in parallel without sharing anything.
#[derive(Clone, Debug)]
pub struct Decoder {
    max_depth: usize,
    depth: usize,
    path: Vec<Segment>,
}

impl Decoder {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            depth: 0,
            path: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Dotted path of the value currently being decoded (`$` at the root).
    pub fn path(&self) -> String {
        render_path(&self.path, None)
    }

    /// Path of a child field of the current value.
    pub fn path_with(&self, name: &str) -> String {
        render_path(&self.path, Some(name))
    }

    pub fn mismatch(&self, expected: JsonKind, found: &Value) -> DecodeError {
        DecodeError::TypeMismatch {
            field: self.path(),
            expected,
            found: JsonKind::of(found),
        }
    }

    pub fn object<'v>(
        &self,
        value: &'v Value,
    ) -> Result<&'v Map<String, Value>, DecodeError> {
        value
            .as_object()
            .ok_or_else(|| self.mismatch(JsonKind::Object, value))
    }

    /// Run `f` one object level deeper, failing once the configured limit is hit.
    pub fn descend<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        if self.depth >= self.max_depth {
            return Err(DecodeError::DepthExceeded {
                limit: self.max_depth,
                field: self.path(),
            });
        }
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }

    /// Run `f` with `segment` appended to the current path.
    pub fn at<T>(
        &mut self,
        segment: Segment,
        f: impl FnOnce(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        self.path.push(segment);
        let out = f(self);
        self.path.pop();
        out
    }
}

fn render_path(path: &[Segment], child: Option<&str>) -> String {
    let mut out = String::new();
    for segment in path {
        match segment {
            Segment::Field(name) => push_field(&mut out, name),
            Segment::Index(idx) => {
                out.push('[');
                out.push_str(&idx.to_string());
                out.push(']');
            }
        }
    }
    if let Some(name) = child {
        push_field(&mut out, name);
    }
    if out.is_empty() {
        out.push('$');
    }
    out
}

fn push_field(out: &mut String, name: &str) {
    if !out.is_empty() {
        out.push('.');
    }
    out.push_str(name);
}
