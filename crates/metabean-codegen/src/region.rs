// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The generated region of a source file.
//!
//! Generated items live between two marker lines. Everything outside the
//! markers belongs to the author and is kept byte for byte, line endings
//! included, apart from one inserted `use` line when runtime names are
//! missing. Generated and inserted lines end with the configured terminator.
//!
//! ```text
//! pub struct Person { ... }
//!
//! //------------------------- AUTOGENERATED START -------------------------
//! impl Person { ... }
//! ...
//! //-------------------------- AUTOGENERATED END --------------------------
//!
//! impl Person { /* hand-written */ }
//! ```

use std::collections::BTreeSet;

use syn::{File, Item, UseTree, spanned::Spanned};

use crate::generate::RUNTIME_CRATE;

/// First line of the generated region.
pub const START_MARKER: &str =
    "//------------------------- AUTOGENERATED START -------------------------";

/// Last line of the generated region.
pub const END_MARKER: &str =
    "//-------------------------- AUTOGENERATED END --------------------------";

/// Marker line indexes, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Index of the start marker.
    pub start: usize,
    /// Index of the end marker.
    pub end:   usize
}

impl Region {
    /// Locate the markers.
    ///
    /// # Errors
    ///
    /// Returns the 1-based line and a message when markers are unpaired,
    /// repeated or out of order.
    pub fn find(lines: &[&str]) -> Result<Option<Self>, (usize, String)> {
        let mut start = None;
        let mut end = None;
        for (index, line) in lines.iter().enumerate() {
            match line.trim() {
                START_MARKER if start.is_some() => {
                    return Err((index + 1, "repeated AUTOGENERATED START marker".to_owned()));
                }
                START_MARKER => start = Some(index),
                END_MARKER if end.is_some() => {
                    return Err((index + 1, "repeated AUTOGENERATED END marker".to_owned()));
                }
                END_MARKER if start.is_none() => {
                    return Err((index + 1, "AUTOGENERATED END marker without a start".to_owned()));
                }
                END_MARKER => end = Some(index),
                _ => {}
            }
        }
        match (start, end) {
            (None, _) => Ok(None),
            (Some(start), None) => {
                Err((start + 1, "AUTOGENERATED START marker without an end".to_owned()))
            }
            (Some(start), Some(end)) => Ok(Some(Self {
                start,
                end
            }))
        }
    }

    /// Check if the 1-based `line` lies inside the region.
    pub fn contains_line(&self, line: usize) -> bool {
        line > self.start && line <= self.end + 1
    }

    /// Lines between the markers.
    pub fn body<'a>(&self, lines: &'a [&'a str]) -> &'a [&'a str] {
        &lines[self.start + 1..self.end]
    }
}

/// Compare region bodies, ignoring `#[inline]` lines and trailing
/// whitespace.
pub fn same_body(old: &[&str], new: &[String]) -> bool {
    let significant = |line: &&str| line.trim() != "#[inline]";
    let old = old.iter().copied().filter(significant).map(str::trim_end);
    let new = new
        .iter()
        .map(String::as_str)
        .filter(significant)
        .map(str::trim_end);
    old.eq(new)
}

/// Split `text` into lines, each paired with the terminator that ended it.
///
/// `\r\n`, `\r` and `\n` all end a line. A final line without a
/// terminator is paired with `""`.
pub fn split_lines(text: &str) -> Vec<(&str, &str)> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        let end = match bytes[index] {
            b'\n' => index + 1,
            b'\r' if bytes.get(index + 1) == Some(&b'\n') => index + 2,
            b'\r' => index + 1,
            _ => {
                index += 1;
                continue;
            }
        };
        lines.push((&text[start..index], &text[index..end]));
        start = end;
        index = end;
    }
    if start < text.len() {
        lines.push((&text[start..], ""));
    }
    lines
}

/// Line indices bounding the author's lines around the region: lines
/// before the first index and from the second index on are kept by
/// [`splice`].
pub fn kept_bounds(len: usize, region: Option<Region>, anchor: usize) -> (usize, usize) {
    match region {
        Some(region) => (region.start, region.end + 1),
        None => {
            let split = (anchor + 1).min(len);
            (split, split)
        }
    }
}

/// Replace or insert the region.
///
/// Without an existing region the new one follows line index `anchor`,
/// separated by a blank line.
pub fn splice(lines: &[&str], region: Option<Region>, anchor: usize, body: &[String]) -> Vec<String> {
    let (head_end, tail_start) = kept_bounds(lines.len(), region, anchor);
    let (head, tail) = (&lines[..head_end], &lines[tail_start..]);
    let gap = region.is_none();
    let mut out: Vec<String> = head.iter().map(|line| (*line).to_owned()).collect();
    if gap {
        out.push(String::new());
    }
    out.push(START_MARKER.to_owned());
    out.extend(body.iter().cloned());
    out.push(END_MARKER.to_owned());
    if gap && tail.first().is_some_and(|line| !line.trim().is_empty()) {
        out.push(String::new());
    }
    out.extend(tail.iter().map(|line| (*line).to_owned()));
    out
}

/// Names brought into scope by top-level `use` items, and whether the
/// runtime crate is glob-imported.
pub fn imported_names(file: &File) -> (BTreeSet<String>, bool) {
    let mut names = BTreeSet::new();
    let mut glob = false;
    for item in &file.items {
        if let Item::Use(item) = item {
            collect(&item.tree, true, &mut names, &mut glob);
        }
    }
    (names, glob)
}

fn collect(tree: &UseTree, root: bool, names: &mut BTreeSet<String>, glob: &mut bool) {
    match tree {
        UseTree::Path(path) => {
            let runtime_root = root && path.ident == RUNTIME_CRATE;
            if runtime_root && matches!(&*path.tree, UseTree::Glob(_)) {
                *glob = true;
            }
            collect(&path.tree, false, names, glob);
        }
        UseTree::Name(name) => {
            names.insert(name.ident.to_string());
        }
        UseTree::Rename(rename) => {
            names.insert(rename.rename.to_string());
        }
        UseTree::Group(group) => {
            for item in &group.items {
                collect(item, root, names, glob);
            }
        }
        UseTree::Glob(_) => {}
    }
}

/// Runtime names from `used` that `file` does not import.
pub fn missing_imports(file: &File, used: &[&'static str]) -> Vec<&'static str> {
    let (names, glob) = imported_names(file);
    if glob {
        return Vec::new();
    }
    used.iter()
        .copied()
        .filter(|name| !names.contains(*name))
        .collect()
}

/// `use metabean::{...};` for `names`.
pub fn import_line(names: &[&str]) -> String {
    match names {
        [single] => format!("use {RUNTIME_CRATE}::{single};"),
        _ => format!("use {RUNTIME_CRATE}::{{{}}};", names.join(", "))
    }
}

/// 0-based index at which a new `use` line goes: after the last top-level
/// `use` that precedes the bean, otherwise before the bean.
pub fn import_index(file: &File, bean_start_line: usize) -> usize {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Use(item) => Some(item.span().end().line),
            _ => None
        })
        .filter(|line| *line < bean_start_line)
        .max()
        .unwrap_or_else(|| bean_start_line.saturating_sub(1))
}
