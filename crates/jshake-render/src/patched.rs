//! `PatchedSource`: an edit buffer over an immutable original text.
//!
//! All edit indices refer to byte offsets into the original text, so edits
//! never invalidate each other's positions. Removals of overlapping or
//! adjacent ranges merge; insertions at the same index materialize in call
//! order.

/// Accumulates removals and insertions against the original source and
/// produces the patched output on demand.
pub struct PatchedSource {
    original: String,
    removals: Vec<(u32, u32)>,
    insertions: Vec<(u32, String)>,
    /// Ranges a downstream reindenter must leave alone (template literals).
    pub indent_exclusion_ranges: Vec<(u32, u32)>,
}

impl PatchedSource {
    pub fn new(original: String) -> Self {
        Self {
            original,
            removals: Vec::new(),
            insertions: Vec::new(),
            indent_exclusion_ranges: Vec::new(),
        }
    }

    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Delete `[start, end)` of the original text from the output.
    pub fn remove(&mut self, start: u32, end: u32) {
        let (start, end) = self.clamp(start, end);
        if start < end {
            self.removals.push((start, end));
        }
    }

    /// Insert `text` before original byte `index`, attached to the content on
    /// its left.
    pub fn append_left(&mut self, index: u32, text: &str) {
        debug_assert!(index as usize <= self.original.len(), "insert out of bounds");
        let index = index.min(self.original.len() as u32);
        if !text.is_empty() {
            self.insertions.push((index, text.to_owned()));
        }
    }

    /// Replace `[start, end)` with `text`.
    pub fn overwrite(&mut self, start: u32, end: u32, text: &str) {
        let (start, end) = self.clamp(start, end);
        self.remove(start, end);
        self.append_left(start, text);
    }

    fn clamp(&self, start: u32, end: u32) -> (u32, u32) {
        let len = self.original.len() as u32;
        debug_assert!(start <= end, "inverted edit range {start}..{end}");
        debug_assert!(end <= len, "edit range {start}..{end} out of bounds");
        debug_assert!(
            self.original.is_char_boundary((start.min(len)) as usize)
                && self.original.is_char_boundary((end.min(len)) as usize),
            "edit range {start}..{end} splits a character"
        );
        let end = end.min(len);
        (start.min(end), end)
    }

    /// Removals sorted and merged into disjoint ranges.
    fn merged_removals(&self) -> Vec<(u32, u32)> {
        let mut removals = self.removals.clone();
        removals.sort_unstable();
        let mut merged: Vec<(u32, u32)> = Vec::with_capacity(removals.len());
        for (start, end) in removals {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        merged
    }

    /// The surviving spans of the original text, in order.
    fn kept_segments(&self) -> Vec<(u32, u32)> {
        let len = self.original.len() as u32;
        let mut kept = Vec::new();
        let mut cursor = 0;
        for (start, end) in self.merged_removals() {
            if cursor < start {
                kept.push((cursor, start));
            }
            cursor = end;
        }
        if cursor < len {
            kept.push((cursor, len));
        }
        kept
    }

    /// Produce the patched output text.
    pub fn materialize(&self) -> String {
        let mut insertions: Vec<(u32, &str)> = self
            .insertions
            .iter()
            .map(|(index, text)| (*index, text.as_str()))
            .collect();
        insertions.sort_by_key(|&(index, _)| index);

        let inserted_len: usize = insertions.iter().map(|(_, text)| text.len()).sum();
        let mut out = String::with_capacity(self.original.len() + inserted_len);
        let mut pending = insertions.into_iter().peekable();
        for (start, end) in self.kept_segments() {
            // Insertions at or before the segment start (including any that
            // pointed into a removed range) land here.
            while let Some(&(index, text)) = pending.peek() {
                if index > start {
                    break;
                }
                out.push_str(text);
                pending.next();
            }
            let mut cursor = start;
            while let Some(&(index, text)) = pending.peek() {
                if index >= end {
                    break;
                }
                out.push_str(&self.original[cursor as usize..index as usize]);
                out.push_str(text);
                cursor = index;
                pending.next();
            }
            out.push_str(&self.original[cursor as usize..end as usize]);
        }
        for (_, text) in pending {
            out.push_str(text);
        }
        out
    }
}
