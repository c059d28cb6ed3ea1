// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational slot storage shared by blocks and points.

use alloc::vec::Vec;

#[derive(Clone, Debug)]
struct Entry<T> {
    generation: u32,
    value: Option<T>,
}

/// Slot vector with a free list. Handles are `(index, generation)` pairs.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }
}

impl<T> Arena<T> {
    pub(crate) fn insert(&mut self, value: T) -> (u32, u32) {
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let entry = &mut self.entries[idx as usize];
            entry.generation = entry.generation.wrapping_add(1);
            entry.value = Some(value);
            return (idx, entry.generation);
        }
        let idx = u32::try_from(self.entries.len()).unwrap_or(u32::MAX);
        self.entries.push(Entry {
            generation: 1,
            value: Some(value),
        });
        (idx, 1)
    }

    pub(crate) fn get(&self, idx: usize, generation: u32) -> Option<&T> {
        self.entries
            .get(idx)
            .filter(|e| e.generation == generation)
            .and_then(|e| e.value.as_ref())
    }

    pub(crate) fn get_mut(&mut self, idx: usize, generation: u32) -> Option<&mut T> {
        self.entries
            .get_mut(idx)
            .filter(|e| e.generation == generation)
            .and_then(|e| e.value.as_mut())
    }

    pub(crate) fn remove(&mut self, idx: usize, generation: u32) -> Option<T> {
        let entry = self.entries.get_mut(idx)?;
        if entry.generation != generation {
            return None;
        }
        let value = entry.value.take()?;
        self.len -= 1;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "indices were produced from u32 on insert"
        )]
        self.free.push(idx as u32);
        Some(value)
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
