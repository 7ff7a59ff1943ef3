//! RAII guard for one prefix-stack slot.

use super::Writer;
use std::ops::{Deref, DerefMut};

/// Holds one pushed prefix and pops it when dropped.
///
/// The guard dereferences to the writer, so everything written through it
/// carries the pushed prefix. Dropping the guard restores the stack on every
/// exit path, including `?` returns and unwinding panics.
#[derive(Debug)]
pub struct PrefixGuard<'w, 'a> {
    writer: &'w mut Writer<'a>,
    depth: usize,
}

impl<'w, 'a> PrefixGuard<'w, 'a> {
    pub(super) fn push(writer: &'w mut Writer<'a>, prefix: String) -> Self {
        tracing::trace!(prefix = %prefix, depth = writer.prefixes.len() + 1, "push prefix");
        writer.prefixes.push(prefix);
        let depth = writer.prefixes.len();
        Self { writer, depth }
    }

    /// Stack depth including this guard's prefix.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<'a> Deref for PrefixGuard<'_, 'a> {
    type Target = Writer<'a>;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl DerefMut for PrefixGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl Drop for PrefixGuard<'_, '_> {
    fn drop(&mut self) {
        // Truncate rather than pop so a leaked inner guard cannot shift the stack.
        self.writer.prefixes.truncate(self.depth - 1);
        tracing::trace!(depth = self.depth - 1, "pop prefix");
    }
}
