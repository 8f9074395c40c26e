//! Offset enumeration.

use crate::{MangleResult, VariantSource};
use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Iterator over the variants of one test file, offsets 1, 2, 3, ...
///
/// Ends at the first offset without a variant. An error is yielded once and
/// also ends the iteration.
#[derive(Debug)]
pub struct Variants<'s, S: ?Sized> {
    source: &'s S,
    input: PathBuf,
    next: NonZeroUsize,
    finished: bool,
}

/// Enumerate the variants `source` produces for `input`.
pub fn variants<S: VariantSource + ?Sized>(source: &S, input: impl Into<PathBuf>) -> Variants<'_, S> {
    Variants {
        source,
        input: input.into(),
        next: NonZeroUsize::MIN,
        finished: false,
    }
}

impl<S: ?Sized> Variants<'_, S> {
    /// Offset the next call to `next` will request.
    pub fn next_offset(&self) -> NonZeroUsize {
        self.next
    }
}

impl<S: VariantSource + ?Sized> Iterator for Variants<'_, S> {
    type Item = MangleResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.source.variant(&self.input, self.next) {
            Ok(Some(text)) => {
                self.next = self.next.saturating_add(1);
                Some(Ok(text))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: VariantSource + ?Sized> FusedIterator for Variants<'_, S> {}
