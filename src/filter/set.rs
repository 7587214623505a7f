use std::sync::Arc;

use bitflags::Flags;

use crate::error::DbResult;
use crate::filter::chain::{Invoke, Next, Terminal};
use crate::filter::error::FilterError;
use crate::filter::targets::TargetMask;

/// Precomputed dispatch table for one filter family
///
/// Built once from an ordered filter list. For every defined flag the set
/// holds the ordered subset of filters targeting that flag, plus the union
/// of all declared masks. Immutable after construction; lookups never fail
/// and never allocate. Re-scanning every filter's mask per call would make
/// each operation O(registered filters); the precomputed buckets make an
/// intercepted call O(filters active for that operation) and an
/// unintercepted call a single mask test.
pub struct FilterSet<F: ?Sized, M> {
    union: M,
    buckets: Vec<Vec<Arc<F>>>,
}

impl<F: ?Sized, M: std::fmt::Debug> std::fmt::Debug for FilterSet<F, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterSet")
            .field("union", &self.union)
            .field("buckets", &self.buckets.len())
            .finish()
    }
}

impl<F: ?Sized, M: TargetMask> FilterSet<F, M> {
    /// A set with no filters; every operation takes the fast path
    pub fn empty() -> Self {
        Self {
            union: M::empty(),
            buckets: Vec::new(),
        }
    }

    /// Build the dispatch table from an ordered filter list
    ///
    /// Order is the caller-supplied priority, outermost first, and is
    /// preserved per flag. Each filter's mask is queried exactly once; a
    /// mask carrying bits not defined by the family is rejected here
    /// rather than silently ignored.
    pub fn new(filters: Vec<Arc<F>>, targets: fn(&F) -> M) -> Result<Self, FilterError> {
        let masks: Vec<M> = filters.iter().map(|f| targets(f)).collect();

        let mut union = M::empty();
        for mask in &masks {
            if M::from_bits(mask.bits()).is_none() {
                return Err(FilterError::UnknownTargets {
                    family: M::FAMILY,
                    bits: mask.bits(),
                });
            }
            union = union.union(*mask);
        }

        let width = (32 - M::all().bits().leading_zeros()) as usize;
        let mut buckets: Vec<Vec<Arc<F>>> = vec![Vec::new(); width];
        for flag in M::FLAGS {
            let bits = flag.value().bits();
            if bits.count_ones() != 1 {
                continue;
            }
            buckets[bits.trailing_zeros() as usize] = filters
                .iter()
                .zip(&masks)
                .filter(|(_, mask)| mask.contains(*flag.value()))
                .map(|(filter, _)| Arc::clone(filter))
                .collect();
        }

        tracing::debug!(
            family = M::FAMILY,
            filters = filters.len(),
            union = ?union,
            "filter set built"
        );

        Ok(Self { union, buckets })
    }

    /// Union of every filter's declared mask
    pub fn union_mask(&self) -> M {
        self.union
    }

    /// The ordered filters active for a single flag
    pub fn get(&self, flag: M) -> &[Arc<F>] {
        self.buckets
            .get(flag.bits().trailing_zeros() as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Route one operation through the chain of filters active for `flag`
    ///
    /// Fast path: if no filter targets the flag, the terminal runs directly
    /// and no chain is built.
    pub fn dispatch<T: ?Sized, A, R>(
        &self,
        flag: M,
        target: &mut T,
        args: A,
        invoke: Invoke<F, T, A, R>,
        terminal: Terminal<T, A, R>,
    ) -> DbResult<R> {
        if !self.union.contains(flag) {
            return terminal(target, args);
        }
        let active = self.get(flag);
        tracing::trace!(
            family = M::FAMILY,
            flag = ?flag,
            filters = active.len(),
            "dispatching through filter chain"
        );
        Next::new(active, invoke, terminal).run(target, args)
    }
}
