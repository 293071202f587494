use core::num::NonZero;

// Narrow handles in tests so the slot limit is reachable.
#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Index of a node slot inside an [`Arena`](super::arena::Arena).
///
/// Stored off by one so that `Option<Handle>` costs nothing over `Handle`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// Largest slot index a handle can name.
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn new(slot: usize) -> Self {
        assert!(slot <= Self::MAX, "`Handle::new()` - `slot` > `Handle::MAX`!");
        match NonZero::new((slot + 1) as RawHandle) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
