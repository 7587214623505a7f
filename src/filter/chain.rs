use std::sync::Arc;

use crate::error::DbResult;

/// Thunk routing the chain head into its hook method for one operation
pub type Invoke<F, T, A, R> = fn(&F, &mut T, A, Next<'_, F, T, A, R>) -> DbResult<R>;

/// Terminal continuation performing the real call on the wrapped primitive
pub type Terminal<T, A, R> = fn(&mut T, A) -> DbResult<R>;

/// The remainder of a call chain for one operation
///
/// Holds the filters still ahead of the current position, the per-operation
/// invoke thunk and the terminal call. `run` peels the next filter off the
/// front; the empty chain invokes the terminal. The value is `Copy`, so a
/// filter may invoke its continuation zero, one or several times.
pub struct Next<'a, F: ?Sized, T: ?Sized, A, R> {
    rest: &'a [Arc<F>],
    invoke: Invoke<F, T, A, R>,
    terminal: Terminal<T, A, R>,
}

impl<'a, F: ?Sized, T: ?Sized, A, R> Next<'a, F, T, A, R> {
    pub(crate) fn new(
        rest: &'a [Arc<F>],
        invoke: Invoke<F, T, A, R>,
        terminal: Terminal<T, A, R>,
    ) -> Self {
        Self {
            rest,
            invoke,
            terminal,
        }
    }

    /// Invoke the remainder of the chain
    pub fn run(self, target: &mut T, args: A) -> DbResult<R> {
        match self.rest.split_first() {
            Some((head, rest)) => (self.invoke)(
                head,
                target,
                args,
                Next {
                    rest,
                    invoke: self.invoke,
                    terminal: self.terminal,
                },
            ),
            None => (self.terminal)(target, args),
        }
    }
}

impl<F: ?Sized, T: ?Sized, A, R> Clone for Next<'_, F, T, A, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized, T: ?Sized, A, R> Copy for Next<'_, F, T, A, R> {}
