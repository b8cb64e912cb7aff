// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The arguments of a single wrapper call, with the receiver it was made on.
///
/// Only the latest `Invocation` of a debounce window survives until the
/// callback fires. Several arguments travel together as a tuple or any other
/// owned value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<A, C = ()> {
    /// Context the call was made on, `None` for plain calls
    pub receiver: Option<C>,
    /// Arguments of the call
    pub args: A,
}

impl<A, C> Invocation<A, C> {
    #[must_use]
    pub const fn unbound(args: A) -> Self {
        Self {
            receiver: None,
            args,
        }
    }

    #[must_use]
    pub const fn bound(receiver: C, args: A) -> Self {
        Self {
            receiver: Some(receiver),
            args,
        }
    }

    pub fn into_parts(self) -> (Option<C>, A) {
        (self.receiver, self.args)
    }
}
