// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{scheduler::Scheduler, timer::Timer};
use core::fmt::Debug;
use core::ops::Add;
use core::time::Duration;

pub trait Runtime: 'static {
    type Timer: Timer<Instant = Self::Instant> + Default;
    type Instant: Copy + Ord + Send + Sync + Debug + Add<Duration, Output = Self::Instant>;
    type Scheduler: Scheduler;
}
