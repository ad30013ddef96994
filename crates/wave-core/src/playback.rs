use std::time::Duration;

/// Frame index scheduler for a looping animation.
///
/// The host calls [`Playback::advance`] from its timer or animation-frame
/// callback with the elapsed time since the previous call. There is a single
/// active frame: when more than one delay has elapsed the index jumps ahead
/// and intermediate frames are skipped rather than queued.
#[derive(Clone, Debug, PartialEq)]
pub struct Playback {
    frame_count: usize,
    delay: Duration,
    index: usize,
    accum: Duration,
}

impl Playback {
    pub fn new(frame_count: usize, delay: Duration) -> Self {
        Self {
            frame_count,
            delay,
            index: 0,
            accum: Duration::ZERO,
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Accumulate `dt` and return the new frame index if it changed.
    pub fn advance(&mut self, dt: Duration) -> Option<usize> {
        if self.frame_count < 2 || self.delay.is_zero() {
            return None;
        }
        self.accum = self.accum.saturating_add(dt);
        let delay_ns = self.delay.as_nanos();
        let steps = self.accum.as_nanos() / delay_ns;
        if steps == 0 {
            return None;
        }
        let consumed = steps * delay_ns;
        self.accum = Duration::from_nanos((self.accum.as_nanos() - consumed) as u64);
        // a whole number of cycles lands on the same index; still report it
        self.index = ((self.index as u128 + steps) % self.frame_count as u128) as usize;
        Some(self.index)
    }

    /// Back to frame 0 with no pending time.
    pub fn rewind(&mut self) {
        self.index = 0;
        self.accum = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn waits_for_a_full_delay() {
        let mut p = Playback::new(20, ms(50));
        assert_eq!(p.current(), 0);
        assert_eq!(p.advance(ms(30)), None);
        assert_eq!(p.advance(ms(20)), Some(1));
        assert_eq!(p.advance(ms(49)), None);
        assert_eq!(p.advance(ms(1)), Some(2));
    }

    #[test]
    fn wraps_after_the_last_frame() {
        let mut p = Playback::new(20, ms(50));
        for expected in 1..20 {
            assert_eq!(p.advance(ms(50)), Some(expected));
        }
        assert_eq!(p.advance(ms(50)), Some(0));
    }

    #[test]
    fn long_ticks_skip_frames_instead_of_queueing() {
        let mut p = Playback::new(20, ms(50));
        assert_eq!(p.advance(ms(175)), Some(3));
        // the leftover 25ms carries over
        assert_eq!(p.advance(ms(25)), Some(4));
    }

    #[test]
    fn single_frame_never_advances() {
        let mut p = Playback::new(1, ms(50));
        assert_eq!(p.advance(ms(500)), None);
        assert_eq!(p.current(), 0);
    }

    #[test]
    fn rewind_resets_index_and_pending_time() {
        let mut p = Playback::new(20, ms(50));
        p.advance(ms(140));
        p.rewind();
        assert_eq!(p.current(), 0);
        assert_eq!(p.advance(ms(10)), None);
    }
}
