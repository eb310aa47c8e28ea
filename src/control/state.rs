//! Capture loop state.
//!
//! The state lives in plain structs with transition methods that perform no
//! I/O, so the machines can be unit tested without a camera, a window or a
//! filesystem. The loop drivers in [`photo`] and [`video`] translate the
//! returned decisions into sink calls.
//!
//! Counters only ever advance: a save is first *proposed* (yielding the
//! index to use) and the counter moves only once the caller confirms the
//! sink reported success. A failed save therefore reuses its index on the
//! next attempt and the persisted numbering stays gap-free.
//!
//! [`photo`]: super::photo
//! [`video`]: super::video

/// Photo-mode counter.
///
/// Indices start at 1 and advance once per confirmed save, never resetting
/// within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShutterCounter {
    next_index: u64,
}

impl Default for ShutterCounter {
    fn default() -> Self {
        Self { next_index: 1 }
    }
}

impl ShutterCounter {
    /// Creates a counter positioned at the first photo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next saved photo will carry.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Confirms that the proposed index was saved successfully.
    pub fn confirm_saved(&mut self) {
        self.next_index += 1;
    }

    /// Number of photos saved so far.
    pub fn saved(&self) -> u64 {
        self.next_index - 1
    }
}

/// Video-mode recording state: the on/off toggle plus the frame counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecorderState {
    recording: bool,
    frame_count: u64,
}

impl RecorderState {
    /// Creates an idle recorder with an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether frames are currently being persisted.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Number of frames saved so far; also the index of the next save.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Decides what to do with a newly displayed frame: `Some(index)` if it
    /// should be saved under `index`, `None` while idle.
    pub fn pending_save(&self) -> Option<u64> {
        self.recording.then_some(self.frame_count)
    }

    /// Confirms that the proposed index was saved successfully.
    pub fn confirm_saved(&mut self) {
        self.frame_count += 1;
    }

    /// Flips the recording flag and returns the new value.
    ///
    /// Toggling never touches the frame counter, so stopping and restarting
    /// within one run continues the numbering.
    pub fn toggle(&mut self) -> bool {
        self.recording = !self.recording;
        self.recording
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_shutter_counter_starts_at_one() {
        let counter = ShutterCounter::new();
        assert_eq!(counter.next_index(), 1);
        assert_eq!(counter.saved(), 0);
    }

    #[test]
    fn test_shutter_counter_advances_only_on_confirm() {
        let mut counter = ShutterCounter::new();
        // Proposing an index repeatedly (failed saves) does not advance.
        assert_eq!(counter.next_index(), 1);
        assert_eq!(counter.next_index(), 1);

        counter.confirm_saved();
        assert_eq!(counter.next_index(), 2);
        assert_eq!(counter.saved(), 1);
    }

    #[test]
    fn test_recorder_starts_idle() {
        let state = RecorderState::new();
        assert!(!state.is_recording());
        assert_eq!(state.pending_save(), None);
    }

    #[test]
    fn test_recorder_saves_while_recording() {
        let mut state = RecorderState::new();
        state.toggle();

        assert_eq!(state.pending_save(), Some(0));
        state.confirm_saved();
        assert_eq!(state.pending_save(), Some(1));
    }

    #[test]
    fn test_double_toggle_preserves_frame_count() {
        let mut state = RecorderState::new();
        state.toggle();
        state.confirm_saved();
        state.confirm_saved();

        assert!(!state.toggle());
        assert!(state.toggle());

        // Restarting continues the numbering.
        assert_eq!(state.frame_count(), 2);
        assert_eq!(state.pending_save(), Some(2));
    }

    #[test]
    fn test_failed_save_reuses_index() {
        let mut state = RecorderState::new();
        state.toggle();

        assert_eq!(state.pending_save(), Some(0));
        // Save failed: no confirm. The next frame proposes the same index.
        assert_eq!(state.pending_save(), Some(0));
    }

    proptest! {
        /// Recording equals the parity of toggles seen so far.
        #[test]
        fn prop_recording_tracks_toggle_parity(toggles in 0usize..64) {
            let mut state = RecorderState::new();
            for _ in 0..toggles {
                state.toggle();
            }
            prop_assert_eq!(state.is_recording(), toggles % 2 == 1);
        }

        /// frame_count is monotone under any interleaving of toggles and
        /// confirmed saves, and saves are issued as exactly 0..frame_count.
        #[test]
        fn prop_frame_count_monotone(script in proptest::collection::vec(any::<bool>(), 0..128)) {
            let mut state = RecorderState::new();
            let mut issued = Vec::new();
            let mut last_count = 0;

            for toggle in script {
                if toggle {
                    state.toggle();
                } else if let Some(index) = state.pending_save() {
                    issued.push(index);
                    state.confirm_saved();
                }
                prop_assert!(state.frame_count() >= last_count);
                last_count = state.frame_count();
            }

            let expected: Vec<u64> = (0..state.frame_count()).collect();
            prop_assert_eq!(issued, expected);
        }
    }
}
