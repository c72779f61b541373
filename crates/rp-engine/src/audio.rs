//! Audio collaborator seam
//!
//! The pipeline only triggers keyed cues; playback itself is an external
//! subsystem. Failures are logged by implementations and never surface.

/// Cue played when a spin request is accepted
pub const CUE_CLICK: &str = "click";
/// Cue played for each winning row
pub const CUE_WIN: &str = "win";

/// Fire-and-forget audio cue sink
pub trait AudioCues {
    /// Play the cue registered under `key`
    fn play_cue(&self, key: &str);
}

/// No-op audio sink
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioCues for SilentAudio {
    fn play_cue(&self, key: &str) {
        log::debug!("audio cue suppressed: {key}");
    }
}
