use log::warn;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

type Sound = Buffered<Decoder<BufReader<File>>>;

/// Best-effort sound effects. Every failure path degrades to silence; the
/// game never depends on audio being present.
pub struct AudioManager {
    _stream: Option<OutputStream>,
    stream_handle: Option<OutputStreamHandle>,
    fire_sound: Option<Sound>,
    boom_sound: Option<Sound>,
}

impl AudioManager {
    pub fn new() -> Self {
        let (stream, stream_handle) = match OutputStream::try_default() {
            Ok((stream, handle)) => (Some(stream), Some(handle)),
            Err(err) => {
                warn!("no audio output available, continuing silent: {err}");
                (None, None)
            }
        };

        Self {
            _stream: stream,
            stream_handle,
            fire_sound: load_sound("assets/sounds/fire.wav"),
            boom_sound: load_sound("assets/sounds/boom.wav"),
        }
    }

    /// Cannon report for the player's own shots
    pub fn play_fire_sound(&self) {
        self.play(&self.fire_sound, 0.1);
    }

    /// Quieter report for enemy fire
    pub fn play_enemy_fire_sound(&self) {
        self.play(&self.fire_sound, 0.03);
    }

    pub fn play_explosion_sound(&self) {
        self.play(&self.boom_sound, 0.1);
    }

    fn play(&self, sound: &Option<Sound>, volume: f32) {
        let (Some(handle), Some(sound)) = (&self.stream_handle, sound) else {
            return;
        };
        // Playback errors are ignored - a dropped sample must not stall a frame
        if let Ok(sink) = Sink::try_new(handle) {
            sink.set_volume(volume);
            sink.append(sound.clone());
            sink.detach();
        }
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-load and buffer a sample so playback only clones references
fn load_sound(path: &str) -> Option<Sound> {
    if !Path::new(path).exists() {
        return None;
    }
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!("failed to open {path}: {err}");
            return None;
        }
    };
    match Decoder::new(BufReader::new(file)) {
        Ok(source) => Some(source.buffered()),
        Err(err) => {
            warn!("failed to decode {path}: {err}");
            None
        }
    }
}
