//! Generated beep tones. No asset files: each sound is a short PCM16 mono
//! sine rendered into an in-memory WAV at startup.

use macroquad::audio::{self, load_sound_from_bytes, PlaySoundParams, Sound};

pub struct Sounds {
    eat: Sound,
    special: Sound,
    die: Sound,
    volume: f32,
}

impl Sounds {
    /// Returns None if the audio backend refuses the decoded tones; the
    /// game then runs silent.
    pub async fn load(volume: f32) -> Option<Self> {
        let eat = load_sound_from_bytes(&sine_wav(880.0, 0.08, 0.6)).await.ok()?;
        let special = load_sound_from_bytes(&sine_wav(1320.0, 0.12, 0.6)).await.ok()?;
        let die = load_sound_from_bytes(&sine_wav(110.0, 0.25, 0.7)).await.ok()?;
        Some(Self {
            eat,
            special,
            die,
            volume: volume.clamp(0.0, 1.0),
        })
    }

    pub fn play_eat(&self) {
        self.play(&self.eat, 0.35);
    }

    pub fn play_special(&self) {
        self.play(&self.special, 0.35);
    }

    pub fn play_die(&self) {
        self.play(&self.die, 0.6);
    }

    fn play(&self, sound: &Sound, gain: f32) {
        audio::play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: gain * self.volume,
            },
        );
    }
}

/// Render a sine tone as a complete RIFF/WAVE byte stream (PCM16, mono).
fn sine_wav(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    let sample_rate: u32 = 44_100;
    let num_samples = (duration_seconds * sample_rate as f32) as u32;
    let data_size = num_samples * 2;
    let mut out: Vec<u8> = Vec::with_capacity(data_size as usize + 44);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_size).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    out.extend_from_slice(&2u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for n in 0..num_samples {
        let t = n as f32 / sample_rate as f32;
        let sample =
            (amplitude * (std::f32::consts::TAU * frequency_hz * t).sin() * i16::MAX as f32) as i16;
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_header_is_well_formed() {
        let bytes = sine_wav(440.0, 0.1, 0.5);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[36..40], b"data");
        let expected_samples = (0.1f32 * 44_100.0) as usize;
        assert_eq!(bytes.len(), 44 + expected_samples * 2);
    }

    #[test]
    fn zero_volume_renders_silence() {
        let bytes = sine_wav(440.0, 0.05, 0.0);
        assert!(bytes[44..].iter().all(|&b| b == 0));
    }
}
