//! WAV serialization and PCM quantization.

use std::io::{self, Write};

use super::format::WavFormat;

/// Writes a complete WAV file (RIFF header, `fmt ` chunk, `data` chunk) to a
/// writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    // Total file size minus the 8-byte RIFF preamble.
    let file_size = 36 + data_size;

    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // chunk size for plain PCM
    writer.write_all(&1u16.to_le_bytes())?; // format tag 1 = PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Serializes a WAV file into a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Quantizes f64 samples to little-endian 16-bit PCM bytes.
///
/// Samples are clipped to [-1.0, 1.0] and scaled by 32767 with rounding, so
/// full scale maps to ±32767 and overflow cannot occur.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let quantized = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&quantized.to_le_bytes());
    }

    pcm
}
