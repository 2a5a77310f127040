// SPDX-License-Identifier: MPL-2.0
//! Error types.
//!
//! [`Error`] covers the few fallible host-side operations (configuration I/O).
//! [`PlaybackError`] is what a playback surface reports; the overlay never
//! fails on it, it only turns it into persistent UI state.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by the playback surface.
///
/// Surfaces usually hand over an opaque message; [`PlaybackError::from_message`]
/// sorts it into a category so the error indicator can show a localized text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Container or file format is not supported.
    #[error("Unsupported video format")]
    UnsupportedFormat,

    /// Codec is not supported by the surface.
    #[error("Unsupported video codec: {0}")]
    UnsupportedCodec(String),

    /// Source appears corrupted or has invalid data.
    #[error("Video source is corrupted")]
    CorruptedFile,

    /// Source contains no video stream.
    #[error("No video stream found")]
    NoVideoStream,

    /// Decoding failed during playback.
    #[error("Decoding failed: {0}")]
    DecodingFailed(String),

    /// The source could not be fetched.
    #[error("Network error: {0}")]
    Network(String),

    /// Anything else, raw message preserved.
    #[error("{0}")]
    Other(String),
}

impl PlaybackError {
    /// Returns the i18n message key for the error indicator.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlaybackError::UnsupportedFormat => "error-video-unsupported-format",
            PlaybackError::UnsupportedCodec(_) => "error-video-unsupported-codec",
            PlaybackError::CorruptedFile => "error-video-corrupted",
            PlaybackError::NoVideoStream => "error-video-no-stream",
            PlaybackError::DecodingFailed(_) => "error-video-decoding-failed",
            PlaybackError::Network(_) => "error-video-network",
            PlaybackError::Other(_) => "error-video-unavailable",
        }
    }

    /// Sorts a raw surface error message into a category.
    #[must_use]
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        // Codec errors first: they often also say "not found"
        if msg_lower.contains("codec") || msg_lower.contains("decoder") {
            if let Some(codec) = Self::extract_codec_name(&msg_lower) {
                return PlaybackError::UnsupportedCodec(codec);
            }
            return PlaybackError::DecodingFailed(msg.to_string());
        }

        if msg_lower.contains("network")
            || msg_lower.contains("timed out")
            || msg_lower.contains("connection")
            || msg_lower.contains("http")
        {
            return PlaybackError::Network(msg.to_string());
        }

        if msg_lower.contains("no video stream") || msg_lower.contains("no video track") {
            return PlaybackError::NoVideoStream;
        }

        if msg_lower.contains("unsupported format") || msg_lower.contains("unknown format") {
            return PlaybackError::UnsupportedFormat;
        }

        if msg_lower.contains("corrupt")
            || msg_lower.contains("invalid")
            || msg_lower.contains("malformed")
        {
            return PlaybackError::CorruptedFile;
        }

        if msg_lower.contains("decode") || msg_lower.contains("packet") {
            return PlaybackError::DecodingFailed(msg.to_string());
        }

        PlaybackError::Other(msg.to_string())
    }

    fn extract_codec_name(msg: &str) -> Option<String> {
        let codecs = [
            "h264", "hevc", "h265", "vp8", "vp9", "av1", "mpeg4", "mpeg2",
        ];
        codecs
            .into_iter()
            .find(|codec| msg.contains(codec))
            .map(str::to_uppercase)
    }
}
