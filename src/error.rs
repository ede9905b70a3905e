// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Camera(CameraError),
}

/// Specific error types for capture-device failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// Access to the capture device was denied by the system.
    PermissionDenied,

    /// No capture device matching the requested preference was found.
    NoDevice,

    /// The device exists but is held by another application.
    Busy,

    /// The device offers no pixel format we can render.
    Unsupported(String),

    /// Generic error with raw message.
    Other(String),
}

impl CameraError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CameraError::PermissionDenied => "error-camera-permission",
            CameraError::NoDevice => "error-camera-no-device",
            CameraError::Busy => "error-camera-busy",
            CameraError::Unsupported(_) => "error-camera-unsupported",
            CameraError::Other(_) => "error-camera-generic",
        }
    }

    /// Attempts to parse a raw error message into a specific CameraError type.
    /// This is used to categorize errors reported by the capture backend.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("permission denied") || msg_lower.contains("access denied") {
            return CameraError::PermissionDenied;
        }

        if msg_lower.contains("busy") || msg_lower.contains("resource temporarily unavailable") {
            return CameraError::Busy;
        }

        if msg_lower.contains("no such file")
            || msg_lower.contains("no such device")
            || (msg_lower.contains("not found") && msg_lower.contains("device"))
        {
            return CameraError::NoDevice;
        }

        if msg_lower.contains("format") || msg_lower.contains("unsupported") {
            return CameraError::Unsupported(msg.to_string());
        }

        CameraError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => CameraError::PermissionDenied,
            std::io::ErrorKind::NotFound => CameraError::NoDevice,
            std::io::ErrorKind::ResourceBusy => CameraError::Busy,
            _ => CameraError::from_message(&err.to_string()),
        }
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::PermissionDenied => write!(f, "Camera access denied"),
            CameraError::NoDevice => write!(f, "No camera found"),
            CameraError::Busy => write!(f, "Camera is in use by another application"),
            CameraError::Unsupported(msg) => write!(f, "Unsupported camera format: {}", msg),
            CameraError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Camera(e) => write!(f, "Camera Error: {}", e),
        }
    }
}

impl From<CameraError> for Error {
    fn from(err: CameraError) -> Self {
        Error::Camera(err)
    }
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

/// Result alias for operations confined to the capture boundary.
pub type CameraResult<T> = std::result::Result<T, CameraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn camera_error_from_message_permission() {
        let err = CameraError::from_message("VIDIOC_STREAMON: Permission denied");
        assert_eq!(err, CameraError::PermissionDenied);
    }

    #[test]
    fn camera_error_from_message_busy() {
        let err = CameraError::from_message("Device or resource busy");
        assert_eq!(err, CameraError::Busy);
    }

    #[test]
    fn camera_error_from_message_missing_device() {
        let err = CameraError::from_message("No such file or directory");
        assert_eq!(err, CameraError::NoDevice);
    }

    #[test]
    fn camera_error_from_message_unsupported() {
        let err = CameraError::from_message("driver offered no usable pixel format");
        assert!(matches!(err, CameraError::Unsupported(_)));
    }

    #[test]
    fn camera_error_from_message_falls_back_to_other() {
        let err = CameraError::from_message("something exploded");
        assert!(matches!(err, CameraError::Other(msg) if msg.contains("exploded")));
    }

    #[test]
    fn camera_error_from_io_kind() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CameraError = io_error.into();
        assert_eq!(err, CameraError::PermissionDenied);
    }

    #[test]
    fn camera_error_i18n_keys() {
        assert_eq!(
            CameraError::PermissionDenied.i18n_key(),
            "error-camera-permission"
        );
        assert_eq!(CameraError::NoDevice.i18n_key(), "error-camera-no-device");
        assert_eq!(
            CameraError::Other("x".into()).i18n_key(),
            "error-camera-generic"
        );
    }

    #[test]
    fn camera_error_display() {
        let err = CameraError::Busy;
        assert!(format!("{}", err).contains("in use"));
    }
}
