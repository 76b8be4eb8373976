#[derive(Debug, Clone)]
pub struct PhotoPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_extensions: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhotoPolicyError {
    #[error("File name cannot be empty")]
    EmptyFileName,

    #[error("File name too long")]
    FileNameTooLong,

    #[error("File type not allowed")]
    ExtensionNotAllowed,

    #[error("File exceeds the maximum allowed size")]
    FileTooLarge,
}

impl PhotoPolicy {
    pub const DEFAULT_ALLOWED_EXTENSIONS: &'static [&'static str] =
        &["png", "jpg", "jpeg", "gif"];

    pub fn new() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            max_file_name_len: 255,
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS,
        }
    }

    pub fn validate(&self, file_name: &str, size_bytes: u64) -> Result<(), PhotoPolicyError> {
        let file_name = file_name.trim();

        if file_name.is_empty() {
            return Err(PhotoPolicyError::EmptyFileName);
        }

        if file_name.len() > self.max_file_name_len {
            return Err(PhotoPolicyError::FileNameTooLong);
        }

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or(PhotoPolicyError::ExtensionNotAllowed)?;

        if !self.allowed_extensions.contains(&extension.as_str()) {
            return Err(PhotoPolicyError::ExtensionNotAllowed);
        }

        if size_bytes > self.max_file_size_bytes {
            return Err(PhotoPolicyError::FileTooLarge);
        }

        Ok(())
    }

    /// Extension of an accepted file name, lowercased.
    pub fn extension_of(file_name: &str) -> Option<String> {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

impl Default for PhotoPolicy {
    fn default() -> Self {
        Self::new()
    }
}
