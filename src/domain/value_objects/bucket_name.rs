use crate::domain::errors::ValidationError;

/// A validated bucket name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    /// Create a new BucketName with S3-compatible validation rules
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.len() < 3 {
            return Err(ValidationError::BucketNameTooShort {
                actual: value.len(),
                min: 3,
            });
        }

        if value.len() > 63 {
            return Err(ValidationError::BucketNameTooLong {
                actual: value.len(),
                max: 63,
            });
        }

        let is_label_char = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();

        // Must start and end with a lowercase letter or digit
        if !value.chars().next().is_some_and(is_label_char) {
            return Err(ValidationError::BucketNameInvalidStart);
        }
        if !value.chars().last().is_some_and(is_label_char) {
            return Err(ValidationError::BucketNameInvalidEnd);
        }

        if let Some(c) = value.chars().find(|&c| !is_label_char(c) && c != '-') {
            return Err(ValidationError::BucketNameInvalidCharacter(c));
        }

        if value.contains("--") {
            return Err(ValidationError::BucketNameConsecutiveHyphens);
        }

        // S3 refuses names that could be mistaken for an IPv4 address
        if Self::looks_like_ip_address(&value) {
            return Err(ValidationError::BucketNameLooksLikeIpAddress);
        }

        Ok(Self(value))
    }

    /// Get the bucket name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn looks_like_ip_address(s: &str) -> bool {
        let mut octets = 0;
        for part in s.split('.') {
            if part.parse::<u8>().is_err() {
                return false;
            }
            octets += 1;
        }
        octets == 4
    }
}

impl std::fmt::Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bucket_names() {
        assert!(BucketName::new("my-bucket".to_string()).is_ok());
        assert!(BucketName::new("bucket123".to_string()).is_ok());
        assert!(BucketName::new("1-boto3-buck".to_string()).is_ok());
        assert!(BucketName::new("storage-lifecycle-demo".to_string()).is_ok());
    }

    #[test]
    fn test_invalid_bucket_names() {
        // Length bounds
        assert!(BucketName::new("ab".to_string()).is_err());
        assert!(BucketName::new("a".repeat(64)).is_err());

        // Invalid start/end
        assert!(BucketName::new("-bucket".to_string()).is_err());
        assert!(BucketName::new("bucket-".to_string()).is_err());
        assert!(BucketName::new("Bucket".to_string()).is_err());

        // Invalid characters
        assert!(BucketName::new("my_bucket".to_string()).is_err());
        assert!(BucketName::new("my bucket".to_string()).is_err());

        // Consecutive hyphens
        assert!(BucketName::new("my--bucket".to_string()).is_err());

        // IP address format
        assert!(BucketName::new("192.168.1.1".to_string()).is_err());
    }
}
