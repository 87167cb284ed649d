use super::cursor::Cursor;
use super::WireError;

pub const MAX_LABEL_LEN: usize = 63;

/// Validates a label-encoded domain name.
///
/// The buffer must be a run of `(length, bytes)` labels closed by a zero
/// octet that is also the final byte. Labels are 1–63 bytes of
/// `[A-Za-z0-9-]` and may not start or end with a hyphen.
pub fn validate_name(encoded: &[u8]) -> Result<(), WireError> {
    let mut cursor = Cursor::new(encoded);

    loop {
        let len = cursor.read_u8().ok_or(WireError::InvalidLabel)? as usize;
        if len == 0 {
            break;
        }
        if len > MAX_LABEL_LEN {
            return Err(WireError::InvalidLabel);
        }
        let label = cursor.take(len).ok_or(WireError::InvalidLabel)?;
        validate_label(label)?;
    }

    if !cursor.is_empty() {
        return Err(WireError::InvalidLabel);
    }

    Ok(())
}

pub fn validate_label(label: &[u8]) -> Result<(), WireError> {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return Err(WireError::InvalidLabel);
    }

    if label[0] == b'-' || label[label.len() - 1] == b'-' {
        return Err(WireError::InvalidLabel);
    }

    if !label.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'-') {
        return Err(WireError::InvalidLabel);
    }

    Ok(())
}

/// Derives the dotted form (`"www.example.com"`) of an encoded name that
/// already ends in its zero terminator.
///
/// Only the label structure is checked here; character rules belong to
/// [`validate_name`].
pub fn decode_domain(encoded: &[u8]) -> Result<String, WireError> {
    let mut cursor = Cursor::new(encoded);
    let mut domain = String::with_capacity(encoded.len());

    loop {
        let len = cursor.read_u8().ok_or(WireError::InvalidQName)? as usize;
        if len == 0 {
            break;
        }
        let label = cursor.take(len).ok_or(WireError::InvalidQName)?;
        // the terminator still has to follow
        if cursor.is_empty() {
            return Err(WireError::InvalidQName);
        }
        if !domain.is_empty() {
            domain.push('.');
        }
        domain.extend(label.iter().map(|&b| b as char));
    }

    if domain.is_empty() {
        return Err(WireError::EmptyQName);
    }

    Ok(domain)
}

/// Label-encodes a dotted domain name, validating the result.
///
/// A single trailing dot is accepted (`"example.com."`).
pub fn encode_name(domain: &str) -> Result<Vec<u8>, WireError> {
    let trimmed = domain.strip_suffix('.').unwrap_or(domain);
    if trimmed.is_empty() {
        return Err(WireError::EmptyQName);
    }

    let mut encoded = Vec::with_capacity(trimmed.len() + 2);
    for label in trimmed.split('.') {
        validate_label(label.as_bytes())?;
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);

    Ok(encoded)
}
