use crate::domain::ServiceListing;
use crate::error::{DirectoryError, Result};

/// Build the chat-contact URL for a listing. Pure construction; the caller
/// is responsible for opening the URL.
pub fn contact_url(listing: &ServiceListing) -> Result<String> {
    Ok(format!("https://wa.me/{}", contact_digits(listing)?))
}

/// Build the direct-dial address for a listing from the same handle.
pub fn tel_url(listing: &ServiceListing) -> Result<String> {
    Ok(format!("tel:{}", contact_digits(listing)?))
}

fn contact_digits(listing: &ServiceListing) -> Result<String> {
    let handle = listing
        .whatsapp
        .as_deref()
        .ok_or(DirectoryError::MissingContact)?;
    let digits: String = handle.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(DirectoryError::MissingContact);
    }
    Ok(digits)
}
