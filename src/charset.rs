use crate::error::{QrBillError, Result};

// Latin character subset accepted by Swiss payment traffic.
const ALLOWED: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
    ".,:'+-/()? !\"#%&*;<>÷=@_$£[]{}\\`´~",
    "àáâäçèéêëìíîïñòóôöùúûüýßÀÁÂÄÇÈÉÊËÌÍÎÏÒÓÔÖÙÚÛÜÑ",
);

pub fn is_allowed(ch: char) -> bool {
    ALLOWED.contains(ch)
}

pub fn validate_character_set(text: &str) -> Result<()> {
    match text.chars().find(|ch| !is_allowed(*ch)) {
        Some(ch) => Err(QrBillError::InvalidCharacter {
            ch,
            code: ch as u32,
            text: text.to_string(),
        }),
        None => Ok(()),
    }
}
