//! Profile photo filenames. Authors may name a file under `assets/`; anything we cannot trust
//! is swapped for one of the bundled bobcat defaults.

use super::text::trim_text;
use crate::rng::RandomSource;

pub const SUPPORTED_PHOTO_EXTENSIONS: &[&str] = &[".gif", ".png", ".jpg", ".jpeg"];

/// The placeholder name from the contributor template. Always replaced.
pub const SENTINEL_PHOTO: &str = "default.gif";

pub const FALLBACK_PHOTO: &str = "defaults/bill.gif";

pub const DEFAULT_PHOTO_CHOICES: &[&str] = &[
    "defaults/bobcat1.jpg",
    "defaults/bobcat2.jpg",
    "defaults/bobcat3.jpg",
    "defaults/bobcat4.jpg",
    "defaults/bobcat5.jpg",
    "defaults/bobcat6.jpg",
    "defaults/bobcat7.jpg",
    "defaults/bobcat8.jpg",
    "defaults/bobcat9.png",
    "defaults/bobcat10.png",
    "defaults/bobcat11.jpg",
];

/// True for a bare filename with a known image extension. No separators, no traversal.
pub fn is_supported_photo_filename(photo: &str) -> bool {
    let trimmed = trim_text(photo);
    if trimmed.is_empty() {
        return false;
    }
    if trimmed.contains(['/', '\\']) {
        return false;
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return false;
    }

    let lower = trimmed.to_ascii_lowercase();
    SUPPORTED_PHOTO_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
}

pub fn pick_default_photo<R: RandomSource + ?Sized>(choices: &[&str], rng: &mut R) -> String {
    if choices.is_empty() {
        return FALLBACK_PHOTO.to_string();
    }
    choices[rng.pick_index(choices.len())].to_string()
}

/// Resolve the filename to show under `assets/`.
pub fn resolve_photo_filename<R: RandomSource + ?Sized>(photo: Option<&str>, rng: &mut R) -> String {
    match photo {
        Some(photo) if is_supported_photo_filename(photo) => {
            let trimmed = trim_text(photo);
            if trimmed.eq_ignore_ascii_case(SENTINEL_PHOTO) {
                pick_default_photo(DEFAULT_PHOTO_CHOICES, rng)
            } else {
                trimmed.to_string()
            }
        }
        _ => pick_default_photo(DEFAULT_PHOTO_CHOICES, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FixedSequence, Rng};

    #[test]
    fn accepts_plain_image_names() {
        assert!(is_supported_photo_filename("headshot.png"));
        assert!(is_supported_photo_filename("  Jane_Doe-2.JPEG "));
        assert!(is_supported_photo_filename("a.gif"));
    }

    #[test]
    fn rejects_paths_and_odd_characters() {
        assert!(!is_supported_photo_filename("../../etc/passwd"));
        assert!(!is_supported_photo_filename("photos\\me.png"));
        assert!(!is_supported_photo_filename("me photo.png"));
        assert!(!is_supported_photo_filename("mé.png"));
        assert!(!is_supported_photo_filename("me.svg"));
        assert!(!is_supported_photo_filename("   "));
        assert!(!is_supported_photo_filename(""));
    }

    #[test]
    fn valid_photo_is_returned_trimmed() {
        let mut rng = FixedSequence::new(vec![0]);
        assert_eq!(
            resolve_photo_filename(Some(" headshot.png "), &mut rng),
            "headshot.png"
        );
    }

    #[test]
    fn sentinel_and_invalid_fall_back_to_defaults() {
        let mut rng = FixedSequence::new(vec![0, 1, 2, 10]);
        assert_eq!(
            resolve_photo_filename(Some("DEFAULT.GIF"), &mut rng),
            "defaults/bobcat1.jpg"
        );
        assert_eq!(
            resolve_photo_filename(Some("../../etc/passwd"), &mut rng),
            "defaults/bobcat2.jpg"
        );
        assert_eq!(resolve_photo_filename(None, &mut rng), "defaults/bobcat3.jpg");
        assert_eq!(
            resolve_photo_filename(Some(""), &mut rng),
            "defaults/bobcat11.jpg"
        );
    }

    #[test]
    fn defaults_always_come_from_fixed_set() {
        let mut rng = Rng::new(99);
        for _ in 0..200 {
            let picked = resolve_photo_filename(None, &mut rng);
            assert!(DEFAULT_PHOTO_CHOICES.contains(&picked.as_str()));
        }
    }

    #[test]
    fn empty_choice_list_uses_fallback() {
        let mut rng = Rng::new(1);
        assert_eq!(pick_default_photo(&[], &mut rng), FALLBACK_PHOTO);
    }
}
