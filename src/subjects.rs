//! Canonical subject labels and the informal-name synonym table

/// The four subjects every dataset is organized around, in catalog order
pub const SUBJECTS: [&str; 4] = ["Mathematics", "Physics", "Chemistry", "General"];

/// Aggregate label used by the combined cross-subject mock test
pub const COMBINED_SUBJECT: &str = "PCM";

/// Map an informal subject name to its canonical label
///
/// Lookup is case-insensitive. Unrecognized names are passed through
/// unchanged so that filtering on them simply matches nothing (or matches a
/// custom label verbatim).
///
/// # Examples
///
/// ```
/// use jee_content::subjects::canonical;
///
/// assert_eq!(canonical("phy"), "Physics");
/// assert_eq!(canonical("MATHS"), "Mathematics");
/// assert_eq!(canonical("Biology"), "Biology");
/// ```
pub fn canonical(name: &str) -> String {
    match name.to_lowercase().as_str() {
        "mathematics" | "math" | "maths" => "Mathematics".to_string(),
        "physics" | "phy" => "Physics".to_string(),
        "chemistry" | "chem" => "Chemistry".to_string(),
        "pcm" => COMBINED_SUBJECT.to_string(),
        "general" => "General".to_string(),
        _ => name.to_string(),
    }
}
