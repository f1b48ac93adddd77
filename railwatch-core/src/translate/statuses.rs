/// Source-language status phrase to canonical English phrase.
pub(crate) const STATUSES: &[(&str, &str)] = &[
    ("列車遅延", "Delays"),
    (SUSPENDED, "Operations temporarily suspended"),
    ("運転状況", "Delays and cancellations"),
    (NORMAL, "Normal operations"),
    ("運転再開", "Preparing to resume operations"),
];

/// Raw phrase for suspended operations.
pub const SUSPENDED: &str = "運転見合わせ";

/// Raw phrase for normal operations.
pub const NORMAL: &str = "平常運転";

/// Raw status phrases that mark a line as severely disrupted.
pub(crate) const SEVERE: &[&str] = &[SUSPENDED];
