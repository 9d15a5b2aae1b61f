//! Constants used throughout the redaction pipeline.
//!
//! Defaults follow the field layout of Turkish exam sheets; every value here
//! is overridable through [`crate::core::config::AnonymizerConfig`].

/// Fraction of the page height that forms the header zone. Only blocks whose
/// top edge lies above `height * fraction` are eligible to be labels.
pub const DEFAULT_HEADER_FRACTION: f32 = 0.35;

/// Keywords whose containment marks a block as a student-name label.
pub const DEFAULT_NAME_KEYWORDS: &[&str] = &[
    "ad soyad",
    "adı soyadı",
    "ogrenci adi",
    "öğrenci adı",
    "adi",
    "adı",
    "soyadi",
    "soyadı",
    "isim",
];

/// Keywords whose containment marks a block as a student-number label.
/// Checked before the name keywords; a block matching both sets is a number
/// label.
pub const DEFAULT_NUMBER_KEYWORDS: &[&str] = &["numara", "no", "ogrenci no", "öğrenci no", "number"];

/// Fraction of a label's height used as the same-line tolerance when pairing
/// labels with value blocks.
pub const DEFAULT_LINE_TOLERANCE_FACTOR: f32 = 0.8;

/// Pixels added on every side of a redaction rectangle to absorb OCR box
/// under-estimation.
pub const DEFAULT_REDACTION_MARGIN_PX: f32 = 5.0;

/// Width of the blind fallback rectangle painted right of a name label when
/// no value block was matched.
pub const DEFAULT_NAME_BLIND_WIDTH_PX: f32 = 400.0;

/// Width of the blind fallback rectangle painted right of a number label when
/// no value block was matched.
pub const DEFAULT_NUMBER_BLIND_WIDTH_PX: f32 = 300.0;

/// Page count at or below which documents are processed sequentially rather
/// than fanned out across the thread pool.
pub const DEFAULT_PAGE_PARALLEL_THRESHOLD: usize = 2;

/// Maximum retry attempts for a wrapped external OCR call.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Base delay in seconds for exponential backoff after a rate-limit rejection.
pub const DEFAULT_RATE_LIMIT_BASE_DELAY_SECS: u64 = 5;

/// Fixed delay in seconds before retrying a transient backend failure.
pub const DEFAULT_TRANSIENT_DELAY_SECS: u64 = 20;
