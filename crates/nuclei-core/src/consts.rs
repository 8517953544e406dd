/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Radius (in pixels) of the disk used to open the selected label region.
pub const DEFAULT_DISK_RADIUS: usize = 20;

/// Largest disk radius accepted from configuration.
pub const MAX_DISK_RADIUS: usize = 4096;

/// Number of candidate cluster labels.
pub const CANDIDATE_COUNT: usize = 3;

/// Label values produced by the upstream three-cluster color labeler,
/// scanned in this order when scoring. Ties go to the earlier entry.
pub const CANDIDATE_LABELS: [u8; CANDIDATE_COUNT] = [1, 2, 3];

/// Number of channels in a color frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Foreground value written when exporting a mask as an 8-bit image.
pub const MASK_FOREGROUND_LUMA: u8 = 255;
