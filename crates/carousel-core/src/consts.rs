/// Host fragments accepted when no allow-list is configured.
pub const DEFAULT_ALLOWED_HOSTS: [&str; 2] = ["drive.google.com", "amazonaws.com"];

/// Resource the image list is read from when no location is configured.
pub const DEFAULT_SOURCE_LOCATION: &str = "files";

/// Minimum horizontal travel (in pixels) before a gesture counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Scheme prepended to URLs that do not already start with `http`.
pub const DEFAULT_SCHEME: &str = "https://";

/// Literal prefix treated as "already has a scheme". Case-sensitive.
pub const SCHEME_MARKER: &str = "http";

/// Leading text of the progress line shown under the slideshow.
pub const PROGRESS_CAPTION: &str = "Check out these amazing images!";

/// Opacity applied to side navigation controls that cannot be used.
pub const DISABLED_CONTROL_OPACITY: f32 = 0.3;

/// Opacity applied to usable side navigation controls.
pub const ENABLED_CONTROL_OPACITY: f32 = 1.0;

/// Headline of the error slide shown when the source cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load images";
