use raw_window_handle::HandleError;

use super::GlVersion;

/// Setup failures of the window + GL context.
///
/// Every variant is fatal: the runtime stops before the first frame.
#[derive(thiserror::Error, Debug)]
pub enum DeviceError {
    #[error("failed to create window or pick a GL config: {0}")]
    Display(String),

    #[error("display builder returned no window")]
    MissingWindow,

    #[error("window handle unavailable: {0}")]
    Handle(#[from] HandleError),

    #[error("failed to create GL {version} context: {source}")]
    Context {
        version: GlVersion,
        #[source]
        source: glutin::error::Error,
    },

    #[error("failed to create window surface: {0}")]
    Surface(#[source] glutin::error::Error),

    #[error("failed to make GL context current: {0}")]
    MakeCurrent(#[source] glutin::error::Error),

    #[error("GL function loader reported version {found}, requested {requested}")]
    Loader { requested: GlVersion, found: String },
}
