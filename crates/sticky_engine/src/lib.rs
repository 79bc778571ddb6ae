//! Sticky widget engine: settings I/O, browser-host seam and refresh plumbing.
mod dispatch;
mod external;
mod host;
mod persist;
mod probe;
mod store;
mod timer;

pub use dispatch::{ReloadDispatcher, ReloadMode, RELOAD_SETTLE_TIMEOUT};
pub use external::{is_external_scheme, open_external};
pub use host::{BrowserHost, HostError, HostEvent, HostEventSink};
pub use persist::{ensure_data_dir, AtomicFileWriter, PersistError};
pub use probe::{
    decode_page_message, typing_probe_script, PageMessage, NON_TYPING_INPUT_TYPES,
    TYPING_STATE_MESSAGE_TYPE,
};
pub use store::{default_data_dir, SettingsStore, StoreError, APP_DIR_NAME, SETTINGS_FILENAME};
pub use timer::RefreshTimer;
