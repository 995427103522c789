//! lang-table - per-module JSON language tables
//!
//! Loads `assets/<module>/lang/<language>.json` resources, rewrites legacy
//! numeric format tokens (`%d`, `%2$.1f`, ...) into string tokens, and
//! resolves keys against the requested language, then the default language,
//! then the key itself.
//!
//! ```no_run
//! let table = lang_table::build("mymod", "fr_fr");
//! println!("{}", table.get("menu.title"));
//! ```

pub mod builder;
pub mod config;
pub mod decode;
pub mod error;
pub mod normalize;
pub mod resource;
pub mod table;

pub use builder::{build, TableBuilder};
pub use config::{Config, DEFAULT_LANGUAGE, MAX_FILE_SIZE};
pub use decode::{decode_bytes, decode_entries, EntrySet};
pub use error::{LangError, LangResult};
pub use normalize::{normalize, normalize_cow};
pub use resource::{EmbeddedProvider, FsProvider, ResourceProvider, ResourceRef};
pub use table::LanguageTable;
