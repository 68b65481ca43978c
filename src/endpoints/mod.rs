pub mod directory;
pub mod dispatch;
pub mod resolver;

pub use directory::{fetch_directory, probe_ssl_addon};
pub use dispatch::{EndpointRequest, KindFlags, Outcome};
pub use resolver::{EndpointDirectory, ResolveError, ResolveOptions, resolve};
