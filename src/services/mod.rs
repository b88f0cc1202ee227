mod artifact_filesystem;
mod completion_client_http;
pub mod embedded_assets;
pub mod guidelines;
mod input_filesystem;

pub use artifact_filesystem::FilesystemArtifactStore;
pub use completion_client_http::HttpCompletionClient;
pub use guidelines::{
    Guidelines, GuidelinesSource, default_template_path, load_guidelines, resolve_guidelines,
};
pub use input_filesystem::load_input;
