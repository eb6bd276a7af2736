mod default;
pub use default::DefaultCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

#[path = "static.rs"]
mod static_provider;
pub use static_provider::StaticCredentialProvider;

mod utils;
