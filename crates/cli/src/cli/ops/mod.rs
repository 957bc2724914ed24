pub mod check;
pub mod derive;
pub mod generate;
pub mod inspect;
pub mod version;

pub use check::Check;
pub use derive::Derive;
pub use generate::Generate;
pub use inspect::Inspect;
pub use version::Version;
