mod seed;
mod seed_source;
mod traits;

pub use seed::seed_contacts;
pub use seed_source::SeedContactSource;
pub use traits::ContactSource;
