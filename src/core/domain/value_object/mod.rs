mod archive;
pub(crate) mod base_value_object;
mod hostname;
mod zone;

pub use archive::Archive;
pub use base_value_object::ValueObject;
pub use hostname::Hostname;
pub use zone::Zone;
