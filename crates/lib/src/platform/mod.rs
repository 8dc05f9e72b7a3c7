pub mod os;

pub use os::PlatformFamily;
