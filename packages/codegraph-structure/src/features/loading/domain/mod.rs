//! Loading domain

mod package_index;

pub use package_index::PackageIndex;
