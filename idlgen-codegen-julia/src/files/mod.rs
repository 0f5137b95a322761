//! Generated file definitions.
//!
//! One type per output file; each implements
//! [`GeneratedFile`](idlgen_core::GeneratedFile).

mod constants_jl;
mod impl_jl;
mod module_jl;
mod service_jl;
mod types_jl;

pub use constants_jl::ConstantsJl;
pub use impl_jl::ImplJl;
pub use module_jl::ModuleJl;
pub use service_jl::ServiceJl;
pub use types_jl::TypesJl;

/// Banner stamped at the top of every regenerated file.
pub const BANNER: &str = concat!(
    "#\n",
    "# Autogenerated by idlgen (",
    env!("CARGO_PKG_VERSION"),
    ")\n",
    "#\n",
    "# DO NOT EDIT UNLESS YOU ARE SURE THAT YOU KNOW WHAT YOU ARE DOING\n",
    "#\n",
);
