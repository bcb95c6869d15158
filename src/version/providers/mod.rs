pub mod cargo_install;

pub use cargo_install::CargoInstallRegistry;
