pub mod dilution;
pub mod ph;

pub use dilution::compute_dilution;
pub use ph::compute_ph;
