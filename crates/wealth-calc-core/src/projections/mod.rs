pub mod goal;
pub mod lumpsum;
pub mod retirement;
pub mod sip;
