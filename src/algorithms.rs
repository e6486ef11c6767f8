pub mod recognition;
pub mod simplification;

#[doc(inline)]
pub use recognition::recognize;

#[doc(inline)]
pub use simplification::rdp::simplify;
