mod first_fit;

#[doc(inline)]
pub use first_fit::AutoAllocReport;
#[doc(inline)]
pub use first_fit::FirstFitAllocator;
