mod allocation;
mod filter;
mod instance;
mod load;
mod problem;
mod request;
mod solution;
mod vehicle;

#[doc(inline)]
pub use allocation::AllocWarning;
#[doc(inline)]
pub use allocation::Allocation;
#[doc(inline)]
pub use allocation::AllocationView;
#[doc(inline)]
pub use filter::RequestFilter;
#[doc(inline)]
pub use filter::VehicleFilter;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use load::Load;
#[doc(inline)]
pub use load::Utilization;
#[doc(inline)]
pub use load::round_pct;
#[doc(inline)]
pub use problem::AllocKey;
#[doc(inline)]
pub use problem::AllocProblem;
#[doc(inline)]
pub use problem::Location;
#[doc(inline)]
pub use problem::RouteHandoff;
#[doc(inline)]
pub use problem::Transfer;
#[doc(inline)]
pub use problem::TransferOutcome;
#[doc(inline)]
pub use request::LoadingRequest;
#[doc(inline)]
pub use request::Priority;
#[doc(inline)]
pub use request::RequestKind;
#[doc(inline)]
pub use request::RequestStatus;
#[doc(inline)]
pub use solution::AllocSolution;
#[doc(inline)]
pub use vehicle::Vehicle;
#[doc(inline)]
pub use vehicle::VehicleCategory;
#[doc(inline)]
pub use vehicle::VehicleStatus;
