//! Post-processing for the poly(A) tail-length estimation pipeline.
//! Two independent utilities live here: summary statistics over the control
//! datasets ([aggregate](aggregate)) and segmentation plotting for a single
//! read ([segmentation](segmentation) + [plot](plot)).
pub mod aggregate;
pub mod load;
pub mod plot;
pub mod segmentation;
pub mod stats;
