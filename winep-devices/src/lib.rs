//! Winep Devices
//!
//! Device selection and version-skew diagnostics on top of the host
//! modules' live device listings.

pub mod diagnostics;
pub mod selector;

pub use diagnostics::{diagnose, DeviceDiagnosis, DiagnosisReport, SkewClassification};
pub use selector::select_and_attach;
