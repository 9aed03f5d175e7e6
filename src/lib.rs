//! Line coding of binary data into NRZ-L, NRZ-I, Bipolar AMI, Pseudoternary,
//! Manchester and Differential Manchester signal traces.

pub mod phy;
pub mod ui;
pub mod utils;
