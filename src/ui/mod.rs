pub mod plot;
pub mod prompt;

use crate::utils::consts::APP_NAME;

pub fn print_banner() {
    println!("{}", APP_NAME);
    println!(
        "Encodes binary data with NRZ-L, NRZ-I, Bipolar AMI, Pseudoternary, \
         Manchester and Differential Manchester line codes."
    );
}
